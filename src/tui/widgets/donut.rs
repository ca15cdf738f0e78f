//! Donut loader

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::progress::{arc_parameters, ArcParams, Thickness};

use super::theme::LoaderStyle;

/// Center label content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonutLabel {
    /// `N%` from the floored progress percentage
    Percentage,
    /// `value / finish`, both floored
    ValueOfFinish { value: i64, finish: i64 },
    None,
}

/// Donut loader: a character ring whose loaded sweep follows the two-half
/// arc parameters, with an optional centered label.
pub struct Donut {
    progress: f64,
    thickness: Thickness,
    label: DonutLabel,
    style: LoaderStyle,
}

impl Donut {
    pub fn new(progress: f64) -> Self {
        Self {
            progress,
            thickness: Thickness::default(),
            label: DonutLabel::Percentage,
            style: LoaderStyle::default(),
        }
    }

    pub fn thickness(mut self, thickness: Thickness) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn label(mut self, label: DonutLabel) -> Self {
        self.label = label;
        self
    }

    pub fn style(mut self, style: LoaderStyle) -> Self {
        self.style = style;
        self
    }

    /// Arc parameters for the current progress
    pub fn arc(&self) -> ArcParams {
        arc_parameters(self.progress, self.thickness)
    }

    fn label_text(&self) -> Option<String> {
        match self.label {
            DonutLabel::Percentage => Some(format!("{}%", self.progress.floor() as i64)),
            DonutLabel::ValueOfFinish { value, finish } => Some(format!("{value} / {finish}")),
            DonutLabel::None => None,
        }
    }
}

/// Angle of a point in degrees, clockwise from 12 o'clock, in `0..360`
fn clock_angle(dx: f64, dy: f64) -> f64 {
    let degrees = dx.atan2(-dy).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

impl Widget for Donut {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Ring geometry: terminal cells are ~2:1 tall, so the horizontal
        // radius is doubled in cells
        let diameter = (area.height).min(area.width / 2) as usize;
        if diameter < 2 {
            return;
        }

        let params = self.arc();
        let sweep = params.sweep().clamp(0.0, 360.0);
        let outer = 1.0;
        let inner = 1.0 - self.thickness.get();

        let radius = diameter as f64 / 2.0;
        let origin_x = area.x + (area.width - diameter as u16 * 2) / 2;
        let origin_y = area.y + (area.height - diameter as u16) / 2;

        for row in 0..diameter {
            for col in 0..diameter * 2 {
                // Normalized offsets from the ring center, sampled at the
                // cell midpoint
                let dx = (col as f64 + 0.5) / 2.0 / radius - 1.0;
                let dy = (row as f64 + 0.5) / radius - 1.0;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > outer || dist < inner {
                    continue;
                }

                let loaded = clock_angle(dx, dy) <= sweep;
                let color = if loaded {
                    self.style.loaded
                } else {
                    self.style.unloaded
                };
                buf.set_string(
                    origin_x + col as u16,
                    origin_y + row as u16,
                    "█",
                    Style::default().fg(color),
                );
            }
        }

        if let Some(text) = self.label_text() {
            let width = text.chars().count() as u16;
            if width <= diameter as u16 * 2 {
                let x = origin_x + diameter as u16 - width / 2;
                let y = origin_y + diameter as u16 / 2;
                buf.set_string(x, y, &text, Style::default().fg(self.style.label));
            }
        }
    }
}
