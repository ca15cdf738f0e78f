//! Segmented blocks loader

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::progress::linear_fill;

use super::theme::LoaderStyle;

/// Blocks loader: a strip of equal segments, the first
/// `ceil(segments / 100 * progress)` drawn as loaded.
pub struct Blocks {
    progress: f64,
    segments: usize,
    rounded: bool,
    /// Blank cells between segments
    spacing: u16,
    style: LoaderStyle,
}

impl Blocks {
    pub fn new(progress: f64) -> Self {
        Self {
            progress,
            segments: 20,
            rounded: false,
            spacing: 1,
            style: LoaderStyle::default(),
        }
    }

    pub fn segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn style(mut self, style: LoaderStyle) -> Self {
        self.style = style;
        self
    }

    fn glyph(&self) -> &'static str {
        if self.rounded {
            "●"
        } else {
            "█"
        }
    }

    /// Minimum width in cells to show every segment
    pub fn min_width(&self) -> u16 {
        if self.segments == 0 {
            return 0;
        }
        self.segments as u16 + self.spacing * (self.segments as u16 - 1)
    }
}

impl Widget for Blocks {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.segments == 0 {
            return;
        }

        let plan = linear_fill(self.segments, self.progress);
        let glyph = self.glyph();
        let step = 1 + self.spacing;
        let y = area.y + area.height / 2;

        for (i, &loaded) in plan.iter().enumerate() {
            let x = area.x + i as u16 * step;
            if x >= area.right() {
                break;
            }
            let color = if loaded {
                self.style.loaded
            } else {
                self.style.unloaded
            };
            buf.set_string(x, y, glyph, Style::default().fg(color));
        }
    }
}
