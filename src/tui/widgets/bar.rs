//! Continuous bar loader

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use super::theme::LoaderStyle;

/// Partial block glyphs for sub-cell fill resolution, 1/8 through 7/8
const PARTIAL_BLOCKS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Bar loader: a strip whose loaded width is `progress` percent of the
/// area, filled left to right with sub-cell resolution.
pub struct Bar {
    progress: f64,
    style: LoaderStyle,
}

impl Bar {
    pub fn new(progress: f64) -> Self {
        Self {
            progress,
            style: LoaderStyle::default(),
        }
    }

    pub fn style(mut self, style: LoaderStyle) -> Self {
        self.style = style;
        self
    }

    /// One rendered row of the bar for the given width in cells
    fn fill_line(&self, width: u16) -> String {
        // Painting clamps; the percentage itself is allowed out of range
        let ratio = (self.progress / 100.0).clamp(0.0, 1.0);
        let eighths = (width as f64 * 8.0 * ratio).round() as usize;
        let full = eighths / 8;
        let remainder = eighths % 8;

        let mut line = String::with_capacity(width as usize * 3);
        for _ in 0..full {
            line.push('█');
        }
        if remainder > 0 && full < width as usize {
            line.push(PARTIAL_BLOCKS[remainder - 1]);
        }
        while line.chars().count() < width as usize {
            line.push(' ');
        }
        line
    }
}

impl Widget for Bar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = self.fill_line(area.width);
        let style = Style::default().fg(self.style.loaded).bg(self.style.unloaded);
        for y in area.top()..area.bottom() {
            buf.set_string(area.x, y, &line, style);
        }
    }
}
