//! Loader color palette

use ratatui::style::Color;

/// Colors shared by the loader widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderStyle {
    /// Color of loaded segments / the loaded arc
    pub loaded: Color,
    /// Color of unloaded segments / the remaining ring
    pub unloaded: Color,
    /// Color of the donut label
    pub label: Color,
}

impl LoaderStyle {
    /// Palette for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            loaded: Color::Cyan,
            unloaded: Color::DarkGray,
            label: Color::White,
        }
    }

    /// Palette for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            loaded: Color::Blue,
            unloaded: Color::Gray,
            label: Color::Black,
        }
    }

    /// Pick a palette from the terminal background, dark fallback
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for LoaderStyle {
    fn default() -> Self {
        Self::dark()
    }
}
