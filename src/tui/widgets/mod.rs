//! Loader widgets for ratatui

pub mod bar;
pub mod blocks;
pub mod donut;
pub mod grid;
pub mod theme;

pub use bar::Bar;
pub use blocks::Blocks;
pub use donut::{Donut, DonutLabel};
pub use grid::Grid;
pub use theme::LoaderStyle;
