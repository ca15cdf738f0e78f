//! TUI module: loader widgets and the demo loop

mod app;
pub mod widgets;

pub use app::{run, DemoConfig, LoaderKind};
