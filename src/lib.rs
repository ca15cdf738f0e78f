//! Finite-progress loading indicators for the terminal
//!
//! Renders bar, blocks, grid and donut style loaders driven by a progress
//! percentage derived from a (value, start, finish) range. The geometric
//! planning (segment fill counts, spiral ordering, spin rotation, donut arc
//! parameters) lives in [`progress`] as pure functions; [`tui`] paints the
//! results as ratatui widgets; [`source`] adapts loaded/total progress
//! events into a range.

pub mod progress;
pub mod source;
pub mod tui;
