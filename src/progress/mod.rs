//! Pure progress geometry: percentage, fill planning, spiral order,
//! spin rotation and donut arc parameters

pub mod arc;
pub mod fill;
pub mod percent;
pub mod rotation;
pub mod spiral;

pub use arc::{arc_parameters, ArcParams, ClipMode, Thickness, ThicknessError};
pub use fill::{grid_fill, grid_fill_count, linear_fill, FillPattern, PatternParseError};
pub use percent::ProgressRange;
pub use rotation::wrapper_rotation;
pub use spiral::spiral_positions;
