//! Progress percentage calculation

use serde::{Deserialize, Serialize};

/// A finite loading range with a current value.
///
/// The percentage is deliberately unclamped: values outside
/// `start..=finish` produce negative or >100 results, and
/// `finish == start` yields NaN or infinity per IEEE semantics.
/// Validation belongs to the caller, not this layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressRange {
    pub start: f64,
    pub finish: f64,
    pub value: f64,
}

impl ProgressRange {
    /// Range from 0 to 100 at the given value
    pub fn new(value: f64) -> Self {
        Self {
            start: 0.0,
            finish: 100.0,
            value,
        }
    }

    /// Range with explicit bounds
    pub fn with_bounds(value: f64, start: f64, finish: f64) -> Self {
        Self {
            start,
            finish,
            value,
        }
    }

    /// Position of `value` between `start` and `finish` as a percentage
    pub fn percentage(&self) -> f64 {
        (self.value - self.start) / (self.finish - self.start) * 100.0
    }
}

impl Default for ProgressRange {
    fn default() -> Self {
        Self::new(0.0)
    }
}
