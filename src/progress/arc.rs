//! Arc parameters for the donut loader
//!
//! The donut uses the two-half clock-fill technique: the right half
//! sweeps 0..180 degrees over the first 50%, then stays pinned at 180
//! while the left half sweeps out the remainder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Donut ring thickness as a fraction of the radius, `0 < t <= 1`.
///
/// Only constructible through [`Thickness::new`], which enforces the bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Thickness(f64);

/// Thickness outside `0 < t <= 1`
#[derive(Debug, Error, PartialEq)]
#[error("thickness must be greater than 0 and at most 1, got {0}")]
pub struct ThicknessError(pub f64);

impl Thickness {
    pub fn new(fraction: f64) -> Result<Self, ThicknessError> {
        if fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(ThicknessError(fraction))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self(0.2)
    }
}

/// Clip applied to the combined loaded layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipMode {
    /// Only the right half-plane of the ring is visible
    #[serde(rename = "rightHalf")]
    RightHalf,
    /// No clipping
    #[serde(rename = "full")]
    Full,
}

/// Computed rendering parameters for the donut's loaded layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcParams {
    /// Rotation of the left half in degrees; `None` while it is hidden
    pub left_rotation: Option<f64>,
    /// Rotation of the right half in degrees
    pub right_rotation: f64,
    pub clip: ClipMode,
    /// Border thickness of each arc half, fraction of the radius
    pub border_width: f64,
}

impl ArcParams {
    /// Whether the left half is rendered at all
    pub fn left_visible(&self) -> bool {
        self.left_rotation.is_some()
    }

    /// Total angle of the loaded arc in degrees (unclamped)
    pub fn sweep(&self) -> f64 {
        self.left_rotation.unwrap_or(self.right_rotation)
    }
}

/// Parameters for a donut at the given progress percentage.
///
/// Total over all finite inputs; out-of-range progress simply produces an
/// out-of-range sweep.
pub fn arc_parameters(progress: f64, thickness: Thickness) -> ArcParams {
    let sweep = 360.0 / 100.0 * progress;
    let past_half = progress > 50.0;

    ArcParams {
        left_rotation: past_half.then_some(sweep),
        right_rotation: if past_half { 180.0 } else { sweep },
        clip: if past_half {
            ClipMode::Full
        } else {
            ClipMode::RightHalf
        },
        border_width: thickness.get() / 2.0,
    }
}
