//! Progress event feed
//!
//! Adapts loaded/total observations from an external transfer (the
//! transport itself lives outside this crate) into a [`ProgressRange`]
//! the loaders can render.

use serde::{Deserialize, Serialize};

use crate::progress::ProgressRange;

/// An observation from a finite transfer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProgressEvent {
    /// Bytes (or units) seen so far out of an expected total.
    /// Ignored unless the transfer knows its total length.
    #[serde(rename_all = "camelCase")]
    Progress {
        loaded: f64,
        total: f64,
        length_computable: bool,
    },
    /// Terminal event: the transfer finished, whatever the counters said
    Complete,
}

/// Accumulates progress events into the current range.
///
/// Starts at value 0 of finish 100, tracks `(loaded, total)` from
/// length-computable progress events, and pins to `(100, 100)` once
/// complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFeed {
    range: ProgressRange,
    complete: bool,
}

impl ProgressFeed {
    pub fn new() -> Self {
        Self {
            range: ProgressRange::default(),
            complete: false,
        }
    }

    /// Fold one event into the feed
    pub fn apply(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Progress {
                loaded,
                total,
                length_computable,
            } => {
                if self.complete || !length_computable {
                    return;
                }
                self.range = ProgressRange::with_bounds(loaded, 0.0, total);
            }
            ProgressEvent::Complete => {
                self.range = ProgressRange::with_bounds(100.0, 0.0, 100.0);
                self.complete = true;
            }
        }
    }

    /// Current range for the loaders
    pub fn range(&self) -> ProgressRange {
        self.range
    }

    /// Current percentage, unclamped
    pub fn percentage(&self) -> f64 {
        self.range.percentage()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Default for ProgressFeed {
    fn default() -> Self {
        Self::new()
    }
}
