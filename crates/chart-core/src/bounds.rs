// File: crates/chart-core/src/bounds.rs
// Summary: Incremental tracking of the plot's data extents with per-axis freeze.

use tracing::trace;

use crate::view::Bounds;

/// Which axes are currently frozen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Freeze {
    pub x: bool,
    pub y: bool,
}

/// Data extents across every dataset of a plot.
///
/// Starts at the origin, so the origin stays visible until a sliding window moves the
/// x range past it. While an axis is unfrozen its range only ever grows; while frozen
/// it does not change at all through `update_with`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsTracker {
    bounds: Bounds,
}

impl Default for BoundsTracker {
    fn default() -> Self {
        Self { bounds: Bounds::ORIGIN }
    }
}

impl BoundsTracker {
    pub fn new() -> Self { Self::default() }

    pub fn bounds(&self) -> Bounds { self.bounds }

    /// Grow the tracked extents to cover `dataset`, skipping frozen axes.
    pub fn update_with(&mut self, dataset: &Bounds, freeze: Freeze) {
        if !freeze.x {
            self.bounds.x_min = self.bounds.x_min.min(dataset.x_min);
            self.bounds.x_max = self.bounds.x_max.max(dataset.x_max);
        }
        if !freeze.y {
            self.bounds.y_min = self.bounds.y_min.min(dataset.y_min);
            self.bounds.y_max = self.bounds.y_max.max(dataset.y_max);
        }
        trace!(bounds = ?self.bounds, "tracked bounds updated");
    }

    /// Overwrite the x range (explicit configuration or a sliding window).
    pub fn set_x_range(&mut self, min: f64, max: f64) {
        self.bounds.x_min = min;
        self.bounds.x_max = max;
    }

    /// Move the x range onto a sliding window's `[first, last]`, unless x is frozen.
    pub fn slide_x(&mut self, first: f64, last: f64, freeze: Freeze) {
        if freeze.x {
            return;
        }
        self.set_x_range(first.min(last), first.max(last));
        trace!(bounds = ?self.bounds, "x window slid");
    }

    /// Overwrite the y range; with `freeze_y_scale` this becomes the accepted band.
    pub fn set_y_range(&mut self, min: f64, max: f64) {
        self.bounds.y_min = min;
        self.bounds.y_max = max;
    }

    /// Inclusive membership in the tracked y range.
    pub fn contains_y(&self, y: f64) -> bool {
        self.bounds.y_min <= y && y <= self.bounds.y_max
    }
}
