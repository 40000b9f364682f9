// File: crates/chart-core/src/scale.rs
// Summary: Linear range mapping and the data <-> screen transform built on it.

use crate::geometry::RectI32;
use crate::view::Bounds;

/// Linearly map `value` from `[src_lo, src_hi]` onto `[dst_lo, dst_hi]`.
///
/// Not clamped: values outside the source range land outside the destination range.
/// `src_lo == src_hi` is undefined input; callers check the view is non-degenerate first.
#[inline]
pub fn map(value: f64, src_lo: f64, src_hi: f64, dst_lo: f64, dst_hi: f64) -> f64 {
    (value - src_lo) / (src_hi - src_lo) * (dst_hi - dst_lo) + dst_lo
}

/// General scale transform operations for X/Y axes.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: f64) -> f64;
    fn to_screen_y(&self, y: f64) -> f64;
    fn from_screen_x(&self, px: f64) -> f64;
    fn from_screen_y(&self, py: f64) -> f64;
}

/// Maps a visible data rectangle onto a screen rectangle.
///
/// X runs left to right. Y is inverted: `view.y_min` lands on the bottom row and
/// `view.y_max` on the top row, so data "up" renders above data "down".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    pub view: Bounds,
    pub screen: RectI32,
}

impl ScreenMapping {
    pub fn new(view: Bounds, screen: RectI32) -> Self {
        Self { view, screen }
    }

    /// Project a data point to integer pixels (truncating, like the cached projections).
    pub fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        (self.to_screen_x(x) as i32, self.to_screen_y(y) as i32)
    }
}

impl ScaleTransform for ScreenMapping {
    #[inline]
    fn to_screen_x(&self, x: f64) -> f64 {
        map(x, self.view.x_min, self.view.x_max, self.screen.left as f64, self.screen.right as f64)
    }
    #[inline]
    fn to_screen_y(&self, y: f64) -> f64 {
        map(y, self.view.y_min, self.view.y_max, self.screen.bottom as f64, self.screen.top as f64)
    }
    #[inline]
    fn from_screen_x(&self, px: f64) -> f64 {
        map(px, self.screen.left as f64, self.screen.right as f64, self.view.x_min, self.view.x_max)
    }
    #[inline]
    fn from_screen_y(&self, py: f64) -> f64 {
        map(py, self.screen.bottom as f64, self.screen.top as f64, self.view.y_min, self.view.y_max)
    }
}
