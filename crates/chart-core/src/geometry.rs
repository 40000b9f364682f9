// File: crates/chart-core/src/geometry.rs
// Summary: Plot rectangle in screen pixels: containment and box intersection.

/// Integer screen rectangle. Rows grow downward, so `top < bottom` for a valid rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// True when both width and height are strictly positive.
    pub const fn is_valid(&self) -> bool { self.width() > 0 && self.height() > 0 }

    /// Inclusive containment test in screen space.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left as f64 && x <= self.right as f64 && y >= self.top as f64 && y <= self.bottom as f64
    }

    /// Intersection of an axis-aligned box (any corner order) with this rect.
    /// Returns `(x, y, w, h)` or `None` when they do not overlap.
    pub fn intersect(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<(f64, f64, f64, f64)> {
        let l = x0.min(x1).max(self.left as f64);
        let r = x0.max(x1).min(self.right as f64);
        let t = y0.min(y1).max(self.top as f64);
        let b = y0.max(y1).min(self.bottom as f64);
        if r < l || b < t { return None; }
        Some((l, t, r - l, b - t))
    }
}
