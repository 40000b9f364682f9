// File: crates/chart-core/src/view.rs
// Summary: Data-space rectangles and the pan/zoom override layered over tracked data bounds.

use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::geometry::RectI32;
use crate::scale::{ScaleTransform, ScreenMapping};
use crate::types::MIN_ZOOM_PIXELS;

/// Axis-aligned rectangle in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Zero-size rectangle at the origin; the starting point of every tracker.
    pub const ORIGIN: Bounds = Bounds { x_min: 0.0, x_max: 0.0, y_min: 0.0, y_max: 0.0 };

    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Rectangle spanned by two corners given in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x_min: x0.min(x1), x_max: x0.max(x1), y_min: y0.min(y1), y_max: y0.max(y1) }
    }

    /// Degenerate rectangle holding a single point.
    pub fn point(x: f64, y: f64) -> Self {
        Self::new(x, x, y, y)
    }

    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
    pub fn center_x(&self) -> f64 { (self.x_min + self.x_max) * 0.5 }
    pub fn center_y(&self) -> f64 { (self.y_min + self.y_max) * 0.5 }

    /// Grow to include `(x, y)`.
    pub fn include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    /// True when either span is zero (or not a finite positive number).
    /// Tick computation and coordinate mapping must not run on such a view.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.x_span(), self.y_span());
        !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0)
    }
}

/// Optional pan/zoom rectangle. While active it replaces the tracked bounds as the
/// visible rectangle and ignores further data growth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    override_bounds: Option<Bounds>,
}

impl Viewport {
    pub fn new() -> Self { Self::default() }

    pub fn is_active(&self) -> bool { self.override_bounds.is_some() }

    pub fn override_bounds(&self) -> Option<Bounds> { self.override_bounds }

    /// Activate the override with an explicit rectangle.
    pub fn set_override(&mut self, bounds: Bounds) {
        self.override_bounds = Some(bounds);
    }

    /// The visible rectangle: the override if active, else `tracked`.
    pub fn effective(&self, tracked: &Bounds) -> Bounds {
        self.override_bounds.unwrap_or(*tracked)
    }

    pub fn effective_min_x(&self, tracked: &Bounds) -> f64 { self.effective(tracked).x_min }
    pub fn effective_max_x(&self, tracked: &Bounds) -> f64 { self.effective(tracked).x_max }
    pub fn effective_min_y(&self, tracked: &Bounds) -> f64 { self.effective(tracked).y_min }
    pub fn effective_max_y(&self, tracked: &Bounds) -> f64 { self.effective(tracked).y_max }

    /// Shrink the visible extent by `1 + zoom` on both axes and move the center a
    /// `recenter` fraction of the way toward `(target_x, target_y)`.
    ///
    /// `zoom == 0` leaves everything untouched. Negative amounts above -1 zoom out.
    pub fn zoom_in(
        &mut self,
        tracked: &Bounds,
        zoom: f64,
        recenter: f64,
        target_x: f64,
        target_y: f64,
    ) -> ChartResult<()> {
        if zoom == 0.0 {
            return Ok(());
        }
        if !zoom.is_finite() || zoom <= -1.0 {
            warn!(zoom, "zoom amount rejected");
            return Err(ChartError::InvalidZoom(zoom));
        }
        let current = self.effective(tracked);
        if current.is_degenerate() {
            warn!(?current, "cannot zoom a degenerate view");
            return Err(ChartError::DegenerateView);
        }

        let half_w = current.x_span() / (1.0 + zoom) * 0.5;
        let half_h = current.y_span() / (1.0 + zoom) * 0.5;
        let cx = current.center_x() + (target_x - current.center_x()) * recenter;
        let cy = current.center_y() + (target_y - current.center_y()) * recenter;
        self.override_bounds = Some(Bounds::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h));
        debug!(bounds = ?self.override_bounds, "zoomed in");
        Ok(())
    }

    /// Zoom to the data rectangle under a screen-space drag rectangle.
    ///
    /// Corners may come in any order. Spans below `MIN_ZOOM_PIXELS` on either axis
    /// are rejected without touching the current state.
    pub fn zoom_to_screen_region(
        &mut self,
        tracked: &Bounds,
        screen: RectI32,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    ) -> ChartResult<()> {
        let width = (x1 - x0).abs();
        let height = (y1 - y0).abs();
        if width < MIN_ZOOM_PIXELS || height < MIN_ZOOM_PIXELS {
            warn!(width, height, "zoom region too small, ignoring");
            return Err(ChartError::ZoomRegionTooSmall { width, height, min: MIN_ZOOM_PIXELS });
        }
        let current = self.effective(tracked);
        if current.is_degenerate() {
            warn!(?current, "cannot zoom a degenerate view");
            return Err(ChartError::DegenerateView);
        }

        let mapping = ScreenMapping::new(current, screen);
        let next = Bounds::from_corners(
            mapping.from_screen_x(x0),
            mapping.from_screen_y(y0),
            mapping.from_screen_x(x1),
            mapping.from_screen_y(y1),
        );
        self.override_bounds = Some(next);
        debug!(?next, "zoomed to screen region");
        Ok(())
    }

    /// Drop the override; the visible rectangle follows the tracked bounds again.
    pub fn reset(&mut self) {
        self.override_bounds = None;
    }
}
