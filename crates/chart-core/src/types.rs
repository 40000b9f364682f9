// File: crates/chart-core/src/types.rs
// Summary: Shared constants (pixel thresholds, marker and stroke sizes, sampling counts).

/// Minimum span, in pixels, a drag rectangle needs on each axis before it zooms.
pub const MIN_ZOOM_PIXELS: f64 = 50.0;

/// Target pixel distance between two ticks; interval count is `extent / TICK_SPACING_PX`.
pub const TICK_SPACING_PX: i32 = 50;

/// Diameter of a point marker, in pixels.
pub const POINT_MARKER_SIZE: f32 = 2.0;

/// Stroke weight used for the axis lines through the origin.
pub const AXIS_STROKE_WEIGHT: f32 = 2.0;

/// Stroke weight restored after drawing axes and gridlines.
pub const DEFAULT_STROKE_WEIGHT: f32 = 1.0;

/// Tick label font size, in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 12.0;

/// Gap between the plot rectangle and tick labels, in pixels.
pub const LABEL_PADDING: f32 = 4.0;

/// Dash length used by the `"--"` style token.
pub const DEFAULT_DASH_LENGTH: usize = 9;

/// Number of samples in a guide line produced by `Plot::plot_line`.
pub const GUIDE_LINE_SAMPLES: usize = 1000;

/// Width of one glyph relative to font size, for surfaces without real text metrics.
pub const APPROX_GLYPH_WIDTH: f32 = 0.6;

/// Zoom amount applied per frame while ctrl + left button are held.
pub const HOLD_ZOOM_STEP: f64 = 0.01;

/// Fraction of the way the view center moves toward the pointer per held-zoom frame.
pub const HOLD_ZOOM_RECENTER: f64 = 0.05;

/// Smallest sliding-window capacity; a window of 1 would evict every sample on insert.
pub const MIN_WINDOW_CAPACITY: usize = 2;
