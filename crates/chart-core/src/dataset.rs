// File: crates/chart-core/src/dataset.rs
// Summary: Bivariate dataset model (points, style, bounds, cached screen coords) and its render dispatch.

use tracing::warn;

use crate::clip::{clip_segment, Segment};
use crate::geometry::RectI32;
use crate::scale::ScreenMapping;
use crate::surface::Surface;
use crate::theme::Color;
use crate::types::{DEFAULT_DASH_LENGTH, DEFAULT_STROKE_WEIGHT, POINT_MARKER_SIZE};
use crate::view::Bounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStyle {
    /// Fixed-size marker per sample; samples outside the plot are skipped.
    Point,
    /// Polyline through consecutive samples, clipped to the plot.
    Line,
    /// Short runs of segments centered on every `length`-th sample, unclipped.
    Dash { length: usize },
}

impl RenderStyle {
    /// Parse a style token: `"."` point, `"-"` line, `"--"` dash.
    pub fn from_token(token: &str) -> Option<RenderStyle> {
        match token.trim() {
            "." => Some(RenderStyle::Point),
            "-" => Some(RenderStyle::Line),
            "--" => Some(RenderStyle::Dash { length: DEFAULT_DASH_LENGTH }),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetStyle {
    pub stroke: Color,
    pub fill: Color,
    pub weight: f32,
    pub render: RenderStyle,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self { stroke: Color::BLACK, fill: Color::BLACK, weight: DEFAULT_STROKE_WEIGHT, render: RenderStyle::Point }
    }
}

/// Ordered `(x, y)` samples plus the state needed to draw them.
///
/// Insertion order is render order. `screen_x`/`screen_y` are only meaningful right
/// after [`Dataset::rescale`]; the owning plot rescales before every draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    points: Vec<(f64, f64)>,
    style: DatasetStyle,
    bounds: Option<Bounds>,
    screen_x: Vec<i32>,
    screen_y: Vec<i32>,
    dirty: bool,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut ds = Self::new();
        for (x, y) in points {
            ds.add(x, y);
        }
        ds
    }

    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
        match self.bounds.as_mut() {
            Some(b) => b.include(x, y),
            None => self.bounds = Some(Bounds::point(x, y)),
        }
        self.dirty = true;
    }

    /// Remove the sample at `index`. Out-of-range indexes are ignored.
    ///
    /// Bounds are recomputed from the remaining samples.
    pub fn remove(&mut self, index: usize) -> Option<(f64, f64)> {
        if index >= self.points.len() {
            return None;
        }
        let removed = self.points.remove(index);
        self.recompute_bounds();
        self.dirty = true;
        Some(removed)
    }

    /// Drop the oldest sample without widening or recomputing the y range.
    pub(crate) fn evict_front(&mut self) {
        if !self.points.is_empty() {
            self.points.remove(0);
            self.dirty = true;
        }
    }

    fn recompute_bounds(&mut self) {
        let mut it = self.points.iter();
        self.bounds = it.next().map(|&(x, y)| {
            let mut b = Bounds::point(x, y);
            for &(x, y) in it {
                b.include(x, y);
            }
            b
        });
    }

    pub fn x(&self, index: usize) -> Option<f64> {
        let v = self.points.get(index).map(|p| p.0);
        if v.is_none() {
            warn!(index, len = self.points.len(), "x index out of range");
        }
        v
    }

    pub fn y(&self, index: usize) -> Option<f64> {
        let v = self.points.get(index).map(|p| p.1);
        if v.is_none() {
            warn!(index, len = self.points.len(), "y index out of range");
        }
        v
    }

    pub fn points(&self) -> &[(f64, f64)] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Raw data extents; `None` until the first sample arrives.
    pub fn bounds(&self) -> Option<Bounds> { self.bounds }

    /// Override the x extents (a sliding window resets them to first/last).
    pub fn set_x_bounds(&mut self, min: f64, max: f64) {
        let b = self.bounds.get_or_insert(Bounds::new(min, max, 0.0, 0.0));
        b.x_min = min;
        b.x_max = max;
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn set_clean(&mut self) { self.dirty = false; }

    pub fn style_settings(&self) -> &DatasetStyle { &self.style }
    pub fn render_style(&self) -> RenderStyle { self.style.render }

    pub fn stroke_color(&mut self, token: &str) -> &mut Self {
        self.style.stroke = Color::from_token(token);
        self
    }

    pub fn fill_color(&mut self, token: &str) -> &mut Self {
        self.style.fill = Color::from_token(token);
        self
    }

    pub fn stroke_rgb(&mut self, color: Color) -> &mut Self {
        self.style.stroke = color;
        self
    }

    pub fn fill_rgb(&mut self, color: Color) -> &mut Self {
        self.style.fill = color;
        self
    }

    pub fn stroke_weight(&mut self, weight: f32) -> &mut Self {
        self.style.weight = weight;
        self
    }

    /// Apply a style token. Unknown tokens are reported and leave the style unchanged.
    pub fn style(&mut self, token: &str) -> &mut Self {
        match RenderStyle::from_token(token) {
            Some(render) => self.style.render = render,
            None => warn!(style = token, "style not recognized, keeping {:?}", self.style.render),
        }
        self
    }

    pub fn set_render_style(&mut self, render: RenderStyle) -> &mut Self {
        self.style.render = render;
        self
    }

    pub fn dashed(&mut self, length: usize) -> &mut Self {
        self.style.render = RenderStyle::Dash { length };
        self
    }

    /// Project every sample through `mapping` into the screen caches.
    pub fn rescale(&mut self, mapping: &ScreenMapping) {
        self.screen_x.clear();
        self.screen_y.clear();
        for &(x, y) in &self.points {
            let (px, py) = mapping.to_pixel(x, y);
            self.screen_x.push(px);
            self.screen_y.push(py);
        }
    }

    pub fn screen_x_coords(&self) -> &[i32] { &self.screen_x }
    pub fn screen_y_coords(&self) -> &[i32] { &self.screen_y }

    /// Emit primitives for the cached screen coordinates.
    pub fn draw(&self, surface: &mut dyn Surface, rect: &RectI32) {
        surface.set_stroke(Some(self.style.stroke));
        surface.set_fill(Some(self.style.fill));
        surface.set_stroke_weight(self.style.weight);

        let n = self.screen_x.len().min(self.screen_y.len());
        match self.style.render {
            RenderStyle::Point => {
                for i in 0..n {
                    let (x, y) = (self.screen_x[i] as f64, self.screen_y[i] as f64);
                    if rect.contains(x, y) {
                        surface.draw_ellipse(x as f32, y as f32, POINT_MARKER_SIZE, POINT_MARKER_SIZE);
                    }
                }
            }
            RenderStyle::Line => {
                for i in 1..n {
                    let seg = Segment::new(
                        self.screen_x[i - 1] as f64,
                        self.screen_y[i - 1] as f64,
                        self.screen_x[i] as f64,
                        self.screen_y[i] as f64,
                    );
                    if let Some(s) = clip_segment(seg, rect) {
                        surface.draw_line(s.x1 as f32, s.y1 as f32, s.x2 as f32, s.y2 as f32);
                    }
                }
            }
            RenderStyle::Dash { length } => {
                for (a, b) in dash_segments(n, length) {
                    surface.draw_line(
                        self.screen_x[a] as f32,
                        self.screen_y[a] as f32,
                        self.screen_x[b] as f32,
                        self.screen_y[b] as f32,
                    );
                }
            }
        }
    }
}

/// Index pairs `(j, j + 1)` drawn by the dash style for `len` samples.
///
/// Anchors sit at `dash, 2*dash, ...` while `anchor < len - dash`; each anchor draws
/// `j` in `[anchor - dash/3, anchor + dash/3)`.
pub fn dash_segments(len: usize, dash: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    if dash == 0 {
        return out;
    }
    let third = dash / 3;
    let mut anchor = dash;
    while anchor < len.saturating_sub(dash) {
        for j in anchor - third..anchor + third {
            if j + 1 < len {
                out.push((j, j + 1));
            }
        }
        anchor += dash;
    }
    out
}
