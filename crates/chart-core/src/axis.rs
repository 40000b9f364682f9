// File: crates/chart-core/src/axis.rs
// Summary: Axis decorations: gridlines, tick labels, origin axis lines and the plot border.

use tracing::debug;

use crate::geometry::RectI32;
use crate::grid::{format_tick, interval_count, nice_scale, ticks_ascending, ticks_descending};
use crate::scale::{ScaleTransform, ScreenMapping};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{AXIS_STROKE_WEIGHT, DEFAULT_STROKE_WEIGHT, DEFAULT_TEXT_SIZE, LABEL_PADDING};
use crate::view::Bounds;

/// Per-plot axis state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub text_size: f32,
}

impl Default for Axes {
    fn default() -> Self { Self { text_size: DEFAULT_TEXT_SIZE } }
}

impl Axes {
    pub fn new() -> Self { Self::default() }

    /// Gridlines, tick labels and origin lines for `view` inside `rect`.
    ///
    /// Draws nothing for a degenerate view.
    pub fn draw(&self, surface: &mut dyn Surface, rect: &RectI32, view: &Bounds, theme: &Theme) {
        if view.is_degenerate() {
            debug!(?view, "degenerate view, skipping ticks");
            return;
        }
        let mapping = ScreenMapping::new(*view, *rect);
        self.draw_x_ticks(surface, rect, &mapping, theme);
        self.draw_y_ticks(surface, rect, &mapping, theme);
        draw_origin_lines(surface, rect, &mapping, theme);
    }

    fn draw_x_ticks(&self, surface: &mut dyn Surface, rect: &RectI32, mapping: &ScreenMapping, theme: &Theme) {
        let view = mapping.view;
        let Some(scale) = nice_scale(view.x_min, view.x_max, interval_count(rect.width())) else { return };
        let decimals = scale.decimals();
        let label_y = rect.bottom as f32 + LABEL_PADDING + self.text_size;

        for v in ticks_ascending(view.x_min, view.x_max, scale.step) {
            let px = mapping.to_screen_x(v) as f32;
            surface.set_stroke(Some(theme.grid));
            surface.set_stroke_weight(DEFAULT_STROKE_WEIGHT);
            surface.draw_line(px, rect.top as f32, px, rect.bottom as f32);

            let label = format_tick(v, decimals);
            let x = centered_label_x(surface, &label, px, self.text_size);
            surface.set_fill(Some(theme.axis_label));
            surface.draw_text(&label, x, label_y, self.text_size);
        }
    }

    fn draw_y_ticks(&self, surface: &mut dyn Surface, rect: &RectI32, mapping: &ScreenMapping, theme: &Theme) {
        let view = mapping.view;
        let Some(scale) = nice_scale(view.y_min, view.y_max, interval_count(rect.height())) else { return };
        let decimals = scale.decimals();

        for v in ticks_descending(view.y_min, view.y_max, scale.step) {
            let py = mapping.to_screen_y(v);
            if py > rect.bottom as f64 + 0.5 {
                break;
            }
            let py = py as f32;
            surface.set_stroke(Some(theme.grid));
            surface.set_stroke_weight(DEFAULT_STROKE_WEIGHT);
            surface.draw_line(rect.left as f32, py, rect.right as f32, py);

            let label = format_tick(v, decimals);
            let w = surface.text_width(&label, self.text_size);
            surface.set_fill(Some(theme.axis_label));
            surface.draw_text(&label, rect.left as f32 - LABEL_PADDING - w, py + self.text_size / 3.0, self.text_size);
        }
    }
}

fn draw_origin_lines(surface: &mut dyn Surface, rect: &RectI32, mapping: &ScreenMapping, theme: &Theme) {
    let view = mapping.view;
    surface.set_stroke(Some(theme.axis_line));
    surface.set_stroke_weight(AXIS_STROKE_WEIGHT);
    if view.x_min <= 0.0 && 0.0 <= view.x_max {
        let px = mapping.to_screen_x(0.0) as f32;
        surface.draw_line(px, rect.top as f32, px, rect.bottom as f32);
    }
    if view.y_min <= 0.0 && 0.0 <= view.y_max {
        let py = mapping.to_screen_y(0.0) as f32;
        surface.draw_line(rect.left as f32, py, rect.right as f32, py);
    }
    surface.set_stroke_weight(DEFAULT_STROKE_WEIGHT);
}

/// Outline of the plot rectangle.
pub fn draw_border(surface: &mut dyn Surface, rect: &RectI32, theme: &Theme) {
    surface.set_stroke(Some(theme.border));
    surface.set_fill(None);
    surface.set_stroke_weight(DEFAULT_STROKE_WEIGHT);
    surface.draw_rect(rect.left as f32, rect.top as f32, rect.width() as f32, rect.height() as f32);
}

/// Left edge for a label centered on `center`.
///
/// A leading minus is balanced by measuring the label as if it also had a trailing one.
pub fn centered_label_x(surface: &dyn Surface, label: &str, center: f32, size: f32) -> f32 {
    let width = if label.starts_with('-') {
        surface.text_width(&format!("{label}-"), size)
    } else {
        surface.text_width(label, size)
    };
    center - width / 2.0
}
