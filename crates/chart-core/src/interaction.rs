// File: crates/chart-core/src/interaction.rs
// Summary: Pointer-driven viewport control: drag-to-zoom, hold-to-zoom, right-click reset.

use tracing::debug;

use crate::error::ChartError;
use crate::plot::Plot;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{DEFAULT_STROKE_WEIGHT, HOLD_ZOOM_RECENTER, HOLD_ZOOM_STEP};

/// Pointer state polled from the host once per frame, in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    pub left: bool,
    pub right: bool,
    pub ctrl: bool,
}

impl PointerInput {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, ..Self::default() }
    }
}

/// What a frame of input did to the plot.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    None,
    DragStarted,
    Zoomed,
    ZoomedIn,
    Reset,
    Rejected(ChartError),
}

/// Edge-detecting state machine turning [`PointerInput`] frames into viewport changes.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    drag_start: Option<(f64, f64)>,
    pointer: (f64, f64),
    prev_left: bool,
    prev_right: bool,
}

impl Interaction {
    pub fn new() -> Self { Self::default() }

    /// Screen-space corner where the current drag began.
    pub fn drag_start(&self) -> Option<(f64, f64)> { self.drag_start }

    pub fn update(&mut self, plot: &mut Plot, input: &PointerInput) -> InteractionEvent {
        let pressed_left = input.left && !self.prev_left;
        let released_left = !input.left && self.prev_left;
        let pressed_right = input.right && !self.prev_right;
        self.prev_left = input.left;
        self.prev_right = input.right;
        self.pointer = (input.x, input.y);
        let inside = plot.contains_pointer(input.x, input.y);

        if pressed_right {
            self.drag_start = None;
            plot.reset_viewport();
            return InteractionEvent::Reset;
        }

        if input.left && input.ctrl {
            self.drag_start = None;
            if !inside {
                return InteractionEvent::None;
            }
            let (tx, ty) = (plot.data_x_for(input.x), plot.data_y_for(input.y));
            return match plot.zoom_in(HOLD_ZOOM_STEP, HOLD_ZOOM_RECENTER, tx, ty) {
                Ok(()) => InteractionEvent::ZoomedIn,
                Err(e) => InteractionEvent::Rejected(e),
            };
        }

        if pressed_left && inside {
            self.drag_start = Some((input.x, input.y));
            return InteractionEvent::DragStarted;
        }

        if released_left {
            let Some((x0, y0)) = self.drag_start.take() else { return InteractionEvent::None };
            if !inside {
                debug!(x = input.x, y = input.y, "drag released outside plot, cancelled");
                return InteractionEvent::None;
            }
            return match plot.zoom_to_screen_region(x0, y0, input.x, input.y) {
                Ok(()) => InteractionEvent::Zoomed,
                Err(e) => InteractionEvent::Rejected(e),
            };
        }

        InteractionEvent::None
    }

    /// Outline of the in-progress selection, if any.
    pub fn draw_overlay(&self, surface: &mut dyn Surface, theme: &Theme) {
        let Some((x0, y0)) = self.drag_start else { return };
        let (x1, y1) = self.pointer;
        surface.set_stroke(Some(theme.selection));
        surface.set_fill(None);
        surface.set_stroke_weight(DEFAULT_STROKE_WEIGHT);
        surface.draw_rect(x0.min(x1) as f32, y0.min(y1) as f32, (x1 - x0).abs() as f32, (y1 - y0).abs() as f32);
    }
}
