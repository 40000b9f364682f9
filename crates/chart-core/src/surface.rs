// File: crates/chart-core/src/surface.rs
// Summary: Host rendering surface interface plus an in-memory recorder used by tests and benches.

use crate::theme::Color;
use crate::types::APPROX_GLYPH_WIDTH;

/// Primitive drawing operations the engine needs from a host renderer.
///
/// State-based, like an immediate-mode canvas: stroke color, fill color and stroke
/// weight stay in effect until changed. `None` disables stroke or fill. Text is
/// painted with the fill color.
pub trait Surface {
    fn set_stroke(&mut self, color: Option<Color>);
    fn set_fill(&mut self, color: Option<Color>);
    fn set_stroke_weight(&mut self, weight: f32);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Ellipse centered on `(cx, cy)`.
    fn draw_ellipse(&mut self, cx: f32, cy: f32, width: f32, height: f32);
    /// Rectangle with top-left corner `(x, y)`.
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Text with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32);

    /// Advance width of `text` at font `size`.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Drawing state captured alongside each recorded primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub weight: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self { stroke: Some(Color::BLACK), fill: Some(Color::WHITE), weight: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { x1: f32, y1: f32, x2: f32, y2: f32, state: DrawState },
    Ellipse { cx: f32, cy: f32, width: f32, height: f32, state: DrawState },
    Rect { x: f32, y: f32, width: f32, height: f32, state: DrawState },
    Text { text: String, x: f32, y: f32, size: f32, state: DrawState },
}

/// Surface that records every primitive instead of rasterizing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    state: DrawState,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn clear(&mut self) { self.commands.clear(); }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn ellipses(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    /// Recorded text strings, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_stroke(&mut self, color: Option<Color>) { self.state.stroke = color; }
    fn set_fill(&mut self, color: Option<Color>) { self.state.fill = color; }
    fn set_stroke_weight(&mut self, weight: f32) { self.state.weight = weight; }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2, state: self.state });
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Ellipse { cx, cy, width, height, state: self.state });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, state: self.state });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        self.commands.push(DrawCommand::Text { text: text.to_owned(), x, y, size, state: self.state });
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * APPROX_GLYPH_WIDTH
    }
}
