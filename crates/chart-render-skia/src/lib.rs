// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia host renderer: `Surface` over a Skia canvas plus headless PNG / RGBA8 rendering of a plot.

use anyhow::{anyhow, bail, Context, Result};
use chart_core::{Color, Plot, Surface};
use skia_safe as skia;
use tracing::debug;

pub mod text;

pub use text::TextShaper;

#[inline]
pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `Surface` implementation drawing straight onto a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    stroke: Option<Color>,
    fill: Option<Color>,
    weight: f32,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, stroke: Some(Color::BLACK), fill: Some(Color::WHITE), weight: 1.0 }
    }

    fn stroke_paint(&self) -> Option<skia::Paint> {
        let color = self.stroke?;
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.weight);
        Some(paint)
    }

    fn fill_paint(&self) -> Option<skia::Paint> {
        let color = self.fill?;
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        Some(paint)
    }
}

impl Surface for SkiaSurface<'_> {
    fn set_stroke(&mut self, color: Option<Color>) { self.stroke = color; }
    fn set_fill(&mut self, color: Option<Color>) { self.fill = color; }
    fn set_stroke_weight(&mut self, weight: f32) { self.weight = weight; }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        if let Some(paint) = self.stroke_paint() {
            self.canvas.draw_line((x1, y1), (x2, y2), &paint);
        }
    }

    fn draw_ellipse(&mut self, cx: f32, cy: f32, width: f32, height: f32) {
        let rect = skia::Rect::from_xywh(cx - width / 2.0, cy - height / 2.0, width, height);
        if let Some(paint) = self.fill_paint() {
            self.canvas.draw_oval(rect, &paint);
        }
        if let Some(paint) = self.stroke_paint() {
            self.canvas.draw_oval(rect, &paint);
        }
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = skia::Rect::from_xywh(x, y, width, height);
        if let Some(paint) = self.fill_paint() {
            self.canvas.draw_rect(rect, &paint);
        }
        if let Some(paint) = self.stroke_paint() {
            self.canvas.draw_rect(rect, &paint);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        if let Some(color) = self.fill {
            self.shaper.draw(self.canvas, text, x, y, size, to_skia(color));
        }
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.shaper.measure_width(text, size)
    }
}

/// Raster target size and background.
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    /// `None` uses the plot theme's background.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { width: 800, height: 600, background: None }
    }
}

/// Render `plot` onto a fresh CPU raster surface, then let `overlay` draw on top.
fn rasterize(plot: &mut Plot, opts: &RasterOptions, overlay: impl FnOnce(&mut dyn Surface)) -> Result<skia::Surface> {
    if opts.width <= 0 || opts.height <= 0 {
        bail!("raster size must be positive, got {}x{}", opts.width, opts.height);
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia(opts.background.unwrap_or(plot.theme().background)));
        let mut target = SkiaSurface::new(canvas, &shaper);
        plot.render(&mut target);
        overlay(&mut target);
    }
    debug!(width = opts.width, height = opts.height, "plot rasterized");
    Ok(surface)
}

/// Render to PNG bytes in memory.
pub fn render_to_png_bytes(plot: &mut Plot, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = rasterize(plot, opts, |_| {})?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn render_to_png(plot: &mut Plot, opts: &RasterOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(plot, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer. Returns `(pixels, width, height, row_bytes)`.
pub fn render_to_rgba8(plot: &mut Plot, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    render_to_rgba8_with(plot, opts, |_| {})
}

/// Like [`render_to_rgba8`], with an extra drawing pass after the plot (selection overlays).
pub fn render_to_rgba8_with(
    plot: &mut Plot,
    opts: &RasterOptions,
    overlay: impl FnOnce(&mut dyn Surface),
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = rasterize(plot, opts, overlay)?;
    let (w, h) = (opts.width as u32, opts.height as u32);
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        bail!("read_pixels failed");
    }
    Ok((pixels, w, h, row_bytes))
}
