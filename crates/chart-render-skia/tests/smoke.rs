// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG.

use chart_core::{Plot, RectI32, Setting};
use chart_render_skia::{render_to_png, render_to_png_bytes, RasterOptions};

#[test]
fn render_smoke_png() {
    let mut plot = Plot::scatter(RectI32::from_ltwh(60, 20, 320, 220));
    plot.plot_series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 2.0, 1.0, 3.5, 2.5])
        .expect("series")
        .style("-")
        .stroke_color("blue");
    plot.set(Setting::ShowAxes, true).set(Setting::ShowBorder, true);

    let opts = RasterOptions { width: 400, height: 300, background: None };
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&mut plot, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&mut plot, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn invalid_raster_size_is_an_error() {
    let mut plot = Plot::scatter(RectI32::from_ltwh(0, 0, 10, 10));
    let opts = RasterOptions { width: 0, height: 300, background: None };
    assert!(render_to_png_bytes(&mut plot, &opts).is_err());
}
