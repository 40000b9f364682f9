// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small plot (no tick labels) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Plot, RectI32, Setting};
use chart_render_skia::{render_to_png_bytes, RasterOptions};

fn render_bytes() -> Vec<u8> {
    let mut plot = Plot::scatter(RectI32::from_ltwh(10, 10, 180, 130));
    plot.plot_series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 0.0, 1.5, 1.0])
        .expect("series")
        .style("-")
        .stroke_color("red")
        .stroke_weight(2.0);
    for i in 0..30 {
        let x = f64::from(i) * 4.0 / 29.0;
        plot.plot_at(1, x, 0.5 + 0.4 * (x * 2.0).sin()).expect("plot");
    }
    plot.dataset_mut(1).expect("dataset").style("--").stroke_color("blue");
    plot.set(Setting::ShowBorder, true);

    let opts = RasterOptions { width: 200, height: 150, background: None };
    render_to_png_bytes(&mut plot, &opts).expect("render png")
}

#[test]
fn golden_basic_plot() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_plot.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    let a = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    let b = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
