// File: crates/demo/src/main.rs
// Summary: Renders scatter / line / dash, time series, histogram and zoomed plots to PNGs; optional x,y CSV input.

use anyhow::{Context, Result};
use chart_core::{theme, Direction, Plot, RectI32, Setting};
use chart_render_skia::{render_to_png, RasterOptions};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: i32 = 900;
const HEIGHT: i32 = 600;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir = PathBuf::from("target/out");
    let opts = RasterOptions { width: WIDTH, height: HEIGHT, background: None };

    // 1) Scatter with point, line and dash datasets plus guide lines
    let mut scatter = build_scatter();
    write(&mut scatter, &opts, &out_dir.join("scatter.png"))?;

    // 2) Zoomed copy; the source plot keeps its view
    let mut zoomed = scatter.clone();
    zoomed.zoom_to_screen_region(300.0, 150.0, 600.0, 400.0)?;
    write(&mut zoomed, &opts, &out_dir.join("scatter_zoomed.png"))?;

    // 3) Time series after the window has slid well past the origin
    let mut series = build_time_series();
    write(&mut series, &opts, &out_dir.join("time_series.png"))?;

    // 4) Histogram
    let mut hist = build_histogram();
    write(&mut hist, &opts, &out_dir.join("histogram.png"))?;

    // 5) Optional CSV of x,y pairs
    if let Some(raw) = std::env::args().nth(1) {
        let path = Path::new(&raw);
        let (xs, ys) = load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!(rows = xs.len(), "loaded {}", path.display());
        if xs.is_empty() {
            anyhow::bail!("no rows loaded from {}; expected two numeric columns", path.display());
        }
        let mut plot = framed(Plot::scatter(plot_rect()));
        plot.plot_series(&xs, &ys)?.style("-").stroke_color("blue");
        write(&mut plot, &opts, &out_name_with(path, "xy"))?;
    }

    Ok(())
}

fn plot_rect() -> RectI32 {
    RectI32::from_ltrb(70, 30, WIDTH - 30, HEIGHT - 50)
}

/// Axes and border on; `CONSTELLATION_THEME=dark` picks a theme preset.
fn framed(mut plot: Plot) -> Plot {
    let theme = std::env::var("CONSTELLATION_THEME").map(|name| theme::find(&name)).unwrap_or_default();
    plot.set(Setting::ShowAxes, true).set(Setting::ShowBorder, true).set_theme(theme);
    plot
}

fn build_scatter() -> Plot {
    let mut plot = framed(Plot::scatter(plot_rect()));
    let xs: Vec<f64> = (0..200).map(|i| -5.0 + i as f64 * 0.05).collect();

    let ys: Vec<f64> = xs.iter().map(|x| x.sin() * 3.0).collect();
    if let Ok(ds) = plot.plot_series(&xs, &ys) {
        ds.style("-").stroke_color("blue").stroke_weight(2.0);
    }
    let ys: Vec<f64> = xs.iter().map(|x| 0.1 * x * x - 1.0).collect();
    if let Ok(ds) = plot.plot_series(&xs, &ys) {
        ds.style("--").stroke_color("green");
    }
    for i in 0..60 {
        let x = -4.5 + i as f64 * 0.15;
        let y = (x * 1.7).cos() * 2.0 + (i % 7) as f64 * 0.15;
        if let Ok(ds) = plot.plot_at(2, x, y) {
            ds.style(".").stroke_color("red").fill_color("red");
        }
    }
    if let Ok(ds) = plot.plot_line(2.5, Direction::Horizontal) {
        ds.stroke_color("black");
    }
    if let Ok(ds) = plot.plot_line(-2.0, Direction::Vertical) {
        ds.stroke_color("black");
    }
    plot
}

fn build_time_series() -> Plot {
    let mut plot = framed(Plot::time_series(plot_rect(), 300));
    for i in 0..1200 {
        let t = i as f64 * 0.05;
        if let Ok(ds) = plot.plot(t, (t * 0.8).sin() * 10.0 + (t * 3.1).cos() * 2.0) {
            ds.style("-").stroke_color("blue");
        }
    }
    plot
}

fn build_histogram() -> Plot {
    let mut plot = framed(Plot::histogram(plot_rect(), 24));
    // Deterministic bell-ish sample: sum of a few incommensurate oscillations.
    let samples: Vec<f64> = (0..4000)
        .map(|i| {
            let t = i as f64;
            (t * 0.731).sin() + (t * 1.379).sin() + (t * 2.113).sin() + (t * 0.297).cos()
        })
        .collect();
    if let Ok(h) = plot.add_all(&samples) {
        h.fill_color("blue").stroke_color("black");
    }
    plot
}

fn write(plot: &mut Plot, opts: &RasterOptions, path: &Path) -> Result<()> {
    render_to_png(plot, opts, path)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Read the first two numeric columns of each row; rows that do not parse are skipped.
fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_path(path)?;
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(x), Some(y)) = (parse(0), parse(1)) {
            xs.push(x);
            ys.push(y);
        }
    }
    Ok((xs, ys))
}

/// Produce output file name like target/out/plot_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "data".into());
    PathBuf::from("target/out").join(format!("plot_{stem}_{suffix}.png"))
}
