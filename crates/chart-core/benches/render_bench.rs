use chart_core::{Plot, RecordingSurface, RectI32, RenderStyle, Setting};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_plot(n: usize, style: RenderStyle) -> Plot {
    let mut plot = Plot::scatter(RectI32::from_ltwh(60, 20, 800, 500));
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.01).sin() * 10.0 + x * 0.0001).collect();
    plot.plot_series(&xs, &ys).expect("equal lengths").set_render_style(style);
    plot.set(Setting::ShowAxes, true).set(Setting::ShowBorder, true);
    plot
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    for &n in &[10_000usize, 50_000usize] {
        for (name, style) in [("line", RenderStyle::Line), ("point", RenderStyle::Point)] {
            group.bench_function(format!("{name}_{n}"), |b| {
                let mut plot = build_plot(n, style);
                plot.zoom_in(1.0, 0.5, n as f64 * 0.25, 0.0).expect("zoom");
                let mut surface = RecordingSurface::new();
                b.iter(|| {
                    surface.clear();
                    plot.render(&mut surface);
                    black_box(surface.commands().len())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
