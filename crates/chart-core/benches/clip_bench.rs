use chart_core::{clip_segment, RectI32, Segment};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn segments(n: usize) -> Vec<Segment> {
    // Deterministic spread covering inside, crossing and fully outside cases.
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.37;
            Segment::new(t.sin() * 900.0, t.cos() * 700.0, (t * 1.3).cos() * 900.0, (t * 0.7).sin() * 700.0)
        })
        .collect()
}

fn bench_clip(c: &mut Criterion) {
    let rect = RectI32::from_ltwh(-400, -300, 800, 600);
    let mut group = c.benchmark_group("clip_segment");
    for &n in &[1_000usize, 100_000usize] {
        let segs = segments(n);
        group.bench_function(format!("mixed_{n}"), |b| {
            b.iter(|| {
                let visible = segs.iter().filter_map(|&s| clip_segment(s, &rect)).count();
                black_box(visible)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clip);
criterion_main!(benches);
