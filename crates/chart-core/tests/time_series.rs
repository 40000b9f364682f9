// File: crates/chart-core/tests/time_series.rs
// Purpose: Sliding-window insertion: capacity, eviction order, x-bounds reset, window-following view.

use chart_core::{ChartError, InsertionPolicy, Plot, RectI32, Setting};

fn rect() -> RectI32 { RectI32::from_ltwh(0, 0, 600, 400) }

#[test]
fn length_never_exceeds_capacity() {
    let mut plot = Plot::time_series(rect(), 25);
    assert_eq!(plot.policy(), InsertionPolicy::SlidingWindow { capacity: 25 });
    for i in 0..500 {
        let ds = plot.plot(i as f64, (i as f64 * 0.1).sin()).expect("plot");
        assert!(ds.len() < 25, "len {} at step {i}", ds.len());
    }
    assert_eq!(plot.dataset(0).map(|d| d.len()), Some(24));
}

#[test]
fn eviction_drops_oldest_and_resets_x_bounds() {
    let mut plot = Plot::time_series(rect(), 4);
    for i in 0..10 {
        plot.plot(10.0 + i as f64, i as f64).expect("plot");
    }
    let ds = plot.dataset(0).expect("dataset");
    assert_eq!(ds.points().iter().map(|p| p.0).collect::<Vec<_>>(), vec![17.0, 18.0, 19.0]);
    let b = ds.bounds().expect("bounds");
    assert_eq!((b.x_min, b.x_max), (17.0, 19.0));

    let tracked = plot.tracked_bounds();
    assert_eq!((tracked.x_min, tracked.x_max), (17.0, 19.0), "visible x range follows the window");
    assert_eq!((tracked.y_min, tracked.y_max), (0.0, 9.0));
}

#[test]
fn plot_targets_last_dataset() {
    let mut plot = Plot::time_series(rect(), 10);
    plot.plot(0.0, 0.0).expect("plot");
    plot.plot_at(5, 0.0, 1.0).expect("new dataset");
    plot.plot(1.0, 2.0).expect("plot");
    assert_eq!(plot.dataset(0).map(|d| d.len()), Some(1));
    assert_eq!(plot.dataset(1).map(|d| d.len()), Some(2));
}

#[test]
fn frozen_x_keeps_configured_window() {
    let mut plot = Plot::time_series(rect(), 3);
    plot.set_x_data_range(0.0, 100.0).set(Setting::FreezeXScale, true);
    for i in 0..10 {
        plot.plot(i as f64, 1.0).expect("plot");
    }
    let t = plot.tracked_bounds();
    assert_eq!((t.x_min, t.x_max), (0.0, 100.0));
    assert_eq!(plot.dataset(0).map(|d| d.len()), Some(2));
}

#[test]
fn frozen_y_filters_before_eviction() {
    let mut plot = Plot::time_series(rect(), 3);
    plot.set_y_data_range(-1.0, 1.0).set(Setting::FreezeYScale, true);
    for i in 0..2 {
        plot.plot(i as f64, 0.5).expect("plot");
    }
    plot.plot(2.0, 5.0).expect("filtered");
    let ds = plot.dataset(0).expect("dataset");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.x(0), Some(0.0), "nothing evicted for a filtered point");

    plot.plot(2.0, 0.5).expect("plot");
    let ds = plot.dataset(0).expect("dataset");
    assert_eq!(ds.points().iter().map(|p| p.0).collect::<Vec<_>>(), vec![1.0, 2.0]);
}

#[test]
fn reaching_capacity_evicts_immediately() {
    let mut plot = Plot::time_series(rect(), 4);
    for i in 0..3 {
        plot.plot(10.0 + i as f64, 1.0).expect("plot");
    }
    assert_eq!(plot.dataset(0).map(|d| d.len()), Some(3), "below capacity nothing is evicted");

    let ds = plot.plot(13.0, 1.0).expect("plot");
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.points().iter().map(|p| p.0).collect::<Vec<_>>(), vec![11.0, 12.0, 13.0]);
}

#[test]
fn tiny_capacities_are_raised_to_two() {
    for capacity in [0, 1] {
        let mut plot = Plot::time_series(rect(), capacity);
        assert_eq!(plot.policy(), InsertionPolicy::SlidingWindow { capacity: 2 });
        let ds = plot.plot(1.0, 1.0).expect("plot");
        assert_eq!(ds.len(), 1, "first sample survives");
        plot.plot(2.0, 1.0).expect("plot");
        assert_eq!(plot.dataset(0).map(|d| d.points().to_vec()), Some(vec![(2.0, 1.0)]));
    }
}

#[test]
fn univariate_samples_are_refused() {
    let mut plot = Plot::time_series(rect(), 5);
    assert_eq!(plot.add_all(&[1.0, 2.0]).unwrap_err(), ChartError::UnivariateOnSeries);
}
