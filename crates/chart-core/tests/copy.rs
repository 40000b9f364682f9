// File: crates/chart-core/tests/copy.rs
// Purpose: Cloning a plot yields a fully independent deep copy.

use chart_core::{Plot, RecordingSurface, RectI32, Setting, Theme};

fn populated() -> Plot {
    let mut plot = Plot::scatter(RectI32::from_ltwh(10, 10, 300, 200));
    plot.plot_series(&[0.0, 1.0, 2.0], &[3.0, 1.0, 2.0]).expect("series").style("-");
    plot.plot_at(1, 5.0, 5.0).expect("plot");
    plot.set(Setting::ShowAxes, true).set_text_size(14.0);
    plot.render(&mut RecordingSurface::new());
    plot
}

#[test]
fn clone_equals_source() {
    let plot = populated();
    assert_eq!(plot.clone(), plot);
}

#[test]
fn mutating_the_copy_leaves_the_source_plot_alone() {
    let plot = populated();
    let snapshot = plot.clone();

    let mut copy = plot.clone();
    copy.plot(100.0, -100.0).expect("plot");
    copy.dataset_mut(1).expect("dataset").stroke_color("red").remove(0);
    copy.set(Setting::FreezeYScale, true).set_text_size(30.0).set_theme(Theme::dark());
    copy.zoom_in(2.0, 0.5, 1.0, 1.0).expect("zoom");
    copy.remove_dataset(0).expect("remove");
    copy.render(&mut RecordingSurface::new());

    assert_eq!(plot, snapshot);
    assert_eq!(plot.datasets().len(), 2);
    assert_eq!(plot.dataset(0).map(|d| d.len()), Some(3));
    assert!(!plot.viewport().is_active());
    assert_eq!(plot.text_size(), 14.0);
    assert_ne!(plot.tracked_bounds(), copy.tracked_bounds());
}

#[test]
fn screen_caches_are_copied_not_shared() {
    let plot = populated();
    let mut copy = plot.clone();
    assert_eq!(copy.screen_x_coords(0).expect("coords"), plot.screen_x_coords(0).expect("coords"));

    copy.zoom_in(1.0, 0.0, 0.0, 0.0).expect("zoom");
    copy.render(&mut RecordingSurface::new());
    assert_ne!(copy.screen_x_coords(0).expect("coords"), plot.screen_x_coords(0).expect("coords"));
}

#[test]
fn histogram_copies_are_independent() {
    let mut plot = Plot::histogram(RectI32::from_ltwh(0, 0, 200, 100), 3);
    plot.add_all(&[1.0, 2.0, 3.0]).expect("samples");
    let mut copy = plot.clone();
    copy.add(3.0).expect("sample");
    assert_eq!(plot.histogram_data().map(|h| h.bins().to_vec()), Some(vec![1, 1, 1]));
    assert_eq!(copy.histogram_data().map(|h| h.bins().to_vec()), Some(vec![1, 1, 2]));
}
