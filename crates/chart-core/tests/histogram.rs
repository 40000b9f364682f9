// File: crates/chart-core/tests/histogram.rs
// Purpose: Histogram binning: partition invariant, max-value clamp, sorted mirror, removal, plot integration.

use chart_core::{Bounds, ChartError, HistogramDataset, Plot, RectI32};

fn samples_1_to_8() -> Vec<f64> { (1..=8).map(f64::from).collect() }

#[test]
fn four_bins_over_one_to_eight() {
    let h = HistogramDataset::from_samples(4, &samples_1_to_8());
    assert_eq!(h.min(), Some(1.0));
    assert_eq!(h.max(), Some(8.0));
    assert!((h.bin_width() - 1.75).abs() < 1e-12);

    for v in samples_1_to_8() {
        let expected = (((v - 1.0) / 1.75).floor() as usize).min(3);
        assert_eq!(h.bin_index(v), expected, "sample {v}");
    }
    assert_eq!(h.bins(), &[2, 2, 2, 2]);
    assert_eq!(h.max_frequency(), 2);
}

#[test]
fn maximum_sample_lands_in_last_bin() {
    let h = HistogramDataset::from_samples(4, &samples_1_to_8());
    assert_eq!(h.bin_index(8.0), 3);
    assert_eq!(h.frequency_of(8.0), 2);
}

#[test]
fn insertion_order_does_not_matter() {
    let mut rev = samples_1_to_8();
    rev.reverse();
    let a = HistogramDataset::from_samples(4, &samples_1_to_8());
    let b = HistogramDataset::from_samples(4, &rev);
    assert_eq!(a.bins(), b.bins());
    assert_eq!(a.sorted(), b.sorted());
    assert_eq!(b.samples(), rev.as_slice());
}

#[test]
fn bins_always_account_for_every_sample() {
    let mut h = HistogramDataset::new(7);
    let data = [3.2, -1.0, 14.5, 0.0, 0.0, 9.9, 2.2, -8.25, 14.5, 6.0, 1e-3];
    for (i, &v) in data.iter().enumerate() {
        h.add(v);
        assert_eq!(h.bins().iter().sum::<usize>(), i + 1);
        assert!(h.sorted().windows(2).all(|w| w[0] <= w[1]));
    }
    assert_eq!(h.max_frequency(), *h.bins().iter().max().expect("bins"));
}

#[test]
fn single_value_goes_to_first_bin() {
    let h = HistogramDataset::from_samples(5, &[2.0, 2.0, 2.0]);
    assert_eq!(h.bin_width(), 0.0);
    assert_eq!(h.bins(), &[3, 0, 0, 0, 0]);
}

#[test]
fn remove_updates_mirror_and_bins() {
    let mut h = HistogramDataset::from_samples(4, &samples_1_to_8());
    assert_eq!(h.remove(7), Some(8.0));
    assert_eq!(h.remove(40), None);
    assert_eq!(h.sorted(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    assert_eq!(h.max(), Some(7.0));
    assert_eq!(h.bins(), &[2, 1, 2, 2]);
}

#[test]
fn bin_ranges_and_frequency_queries() {
    let h = HistogramDataset::from_samples(4, &samples_1_to_8());
    assert_eq!(h.bin_range(0), Some((1.0, 2.75)));
    assert_eq!(h.bin_range(4), None);
    assert_eq!(h.frequency_of(0.0), 0);
    assert_eq!(h.frequency_of(2.0), 2);
    assert_eq!(h.bounds(), Some(Bounds::new(1.0, 8.0, 0.0, 2.0)));
}

#[test]
fn histogram_plot_refuses_bivariate_points() {
    let mut plot = Plot::histogram(RectI32::from_ltwh(0, 0, 400, 300), 4);
    assert_eq!(plot.plot(1.0, 2.0).unwrap_err(), ChartError::BivariateOnHistogram);
    assert_eq!(plot.plot_at(0, 1.0, 2.0).unwrap_err(), ChartError::BivariateOnHistogram);
    assert_eq!(plot.plot_series(&[1.0], &[2.0]).unwrap_err(), ChartError::BivariateOnHistogram);
    assert!(plot.datasets().is_empty());
}

#[test]
fn histogram_plot_tracks_sample_range_and_frequency() {
    let mut plot = Plot::histogram(RectI32::from_ltwh(0, 0, 400, 300), 4);
    plot.add_all(&samples_1_to_8()).expect("histogram accepts samples");
    plot.add(8.0).expect("sample");
    assert_eq!(plot.histogram_data().map(|h| h.bins().to_vec()), Some(vec![2, 2, 2, 3]));
    assert_eq!(plot.tracked_bounds(), Bounds::new(0.0, 8.0, 0.0, 3.0));
}
