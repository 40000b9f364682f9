// File: crates/chart-core/tests/ticks.rs
// Purpose: "Nice" tick spacing, tick enumeration, label formatting and linspace sampling.

use chart_core::grid::{
    format_tick, interval_count, linspace, nice_scale, ticks_ascending, ticks_descending, TickScale,
};

fn assert_nice(s: &TickScale) {
    let mantissa = s.mantissa();
    assert!(
        [1.0, 2.0, 5.0].iter().any(|m| (mantissa - m).abs() < 1e-9),
        "step {} is not 1, 2 or 5 x 10^k (mantissa {mantissa})",
        s.step
    );
}

#[test]
fn interval_count_uses_50px_spacing() {
    assert_eq!(interval_count(500), 10);
    assert_eq!(interval_count(549), 10);
    assert_eq!(interval_count(20), 1);
    assert_eq!(interval_count(0), 1);
}

#[test]
fn nice_scale_examples() {
    let s = nice_scale(0.0, 10.0, 10).expect("scale");
    assert_eq!(s.step, 1.0);
    assert_eq!(s.exponent, 0);
    assert_eq!(s.decimals(), 0);

    let s = nice_scale(0.0, 1.0, 4).expect("scale");
    assert!((s.step - 0.5).abs() < 1e-12);
    assert_eq!(s.exponent, -1);
    assert_eq!(s.decimals(), 1);

    let s = nice_scale(0.0, 730.0, 5).expect("scale");
    assert_eq!(s.step, 200.0);
    assert_eq!(s.exponent, 2);
    assert_eq!(s.mantissa(), 2.0);
}

#[test]
fn nice_scale_has_nice_form_and_bounded_tick_count() {
    let ranges = [(0.0, 1.0), (-3.7, 12.2), (1e-4, 3e-4), (100.0, 100_000.0), (-0.03, 0.01), (17.0, 18.0)];
    for &(lo, hi) in &ranges {
        for n in 1..=12 {
            let s = nice_scale(lo, hi, n).expect("scale");
            assert_nice(&s);
            assert!(s.step >= (hi - lo) / n as f64 * (1.0 - 1e-9));
            let ticks = ticks_ascending(lo, hi, s.step);
            assert!(ticks.len() <= n + 1, "{lo}..{hi} n={n}: {} ticks", ticks.len());
            assert!(ticks.iter().all(|&t| t >= lo - 1e-9 && t <= hi + 1e-9));
        }
    }
}

#[test]
fn nice_scale_rejects_empty_range() {
    assert!(nice_scale(1.0, 1.0, 5).is_none());
    assert!(nice_scale(2.0, 1.0, 5).is_none());
    assert!(nice_scale(0.0, f64::NAN, 5).is_none());
}

#[test]
fn ascending_starts_at_first_multiple_above_lo() {
    let t = ticks_ascending(-3.7, 12.2, 5.0);
    assert_eq!(t, vec![0.0, 5.0, 10.0]);
    let t = ticks_ascending(-0.25, 0.25, 0.1);
    assert_eq!(t.len(), 5);
    assert_eq!(t[2], 0.0, "near-zero tick snaps to zero");
}

#[test]
fn descending_starts_at_last_multiple_below_hi() {
    let t = ticks_descending(-3.7, 12.2, 5.0);
    assert_eq!(t, vec![10.0, 5.0, 0.0]);
}

#[test]
fn labels_use_derived_precision() {
    let s = nice_scale(0.0, 0.01, 5).expect("scale");
    assert_eq!(s.decimals(), 3);
    assert_eq!(format_tick(0.004, s.decimals()), "0.004");
    assert_eq!(format_tick(20.0, 0), "20");
    assert_eq!(format_tick(-2.5, 1), "-2.5");
}

#[test]
fn linspace_steps_by_span_over_count_and_stops_short_of_end() {
    let xs = linspace(-5.0, 5.0, 10);
    let expected = [-5.0, -4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
    assert_eq!(xs.len(), expected.len());
    for (got, want) in xs.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }

    assert_eq!(linspace(2.0, 8.0, 1), vec![2.0]);
    assert!(linspace(2.0, 8.0, 0).is_empty());
}
