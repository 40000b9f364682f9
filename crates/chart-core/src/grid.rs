// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers: "nice" {1,2,5}x10^k spacing, tick positions, label formatting.

use crate::types::TICK_SPACING_PX;

/// A tick spacing of the form `{1, 2, 5} x 10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickScale {
    pub step: f64,
    pub exponent: i32,
}

impl TickScale {
    /// Digits after the decimal point needed to print ticks at this spacing.
    pub fn decimals(&self) -> usize {
        (-self.exponent).max(0) as usize
    }

    /// The `{1, 2, 5}` factor of `step`.
    pub fn mantissa(&self) -> f64 {
        self.step / 10f64.powi(self.exponent)
    }
}

/// Number of tick intervals that fit into `pixel_extent` at the minimum tick spacing.
pub fn interval_count(pixel_extent: i32) -> usize {
    (pixel_extent / TICK_SPACING_PX).max(1) as usize
}

/// Pick the smallest human-friendly spacing that splits `[lo, hi]` into at most
/// `intervals` pieces.
///
/// The raw interval is brought into `(0.5, 5]` by powers of ten, then snapped up to
/// 1, 2 or 5. Returns `None` for an empty or non-finite range.
pub fn nice_scale(lo: f64, hi: f64, intervals: usize) -> Option<TickScale> {
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        return None;
    }
    let raw = span / intervals.max(1) as f64;

    let mut scaled = raw;
    let mut exponent = 0i32;
    while scaled > 5.0 {
        scaled /= 10.0;
        exponent += 1;
    }
    while scaled <= 0.5 {
        scaled *= 10.0;
        exponent -= 1;
    }
    let base = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else {
        5.0
    };
    Some(TickScale { step: base * 10f64.powi(exponent), exponent })
}

/// Multiples of `step` in `[lo, hi]`, ascending.
pub fn ticks_ascending(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || hi < lo {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let start = (lo / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let v = start + f64::from(i) * step;
        if v > hi + eps {
            break;
        }
        out.push(snap_zero(v, eps));
        i += 1;
    }
    out
}

/// Multiples of `step` in `[lo, hi]`, descending from the top of the range.
pub fn ticks_descending(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || hi < lo {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let start = (hi / step).floor() * step;
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let v = start - f64::from(i) * step;
        if v < lo - eps {
            break;
        }
        out.push(snap_zero(v, eps));
        i += 1;
    }
    out
}

/// Format a tick value with a fixed number of decimals.
pub fn format_tick(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

// -1e-17 should print as "0", not "-0".
fn snap_zero(v: f64, eps: f64) -> f64 {
    if v.abs() < eps { 0.0 } else { v }
}

/// `steps` values from `start` in increments of `(end - start) / steps`.
///
/// `end` itself is excluded: `linspace(-5.0, 5.0, 10)` is `-5.0, -4.0, ..., 4.0`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }
    let step = (end - start) / steps as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}
