// File: crates/chart-core/src/histogram.rs
// Summary: Univariate dataset with equal-width binning over the running sample range, drawn as bars.

use tracing::{trace, warn};

use crate::geometry::RectI32;
use crate::scale::{ScaleTransform, ScreenMapping};
use crate::surface::Surface;
use crate::theme::Color;
use crate::types::DEFAULT_STROKE_WEIGHT;
use crate::view::Bounds;

/// One bar in screen space; `top` is the frequency row, `base` the zero row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub base: i32,
}

/// Samples, their ascending mirror and a fixed number of equal-width bins.
///
/// Invariant: the bins partition `[min, max]` and every sample is counted in
/// exactly one of them, so the bin counts always sum to `len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramDataset {
    samples: Vec<f64>,
    sorted: Vec<f64>,
    bins: Vec<usize>,
    range: Option<(f64, f64)>,
    max_frequency: usize,
    stroke: Color,
    fill: Color,
    weight: f32,
    bars: Vec<Bar>,
    dirty: bool,
}

impl HistogramDataset {
    pub fn new(bin_count: usize) -> Self {
        if bin_count == 0 {
            warn!("histogram needs at least one bin, using 1");
        }
        Self {
            samples: Vec::new(),
            sorted: Vec::new(),
            bins: vec![0; bin_count.max(1)],
            range: None,
            max_frequency: 0,
            stroke: Color::BLACK,
            fill: Color::BLACK,
            weight: DEFAULT_STROKE_WEIGHT,
            bars: Vec::new(),
            dirty: false,
        }
    }

    pub fn from_samples(bin_count: usize, samples: &[f64]) -> Self {
        let mut h = Self::new(bin_count);
        h.add_all(samples);
        h
    }

    pub fn add(&mut self, value: f64) {
        self.samples.push(value);
        let at = self.sorted.partition_point(|&s| s < value);
        self.sorted.insert(at, value);
        self.dirty = true;

        let range = self.range;
        match range {
            Some((min, max)) if value >= min && value <= max => {
                let i = self.bin_index(value);
                self.bins[i] += 1;
                self.max_frequency = self.max_frequency.max(self.bins[i]);
            }
            Some((min, max)) => {
                self.range = Some((min.min(value), max.max(value)));
                self.rebin();
            }
            None => {
                self.range = Some((value, value));
                self.rebin();
            }
        }
    }

    pub fn add_all(&mut self, values: &[f64]) {
        for &v in values {
            self.add(v);
        }
    }

    /// Remove the sample at insertion position `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<f64> {
        if index >= self.samples.len() {
            return None;
        }
        let value = self.samples.remove(index);
        let at = self.sorted.partition_point(|&s| s < value);
        if at < self.sorted.len() {
            self.sorted.remove(at);
        }
        self.range = match (self.sorted.first(), self.sorted.last()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        };
        self.rebin();
        self.dirty = true;
        Some(value)
    }

    fn rebin(&mut self) {
        self.bins.iter_mut().for_each(|b| *b = 0);
        for i in 0..self.sorted.len() {
            let bin = self.bin_index(self.sorted[i]);
            self.bins[bin] += 1;
        }
        self.max_frequency = self.bins.iter().copied().max().unwrap_or(0);
        trace!(bins = ?self.bins, "histogram rebinned");
    }

    pub fn bin_count(&self) -> usize { self.bins.len() }

    /// Width of one bin; zero while the sample range is empty or a single value.
    pub fn bin_width(&self) -> f64 {
        match self.range {
            Some((min, max)) => (max - min) / self.bins.len() as f64,
            None => 0.0,
        }
    }

    /// Bin owning `value`, clamped to the existing bins (the maximum sample lands in the last).
    pub fn bin_index(&self, value: f64) -> usize {
        let width = self.bin_width();
        let Some((min, _)) = self.range else { return 0 };
        if width <= 0.0 || !width.is_finite() {
            return 0;
        }
        let raw = ((value - min) / width).floor();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.bins.len() - 1)
        }
    }

    /// Data-space `[lo, hi)` covered by bin `index`.
    pub fn bin_range(&self, index: usize) -> Option<(f64, f64)> {
        let (min, _) = self.range?;
        if index >= self.bins.len() {
            return None;
        }
        let w = self.bin_width();
        Some((min + w * index as f64, min + w * (index + 1) as f64))
    }

    /// Count of the bin `value` falls into; zero outside the sample range.
    pub fn frequency_of(&self, value: f64) -> usize {
        match self.range {
            Some((min, max)) if value >= min && value <= max => self.bins[self.bin_index(value)],
            _ => 0,
        }
    }

    pub fn bins(&self) -> &[usize] { &self.bins }
    pub fn sorted(&self) -> &[f64] { &self.sorted }
    pub fn samples(&self) -> &[f64] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn max_frequency(&self) -> usize { self.max_frequency }
    pub fn min(&self) -> Option<f64> { self.range.map(|r| r.0) }
    pub fn max(&self) -> Option<f64> { self.range.map(|r| r.1) }

    /// `x: [min, max]`, `y: [0, max_frequency]`.
    pub fn bounds(&self) -> Option<Bounds> {
        self.range.map(|(min, max)| Bounds::new(min, max, 0.0, self.max_frequency as f64))
    }

    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn set_clean(&mut self) { self.dirty = false; }

    pub fn stroke_color(&mut self, token: &str) -> &mut Self {
        self.stroke = Color::from_token(token);
        self
    }

    pub fn fill_color(&mut self, token: &str) -> &mut Self {
        self.fill = Color::from_token(token);
        self
    }

    pub fn stroke_weight(&mut self, weight: f32) -> &mut Self {
        self.weight = weight;
        self
    }

    /// Histograms only draw bars (`"|"`); any other token is reported and ignored.
    pub fn style(&mut self, token: &str) -> &mut Self {
        if token.trim() != "|" {
            warn!(style = token, "histogram only supports the bar style");
        }
        self
    }

    pub fn bars(&self) -> &[Bar] { &self.bars }

    pub fn rescale(&mut self, mapping: &ScreenMapping) {
        self.bars.clear();
        let base = mapping.to_screen_y(0.0) as i32;
        for (i, &count) in self.bins.iter().enumerate() {
            let Some((lo, hi)) = self.bin_range(i) else { continue };
            self.bars.push(Bar {
                left: mapping.to_screen_x(lo) as i32,
                right: mapping.to_screen_x(hi) as i32,
                top: mapping.to_screen_y(count as f64) as i32,
                base,
            });
        }
    }

    /// Filled bars, cut to the plot rectangle. Empty bins draw nothing.
    pub fn draw(&self, surface: &mut dyn Surface, rect: &RectI32) {
        surface.set_stroke(Some(self.stroke));
        surface.set_fill(Some(self.fill));
        surface.set_stroke_weight(self.weight);
        for (bar, &count) in self.bars.iter().zip(&self.bins) {
            if count == 0 {
                continue;
            }
            if let Some((x, y, w, h)) =
                rect.intersect(bar.left as f64, bar.top as f64, bar.right as f64, bar.base as f64)
            {
                surface.draw_rect(x as f32, y as f32, w as f32, h as f32);
            }
        }
    }
}
