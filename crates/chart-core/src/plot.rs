// File: crates/chart-core/src/plot.rs
// Summary: Plot orchestrator: datasets, configuration, bounds reconciliation, viewport and the render pass.

use tracing::{debug, trace, warn};

use crate::axis::{draw_border, Axes};
use crate::bounds::{BoundsTracker, Freeze};
use crate::dataset::{Dataset, RenderStyle};
use crate::error::{ChartError, ChartResult};
use crate::geometry::RectI32;
use crate::grid::linspace;
use crate::histogram::HistogramDataset;
use crate::policy::InsertionPolicy;
use crate::scale::{ScaleTransform, ScreenMapping};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{GUIDE_LINE_SAMPLES, MIN_WINDOW_CAPACITY};
use crate::view::{Bounds, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Setting {
    ShowAxes,
    ShowBorder,
    FreezeXScale,
    FreezeYScale,
}

/// Display and scaling flags. Everything is off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlotConfig {
    pub show_axes: bool,
    pub show_border: bool,
    pub freeze_x_scale: bool,
    pub freeze_y_scale: bool,
}

impl PlotConfig {
    pub fn with(mut self, setting: Setting, on: bool) -> Self {
        self.set(setting, on);
        self
    }

    pub fn set(&mut self, setting: Setting, on: bool) {
        match setting {
            Setting::ShowAxes => self.show_axes = on,
            Setting::ShowBorder => self.show_border = on,
            Setting::FreezeXScale => self.freeze_x_scale = on,
            Setting::FreezeYScale => self.freeze_y_scale = on,
        }
    }

    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::ShowAxes => self.show_axes,
            Setting::ShowBorder => self.show_border,
            Setting::FreezeXScale => self.freeze_x_scale,
            Setting::FreezeYScale => self.freeze_y_scale,
        }
    }

    pub fn freeze(&self) -> Freeze {
        Freeze { x: self.freeze_x_scale, y: self.freeze_y_scale }
    }
}

/// Orientation of a guide line added by [`Plot::plot_line`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
enum PlotData {
    Series(Vec<Dataset>),
    Histogram(HistogramDataset),
}

/// A rectangular plot area holding bivariate datasets or a single histogram.
///
/// `Clone` is a deep copy: rectangle, configuration, axis state, tracked and override
/// bounds and every dataset (samples, screen caches, style) are duplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    rect: RectI32,
    config: PlotConfig,
    theme: Theme,
    axes: Axes,
    tracker: BoundsTracker,
    viewport: Viewport,
    policy: InsertionPolicy,
    data: PlotData,
}

impl Plot {
    /// Free-form scatter plot.
    pub fn scatter(rect: RectI32) -> Self {
        Self::with_policy(rect, InsertionPolicy::AppendAtIndex, PlotData::Series(Vec::new()))
    }

    /// Time series with a window of `capacity` samples per dataset.
    ///
    /// The oldest sample is evicted as soon as a dataset reaches `capacity`, so a full
    /// window holds `capacity - 1` samples. Capacities below 2 are raised to 2.
    pub fn time_series(rect: RectI32, capacity: usize) -> Self {
        if capacity < MIN_WINDOW_CAPACITY {
            warn!(capacity, "time series capacity too small, using {}", MIN_WINDOW_CAPACITY);
        }
        let policy = InsertionPolicy::SlidingWindow { capacity: capacity.max(MIN_WINDOW_CAPACITY) };
        Self::with_policy(rect, policy, PlotData::Series(Vec::new()))
    }

    pub fn histogram(rect: RectI32, bins: usize) -> Self {
        Self::with_policy(rect, InsertionPolicy::RejectBivariate, PlotData::Histogram(HistogramDataset::new(bins)))
    }

    fn with_policy(rect: RectI32, policy: InsertionPolicy, data: PlotData) -> Self {
        if !rect.is_valid() {
            warn!(width = rect.width(), height = rect.height(), "plot rectangle has no area");
        }
        Self {
            rect,
            config: PlotConfig::default(),
            theme: Theme::default(),
            axes: Axes::default(),
            tracker: BoundsTracker::new(),
            viewport: Viewport::new(),
            policy,
            data,
        }
    }

    pub fn policy(&self) -> InsertionPolicy { self.policy }

    // ---- mutation -----------------------------------------------------------

    /// Add `(x, y)` to the default dataset: the first for a scatter plot, the last
    /// for a time series.
    pub fn plot(&mut self, x: f64, y: f64) -> ChartResult<&mut Dataset> {
        let index = match self.policy {
            InsertionPolicy::SlidingWindow { .. } => self.datasets().len().saturating_sub(1),
            _ => 0,
        };
        self.plot_at(index, x, y)
    }

    /// Add `(x, y)` to dataset `index`; any index past the end starts a new dataset.
    ///
    /// With `freeze_y_scale` on, a `y` outside the tracked range is dropped and the
    /// target dataset is returned unchanged.
    pub fn plot_at(&mut self, index: usize, x: f64, y: f64) -> ChartResult<&mut Dataset> {
        let capacity = self.policy.capacity();
        let freeze = self.config.freeze();
        let accept = !freeze.y || self.tracker.contains_y(y);

        let datasets = match &mut self.data {
            PlotData::Series(datasets) => datasets,
            PlotData::Histogram(_) => {
                warn!(x, y, "bivariate point sent to a histogram");
                return Err(ChartError::BivariateOnHistogram);
            }
        };
        let slot = if index < datasets.len() {
            index
        } else {
            datasets.push(Dataset::new());
            datasets.len() - 1
        };
        let ds = &mut datasets[slot];

        if !accept {
            debug!(dataset = slot, y, "y outside frozen range, point dropped");
            return Ok(ds);
        }
        ds.add(x, y);

        if let Some(capacity) = capacity {
            if ds.len() >= capacity {
                ds.evict_front();
                let window = ds.points().first().zip(ds.points().last()).map(|(a, b)| (a.0, b.0));
                if let Some((first, last)) = window {
                    ds.set_x_bounds(first, last);
                    self.tracker.slide_x(first, last, freeze);
                }
            }
        }
        if let Some(b) = ds.bounds() {
            self.tracker.update_with(&b, freeze);
        }
        Ok(ds)
    }

    /// Add a whole dataset at once.
    pub fn plot_series(&mut self, xs: &[f64], ys: &[f64]) -> ChartResult<&mut Dataset> {
        if xs.len() != ys.len() {
            warn!(x = xs.len(), y = ys.len(), "series lengths differ");
            return Err(ChartError::LengthMismatch { x: xs.len(), y: ys.len() });
        }
        let ds = Dataset::from_points(xs.iter().copied().zip(ys.iter().copied()));
        self.push_dataset(ds)
    }

    /// Guide line at `value` spanning the tracked range of the other axis.
    pub fn plot_line(&mut self, value: f64, direction: Direction) -> ChartResult<&mut Dataset> {
        let tracked = self.tracker.bounds();
        let (xs, ys) = match direction {
            Direction::Horizontal => (
                linspace(tracked.x_min, tracked.x_max, GUIDE_LINE_SAMPLES),
                vec![value; GUIDE_LINE_SAMPLES],
            ),
            Direction::Vertical => (
                vec![value; GUIDE_LINE_SAMPLES],
                linspace(tracked.y_min, tracked.y_max, GUIDE_LINE_SAMPLES),
            ),
        };
        let mut ds = Dataset::from_points(xs.into_iter().zip(ys));
        ds.set_render_style(RenderStyle::Line);
        self.push_dataset(ds)
    }

    fn push_dataset(&mut self, ds: Dataset) -> ChartResult<&mut Dataset> {
        let freeze = self.config.freeze();
        let datasets = match &mut self.data {
            PlotData::Series(datasets) => datasets,
            PlotData::Histogram(_) => {
                warn!("bivariate dataset sent to a histogram");
                return Err(ChartError::BivariateOnHistogram);
            }
        };
        if let Some(b) = ds.bounds() {
            self.tracker.update_with(&b, freeze);
        }
        datasets.push(ds);
        let last = datasets.len() - 1;
        Ok(&mut datasets[last])
    }

    /// Add one sample to the histogram.
    pub fn add(&mut self, value: f64) -> ChartResult<&mut HistogramDataset> {
        self.add_all(&[value])
    }

    pub fn add_all(&mut self, values: &[f64]) -> ChartResult<&mut HistogramDataset> {
        let freeze = self.config.freeze();
        let hist = match &mut self.data {
            PlotData::Histogram(hist) => hist,
            PlotData::Series(_) => {
                warn!(count = values.len(), "univariate samples sent to a bivariate plot");
                return Err(ChartError::UnivariateOnSeries);
            }
        };
        hist.add_all(values);
        if let Some(b) = hist.bounds() {
            self.tracker.update_with(&b, freeze);
        }
        Ok(hist)
    }

    /// Remove dataset `index`, returning it.
    pub fn remove_dataset(&mut self, index: usize) -> ChartResult<Dataset> {
        match &mut self.data {
            PlotData::Series(datasets) if index < datasets.len() => Ok(datasets.remove(index)),
            PlotData::Series(datasets) => {
                let len = datasets.len();
                warn!(index, len, "remove_dataset index out of range");
                Err(ChartError::DatasetIndex { index, len })
            }
            PlotData::Histogram(_) => {
                warn!(index, "a histogram has no removable datasets");
                Err(ChartError::DatasetIndex { index, len: 0 })
            }
        }
    }

    // ---- configuration ------------------------------------------------------

    pub fn set(&mut self, setting: Setting, on: bool) -> &mut Self {
        self.config.set(setting, on);
        self
    }

    pub fn config(&self) -> PlotConfig { self.config }

    pub fn set_config(&mut self, config: PlotConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn set_x_data_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.tracker.set_x_range(min, max);
        self
    }

    /// Fix the y range; combined with `FreezeYScale` it becomes the accepted band.
    pub fn set_y_data_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.tracker.set_y_range(min, max);
        self
    }

    pub fn set_text_size(&mut self, size: f32) -> &mut Self {
        self.axes.text_size = size;
        self
    }

    pub fn text_size(&self) -> f32 { self.axes.text_size }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme { &self.theme }

    // ---- queries ------------------------------------------------------------

    pub fn rect(&self) -> RectI32 { self.rect }

    /// Bivariate datasets; empty for a histogram plot.
    pub fn datasets(&self) -> &[Dataset] {
        match &self.data {
            PlotData::Series(datasets) => datasets,
            PlotData::Histogram(_) => &[],
        }
    }

    pub fn dataset(&self, index: usize) -> Option<&Dataset> {
        self.datasets().get(index)
    }

    pub fn dataset_mut(&mut self, index: usize) -> Option<&mut Dataset> {
        match &mut self.data {
            PlotData::Series(datasets) => datasets.get_mut(index),
            PlotData::Histogram(_) => None,
        }
    }

    pub fn histogram_data(&self) -> Option<&HistogramDataset> {
        match &self.data {
            PlotData::Histogram(hist) => Some(hist),
            PlotData::Series(_) => None,
        }
    }

    pub fn histogram_data_mut(&mut self) -> Option<&mut HistogramDataset> {
        match &mut self.data {
            PlotData::Histogram(hist) => Some(hist),
            PlotData::Series(_) => None,
        }
    }

    /// Cached screen x coordinates of dataset `index` from the last render.
    pub fn screen_x_coords(&self, index: usize) -> ChartResult<&[i32]> {
        self.checked_dataset(index).map(Dataset::screen_x_coords)
    }

    pub fn screen_y_coords(&self, index: usize) -> ChartResult<&[i32]> {
        self.checked_dataset(index).map(Dataset::screen_y_coords)
    }

    fn checked_dataset(&self, index: usize) -> ChartResult<&Dataset> {
        let datasets = self.datasets();
        datasets.get(index).ok_or_else(|| {
            warn!(index, len = datasets.len(), "dataset index out of range");
            ChartError::DatasetIndex { index, len: datasets.len() }
        })
    }

    pub fn tracked_bounds(&self) -> Bounds { self.tracker.bounds() }

    /// The visible data rectangle: the viewport override if active, else the tracked bounds.
    pub fn effective_bounds(&self) -> Bounds {
        self.viewport.effective(&self.tracker.bounds())
    }

    pub fn viewport(&self) -> &Viewport { &self.viewport }

    fn mapping(&self) -> ScreenMapping {
        ScreenMapping::new(self.effective_bounds(), self.rect)
    }

    /// Screen column of data `x` in the current view. Not finite for a degenerate view.
    pub fn screen_x_for(&self, x: f64) -> f64 { self.mapping().to_screen_x(x) }
    pub fn screen_y_for(&self, y: f64) -> f64 { self.mapping().to_screen_y(y) }
    pub fn data_x_for(&self, px: f64) -> f64 { self.mapping().from_screen_x(px) }
    pub fn data_y_for(&self, py: f64) -> f64 { self.mapping().from_screen_y(py) }

    /// Data-space point inside the visible rectangle (inclusive).
    pub fn is_point_in_bounds(&self, x: f64, y: f64) -> bool {
        let b = self.effective_bounds();
        b.x_min <= x && x <= b.x_max && b.y_min <= y && y <= b.y_max
    }

    /// Screen-space pointer inside the plot rectangle (inclusive).
    pub fn contains_pointer(&self, px: f64, py: f64) -> bool {
        self.rect.contains(px, py)
    }

    // ---- viewport -----------------------------------------------------------

    pub fn zoom_in(&mut self, zoom: f64, recenter: f64, target_x: f64, target_y: f64) -> ChartResult<()> {
        let tracked = self.tracker.bounds();
        self.viewport.zoom_in(&tracked, zoom, recenter, target_x, target_y)
    }

    /// Zoom to the data under the screen rectangle with corners `(x0, y0)` and `(x1, y1)`.
    pub fn zoom_to_screen_region(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> ChartResult<()> {
        let tracked = self.tracker.bounds();
        self.viewport.zoom_to_screen_region(&tracked, self.rect, x0, y0, x1, y1)
    }

    pub fn reset_viewport(&mut self) {
        self.viewport.reset();
        debug!("viewport reset");
    }

    // ---- rendering ----------------------------------------------------------

    /// Fold every dirty dataset into the tracked bounds and mark it clean.
    pub fn reconcile_bounds(&mut self) {
        let freeze = self.config.freeze();
        match &mut self.data {
            PlotData::Series(datasets) => {
                for ds in datasets.iter_mut().filter(|d| d.is_dirty()) {
                    if let Some(b) = ds.bounds() {
                        self.tracker.update_with(&b, freeze);
                    }
                    ds.set_clean();
                }
            }
            PlotData::Histogram(hist) => {
                if hist.is_dirty() {
                    if let Some(b) = hist.bounds() {
                        self.tracker.update_with(&b, freeze);
                    }
                    hist.set_clean();
                }
            }
        }
        trace!(tracked = ?self.tracker.bounds(), "bounds reconciled");
    }

    /// Full render pass: reconcile, axes, border, then every dataset.
    ///
    /// Datasets are not projected while the visible rectangle is degenerate.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        self.reconcile_bounds();
        let view = self.effective_bounds();

        if self.config.show_axes {
            self.axes.draw(surface, &self.rect, &view, &self.theme);
        }
        if self.config.show_border {
            draw_border(surface, &self.rect, &self.theme);
        }
        if view.is_degenerate() {
            debug!(?view, "degenerate view, datasets not drawn");
            return;
        }

        let mapping = ScreenMapping::new(view, self.rect);
        match &mut self.data {
            PlotData::Series(datasets) => {
                for ds in datasets.iter_mut() {
                    ds.rescale(&mapping);
                    ds.draw(surface, &self.rect);
                }
            }
            PlotData::Histogram(hist) => {
                hist.rescale(&mapping);
                hist.draw(surface, &self.rect);
            }
        }
    }
}
