// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for rejected operations. Nothing here is fatal; prior state is always kept.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("dataset index {index} out of range (plot has {len} datasets)")]
    DatasetIndex { index: usize, len: usize },

    #[error("zoom region {width:.1}x{height:.1} px is below the {min} px minimum")]
    ZoomRegionTooSmall { width: f64, height: f64, min: f64 },

    #[error("visible range has zero width or height")]
    DegenerateView,

    #[error("zoom amount {0} would invert the view (must be > -1)")]
    InvalidZoom(f64),

    #[error("bivariate data is not supported on a histogram")]
    BivariateOnHistogram,

    #[error("univariate samples can only be added to a histogram")]
    UnivariateOnSeries,

    #[error("x and y lengths differ ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
}

pub type ChartResult<T> = Result<T, ChartError>;
