// File: crates/chart-core/src/policy.rs
// Summary: How a plot accepts new samples (scatter, sliding time series, histogram).

/// Insertion strategy injected into a [`crate::Plot`] at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPolicy {
    /// Free-form scatter: append to an existing dataset or start a new one.
    AppendAtIndex,
    /// Time series: like `AppendAtIndex`, but the oldest sample is evicted whenever a
    /// dataset reaches `capacity`, leaving at most `capacity - 1` samples.
    SlidingWindow { capacity: usize },
    /// Histogram: bivariate samples are refused; use `add`/`add_all`.
    RejectBivariate,
}

impl InsertionPolicy {
    pub fn accepts_bivariate(&self) -> bool {
        !matches!(self, InsertionPolicy::RejectBivariate)
    }

    /// Window length, if this policy evicts.
    pub fn capacity(&self) -> Option<usize> {
        match *self {
            InsertionPolicy::SlidingWindow { capacity } => Some(capacity),
            _ => None,
        }
    }
}
