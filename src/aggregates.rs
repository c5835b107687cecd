//! Aggregation utilities
//!
//! Small pure statistics used as injected aggregation capabilities by the
//! piecewise representations. Every function requires a non-empty input;
//! callers guard with an empty check first, so an empty slice here is a
//! caller bug and fails the contract assertion rather than returning an
//! error.

use serde::{Deserialize, Serialize};

/// Sum of all values
pub fn sum(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "aggregate invoked on empty input");
    values.iter().sum()
}

/// Largest value
pub fn max(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "aggregate invoked on empty input");
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Smallest value
pub fn min(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "aggregate invoked on empty input");
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "aggregate invoked on empty input");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median via select-nth on a private copy of the input.
///
/// Even-length inputs average the two middle values. The input slice is
/// never reordered.
pub fn median(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "aggregate invoked on empty input");

    let mut work = values.to_vec();
    let n = work.len();
    let half = n / 2;

    let (_, upper, _) = work.select_nth_unstable_by(half, f64::total_cmp);
    let upper = *upper;
    if n % 2 == 1 {
        upper
    } else {
        // work[..half] now holds the smallest half values in some order
        let (_, lower, _) = work[..half].select_nth_unstable_by(half - 1, f64::total_cmp);
        (upper + *lower) / 2.0
    }
}

/// Closed set of named aggregation capabilities.
///
/// Used for configuration-level dispatch in the pipeline; the feature
/// extractors themselves accept any `Fn(&[f64]) -> f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Sum,
    Max,
    Mean,
    Median,
    Min,
}

impl Default for Aggregate {
    fn default() -> Self {
        Aggregate::Sum
    }
}

impl Aggregate {
    /// Apply the aggregation to a non-empty slice
    pub fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Aggregate::Sum => sum(values),
            Aggregate::Max => max(values),
            Aggregate::Mean => mean(values),
            Aggregate::Median => median(values),
            Aggregate::Min => min(values),
        }
    }
}
