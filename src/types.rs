//! Core types for the representation pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: binary sequences, run lists, and the options controlling
//! trend-based feature extraction.

use serde::{Deserialize, Serialize};

/// Default number of pieces the smoothed series is split into for FeaTrend
pub const DEFAULT_PIECES: usize = 2;

/// Default order of the moving average applied before trend encoding
pub const DEFAULT_ORDER: usize = 4;

/// A binary sequence produced by bit-level encoding.
///
/// Values are restricted to 0 and 1. Clipping preserves the series length;
/// trending yields one value per adjacent pair, so one less.
pub type BitSequence = Vec<u8>;

/// A maximal run of equal values in a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run<T> {
    /// The repeated value
    pub value: T,
    /// Number of consecutive occurrences, always at least 1
    pub length: u32,
}

/// Ordered list of maximal runs.
///
/// Expanding each run's value `length` times, in order, reconstructs the
/// encoded sequence exactly; adjacent runs never share a value.
pub type RunList<T> = Vec<Run<T>>;

/// Parameters for trend-based feature extraction (FeaTrend, FeaClipTrend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendOptions {
    /// Number of contiguous equal-length pieces the smoothed series is
    /// split into; a trailing remainder shorter than a piece is dropped
    pub pieces: usize,
    /// Order of the simple moving average applied before trend encoding
    pub order: usize,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            pieces: DEFAULT_PIECES,
            order: DEFAULT_ORDER,
        }
    }
}

impl TrendOptions {
    /// Options with the given piece count and the default smoothing order
    pub fn with_pieces(pieces: usize) -> Self {
        Self {
            pieces,
            ..Self::default()
        }
    }
}
