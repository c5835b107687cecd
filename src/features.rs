//! Feature extraction from bit-level encodings
//!
//! This module derives fixed-length feature vectors from the run-length
//! structure of a series' binary encoding:
//! - FeaClip: eight statistics of the clipped (mean-thresholded) series
//! - FeaTrend: per-piece run statistics of the smoothed trend encoding
//! - FeaClipTrend: concatenation of the two

use crate::aggregates;
use crate::encoder::{clipping, trending};
use crate::error::ReprError;
use crate::rle;
use crate::smoothing::sma;
use crate::types::{Run, TrendOptions};

/// Number of slots in a FeaClip vector
pub const FEACLIP_LEN: usize = 8;

/// Split run lengths by run value, preserving order within each partition.
fn partition_lengths(runs: &[Run<u8>]) -> (Vec<f64>, Vec<f64>) {
    let mut ones = Vec::new();
    let mut zeros = Vec::new();
    for run in runs {
        if run.value == 1 {
            ones.push(run.length as f64);
        } else {
            zeros.push(run.length as f64);
        }
    }
    (ones, zeros)
}

/// FeaClip: eight features of the clipping representation.
///
/// Slot layout:
/// - 0: longest run of ones
/// - 1: total count of ones
/// - 2: longest run of zeros
/// - 3: number of run transitions
/// - 4 / 5: length of the first / last run when that run is zeros, else 0
/// - 6 / 7: length of the first / last run when that run is ones, else 0
///
/// The partition statistics (slots 0-2) and the boundary statistics
/// (slots 4-7) are computed independently from the same run list; a series
/// whose encoding is a single run populates a boundary slot pair and its
/// partition slots from that same run.
pub fn feaclip(x: &[f64]) -> Result<[f64; FEACLIP_LEN], ReprError> {
    let bits = clipping(x)?;
    let runs = rle::encode(&bits)?;

    let mut repr = [0.0; FEACLIP_LEN];
    repr[3] = (runs.len() - 1) as f64;

    // a single-run list is its own first and last run
    let first = runs[0];
    let last = runs[runs.len() - 1];
    if first.value == 0 {
        repr[4] = first.length as f64;
    } else {
        repr[6] = first.length as f64;
    }
    if last.value == 0 {
        repr[5] = last.length as f64;
    } else {
        repr[7] = last.length as f64;
    }

    let (ones, zeros) = partition_lengths(&runs);
    if !ones.is_empty() {
        repr[0] = aggregates::max(&ones);
        repr[1] = aggregates::sum(&ones);
    }
    if !zeros.is_empty() {
        repr[2] = aggregates::max(&zeros);
    }

    Ok(repr)
}

/// FeaTrend: per-piece aggregated run statistics of the trend encoding.
///
/// The series is smoothed with a moving average of `opts.order`, split into
/// `opts.pieces` contiguous pieces of `smoothed_len / pieces` observations
/// each, and every piece is trend-encoded and run-length encoded. Slot 2j
/// holds the aggregate of piece j's upward-run lengths, slot 2j+1 the
/// aggregate of its downward-run lengths; an empty partition contributes 0.
///
/// A trailing remainder shorter than a piece is dropped, keeping piece
/// boundaries aligned with the equal-split formulation; pick `pieces`
/// dividing the smoothed length when every observation must be covered.
pub fn featrend<F>(x: &[f64], aggregate: F, opts: TrendOptions) -> Result<Vec<f64>, ReprError>
where
    F: Fn(&[f64]) -> f64,
{
    if opts.pieces == 0 {
        return Err(ReprError::InvalidParameter(
            "piece count must be at least 1".to_string(),
        ));
    }

    let smoothed = sma(x, opts.order)?;
    let piece_len = smoothed.len() / opts.pieces;
    if piece_len < 2 {
        return Err(ReprError::InsufficientLength(format!(
            "splitting {} smoothed observations into {} pieces leaves pieces too short to trend-encode",
            smoothed.len(),
            opts.pieces
        )));
    }

    let mut repr = Vec::with_capacity(2 * opts.pieces);
    for piece in smoothed.chunks_exact(piece_len).take(opts.pieces) {
        let bits = trending(piece)?;
        let runs = rle::encode(&bits)?;
        let (ones, zeros) = partition_lengths(&runs);

        repr.push(if ones.is_empty() { 0.0 } else { aggregate(&ones) });
        repr.push(if zeros.is_empty() { 0.0 } else { aggregate(&zeros) });
    }

    Ok(repr)
}

/// FeaClipTrend: FeaClip followed by FeaTrend over the same series.
///
/// Purely compositional; the two feature sets share nothing beyond the
/// input. Output length is `8 + 2 * opts.pieces`.
pub fn feacliptrend<F>(x: &[f64], aggregate: F, opts: TrendOptions) -> Result<Vec<f64>, ReprError>
where
    F: Fn(&[f64]) -> f64,
{
    let clip = feaclip(x)?;
    let trend = featrend(x, aggregate, opts)?;

    let mut repr = Vec::with_capacity(clip.len() + trend.len());
    repr.extend_from_slice(&clip);
    repr.extend(trend);
    Ok(repr)
}
