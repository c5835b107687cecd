//! Run-length codec
//!
//! Compresses a sequence of discrete values into (value, run length) pairs.
//! The codec is value-agnostic: any equality-comparable element type works,
//! although the pipeline only ever feeds it bit sequences.

use crate::error::ReprError;
use crate::types::{Run, RunList};

/// Encode a non-empty sequence into its maximal-run representation.
///
/// A new run starts at every value change, so runs never have zero length
/// and adjacent runs never share a value. Single left-to-right scan, O(n).
pub fn encode<T: PartialEq + Copy>(seq: &[T]) -> Result<RunList<T>, ReprError> {
    let (&first, rest) = seq
        .split_first()
        .ok_or_else(|| ReprError::EmptyInput("run-length encoding".to_string()))?;

    let mut runs = Vec::new();
    let mut current = Run {
        value: first,
        length: 1,
    };
    for &value in rest {
        if value == current.value {
            current.length += 1;
        } else {
            runs.push(current);
            current = Run { value, length: 1 };
        }
    }
    runs.push(current);

    Ok(runs)
}

/// Expand a run list back into the sequence it encodes.
///
/// The pipeline never decodes; this exists so the round-trip invariant of
/// the codec stays checkable.
pub fn expand<T: Copy>(runs: &[Run<T>]) -> Vec<T> {
    let total: usize = runs.iter().map(|run| run.length as usize).sum();
    let mut seq = Vec::with_capacity(total);
    for run in runs {
        seq.extend(std::iter::repeat(run.value).take(run.length as usize));
    }
    seq
}
