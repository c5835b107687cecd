//! Piecewise aggregation representations
//!
//! Windowed reductions that compress a series with an injected aggregation
//! capability: Piecewise Aggregate Approximation over contiguous pieces,
//! and the mean seasonal profile over season phases.

use crate::error::ReprError;

/// Piecewise Aggregate Approximation.
///
/// Aggregates contiguous pieces of `q` observations each; a trailing
/// remainder shorter than `q` forms one final piece of its own, so every
/// observation contributes to exactly one output value. Output length is
/// `ceil(x.len() / q)`.
pub fn paa<F>(x: &[f64], q: usize, aggregate: F) -> Result<Vec<f64>, ReprError>
where
    F: Fn(&[f64]) -> f64,
{
    if q == 0 {
        return Err(ReprError::InvalidParameter(
            "piece length must be at least 1".to_string(),
        ));
    }
    if x.is_empty() {
        return Err(ReprError::EmptyInput(
            "piecewise aggregate approximation".to_string(),
        ));
    }

    Ok(x.chunks(q).map(aggregate).collect())
}

/// Mean seasonal profile.
///
/// Slot i aggregates the observations at phase i of each full season of
/// length `freq`; observations past the last full season are not visited.
/// Output length is `freq`.
pub fn seasonal_profile<F>(x: &[f64], freq: usize, aggregate: F) -> Result<Vec<f64>, ReprError>
where
    F: Fn(&[f64]) -> f64,
{
    if freq == 0 {
        return Err(ReprError::InvalidParameter(
            "season length must be at least 1".to_string(),
        ));
    }
    let seasons = x.len() / freq;
    if seasons == 0 {
        return Err(ReprError::InsufficientLength(format!(
            "seasonal profile of season length {} requires at least one full season, got {} observations",
            freq,
            x.len()
        )));
    }

    let mut repr = Vec::with_capacity(freq);
    let mut phase = Vec::with_capacity(seasons);
    for i in 0..freq {
        phase.clear();
        phase.extend((0..seasons).map(|j| x[j * freq + i]));
        repr.push(aggregate(&phase));
    }
    Ok(repr)
}
