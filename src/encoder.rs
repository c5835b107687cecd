//! Bit-level encoding
//!
//! This module derives binary sequences from a numeric series via two
//! policies:
//! - Clipping: 1 where the value exceeds the global series mean
//! - Trending: 1 where the series increases between adjacent points

use crate::error::ReprError;
use crate::types::BitSequence;

/// Encode a series against its global arithmetic mean.
///
/// Bit i is 1 when `x[i]` is strictly greater than the mean of the whole
/// series; ties map to 0. The output has the same length as the input, and
/// a single-element series encodes to `[0]` (every value equals its own
/// mean).
pub fn clipping(x: &[f64]) -> Result<BitSequence, ReprError> {
    if x.is_empty() {
        return Err(ReprError::EmptyInput("clipping".to_string()));
    }

    let mean = x.iter().sum::<f64>() / x.len() as f64;
    Ok(x.iter().map(|&value| u8::from(value > mean)).collect())
}

/// Encode the pairwise up/down direction of a series.
///
/// Bit i is 1 when `x[i] - x[i+1] < 0`, i.e. the series increases from i
/// to i+1; equal adjacent values map to 0. The output has one value per
/// adjacent pair, so its length is `x.len() - 1`.
pub fn trending(x: &[f64]) -> Result<BitSequence, ReprError> {
    if x.len() < 2 {
        return Err(ReprError::InsufficientLength(format!(
            "trending requires at least 2 observations, got {}",
            x.len()
        )));
    }

    Ok(x.windows(2)
        .map(|pair| u8::from(pair[0] - pair[1] < 0.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clipping_thresholds_on_global_mean() {
        // mean = 1.5
        let x = [1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 1.0, 1.0];
        let bits = clipping(&x).unwrap();

        assert_eq!(bits, vec![0, 0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_clipping_ties_map_to_zero() {
        let bits = clipping(&[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(bits, vec![0, 0, 0]);
    }

    #[test]
    fn test_clipping_single_element_is_zero() {
        let bits = clipping(&[42.0]).unwrap();
        assert_eq!(bits, vec![0]);
    }

    #[test]
    fn test_clipping_empty_is_an_error() {
        assert!(matches!(clipping(&[]), Err(ReprError::EmptyInput(_))));
    }

    #[test]
    fn test_trending_encodes_direction() {
        let bits = trending(&[1.0, 2.0, 2.0, 1.0]).unwrap();

        // up, flat, down
        assert_eq!(bits, vec![1, 0, 0]);
    }

    #[test]
    fn test_trending_length_is_one_less_than_input() {
        for n in 2..16 {
            let x: Vec<f64> = (0..n).map(|i| (i * i) as f64).collect();
            assert_eq!(trending(&x).unwrap().len(), n - 1);
        }
    }

    #[test]
    fn test_trending_rejects_short_series() {
        assert!(matches!(
            trending(&[1.0]),
            Err(ReprError::InsufficientLength(_))
        ));
        assert!(matches!(trending(&[]), Err(ReprError::InsufficientLength(_))));
    }
}
