//! Pipeline orchestration
//!
//! This module provides the configuration-driven entry point for tsrep:
//! a declarative [`Method`] selects a representation, and [`represent`]
//! runs it over a series.

use serde::{Deserialize, Serialize};

use crate::aggregates::Aggregate;
use crate::error::ReprError;
use crate::features::{feaclip, feacliptrend, featrend};
use crate::piecewise::{paa, seasonal_profile};
use crate::smoothing::sma;
use crate::types::{TrendOptions, DEFAULT_ORDER, DEFAULT_PIECES};

fn default_pieces() -> usize {
    DEFAULT_PIECES
}

fn default_order() -> usize {
    DEFAULT_ORDER
}

/// Representation method selection.
///
/// Serializable so batch drivers can pick methods from declarative
/// configuration; omitted fields fall back to the documented defaults
/// (sum aggregation, 2 pieces, smoothing order 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    FeaClip,
    FeaTrend {
        #[serde(default)]
        aggregate: Aggregate,
        #[serde(default = "default_pieces")]
        pieces: usize,
        #[serde(default = "default_order")]
        order: usize,
    },
    FeaClipTrend {
        #[serde(default)]
        aggregate: Aggregate,
        #[serde(default = "default_pieces")]
        pieces: usize,
        #[serde(default = "default_order")]
        order: usize,
    },
    Paa {
        q: usize,
        #[serde(default)]
        aggregate: Aggregate,
    },
    SeasonalProfile {
        freq: usize,
        #[serde(default)]
        aggregate: Aggregate,
    },
    Sma {
        order: usize,
    },
}

impl Method {
    /// Parse a method selection from its JSON configuration form
    pub fn from_json(json: &str) -> Result<Self, ReprError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Compute the selected representation of a series.
pub fn represent(x: &[f64], method: &Method) -> Result<Vec<f64>, ReprError> {
    match *method {
        Method::FeaClip => Ok(feaclip(x)?.to_vec()),
        Method::FeaTrend {
            aggregate,
            pieces,
            order,
        } => featrend(x, |v| aggregate.apply(v), TrendOptions { pieces, order }),
        Method::FeaClipTrend {
            aggregate,
            pieces,
            order,
        } => feacliptrend(x, |v| aggregate.apply(v), TrendOptions { pieces, order }),
        Method::Paa { q, aggregate } => paa(x, q, |v| aggregate.apply(v)),
        Method::SeasonalProfile { freq, aggregate } => {
            seasonal_profile(x, freq, |v| aggregate.apply(v))
        }
        Method::Sma { order } => sma(x, order),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::max;
    use pretty_assertions::assert_eq;

    fn make_test_series() -> Vec<f64> {
        (0..24).map(|i| ((i * 13) % 7) as f64).collect()
    }

    #[test]
    fn test_represent_feaclip_matches_direct_call() {
        let x = make_test_series();

        let via_method = represent(&x, &Method::FeaClip).unwrap();
        let direct = feaclip(&x).unwrap();

        assert_eq!(via_method, direct.to_vec());
    }

    #[test]
    fn test_represent_featrend_matches_direct_call() {
        let x = make_test_series();
        let method = Method::FeaTrend {
            aggregate: Aggregate::Max,
            pieces: 2,
            order: 4,
        };

        let via_method = represent(&x, &method).unwrap();
        let direct = featrend(&x, max, TrendOptions::default()).unwrap();

        assert_eq!(via_method, direct);
    }

    #[test]
    fn test_represent_output_lengths() {
        let x = make_test_series();

        assert_eq!(represent(&x, &Method::FeaClip).unwrap().len(), 8);
        assert_eq!(
            represent(
                &x,
                &Method::FeaClipTrend {
                    aggregate: Aggregate::Sum,
                    pieces: 3,
                    order: 2,
                }
            )
            .unwrap()
            .len(),
            8 + 2 * 3
        );
        assert_eq!(
            represent(&x, &Method::Paa { q: 5, aggregate: Aggregate::Mean })
                .unwrap()
                .len(),
            5
        );
        assert_eq!(
            represent(
                &x,
                &Method::SeasonalProfile { freq: 6, aggregate: Aggregate::Mean }
            )
            .unwrap()
            .len(),
            6
        );
        assert_eq!(represent(&x, &Method::Sma { order: 4 }).unwrap().len(), 20);
    }

    #[test]
    fn test_method_from_json_with_defaults() {
        let method = Method::from_json(r#"{"method": "fea_trend", "aggregate": "max"}"#).unwrap();

        assert_eq!(
            method,
            Method::FeaTrend {
                aggregate: Aggregate::Max,
                pieces: 2,
                order: 4,
            }
        );
    }

    #[test]
    fn test_method_from_json_full_configuration() {
        let method = Method::from_json(
            r#"{"method": "seasonal_profile", "freq": 48, "aggregate": "median"}"#,
        )
        .unwrap();

        assert_eq!(
            method,
            Method::SeasonalProfile {
                freq: 48,
                aggregate: Aggregate::Median,
            }
        );
    }

    #[test]
    fn test_method_from_json_rejects_unknown_method() {
        let result = Method::from_json(r#"{"method": "fourier"}"#);
        assert!(matches!(result, Err(ReprError::ConfigError(_))));
    }

    #[test]
    fn test_method_from_json_rejects_malformed_json() {
        assert!(Method::from_json("not valid json").is_err());
    }

    #[test]
    fn test_represent_is_deterministic() {
        let x = make_test_series();
        let method = Method::FeaClipTrend {
            aggregate: Aggregate::Median,
            pieces: 2,
            order: 4,
        };

        let first = represent(&x, &method).unwrap();
        let second = represent(&x, &method).unwrap();

        assert_eq!(first, second);
    }
}
