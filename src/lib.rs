//! tsrep - feature-based time series representations
//!
//! tsrep converts a raw numeric time series into a compact fixed-length
//! feature vector through a deterministic pipeline: (optional) smoothing →
//! bit-level encoding → run-length encoding → feature extraction.
//!
//! ## Representations
//!
//! - **FeaClip / FeaTrend / FeaClipTrend**: run-length statistics of the
//!   clipped (mean-thresholded) and trend-encoded series
//! - **PAA, seasonal profile, moving average**: windowed aggregation
//!   reductions
//!
//! Every computation is pure and call-local: identical inputs yield
//! bit-identical outputs, and nothing is cached across calls.

pub mod aggregates;
pub mod encoder;
pub mod error;
pub mod features;
pub mod piecewise;
pub mod pipeline;
pub mod rle;
pub mod smoothing;
pub mod types;

pub use aggregates::Aggregate;
pub use encoder::{clipping, trending};
pub use error::ReprError;
pub use features::{feaclip, feacliptrend, featrend, FEACLIP_LEN};
pub use piecewise::{paa, seasonal_profile};
pub use pipeline::{represent, Method};
pub use smoothing::sma;
pub use types::{BitSequence, Run, RunList, TrendOptions};
