//! System constants and default configuration values for Bayesian bagging.
//!
//! This module defines the defaults that control ensemble construction,
//! weight sampling and the Laplace prior used by the running class
//! statistics.

/// Default number of models in the bag.
pub const DEFAULT_ENSEMBLE_SIZE: usize = 10;

/// Default random seed.
/// Matches the classifier seed used by stream-learning frameworks.
pub const DEFAULT_RANDOM_SEED: u64 = 1;

/// Default tuning constant `k` of the frequency-adaptive sampler.
/// Any positive value keeps the sampled weight unbiased; larger values shrink the variance.
pub const DEFAULT_ADAPTIVE_K: f64 = 1.0;

/// Laplace pseudo-count every class frequency and the instance total start from.
pub const LAPLACE_PRIOR: u64 = 1;

/// Shape of the fallback Gamma distribution used for degenerate parameters.
pub const FALLBACK_GAMMA_SHAPE: f64 = 1.0;

/// Scale of the fallback Gamma distribution used for degenerate parameters.
pub const FALLBACK_GAMMA_SCALE: f64 = 1.0;

/// Scale of the fixed class-count Gamma distribution.
pub const CLASS_COUNT_GAMMA_SCALE: f64 = 1.0;

/// Smallest variance the naive Bayes learner will use for a Gaussian estimator.
pub const MIN_GAUSSIAN_VARIANCE: f64 = 1e-9;

/// Name under which the ensemble size is reported.
pub const ENSEMBLE_SIZE_MEASUREMENT: &str = "ensemble size";

/// Log target for verbose per-draw diagnostics.
pub const DIAGNOSTICS_TARGET: &str = "bayesian_bagging::diagnostics";

/// Version information.
pub const BAYESIAN_BAGGING_VERSION: &str = env!("CARGO_PKG_VERSION");
