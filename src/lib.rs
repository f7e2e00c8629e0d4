//! # Bayesian Bagging
//!
//! Online Bayesian bagging for streaming classification.
//!
//! An ensemble of base learners is trained on a stream that is read once.
//! Instead of bootstrap resampling, every model sees every labeled instance
//! with its own random weight drawn from a Gamma distribution. The default
//! sampler adapts that distribution to how often the instance's class has
//! been seen: rare classes get weights with the same mean but a larger
//! spread, so the ensemble diversifies most where the data is thinnest.
//!
//! ## Features
//!
//! - **Adaptive weights**: Gamma(k·f/n, n/(k·f)) with Laplace-smoothed class
//!   counts, or a fixed Gamma(numClasses, 1).
//! - **Reproducible**: one master seed fixes every weight of every model.
//! - **Pluggable learners**: any [`StreamingClassifier`] can be the template;
//!   weighted Gaussian naive Bayes and a majority-class learner ship with
//!   the crate.
//! - **Configuration**: builder, `.json`/`.toml` files and `BAYESBAG_*`
//!   environment variables.
//!
//! ## Quick Start
//!
//! ```rust
//! use bayesian_bagging::{BayesianBagging, ConfigBuilder, DenseInstance};
//!
//! # fn main() -> bayesian_bagging::Result<()> {
//! let config = ConfigBuilder::new().ensemble_size(10).random_seed(1).build()?;
//! let mut bag = BayesianBagging::from_config(config)?;
//!
//! let stream = [(vec![0.1, 0.2], 0), (vec![2.0, 1.9], 1), (vec![0.0, 0.3], 0)];
//! for (values, class) in stream {
//!     bag.train_on_instance(&DenseInstance::new(values, class, 2)?)?;
//! }
//!
//! let probe = DenseInstance::new(vec![0.05, 0.25], 0, 2)?;
//! println!("votes: {:?}", bag.votes_for_instance(&probe)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//!
//! Logging goes through the `log` facade. Call [`init`] to install
//! `env_logger`, then run with `verbose = true` and
//! `RUST_LOG=bayesian_bagging::diagnostics=info` to see every weight draw.

#![doc(html_root_url = "https://docs.rs/bayesian-bagging/")]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure: types, constants, errors, traits
pub mod core;

// Configuration management
pub mod config;

// Labeled instances
pub mod instance;

// Class statistics, weight samplers and seeding
pub mod sampling;

// Base learners
pub mod learners;

// The ensemble itself
pub mod ensemble;

pub use self::core::{
    constants::*,
    error::{BaggingError, Result},
    traits::{max_vote_index, Instance, StreamingClassifier},
    types::{BaseLearnerKind, ClassIndex, Count, Measurement, SamplerKind, Vote, Weight},
};

pub use config::{BaggingConfig, ConfigBuilder, ConfigSource};

pub use instance::{weighted_copy, DenseInstance};

pub use sampling::{
    draw_weight, AdaptiveSampler, ClassCountSampler, GammaParams, RunningClassStats, SeedStream,
    WeightSampler,
};

pub use learners::{BaseLearner, MajorityClass, NaiveBayes};

pub use ensemble::{combine_votes, BayesianBagging};

pub use self::core::constants::BAYESIAN_BAGGING_VERSION as VERSION;

/// Initialize the library.
///
/// Installs the logging backend. Calling it is optional; without it log
/// records are simply dropped.
///
/// # Examples
///
/// ```rust
/// fn main() -> bayesian_bagging::Result<()> {
///     bayesian_bagging::init()?;
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    self::core::initialize_logging();
    Ok(())
}

/// Check if [`init`] has run.
pub fn is_initialized() -> bool {
    self::core::is_logging_initialized()
}
