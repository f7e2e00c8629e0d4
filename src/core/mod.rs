//! Core infrastructure module for Bayesian bagging.
//!
//! This module provides the foundational components shared by the rest of
//! the crate: fundamental data types, default constants, error handling and
//! the capability traits that instances and base learners implement.
//!
//! # Organization
//!
//! - [`types`]: Fundamental data types and enumerations
//! - [`constants`]: Defaults and named constants
//! - [`error`]: Error types and the crate `Result`
//! - [`traits`]: The `Instance` and `StreamingClassifier` capabilities
//!
//! # Usage
//!
//! ```rust
//! use bayesian_bagging::core::{
//!     constants::DEFAULT_ENSEMBLE_SIZE,
//!     error::{BaggingError, Result},
//!     types::SamplerKind,
//! };
//!
//! let size = DEFAULT_ENSEMBLE_SIZE;
//! let sampler = SamplerKind::default();
//! assert_eq!(size, 10);
//! assert_eq!(sampler, SamplerKind::Adaptive);
//! # let _: Result<()> = Err(BaggingError::config("unused"));
//! ```

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{BaggingError, Result};
pub use traits::*;
pub use types::*;

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the `env_logger` backend for the `log` facade.
///
/// Defaults `RUST_LOG` to `info` when unset. Safe to call repeatedly; a
/// logger installed elsewhere is left in place.
pub fn initialize_logging() {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    // Another logger may already be installed by the host application
    let _ = env_logger::try_init();
    log::debug!("bayesian-bagging {} logging initialized", BAYESIAN_BAGGING_VERSION);
}

/// Check whether [`initialize_logging`] has run.
pub fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}
