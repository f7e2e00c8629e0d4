//! Error handling and error types for Bayesian bagging.
//!
//! This module provides the crate-wide error enum and `Result` alias. The
//! algorithmic path itself does not fail; errors cover configuration,
//! use before reset, contract violations by the instance collaborator and
//! failures of the underlying Gamma sampler.

use std::io;
use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum BaggingError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The ensemble was used before `reset`
    #[error("Uninitialized ensemble: {operation} called before reset")]
    Uninitialized {
        /// Operation that was attempted
        operation: String,
    },

    /// Class index outside `[0, num_classes)`
    #[error("Class index out of range: class {class}, num_classes {num_classes}")]
    ClassOutOfRange {
        /// Offending class index
        class: usize,
        /// Number of classes the index must stay below
        num_classes: usize,
    },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected shape
        expected: String,
        /// Shape actually seen
        actual: String,
    },

    /// Failures of the random-sampling routine
    #[error("Sampling error: {message}")]
    Sampling {
        /// Message from the sampling routine
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("TOML error: {source}")]
    Toml {
        /// Underlying TOML error
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using BaggingError
pub type Result<T> = std::result::Result<T, BaggingError>;

impl BaggingError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        BaggingError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        BaggingError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an uninitialized-state error for the named operation
    pub fn uninitialized<S: Into<String>>(operation: S) -> Self {
        BaggingError::Uninitialized {
            operation: operation.into(),
        }
    }

    /// Create a class out of range error
    pub fn class_out_of_range(class: usize, num_classes: usize) -> Self {
        BaggingError::ClassOutOfRange { class, num_classes }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        BaggingError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a sampling error
    pub fn sampling<S: Into<String>>(message: S) -> Self {
        BaggingError::Sampling {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors leave the ensemble untouched, so the caller may
    /// skip the offending instance and keep streaming. An error raised by a
    /// base learner during training is passed through unchanged; by then the
    /// other models have been trained and the instance has been counted.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BaggingError::Config { .. } => false,
            BaggingError::InvalidParameter { .. } => false,
            BaggingError::Uninitialized { .. } => true,
            BaggingError::ClassOutOfRange { .. } => true,
            BaggingError::DimensionMismatch { .. } => true,
            BaggingError::Sampling { .. } => false,
            BaggingError::IO { .. } => false,
            BaggingError::Json { .. } => false,
            BaggingError::Toml { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            BaggingError::Config { .. } => "config",
            BaggingError::InvalidParameter { .. } => "invalid_parameter",
            BaggingError::Uninitialized { .. } => "uninitialized",
            BaggingError::ClassOutOfRange { .. } => "class_out_of_range",
            BaggingError::DimensionMismatch { .. } => "dimension_mismatch",
            BaggingError::Sampling { .. } => "sampling",
            BaggingError::IO { .. } => "io",
            BaggingError::Json { .. } => "json",
            BaggingError::Toml { .. } => "toml",
        }
    }
}

impl From<rand_distr::GammaError> for BaggingError {
    fn from(err: rand_distr::GammaError) -> Self {
        BaggingError::sampling(err.to_string())
    }
}

/// Build a [`BaggingError::Config`] from a message or a format string.
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::BaggingError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::BaggingError::config(format!($fmt, $($arg)*))
    };
}

/// Return early with `$err` (converted with `Into`) unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
