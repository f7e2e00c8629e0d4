//! Core data types for Bayesian bagging.
//!
//! This module defines the small value types shared by configuration, the
//! weight samplers and the ensemble: type aliases for indices and counts,
//! the closed sets of sampler and base-learner variants, and the
//! measurement record reported to external collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class index type, the position of a class in a vote vector.
pub type ClassIndex = usize;

/// Running count type used by the class statistics.
pub type Count = u64;

/// Per-class score produced by a model for one instance.
pub type Vote = f64;

/// Sample weight type.
pub type Weight = f64;

/// Weight sampling strategy chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    /// Gamma parameters adapt to the observed class frequencies
    Adaptive,
    /// One fixed Gamma(num_classes, 1) distribution for every draw
    ClassCount,
}

impl Default for SamplerKind {
    fn default() -> Self {
        SamplerKind::Adaptive
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerKind::Adaptive => write!(f, "adaptive"),
            SamplerKind::ClassCount => write!(f, "class_count"),
        }
    }
}

impl FromStr for SamplerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adaptive" => Ok(SamplerKind::Adaptive),
            "class_count" | "classcount" | "k" => Ok(SamplerKind::ClassCount),
            other => Err(format!("unknown sampler: {}", other)),
        }
    }
}

/// Base learner used as the ensemble template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseLearnerKind {
    /// Weighted Gaussian naive Bayes
    NaiveBayes,
    /// Weighted majority class
    MajorityClass,
}

impl Default for BaseLearnerKind {
    fn default() -> Self {
        BaseLearnerKind::NaiveBayes
    }
}

impl fmt::Display for BaseLearnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseLearnerKind::NaiveBayes => write!(f, "naive_bayes"),
            BaseLearnerKind::MajorityClass => write!(f, "majority_class"),
        }
    }
}

impl FromStr for BaseLearnerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive_bayes" | "naivebayes" => Ok(BaseLearnerKind::NaiveBayes),
            "majority_class" | "majorityclass" => Ok(BaseLearnerKind::MajorityClass),
            other => Err(format!("unknown base learner: {}", other)),
        }
    }
}

/// A named numeric measurement exposed to reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Measurement name
    pub name: String,
    /// Measurement value
    pub value: f64,
}

impl Measurement {
    /// Create a new measurement
    pub fn new<S: Into<String>>(name: S, value: f64) -> Self {
        Measurement {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
