//! Base learners that can serve as the ensemble template.
//!
//! The ensemble works with any [`StreamingClassifier`]; the learners here
//! are the ones selectable from configuration through [`BaseLearnerKind`].

pub mod majority;
pub mod naive_bayes;

pub use majority::MajorityClass;
pub use naive_bayes::{NaiveBayes, WeightedGaussian};

use crate::core::error::Result;
use crate::core::traits::{Instance, StreamingClassifier};
use crate::core::types::{BaseLearnerKind, Vote};
use serde::{Deserialize, Serialize};

/// A configured base learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BaseLearner {
    /// Weighted Gaussian naive Bayes
    NaiveBayes(NaiveBayes),
    /// Weighted majority class
    MajorityClass(MajorityClass),
}

impl BaseLearner {
    /// Untrained learner of the given kind.
    pub fn from_kind(kind: BaseLearnerKind) -> Self {
        match kind {
            BaseLearnerKind::NaiveBayes => BaseLearner::NaiveBayes(NaiveBayes::new()),
            BaseLearnerKind::MajorityClass => BaseLearner::MajorityClass(MajorityClass::new()),
        }
    }

    /// Kind of this learner.
    pub fn kind(&self) -> BaseLearnerKind {
        match self {
            BaseLearner::NaiveBayes(_) => BaseLearnerKind::NaiveBayes,
            BaseLearner::MajorityClass(_) => BaseLearnerKind::MajorityClass,
        }
    }
}

impl Default for BaseLearner {
    fn default() -> Self {
        Self::from_kind(BaseLearnerKind::default())
    }
}

impl StreamingClassifier for BaseLearner {
    fn reset_learning(&mut self) {
        match self {
            BaseLearner::NaiveBayes(learner) => learner.reset_learning(),
            BaseLearner::MajorityClass(learner) => learner.reset_learning(),
        }
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
        match self {
            BaseLearner::NaiveBayes(learner) => learner.train_on_instance(instance),
            BaseLearner::MajorityClass(learner) => learner.train_on_instance(instance),
        }
    }

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Vote>> {
        match self {
            BaseLearner::NaiveBayes(learner) => learner.votes_for_instance(instance),
            BaseLearner::MajorityClass(learner) => learner.votes_for_instance(instance),
        }
    }
}
