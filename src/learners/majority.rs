//! Weighted majority-class learner.

use crate::core::error::Result;
use crate::core::traits::{Instance, StreamingClassifier};
use crate::core::types::Vote;
use serde::{Deserialize, Serialize};

/// Votes with the accumulated weight of every class seen so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MajorityClass {
    class_weights: Vec<f64>,
}

impl MajorityClass {
    /// Create an untrained learner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated weight per class.
    pub fn class_weights(&self) -> &[f64] {
        &self.class_weights
    }
}

impl StreamingClassifier for MajorityClass {
    fn reset_learning(&mut self) {
        self.class_weights.clear();
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
        let weight = instance.weight();
        if !(weight > 0.0) {
            return Ok(());
        }

        let class = instance.class_value();
        if self.class_weights.len() <= class {
            self.class_weights.resize(instance.num_classes().max(class + 1), 0.0);
        }
        self.class_weights[class] += weight;
        Ok(())
    }

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Vote>> {
        let mut votes = self.class_weights.clone();
        if votes.len() < instance.num_classes() {
            votes.resize(instance.num_classes(), 0.0);
        }
        Ok(votes)
    }
}
