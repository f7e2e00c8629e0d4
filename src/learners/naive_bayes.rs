//! Weighted Gaussian naive Bayes.
//!
//! Each class keeps a weighted prior and one Gaussian estimator per
//! attribute. Estimators use West's weighted variant of Welford's online
//! update, so an instance of weight `w` counts exactly like `w` copies of
//! itself and fractional weights need no special casing.

use crate::core::constants::MIN_GAUSSIAN_VARIANCE;
use crate::core::error::Result;
use crate::core::traits::{Instance, StreamingClassifier};
use crate::core::types::Vote;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Weighted running mean and variance of one attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedGaussian {
    weight_sum: f64,
    mean: f64,
    m2: f64,
}

impl WeightedGaussian {
    /// Create an empty estimator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` with `weight`. NaN values and non-positive weights are ignored.
    pub fn add(&mut self, value: f64, weight: f64) {
        if value.is_nan() || !(weight > 0.0) {
            return;
        }

        let new_sum = self.weight_sum + weight;
        let delta = value - self.mean;
        self.mean += delta * weight / new_sum;
        self.m2 += weight * delta * (value - self.mean);
        self.weight_sum = new_sum;
    }

    /// Total weight observed.
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    /// Weighted mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Weighted population variance.
    pub fn variance(&self) -> f64 {
        if self.weight_sum > 0.0 {
            (self.m2 / self.weight_sum).max(0.0)
        } else {
            0.0
        }
    }

    /// Log density of `value`, with the variance floored.
    pub fn log_density(&self, value: f64) -> f64 {
        let variance = self.variance().max(MIN_GAUSSIAN_VARIANCE);
        let diff = value - self.mean;
        -0.5 * ((2.0 * PI * variance).ln() + diff * diff / variance)
    }
}

/// Gaussian naive Bayes over numeric attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayes {
    class_weights: Vec<f64>,
    estimators: Vec<Vec<WeightedGaussian>>,
}

impl NaiveBayes {
    /// Create an untrained learner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated weight per class.
    pub fn class_weights(&self) -> &[f64] {
        &self.class_weights
    }

    /// Estimator of `attribute` for `class`, if trained.
    pub fn estimator(&self, class: usize, attribute: usize) -> Option<&WeightedGaussian> {
        self.estimators.get(class).and_then(|e| e.get(attribute))
    }

    fn ensure_class(&mut self, class: usize, num_classes: usize) {
        let len = num_classes.max(class + 1);
        if self.class_weights.len() < len {
            self.class_weights.resize(len, 0.0);
            self.estimators.resize_with(len, Vec::new);
        }
    }
}

impl StreamingClassifier for NaiveBayes {
    fn reset_learning(&mut self) {
        self.class_weights.clear();
        self.estimators.clear();
    }

    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()> {
        let weight = instance.weight();
        if !(weight > 0.0) {
            return Ok(());
        }

        let class = instance.class_value();
        self.ensure_class(class, instance.num_classes());
        self.class_weights[class] += weight;

        let estimators = &mut self.estimators[class];
        if estimators.len() < instance.num_attributes() {
            estimators.resize_with(instance.num_attributes(), WeightedGaussian::new);
        }
        for (attribute, estimator) in estimators.iter_mut().enumerate() {
            estimator.add(instance.value(attribute), weight);
        }
        Ok(())
    }

    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Vote>> {
        let len = self.class_weights.len().max(instance.num_classes());
        let mut votes = vec![0.0; len];

        let total: f64 = self.class_weights.iter().sum();
        if !(total > 0.0) {
            return Ok(votes);
        }

        let mut log_scores: Vec<Option<f64>> = vec![None; len];
        for (class, &class_weight) in self.class_weights.iter().enumerate() {
            if class_weight <= 0.0 {
                continue;
            }
            let mut score = (class_weight / total).ln();
            for (attribute, estimator) in self.estimators[class].iter().enumerate() {
                let value = instance.value(attribute);
                if !value.is_nan() && estimator.weight_sum() > 0.0 {
                    score += estimator.log_density(value);
                }
            }
            log_scores[class] = Some(score);
        }

        // Shift by the best score so the winner gets 1 and nothing underflows to all zeros
        let best = log_scores
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        for (vote, score) in votes.iter_mut().zip(&log_scores) {
            if let Some(score) = score {
                *vote = (score - best).exp();
            }
        }
        Ok(votes)
    }
}
