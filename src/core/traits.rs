//! Core trait definitions for Bayesian bagging.
//!
//! Two capabilities cross the crate boundary: [`Instance`], the labeled
//! record the stream delivers, and [`StreamingClassifier`], the minimal
//! contract an ensembled model satisfies. The ensemble never inspects a
//! model's concrete type; it only resets, copies, trains and polls it.

use crate::core::error::Result;
use crate::core::types::{ClassIndex, Vote, Weight};
use std::fmt::Debug;

/// A labeled, weighted record from the stream.
pub trait Instance: Debug {
    /// Class index of this instance.
    fn class_value(&self) -> ClassIndex;

    /// Number of classes in the stream's class attribute.
    fn num_classes(&self) -> usize;

    /// Current weight of this instance.
    fn weight(&self) -> Weight;

    /// Replace the weight of this instance.
    fn set_weight(&mut self, weight: Weight);

    /// Number of input attributes (the class is not counted).
    fn num_attributes(&self) -> usize;

    /// Value of the input attribute at `index`.
    fn value(&self, index: usize) -> f64;

    /// Independent deep copy of this instance.
    fn copy(&self) -> Box<dyn Instance>;
}

impl Clone for Box<dyn Instance> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Minimal capability set of an online classifier.
///
/// `Clone` is the copy capability: a clone must carry identical
/// configuration and learned state and share nothing with the original.
pub trait StreamingClassifier: Clone + Debug {
    /// Discard everything learned so far.
    fn reset_learning(&mut self);

    /// Learn from one (possibly weighted) instance.
    fn train_on_instance(&mut self, instance: &dyn Instance) -> Result<()>;

    /// Per-class scores for `instance`.
    ///
    /// An all-zero (or empty) vector means the model abstains.
    fn votes_for_instance(&self, instance: &dyn Instance) -> Result<Vec<Vote>>;

    /// Whether the model consumes randomness and needs a seed for determinism.
    fn is_randomizable(&self) -> bool {
        false
    }
}

/// Index of the largest vote, `None` if the vector is empty or all zero.
pub fn max_vote_index(votes: &[Vote]) -> Option<ClassIndex> {
    let mut best: Option<(ClassIndex, Vote)> = None;
    for (index, &vote) in votes.iter().enumerate() {
        match best {
            Some((_, best_vote)) if vote <= best_vote => {}
            _ => best = Some((index, vote)),
        }
    }
    best.filter(|&(_, vote)| vote > 0.0).map(|(index, _)| index)
}
