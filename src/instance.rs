//! Dense labeled instances and weighted-copy construction.
//!
//! [`DenseInstance`] is the crate's concrete [`Instance`]: an owned feature
//! vector plus class index, class cardinality and weight. Parsing records
//! from files is left to the caller.

use crate::core::error::{BaggingError, Result};
use crate::core::traits::Instance;
use crate::core::types::{ClassIndex, Weight};
use serde::{Deserialize, Serialize};

/// An owned, dense, labeled instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseInstance {
    values: Vec<f64>,
    class_value: ClassIndex,
    num_classes: usize,
    weight: Weight,
}

impl DenseInstance {
    /// Create a unit-weight instance.
    ///
    /// Fails if `class_value` is not in `[0, num_classes)`.
    pub fn new(values: Vec<f64>, class_value: ClassIndex, num_classes: usize) -> Result<Self> {
        if class_value >= num_classes {
            return Err(BaggingError::class_out_of_range(class_value, num_classes));
        }

        Ok(DenseInstance {
            values,
            class_value,
            num_classes,
            weight: 1.0,
        })
    }

    /// Builder-style weight setter.
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Feature values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Instance for DenseInstance {
    fn class_value(&self) -> ClassIndex {
        self.class_value
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn weight(&self) -> Weight {
        self.weight
    }

    fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    fn num_attributes(&self) -> usize {
        self.values.len()
    }

    fn value(&self, index: usize) -> f64 {
        self.values.get(index).copied().unwrap_or(f64::NAN)
    }

    fn copy(&self) -> Box<dyn Instance> {
        Box::new(self.clone())
    }
}

/// Value-identical copy of `instance` carrying `weight`.
///
/// The copy owns its data, so whatever the receiving model does to it never
/// reaches the original record or another model's copy.
pub fn weighted_copy(instance: &dyn Instance, weight: Weight) -> Box<dyn Instance> {
    let mut copy = instance.copy();
    copy.set_weight(weight);
    copy
}
