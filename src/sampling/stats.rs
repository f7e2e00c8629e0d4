//! Running per-class statistics with a Laplace floor.

use crate::core::constants::LAPLACE_PRIOR;
use crate::core::error::{BaggingError, Result};
use crate::core::types::{ClassIndex, Count};
use serde::{Deserialize, Serialize};

/// Per-class frequency counters plus a total-instance counter.
///
/// Every counter starts at the Laplace pseudo-count, so no frequency is
/// ever zero, even for classes the stream has not produced yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningClassStats {
    frequencies: Vec<Count>,
    total: Count,
}

impl RunningClassStats {
    /// Fresh statistics for `num_classes` classes.
    pub fn new(num_classes: usize) -> Self {
        RunningClassStats {
            frequencies: vec![LAPLACE_PRIOR; num_classes],
            total: LAPLACE_PRIOR,
        }
    }

    /// Number of classes tracked.
    pub fn num_classes(&self) -> usize {
        self.frequencies.len()
    }

    /// Smoothed frequency of `class`, `None` if out of range.
    pub fn frequency(&self, class: ClassIndex) -> Option<Count> {
        self.frequencies.get(class).copied()
    }

    /// All smoothed class frequencies.
    pub fn frequencies(&self) -> &[Count] {
        &self.frequencies
    }

    /// Smoothed instance total.
    pub fn total(&self) -> Count {
        self.total
    }

    /// Number of instances actually observed (total minus the prior).
    pub fn observed(&self) -> Count {
        self.total - LAPLACE_PRIOR
    }

    /// Count one observation of `class`.
    pub fn record(&mut self, class: ClassIndex) -> Result<()> {
        let num_classes = self.num_classes();
        let frequency = self
            .frequencies
            .get_mut(class)
            .ok_or_else(|| BaggingError::class_out_of_range(class, num_classes))?;

        *frequency += 1;
        self.total += 1;
        Ok(())
    }
}
