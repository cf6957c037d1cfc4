//! Validated shelter census

use serde::{Deserialize, Serialize};

/// Number of dogs per size class, each already checked against capacity.
///
/// Counts are whole numbers held as `f64`, the same type as the capacity
/// they were checked against, so any count a capacity admits is exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DogCounts {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl DogCounts {
    pub fn new(small: f64, medium: f64, large: f64) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    pub fn total(&self) -> f64 {
        self.small + self.medium + self.large
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0.0
    }
}
