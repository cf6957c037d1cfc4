//! Order request type definitions

use serde::{Deserialize, Serialize};

use dogfood_types::{ConfigOverrides, OrderError};

use super::OrderBreakdown;
use crate::service::order_calculator;

/// Raw inputs of one order calculation.
///
/// Every positional value is optional so that an absent input is reported
/// as missing rather than read as zero. Values are not checked until the
/// request is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderRequest {
    /// # small dogs currently in the shelter
    #[serde(default, alias = "smallCount", alias = "nSmallDogs")]
    pub small: Option<f64>,

    /// # medium dogs currently in the shelter
    #[serde(default, alias = "mediumCount", alias = "nMediumDogs")]
    pub medium: Option<f64>,

    /// # large dogs currently in the shelter
    #[serde(default, alias = "largeCount", alias = "nLargeDogs")]
    pub large: Option<f64>,

    /// lbs of food left over
    #[serde(default, alias = "leftoverLbs", alias = "lbsLeftover")]
    pub leftover_lbs: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "options")]
    pub config: Option<ConfigOverrides>,
}

impl OrderRequest {
    pub fn new(small: f64, medium: f64, large: f64, leftover_lbs: f64) -> Self {
        Self {
            small: Some(small),
            medium: Some(medium),
            large: Some(large),
            leftover_lbs: Some(leftover_lbs),
            config: None,
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.config = Some(overrides);
        self
    }

    /// Validate and return the lbs to order
    pub fn compute(&self) -> Result<f64, OrderError> {
        self.breakdown().map(|b| b.pounds_to_order)
    }

    pub fn breakdown(&self) -> Result<OrderBreakdown, OrderError> {
        order_calculator::compute_order_breakdown(self)
    }
}
