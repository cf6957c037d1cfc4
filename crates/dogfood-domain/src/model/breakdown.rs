use serde::{Deserialize, Serialize};

use dogfood_types::OrderConfig;

use super::DogCounts;

/// Intermediate quantities of one order calculation, all in lbs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderBreakdown {
    pub counts: DogCounts,
    /// Effective configuration after overrides were applied
    pub config: OrderConfig,
    /// Food the current census eats in one month
    pub monthly_need: f64,
    /// Need minus leftover; negative when inventory covers the month
    pub deficit: f64,
    /// Deficit with the over-order buffer applied, before rounding
    pub unrounded_order: f64,
    /// Final order, rounded to one decimal place
    pub pounds_to_order: f64,
}

impl OrderBreakdown {
    pub fn needs_order(&self) -> bool {
        self.pounds_to_order > 0.0
    }
}
