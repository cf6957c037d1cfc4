//! Input checks for the order calculator
//!
//! Each check reports the first problem it finds. The calculator runs them
//! in a fixed order so the same bad request always yields the same error.

use dogfood_types::{
    Field, OrderConfig, OrderError, MIN_CONSUMPTION_LARGE, MIN_CONSUMPTION_MEDIUM,
    MIN_CONSUMPTION_SMALL,
};

use crate::model::DogCounts;

pub(crate) fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

pub fn require(field: Field, value: Option<f64>) -> Result<f64, OrderError> {
    value.ok_or(OrderError::Missing { field })
}

pub fn validate_max_dogs(max_dogs: f64) -> Result<f64, OrderError> {
    if !is_integer(max_dogs) {
        return Err(OrderError::NotInteger {
            field: Field::MaxDogs,
        });
    }
    if max_dogs <= 0.0 {
        return Err(OrderError::NotPositive {
            field: Field::MaxDogs,
        });
    }
    Ok(max_dogs)
}

pub fn validate_dog_count(field: Field, count: f64, max_dogs: f64) -> Result<f64, OrderError> {
    if !is_integer(count) {
        return Err(OrderError::NotInteger { field });
    }
    if count < 0.0 || count > max_dogs {
        return Err(OrderError::OutOfRange {
            field,
            min: 0.0,
            max: max_dogs,
        });
    }
    // drop the sign of a negative zero
    Ok(count + 0.0)
}

pub fn validate_total(counts: &DogCounts, max_dogs: f64) -> Result<(), OrderError> {
    let total = counts.total();
    if total > max_dogs {
        return Err(OrderError::TotalExceedsMax {
            total,
            max: max_dogs,
        });
    }
    Ok(())
}

/// An infinite leftover is accepted; it covers any need.
pub fn validate_leftover(leftover_lbs: f64) -> Result<f64, OrderError> {
    let field = Field::LeftoverLbs;
    if leftover_lbs.is_nan() {
        return Err(OrderError::NotANumber { field });
    }
    if leftover_lbs < 0.0 {
        return Err(OrderError::BelowMinimum { field, min: 0.0 });
    }
    Ok(leftover_lbs)
}

fn validate_lbs(field: Field, lbs: f64, min: f64) -> Result<f64, OrderError> {
    if !lbs.is_finite() {
        return Err(OrderError::NotFinite { field });
    }
    if lbs < min {
        return Err(OrderError::BelowMinimum { field, min });
    }
    Ok(lbs)
}

pub fn validate_consumption_rates(config: &OrderConfig) -> Result<(), OrderError> {
    validate_lbs(
        Field::ConsumptionSmall,
        config.consumption_small,
        MIN_CONSUMPTION_SMALL,
    )?;
    validate_lbs(
        Field::ConsumptionMedium,
        config.consumption_medium,
        MIN_CONSUMPTION_MEDIUM,
    )?;
    validate_lbs(
        Field::ConsumptionLarge,
        config.consumption_large,
        MIN_CONSUMPTION_LARGE,
    )?;
    Ok(())
}

pub fn validate_over_order_percent(percent: f64) -> Result<f64, OrderError> {
    let field = Field::OverOrderPercent;
    if !is_integer(percent) {
        return Err(OrderError::NotInteger { field });
    }
    if !(0.0..=100.0).contains(&percent) {
        return Err(OrderError::OutOfRange {
            field,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(percent)
}

/// Check a merged configuration on its own: capacity, consumption rates,
/// then over-order percent.
pub fn validate_config(config: &OrderConfig) -> Result<(), OrderError> {
    validate_max_dogs(config.max_dogs)?;
    validate_consumption_rates(config)?;
    validate_over_order_percent(config.over_order_percent)?;
    Ok(())
}
