//! Monthly reorder calculation
//!
//! order = (need - leftover) x (100 + over_order_percent) / 100, rounded to
//! the nearest tenth of a lb, or 0 when the leftover covers the month.

use tracing::debug;

use dogfood_types::{ConfigOverrides, Field, OrderConfig, OrderError};

use super::rounding::round_to_tenth;
use super::validation::{
    require, validate_consumption_rates, validate_dog_count, validate_leftover,
    validate_max_dogs, validate_over_order_percent, validate_total,
};
use crate::model::{DogCounts, OrderBreakdown, OrderRequest};

/// Calculate lbs of food to order for next month.
///
/// # Arguments
/// * `small`, `medium`, `large` - # dogs of each size currently in the shelter
/// * `leftover_lbs` - lbs of food remaining
/// * `overrides` - replacements for individual [`OrderConfig`] defaults
///
/// # Returns
/// * `Ok(lbs)` - non-negative order rounded to one decimal place
/// * `Err(OrderError)` - the first invalid input
pub fn compute_order(
    small: Option<f64>,
    medium: Option<f64>,
    large: Option<f64>,
    leftover_lbs: Option<f64>,
    overrides: Option<&ConfigOverrides>,
) -> Result<f64, OrderError> {
    let request = OrderRequest {
        small,
        medium,
        large,
        leftover_lbs,
        config: overrides.copied(),
    };
    compute_order_breakdown(&request).map(|b| b.pounds_to_order)
}

/// Same as [`compute_order`] but keeps the intermediate quantities.
#[tracing::instrument(level = "debug", skip(request))]
pub fn compute_order_breakdown(request: &OrderRequest) -> Result<OrderBreakdown, OrderError> {
    let config = OrderConfig::resolve(request.config.as_ref());
    let (counts, leftover_lbs) = validate_request(request, &config).map_err(|err| {
        debug!(error = %err, "order request rejected");
        err
    })?;

    let monthly_need = counts.small * config.consumption_small
        + counts.medium * config.consumption_medium
        + counts.large * config.consumption_large;
    if !monthly_need.is_finite() {
        debug!(total_dogs = counts.total(), "monthly need overflowed");
        return Err(OrderError::OrderOverflow);
    }
    let deficit = monthly_need - leftover_lbs;

    let (unrounded_order, pounds_to_order) = if deficit <= 0.0 {
        (0.0, 0.0)
    } else {
        let order = deficit * ((100.0 + config.over_order_percent) / 100.0);
        if !order.is_finite() {
            debug!(monthly_need, deficit, "order quantity overflowed");
            return Err(OrderError::OrderOverflow);
        }
        (order, round_to_tenth(order))
    };

    debug!(
        monthly_need,
        deficit,
        pounds_to_order,
        total_dogs = counts.total(),
        "order computed"
    );

    Ok(OrderBreakdown {
        counts,
        config,
        monthly_need,
        deficit,
        unrounded_order,
        pounds_to_order,
    })
}

fn validate_request(
    request: &OrderRequest,
    config: &OrderConfig,
) -> Result<(DogCounts, f64), OrderError> {
    let small = require(Field::SmallDogs, request.small)?;
    let medium = require(Field::MediumDogs, request.medium)?;
    let large = require(Field::LargeDogs, request.large)?;
    let leftover_lbs = require(Field::LeftoverLbs, request.leftover_lbs)?;

    let max_dogs = validate_max_dogs(config.max_dogs)?;

    let counts = DogCounts {
        small: validate_dog_count(Field::SmallDogs, small, max_dogs)?,
        medium: validate_dog_count(Field::MediumDogs, medium, max_dogs)?,
        large: validate_dog_count(Field::LargeDogs, large, max_dogs)?,
    };
    validate_total(&counts, max_dogs)?;

    let leftover_lbs = validate_leftover(leftover_lbs)?;
    validate_consumption_rates(config)?;
    validate_over_order_percent(config.over_order_percent)?;

    Ok((counts, leftover_lbs))
}
