//! Order quantities for known shelter situations

use dogfood_domain::{compute_order, ConfigOverrides, OrderError};

fn order(small: f64, medium: f64, large: f64, leftover: f64) -> Result<f64, OrderError> {
    compute_order(Some(small), Some(medium), Some(large), Some(leftover), None)
}

fn order_with(
    small: f64,
    medium: f64,
    large: f64,
    leftover: f64,
    overrides: ConfigOverrides,
) -> Result<f64, OrderError> {
    compute_order(
        Some(small),
        Some(medium),
        Some(large),
        Some(leftover),
        Some(&overrides),
    )
}

// ==========================================
// Normal cases
// ==========================================

#[test]
fn test_mixed_census() {
    assert_eq!(order(5.0, 3.0, 7.0, 17.0), Ok(363.6));
}

#[test]
fn test_equal_census() {
    assert_eq!(order(7.0, 7.0, 7.0, 50.0), Ok(444.0));
}

// ==========================================
// Edge cases - Nothing to order
// ==========================================

#[test]
fn test_no_dogs() {
    assert_eq!(order(0.0, 0.0, 0.0, 0.0), Ok(0.0));
}

#[test]
fn test_no_dogs_with_leftover() {
    assert_eq!(order(0.0, 0.0, 0.0, 100.0), Ok(0.0));
}

#[test]
fn test_leftover_exceeds_need() {
    assert_eq!(order(1.0, 1.0, 1.0, 100.0), Ok(0.0));
}

// ==========================================
// Edge cases - Single size class
// ==========================================

#[test]
fn test_only_small() {
    assert_eq!(order(10.0, 0.0, 0.0, 0.0), Ok(120.0));
}

#[test]
fn test_only_medium() {
    assert_eq!(order(0.0, 10.0, 0.0, 0.0), Ok(240.0));
}

#[test]
fn test_only_large() {
    assert_eq!(order(0.0, 0.0, 10.0, 0.0), Ok(360.0));
}

#[test]
fn test_full_shelter_small() {
    assert_eq!(order(30.0, 0.0, 0.0, 0.0), Ok(360.0));
}

#[test]
fn test_full_shelter_medium() {
    assert_eq!(order(0.0, 30.0, 0.0, 0.0), Ok(720.0));
}

#[test]
fn test_full_shelter_large() {
    assert_eq!(order(0.0, 0.0, 30.0, 0.0), Ok(1080.0));
}

#[test]
fn test_full_shelter_mixed() {
    assert_eq!(order(10.0, 10.0, 10.0, 0.0), Ok(720.0));
}

#[test]
fn test_leftover_reduces_order() {
    assert_eq!(order(10.0, 10.0, 10.0, 100.0), Ok(600.0));
}

// ==========================================
// Overrides
// ==========================================

#[test]
fn test_override_small_consumption() {
    let overrides = ConfigOverrides::new().with_consumption_small(15.0);
    assert_eq!(order_with(10.0, 10.0, 10.0, 0.0, overrides), Ok(780.0));
}

#[test]
fn test_override_all_consumption() {
    let overrides = ConfigOverrides::new()
        .with_consumption_small(15.0)
        .with_consumption_medium(25.0)
        .with_consumption_large(35.0);
    assert_eq!(order_with(10.0, 10.0, 10.0, 0.0, overrides), Ok(900.0));
}

#[test]
fn test_override_over_order_percent() {
    let overrides = ConfigOverrides::new().with_over_order_percent(25.0);
    assert_eq!(order_with(10.0, 10.0, 10.0, 0.0, overrides), Ok(750.0));
}

#[test]
fn test_override_max_dogs_allows_larger_census() {
    let overrides = ConfigOverrides::new().with_max_dogs(40.0);
    // (40 x 10) x 1.2
    assert_eq!(order_with(40.0, 0.0, 0.0, 0.0, overrides), Ok(480.0));
}

#[test]
fn test_fractional_consumption_rate() {
    let overrides = ConfigOverrides::new().with_consumption_small(7.5);
    // (3 x 7.5) x 1.2 = 27
    assert_eq!(order_with(3.0, 0.0, 0.0, 0.0, overrides), Ok(27.0));
}

#[test]
fn test_full_over_order_doubles() {
    let overrides = ConfigOverrides::new().with_over_order_percent(100.0);
    assert_eq!(order_with(0.0, 1.0, 0.0, 0.0, overrides), Ok(40.0));
}

// ==========================================
// Edge cases - Extreme values
// ==========================================

#[test]
fn test_infinite_leftover_orders_nothing() {
    assert_eq!(order(30.0, 0.0, 0.0, f64::INFINITY), Ok(0.0));
}

#[test]
fn test_capacity_beyond_u64() {
    let overrides = ConfigOverrides::new()
        .with_max_dogs(1e21)
        .with_over_order_percent(0.0);
    // 1e20 small dogs x 10 lbs
    assert_eq!(order_with(1e20, 0.0, 0.0, 0.0, overrides), Ok(1e21));
}

#[test]
fn test_capacity_beyond_u64_mixed_sizes() {
    let overrides = ConfigOverrides::new()
        .with_max_dogs(1e21)
        .with_over_order_percent(0.0);
    // 1e20 x 10 + 1e20 x 20 + 1e20 x 30
    let lbs = order_with(1e20, 1e20, 1e20, 0.0, overrides).unwrap();
    assert!((lbs - 6e21).abs() / 6e21 < 1e-12);
}
