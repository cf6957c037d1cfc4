//! Domain services

pub mod order_calculator;
pub mod rounding;
pub mod validation;

pub use order_calculator::{compute_order, compute_order_breakdown};
pub use rounding::round_to_tenth;
pub use validation::validate_config;
