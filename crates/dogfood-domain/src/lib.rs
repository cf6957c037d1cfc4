//! Monthly dog-food reorder calculation for an animal shelter

pub mod model;
pub mod service;

pub use dogfood_types::{ConfigError, ConfigOverrides, Field, OrderConfig, OrderError};
pub use model::{DogCounts, OrderBreakdown, OrderRequest};
pub use service::{compute_order, compute_order_breakdown, round_to_tenth, validate_config};
