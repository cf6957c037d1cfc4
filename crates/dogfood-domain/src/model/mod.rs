//! Domain model types

pub mod breakdown;
pub mod dog_counts;
pub mod order_request;

pub use breakdown::OrderBreakdown;
pub use dog_counts::DogCounts;
pub use order_request::OrderRequest;
