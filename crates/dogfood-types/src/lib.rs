//! Core types for dog-food order calculation

mod config;
mod error;

pub use config::*;
pub use error::*;
