//! Error types for dogfood-order

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// An input of the order calculation, named the way callers see it in messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    SmallDogs,
    MediumDogs,
    LargeDogs,
    LeftoverLbs,
    ConsumptionSmall,
    ConsumptionMedium,
    ConsumptionLarge,
    MaxDogs,
    OverOrderPercent,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::SmallDogs => "nSmallDogs",
            Field::MediumDogs => "nMediumDogs",
            Field::LargeDogs => "nLargeDogs",
            Field::LeftoverLbs => "lbsLeftover",
            Field::ConsumptionSmall => "lbsPerMonthSmall",
            Field::ConsumptionMedium => "lbsPerMonthMedium",
            Field::ConsumptionLarge => "lbsPerMonthLarge",
            Field::MaxDogs => "maxDogs",
            Field::OverOrderPercent => "pctOverOrder",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation failure of an order request. Only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// A required positional input was absent.
    #[error("'{field}' must be provided")]
    Missing { field: Field },

    #[error("'{field}' must be an integer")]
    NotInteger { field: Field },

    #[error("'{field}' must be > 0")]
    NotPositive { field: Field },

    /// Value outside an inclusive range.
    #[error("'{field}' must be between {min} and {max}")]
    OutOfRange { field: Field, min: f64, max: f64 },

    /// Dog census larger than shelter capacity.
    #[error("Total # dogs exceeds max of {max}")]
    TotalExceedsMax { total: f64, max: f64 },

    #[error("'{field}' must be >= {min}")]
    BelowMinimum { field: Field, min: f64 },

    /// NaN or infinity where a consumption rate was expected.
    #[error("'{field}' must be a finite number")]
    NotFinite { field: Field },

    #[error("'{field}' must be a number")]
    NotANumber { field: Field },

    /// Valid inputs whose product exceeds the range of `f64`.
    #[error("Order quantity is too large to represent")]
    OrderOverflow,
}

impl OrderError {
    /// The input the error refers to; `None` for the census total.
    pub fn field(&self) -> Option<Field> {
        match self {
            OrderError::Missing { field }
            | OrderError::NotInteger { field }
            | OrderError::NotPositive { field }
            | OrderError::OutOfRange { field, .. }
            | OrderError::BelowMinimum { field, .. }
            | OrderError::NotFinite { field }
            | OrderError::NotANumber { field } => Some(*field),
            OrderError::TotalExceedsMax { .. } | OrderError::OrderOverflow => None,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
