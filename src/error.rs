//! Error types for projection math and goal file loading

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain errors raised by the projection calculator and schedule engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The monthly rate implied by the annual percentage is at or below -100%,
    /// which makes `1 + r` non-positive
    #[error("annual return rate {annual_rate_percent}% implies a monthly rate at or below -100%")]
    InvalidReturnRate { annual_rate_percent: Decimal },

    /// Decimal arithmetic exceeded the representable range
    #[error("decimal overflow while computing {operation}")]
    Overflow { operation: &'static str },

    /// Schedule horizon exceeds the configured row cap
    #[error("horizon of {months} months exceeds the schedule limit of {max_months} months")]
    HorizonTooLong { months: i64, max_months: u32 },
}

/// Errors raised while reading a goal file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read goal file")]
    Io(#[from] std::io::Error),

    #[error("malformed goal file")]
    Csv(#[from] csv::Error),

    /// A row parsed but describes an out-of-domain trajectory (1-based data row)
    #[error("invalid goal on row {row}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ProjectionError,
    },
}
