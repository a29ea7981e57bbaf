//! Error types for airport dataset processing
//!
//! Provides a unified error type for all airfield crates.

use thiserror::Error;

/// Core error type for the airport pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required column is missing from the raw table
    #[error("Schema error: missing required column '{0}'")]
    Schema(String),

    /// A region code could not be split into country and state
    #[error("Malformed region code '{value}' at row {row}")]
    MalformedRegion { row: usize, value: String },

    /// A cell could not be parsed into its canonical type
    #[error("Invalid value '{value}' for column '{column}' at row {row}")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
    },

    /// Not enough data to compute a defined result
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The requested categories collapse to fewer than two levels
    #[error("Insufficient categories: {0}")]
    InsufficientCategories(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a cell that failed to parse
    pub fn invalid_field(row: usize, column: &str, value: &str) -> Self {
        Self::InvalidField {
            row,
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a grouping or selection field that does not exist
    pub fn unknown_field(name: &str) -> Self {
        Self::InvalidParameter(format!("unknown field '{name}'"))
    }

    /// Create an error for NaN/Inf results
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} is NaN or infinite"))
    }
}
