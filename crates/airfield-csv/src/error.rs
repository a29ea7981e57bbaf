//! Error types for airfield-csv

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Airfield core error: {0}")]
    Core(#[from] airfield_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
