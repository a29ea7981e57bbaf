//! CSV ingest for airport tables
//!
//! Parses a CSV source into an [`airfield_core::RawTable`] and, optionally,
//! runs normalization on it in one step.
//!
//! # Example
//!
//! ```rust,ignore
//! let dataset = airfield_csv::load_dataset("new_england_airports.csv")?;
//! println!("{} airports", dataset.len());
//! ```

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::{from_reader, load_dataset, load_dataset_with, read_table};
