//! Core types for airport dataset exploration
//!
//! This crate owns the canonical [`AirportRecord`], the column contract of
//! the raw input, and the one-shot normalization that turns raw rows into an
//! immutable [`Dataset`]. Filtering, aggregation and association testing live
//! in sibling crates and all operate on a borrowed `Dataset`.
//!
//! # Example
//!
//! ```rust
//! use airfield_core::{normalize, RawTable, REQUIRED_COLUMNS};
//!
//! let raw = RawTable::new(REQUIRED_COLUMNS).with_row([
//!     "General Edward Lawrence Logan International Airport",
//!     "large_airport",
//!     "US-MA",
//!     "Boston",
//!     "-71.00520",
//!     "42.36429",
//!     "20",
//!     "yes",
//! ]);
//!
//! let dataset = normalize(&raw).unwrap();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.records()[0].state(), "MA");
//! assert_eq!(dataset.records()[0].near_sealevel(), Some(true));
//! ```

mod dataset;
mod error;
mod normalize;
mod raw;
mod record;
mod schema;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use normalize::{
    normalize, normalize_with, NormalizeOptions, DEFAULT_REGION_SEPARATOR,
    DEFAULT_SEALEVEL_THRESHOLD_FT,
};
pub use raw::RawTable;
pub use record::{AirportRecord, Region, ScheduledService};
pub use schema::{Field, Schema, REQUIRED_COLUMNS, UNKNOWN_LABEL};

pub mod test_data;
