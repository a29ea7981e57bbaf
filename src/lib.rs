//! Airport dataset exploration
//!
//! Facade over the airfield crates:
//!
//! - [`data`]: record types, schema validation and normalization
//! - [`query`]: multi-criteria filtering, frequency aggregation, top-N
//! - [`association`]: chi-square test between airport type and scheduled service
//! - [`ingest`]: loading CSV files into datasets
//!
//! # Example
//!
//! ```rust
//! use airfield::prelude::*;
//! use airfield::data::test_data::TestAirports;
//!
//! let dataset = TestAirports::new_england();
//! let view = filter(&dataset, &Selection::new().with_types(["medium_airport", "large_airport"]));
//! let summary = summarize(&view);
//! assert_eq!(summary.total_airports, 8);
//!
//! let result = test_association(&dataset, "medium_airport", "heliport").unwrap();
//! println!("{}", result.headline());
//! ```

pub use airfield_association as association;
pub use airfield_core as data;
pub use airfield_csv as ingest;
pub use airfield_query as query;

/// Commonly used items from every crate
pub mod prelude {
    pub use airfield_association::{test_association, AssociationTest, Verdict};
    pub use airfield_core::{
        normalize, normalize_with, AirportRecord, Dataset, Error, Field, NormalizeOptions,
        RawTable, Result, ScheduledService,
    };
    pub use airfield_csv::load_dataset;
    pub use airfield_query::{
        aggregate, filter, summarize, top_n, AggregateConfig, GroupCounts, GroupKey,
        RankingPolicy, Selection, TopN, ViewSummary,
    };
}
