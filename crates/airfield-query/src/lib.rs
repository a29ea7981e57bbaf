//! Filtering and aggregation over airport datasets
//!
//! Every operation borrows an immutable [`Dataset`](airfield_core::Dataset)
//! and returns a new value, so a single loaded dataset can back any number of
//! views.
//!
//! # Example
//!
//! ```rust
//! use airfield_core::test_data::TestAirports;
//! use airfield_query::{aggregate, filter, top_n, GroupKey, RankingPolicy, Selection, TopN};
//!
//! let dataset = TestAirports::new_england();
//!
//! let view = filter(&dataset, &Selection::new().with_states(["MA", "ME"]));
//! let by_type = aggregate(&view, &GroupKey::by_type());
//! assert_eq!(by_type.total(), view.len());
//!
//! let cities = top_n(&view, &GroupKey::by_city(), TopN::new(5), RankingPolicy::ByCount);
//! assert_eq!(cities.groups()[0].label(), "Boston, MA");
//! ```

mod aggregate;
mod config;
mod filter;
mod summary;

pub use aggregate::{aggregate, aggregate_by, ranked, top_n, GroupCount, GroupCounts, GroupKey};
pub use config::{AggregateConfig, RankingPolicy, TopN};
pub use filter::{filter, Selection};
pub use summary::{summarize, Centroid, ViewSummary};
