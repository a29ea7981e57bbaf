//! Association testing between airport type and scheduled service
//!
//! Given two airport types, this crate restricts a dataset to those types,
//! cross-tabulates them against scheduled service, and runs Pearson's
//! chi-square test of independence. Degenerate inputs fail explicitly
//! instead of yielding NaN statistics.
//!
//! # Example
//!
//! ```rust
//! use airfield_core::test_data::TestAirports;
//! use airfield_association::{test_association, Verdict};
//!
//! let dataset = TestAirports::service_dataset(&[("heliport", 0, 10), ("large_airport", 10, 0)]);
//! let result = test_association(&dataset, "heliport", "large_airport").unwrap();
//!
//! assert_eq!(result.dof, 1);
//! assert_eq!(result.verdict, Verdict::Associated);
//! println!("{}", result.headline());
//! ```

mod chi_square;
mod contingency;
mod types;

pub use chi_square::{chi_square_independence, test_association};
pub use contingency::{restrict, ContingencyTable};
pub use types::{AssociationTest, Verdict, SIGNIFICANCE_LEVEL};
