//! Categorical selection over a dataset

use airfield_core::{AirportRecord, Dataset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// The airport types and states a user has picked
///
/// An empty set places no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub types: BTreeSet<String>,
    pub states: BTreeSet<String>,
}

impl Selection {
    /// A selection with both sets empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// True when neither dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.types.is_empty() && self.states.is_empty()
    }

    /// Whether `record` passes every non-empty constraint
    pub fn matches(&self, record: &AirportRecord) -> bool {
        (self.types.is_empty() || self.types.contains(record.airport_type()))
            && (self.states.is_empty() || self.states.contains(record.state()))
    }
}

/// Derive the subview selected by `selection`
///
/// - only types selected: records of those types
/// - only states selected: records in those states
/// - both selected: records matching a selected type *and* a selected state
/// - nothing selected: the full dataset, sharing its storage
///
/// Record order is preserved. The base dataset is left untouched.
#[instrument(skip(dataset, selection), fields(
    records = dataset.len(),
    types = selection.types.len(),
    states = selection.states.len()
))]
pub fn filter(dataset: &Dataset, selection: &Selection) -> Dataset {
    if selection.is_unconstrained() {
        return dataset.clone();
    }

    let view = dataset.select(|record| selection.matches(record));
    debug!(selected = view.len(), "filtered airports");
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use airfield_core::test_data::TestAirports;

    #[test]
    fn test_empty_selection_returns_everything() {
        let dataset = TestAirports::new_england();
        let view = filter(&dataset, &Selection::new());
        assert_eq!(view, dataset);
        assert!(view.shares_storage_with(&dataset));
    }

    #[test]
    fn test_types_only() {
        let dataset = TestAirports::new_england();
        let view = filter(&dataset, &Selection::new().with_types(["heliport"]));
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.airport_type() == "heliport"));
    }

    #[test]
    fn test_states_only() {
        let dataset = TestAirports::new_england();
        let view = filter(&dataset, &Selection::new().with_states(["ME", "RI"]));
        assert_eq!(view.len(), 6);
        assert!(view.iter().all(|r| r.state() == "ME" || r.state() == "RI"));
    }

    #[test]
    fn test_both_dimensions_intersect() {
        let dataset = TestAirports::new_england();
        let selection = Selection::new()
            .with_types(["medium_airport", "large_airport"])
            .with_states(["MA"]);
        let view = filter(&dataset, &selection);

        let names: Vec<_> = view.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "Laurence G Hanscom Field",
                "General Edward Lawrence Logan International Airport",
            ]
        );
    }

    #[test]
    fn test_no_match_gives_empty_view() {
        let dataset = TestAirports::new_england();
        let selection = Selection::new().with_types(["seaplane_base"]).with_states(["VT"]);
        assert!(filter(&dataset, &selection).is_empty());
    }
}
