//! Property tests for the filter engine

use airfield_core::test_data::TestAirports;
use airfield_core::Dataset;
use airfield_query::{filter, Selection};
use proptest::prelude::*;
use proptest::sample::subsequence;

const TYPES: [&str; 7] = [
    "small_airport",
    "seaplane_base",
    "medium_airport",
    "heliport",
    "large_airport",
    "closed",
    "balloonport",
];
const STATES: [&str; 7] = ["NH", "ME", "VT", "MA", "CT", "RI", "NY"];

fn selections() -> impl Strategy<Value = Selection> {
    (
        subsequence(TYPES.to_vec(), 0..=TYPES.len()),
        subsequence(STATES.to_vec(), 0..=STATES.len()),
    )
        .prop_map(|(types, states)| Selection::new().with_types(types).with_states(states))
}

fn is_subset(view: &Dataset, base: &Dataset) -> bool {
    view.iter().all(|r| base.records().contains(r))
}

#[test]
fn test_unconstrained_filter_is_identity() {
    let dataset = TestAirports::new_england();
    assert_eq!(filter(&dataset, &Selection::new()), dataset);
}

#[test]
fn test_filter_leaves_base_untouched() {
    let dataset = TestAirports::new_england();
    let before = dataset.records().to_vec();
    let _ = filter(&dataset, &Selection::new().with_types(["heliport"]));
    assert_eq!(dataset.records(), before.as_slice());
}

proptest! {
    #[test]
    fn prop_filter_is_subset(selection in selections()) {
        let dataset = TestAirports::new_england();
        let view = filter(&dataset, &selection);
        prop_assert!(view.len() <= dataset.len());
        prop_assert!(is_subset(&view, &dataset));
    }

    #[test]
    fn prop_filter_respects_constraints(selection in selections()) {
        let dataset = TestAirports::new_england();
        let view = filter(&dataset, &selection);
        for record in &view {
            if !selection.types.is_empty() {
                prop_assert!(selection.types.contains(record.airport_type()));
            }
            if !selection.states.is_empty() {
                prop_assert!(selection.states.contains(record.state()));
            }
        }
    }

    #[test]
    fn prop_filter_is_idempotent(selection in selections()) {
        let dataset = TestAirports::new_england();
        let once = filter(&dataset, &selection);
        let twice = filter(&once, &selection);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_filter_keeps_every_match(selection in selections()) {
        let dataset = TestAirports::new_england();
        let view = filter(&dataset, &selection);
        let expected = dataset.iter().filter(|r| selection.matches(r)).count();
        prop_assert_eq!(view.len(), expected);
    }
}
