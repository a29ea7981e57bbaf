//! Integration tests for aggregation over filtered views

use airfield_core::test_data::TestAirports;
use airfield_core::Error;
use airfield_query::{
    aggregate, aggregate_by, filter, ranked, top_n, AggregateConfig, GroupKey, RankingPolicy,
    Selection, TopN,
};

#[test]
fn test_filtered_view_feeds_aggregation() {
    let dataset = TestAirports::new_england();
    let view = filter(&dataset, &Selection::new().with_states(["MA"]));

    let by_type = aggregate(&view, &GroupKey::by_type());
    assert_eq!(by_type.get(&["heliport"]), Some(2));
    assert_eq!(by_type.get(&["large_airport"]), Some(1));
    assert_eq!(by_type.get(&["medium_airport"]), Some(1));
    assert_eq!(by_type.get(&["small_airport"]), Some(1));
    assert_eq!(by_type.total(), view.len());
}

#[test]
fn test_aggregate_by_field_names() {
    let dataset = TestAirports::new_england();

    let by_service = aggregate_by(&dataset, &["scheduled_service"]).unwrap();
    assert_eq!(by_service.get(&["no"]), Some(7));
    assert_eq!(by_service.get(&["yes"]), Some(8));

    let by_sealevel = aggregate_by(&dataset, &["near_sealevel"]).unwrap();
    assert_eq!(by_sealevel.get(&["unknown"]), Some(1));
    assert_eq!(by_sealevel.get(&["yes"]), Some(7));
    assert_eq!(by_sealevel.get(&["no"]), Some(7));
}

#[test]
fn test_aggregate_rejects_unknown_key() {
    let dataset = TestAirports::new_england();
    let result = aggregate_by(&dataset, &["iso_region"]);
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn test_top_five_over_three_groups() {
    let dataset = TestAirports::new_england();
    let view = filter(&dataset, &Selection::new().with_states(["RI", "CT"]));
    let counts = top_n(&view, &GroupKey::by_city(), TopN::new(5), RankingPolicy::ByName);

    assert_eq!(counts.len(), 3);
    let labels: Vec<_> = counts.iter().map(|g| g.label()).collect();
    assert_eq!(labels, vec!["Westerly, RI", "Warwick, RI", "Windsor Locks, CT"]);
}

#[test]
fn test_top_n_limit_is_clamped() {
    let dataset = TestAirports::new_england();
    let config = AggregateConfig::default()
        .with_top_n(1)
        .with_ranking(RankingPolicy::ByCount);
    let counts = ranked(&dataset, &GroupKey::by_city(), &config);

    assert_eq!(counts.len(), 3);
    assert_eq!(counts.groups()[0].label(), "Boston, MA");
    assert_eq!(counts.groups()[0].count, 3);
}

#[test]
fn test_counts_serialize_for_charts() {
    let dataset = TestAirports::new_england();
    let counts = aggregate(&dataset, &GroupKey::by_type());
    let json = serde_json::to_value(&counts).unwrap();

    assert_eq!(json["fields"][0], "type");
    assert_eq!(json["groups"][0]["key"][0], "closed");
    assert_eq!(json["groups"][0]["count"], 1);
}
