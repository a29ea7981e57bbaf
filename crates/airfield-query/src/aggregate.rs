//! Frequency groupings and top-N rankings

use crate::{AggregateConfig, RankingPolicy, TopN};
use airfield_core::{Dataset, Error, Field, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

/// One or more categorical fields that together identify a group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    fields: Vec<Field>,
}

impl GroupKey {
    /// Build a key from fields
    ///
    /// Fails when the list is empty, repeats a field, or names a numeric
    /// field.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Result<Self> {
        let fields: Vec<Field> = fields.into_iter().collect();
        if fields.is_empty() {
            return Err(Error::InvalidParameter(
                "grouping key needs at least one field".to_string(),
            ));
        }
        for (i, field) in fields.iter().enumerate() {
            if !field.is_categorical() {
                return Err(Error::InvalidParameter(format!(
                    "cannot group on numeric field '{field}'"
                )));
            }
            if fields[..i].contains(field) {
                return Err(Error::InvalidParameter(format!(
                    "field '{field}' appears twice in grouping key"
                )));
            }
        }
        Ok(Self { fields })
    }

    /// Build a key from field names, e.g. `["municipality", "state"]`
    pub fn parse(names: &[&str]) -> Result<Self> {
        let fields = names
            .iter()
            .map(|name| name.parse::<Field>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(fields)
    }

    /// Group by airport type
    pub fn by_type() -> Self {
        Self {
            fields: vec![Field::Type],
        }
    }

    /// Group by city: `(municipality, state)`
    pub fn by_city() -> Self {
        Self {
            fields: vec![Field::Municipality, Field::State],
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.fields.iter().map(Field::name).collect();
        write!(f, "({})", names.join(", "))
    }
}

/// Size of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    /// Values of the key fields, in key order
    pub key: Vec<String>,
    /// Number of airports in the group
    pub count: usize,
    /// Greatest airport name in the group
    pub representative_name: String,
}

impl GroupCount {
    /// Key values joined for display, e.g. `"Boston, MA"`
    pub fn label(&self) -> String {
        self.key.join(", ")
    }
}

/// Ordered group-to-count mapping, ready for charting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCounts {
    fields: Vec<Field>,
    groups: Vec<GroupCount>,
}

impl GroupCounts {
    /// Fields the groups are keyed by
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn groups(&self) -> &[GroupCount] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupCount> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Count for the group with exactly these key values
    pub fn get(&self, key: &[&str]) -> Option<usize> {
        self.groups
            .iter()
            .find(|g| g.key.len() == key.len() && g.key.iter().zip(key).all(|(a, b)| a == b))
            .map(|g| g.count)
    }

    /// Sum of all group counts
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

impl<'a> IntoIterator for &'a GroupCounts {
    type Item = &'a GroupCount;
    type IntoIter = std::slice::Iter<'a, GroupCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Count airports per group, ordered by key ascending
#[instrument(skip(dataset, key), fields(records = dataset.len(), key = %key))]
pub fn aggregate(dataset: &Dataset, key: &GroupKey) -> GroupCounts {
    let mut buckets: BTreeMap<Vec<String>, (usize, &str)> = BTreeMap::new();

    for record in dataset {
        let values: Vec<String> = key
            .fields
            .iter()
            .map(|field| field.value_of(record).into_owned())
            .collect();
        let entry = buckets.entry(values).or_insert((0, record.name()));
        entry.0 += 1;
        if record.name() > entry.1 {
            entry.1 = record.name();
        }
    }

    let groups: Vec<GroupCount> = buckets
        .into_iter()
        .map(|(key, (count, name))| GroupCount {
            key,
            count,
            representative_name: name.to_string(),
        })
        .collect();

    debug!(groups = groups.len(), "aggregated airports");
    GroupCounts {
        fields: key.fields.clone(),
        groups,
    }
}

/// [`aggregate`] with the key given as field names
pub fn aggregate_by(dataset: &Dataset, fields: &[&str]) -> Result<GroupCounts> {
    let key = GroupKey::parse(fields)?;
    Ok(aggregate(dataset, &key))
}

/// Rank groups by `ranking` and keep the first `n`
///
/// When fewer than `n` groups exist, all of them are returned.
pub fn top_n(dataset: &Dataset, key: &GroupKey, n: TopN, ranking: RankingPolicy) -> GroupCounts {
    let mut counts = aggregate(dataset, key);

    match ranking {
        RankingPolicy::ByName => counts.groups.sort_by(|a, b| {
            b.representative_name
                .cmp(&a.representative_name)
                .then_with(|| a.key.cmp(&b.key))
        }),
        RankingPolicy::ByCount => counts
            .groups
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))),
    }
    counts.groups.truncate(n.get());

    debug!(kept = counts.len(), limit = n.get(), policy = ranking.name(), "ranked groups");
    counts
}

/// [`top_n`] driven by an [`AggregateConfig`]
pub fn ranked(dataset: &Dataset, key: &GroupKey, config: &AggregateConfig) -> GroupCounts {
    top_n(dataset, key, config.top_n, config.ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airfield_core::test_data::TestAirports;

    #[test]
    fn test_group_key_validation() {
        assert!(GroupKey::parse(&["type"]).is_ok());
        assert_eq!(GroupKey::parse(&["municipality", "state"]).unwrap(), GroupKey::by_city());

        assert!(matches!(GroupKey::parse(&[]), Err(Error::InvalidParameter(_))));
        assert!(matches!(
            GroupKey::parse(&["runway_count"]),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            GroupKey::parse(&["elevation_ft"]),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            GroupKey::parse(&["state", "state"]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_aggregate_by_type_is_key_ordered() {
        let counts = aggregate(&TestAirports::new_england(), &GroupKey::by_type());

        let entries: Vec<_> = counts.iter().map(|g| (g.label(), g.count)).collect();
        assert_eq!(
            entries,
            vec![
                ("closed".to_string(), 1),
                ("heliport".to_string(), 2),
                ("large_airport".to_string(), 3),
                ("medium_airport".to_string(), 5),
                ("seaplane_base".to_string(), 1),
                ("small_airport".to_string(), 3),
            ]
        );
        assert_eq!(counts.total(), 15);
    }

    #[test]
    fn test_aggregate_by_city() {
        let counts = aggregate(&TestAirports::new_england(), &GroupKey::by_city());
        assert_eq!(counts.len(), 13);
        assert_eq!(counts.get(&["Boston", "MA"]), Some(3));
        assert_eq!(counts.get(&["Boston", "NH"]), None);
        assert_eq!(counts.fields(), &[Field::Municipality, Field::State]);
    }

    #[test]
    fn test_representative_name_is_greatest() {
        let counts = aggregate(&TestAirports::new_england(), &GroupKey::by_city());
        let boston = counts.iter().find(|g| g.label() == "Boston, MA").unwrap();
        assert_eq!(
            boston.representative_name,
            "Massachusetts General Hospital Heliport"
        );
    }

    #[test]
    fn test_top_n_by_count() {
        let counts = top_n(
            &TestAirports::new_england(),
            &GroupKey::by_type(),
            TopN::new(3),
            RankingPolicy::ByCount,
        );
        let labels: Vec<_> = counts.iter().map(GroupCount::label).collect();
        assert_eq!(labels, vec!["medium_airport", "large_airport", "small_airport"]);
    }

    #[test]
    fn test_top_n_by_name() {
        let counts = top_n(
            &TestAirports::new_england(),
            &GroupKey::by_city(),
            TopN::default(),
            RankingPolicy::ByName,
        );
        let names: Vec<_> = counts.iter().map(|g| g.representative_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Westerly State Airport",
                "Theodore Francis Green State Airport",
                "Portland International Jetport",
                "Plum Island Airport",
                "Old Orchard Beach Airfield",
            ]
        );
    }

    #[test]
    fn test_top_n_fewer_groups_than_limit() {
        let dataset = TestAirports::new_england();
        let three = dataset.select(|r| r.state() == "ME" && r.airport_type() != "closed");
        let counts = top_n(&three, &GroupKey::by_city(), TopN::new(5), RankingPolicy::ByName);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_aggregate_empty_view() {
        let counts = aggregate(&Dataset::empty(), &GroupKey::by_type());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
