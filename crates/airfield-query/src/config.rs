//! Configuration types for ranking aggregated groups

use serde::{Deserialize, Serialize};

/// How groups are ordered before a top-N cut
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// By the group's representative airport name, descending
    ///
    /// The representative name is the greatest `name` among the group's
    /// airports. This is the dashboard's historical ordering.
    #[default]
    ByName,

    /// By airport count, descending; equal counts ordered by group key
    ByCount,
}

impl RankingPolicy {
    /// Get the name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            Self::ByName => "by_name",
            Self::ByCount => "by_count",
        }
    }
}

/// Number of groups kept by a top-N ranking, clamped to
/// [`TopN::MIN`]`..=`[`TopN::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct TopN(usize);

impl TopN {
    pub const MIN: usize = 3;
    pub const MAX: usize = 20;
    pub const DEFAULT: usize = 5;

    /// Clamp `n` into the supported range
    pub fn new(n: usize) -> Self {
        Self(n.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<usize> for TopN {
    fn from(n: usize) -> Self {
        Self::new(n)
    }
}

impl From<TopN> for usize {
    fn from(n: TopN) -> Self {
        n.0
    }
}

/// Settings for a ranked aggregation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    pub top_n: TopN,
    pub ranking: RankingPolicy,
}

impl AggregateConfig {
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = TopN::new(n);
        self
    }

    pub fn with_ranking(mut self, ranking: RankingPolicy) -> Self {
        self.ranking = ranking;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_clamps() {
        assert_eq!(TopN::new(0).get(), 3);
        assert_eq!(TopN::new(3).get(), 3);
        assert_eq!(TopN::new(12).get(), 12);
        assert_eq!(TopN::new(20).get(), 20);
        assert_eq!(TopN::new(500).get(), 20);
        assert_eq!(TopN::default().get(), 5);
    }

    #[test]
    fn test_config_deserializes_and_clamps() {
        let config: AggregateConfig =
            serde_json::from_str(r#"{"top_n": 50, "ranking": "by_count"}"#).unwrap();
        assert_eq!(config.top_n.get(), 20);
        assert_eq!(config.ranking, RankingPolicy::ByCount);

        let config: AggregateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AggregateConfig::default());
        assert_eq!(config.ranking, RankingPolicy::ByName);
    }
}
