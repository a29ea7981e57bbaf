//! Canonical airport record and its categorical value types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an airport offers scheduled airline service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledService {
    No,
    Yes,
}

impl ScheduledService {
    /// Canonical lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Yes => "yes",
        }
    }
}

impl fmt::Display for ScheduledService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduledService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("yes") {
            Ok(Self::Yes)
        } else if trimmed.eq_ignore_ascii_case("no") {
            Ok(Self::No)
        } else {
            Err(Error::InvalidParameter(format!(
                "scheduled service must be 'yes' or 'no', got '{s}'"
            )))
        }
    }
}

/// A region code split into its country and state components
///
/// `"US-MA"` becomes `country = "US"`, `state = "MA"`. Only the first
/// separator splits, so `"GB-ENG-LND"` keeps `"ENG-LND"` as the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub country: String,
    pub state: String,
}

impl Region {
    /// Split `code` on the first occurrence of `separator`
    ///
    /// Returns `None` when the separator is missing or either side is empty.
    pub fn split(code: &str, separator: char) -> Option<Self> {
        let (country, state) = code.trim().split_once(separator)?;
        if country.is_empty() || state.is_empty() {
            return None;
        }
        Some(Self {
            country: country.to_string(),
            state: state.to_string(),
        })
    }

    /// Rebuild the region code with the given separator
    pub fn join(&self, separator: char) -> String {
        format!("{}{}{}", self.country, separator, self.state)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.country, self.state)
    }
}

/// One normalized airport
///
/// Records are only produced by [`normalize`](crate::normalize), which keeps
/// `near_sealevel` consistent with `elevation_ft`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRecord {
    name: String,
    #[serde(rename = "type")]
    airport_type: String,
    country: String,
    state: String,
    municipality: String,
    longitude: f64,
    latitude: f64,
    elevation_ft: Option<f64>,
    near_sealevel: Option<bool>,
    scheduled_service: ScheduledService,
}

impl AirportRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        airport_type: String,
        region: Region,
        municipality: String,
        longitude: f64,
        latitude: f64,
        elevation_ft: Option<f64>,
        scheduled_service: ScheduledService,
        sealevel_threshold_ft: f64,
    ) -> Self {
        let near_sealevel = elevation_ft.map(|e| e <= sealevel_threshold_ft);
        Self {
            name,
            airport_type,
            country: region.country,
            state: region.state,
            municipality,
            longitude,
            latitude,
            elevation_ft,
            near_sealevel,
            scheduled_service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Airport category, e.g. `small_airport` or `heliport`
    pub fn airport_type(&self) -> &str {
        &self.airport_type
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn municipality(&self) -> &str {
        &self.municipality
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn elevation_ft(&self) -> Option<f64> {
        self.elevation_ft
    }

    /// `Some(true)` when the elevation is at or below the sea-level threshold,
    /// `None` when the elevation is unknown
    pub fn near_sealevel(&self) -> Option<bool> {
        self.near_sealevel
    }

    pub fn scheduled_service(&self) -> ScheduledService {
        self.scheduled_service
    }

    /// Region code reconstructed from country and state
    pub fn region_code(&self) -> String {
        format!("{}-{}", self.country, self.state)
    }
}
