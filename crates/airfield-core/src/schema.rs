//! Column contract of the raw table and the canonical field set

use crate::{AirportRecord, Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Raw column names the loader requires, in canonical order
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name",
    "type",
    "iso_region",
    "municipality",
    "longitude_deg",
    "latitude_deg",
    "elevation_ft",
    "scheduled_service",
];

/// Label used for categorical values that are not known
pub const UNKNOWN_LABEL: &str = "unknown";

/// Positions of the required columns inside a raw header
///
/// Resolved once per load so rows are read by index, never by name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: usize,
    pub airport_type: usize,
    pub iso_region: usize,
    pub municipality: usize,
    pub longitude: usize,
    pub latitude: usize,
    pub elevation: usize,
    pub scheduled_service: usize,
}

impl Schema {
    /// Resolve required columns against `headers`
    ///
    /// Extra columns are ignored. Header names are compared after trimming
    /// surrounding whitespace.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let find = |column: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| Error::Schema(column.to_string()))
        };

        Ok(Self {
            name: find("name")?,
            airport_type: find("type")?,
            iso_region: find("iso_region")?,
            municipality: find("municipality")?,
            longitude: find("longitude_deg")?,
            latitude: find("latitude_deg")?,
            elevation: find("elevation_ft")?,
            scheduled_service: find("scheduled_service")?,
        })
    }
}

/// A field of the canonical [`AirportRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    #[serde(rename = "type")]
    Type,
    Country,
    State,
    Municipality,
    Longitude,
    Latitude,
    ElevationFt,
    NearSealevel,
    ScheduledService,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Type,
        Field::Country,
        Field::State,
        Field::Municipality,
        Field::Longitude,
        Field::Latitude,
        Field::ElevationFt,
        Field::NearSealevel,
        Field::ScheduledService,
    ];

    /// Canonical field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Country => "country",
            Self::State => "state",
            Self::Municipality => "municipality",
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::ElevationFt => "elevation_ft",
            Self::NearSealevel => "near_sealevel",
            Self::ScheduledService => "scheduled_service",
        }
    }

    /// Whether the field holds discrete labels that can be grouped on
    pub fn is_categorical(&self) -> bool {
        !matches!(self, Self::Longitude | Self::Latitude | Self::ElevationFt)
    }

    /// Render the field of `record` as a label
    ///
    /// Absent optional values render as [`UNKNOWN_LABEL`].
    pub fn value_of<'a>(&self, record: &'a AirportRecord) -> Cow<'a, str> {
        match self {
            Self::Name => Cow::Borrowed(record.name()),
            Self::Type => Cow::Borrowed(record.airport_type()),
            Self::Country => Cow::Borrowed(record.country()),
            Self::State => Cow::Borrowed(record.state()),
            Self::Municipality => Cow::Borrowed(record.municipality()),
            Self::Longitude => Cow::Owned(record.longitude().to_string()),
            Self::Latitude => Cow::Owned(record.latitude().to_string()),
            Self::ElevationFt => match record.elevation_ft() {
                Some(e) => Cow::Owned(e.to_string()),
                None => Cow::Borrowed(UNKNOWN_LABEL),
            },
            Self::NearSealevel => Cow::Borrowed(match record.near_sealevel() {
                Some(true) => "yes",
                Some(false) => "no",
                None => UNKNOWN_LABEL,
            }),
            Self::ScheduledService => Cow::Borrowed(record.scheduled_service().as_str()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| Error::unknown_field(wanted))
    }
}
