//! Raw table to canonical dataset transform

use crate::{AirportRecord, Dataset, Error, RawTable, Region, Result, ScheduledService, Schema};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Default elevation, in feet, at or below which an airport is near sea level
pub const DEFAULT_SEALEVEL_THRESHOLD_FT: f64 = 100.0;

/// Default separator between country and state in a region code
pub const DEFAULT_REGION_SEPARATOR: char = '-';

/// Knobs for the normalization pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Separator splitting `iso_region` into country and state
    pub region_separator: char,
    /// Elevation threshold for the near-sea-level flag (inclusive)
    pub sealevel_threshold_ft: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            region_separator: DEFAULT_REGION_SEPARATOR,
            sealevel_threshold_ft: DEFAULT_SEALEVEL_THRESHOLD_FT,
        }
    }
}

/// Normalize a raw table with default options
///
/// See [`normalize_with`].
pub fn normalize(raw: &RawTable) -> Result<Dataset> {
    normalize_with(raw, &NormalizeOptions::default())
}

/// Turn raw rows into the canonical dataset
///
/// The header is validated once, then each row is projected onto an
/// [`AirportRecord`]. The result is ordered by elevation, highest first,
/// with unknown elevations last; equal elevations keep their input order.
///
/// Row numbers in errors are 1-based and count data rows only.
#[instrument(skip(raw, options), fields(rows = raw.len()))]
pub fn normalize_with(raw: &RawTable, options: &NormalizeOptions) -> Result<Dataset> {
    let schema = Schema::resolve(raw.headers())?;

    let mut records = raw
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(&schema, row, i + 1, options))
        .collect::<Result<Vec<_>>>()?;

    records.sort_by(|a, b| elevation_descending(a.elevation_ft(), b.elevation_ft()));

    let unknown = records.iter().filter(|r| r.elevation_ft().is_none()).count();
    debug!(
        records = records.len(),
        unknown_elevation = unknown,
        "normalized airport table"
    );

    Ok(Dataset::from_records(records))
}

// Highest elevation first, unknown elevations last
fn elevation_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn parse_row(
    schema: &Schema,
    row: &[String],
    row_number: usize,
    options: &NormalizeOptions,
) -> Result<AirportRecord> {
    let cell = |index: usize, column: &str| cell_at(row, index, column, row_number);

    let iso_region = cell(schema.iso_region, "iso_region")?;
    let region = Region::split(iso_region, options.region_separator).ok_or_else(|| {
        Error::MalformedRegion {
            row: row_number,
            value: iso_region.to_string(),
        }
    })?;

    let longitude = parse_coordinate(
        cell(schema.longitude, "longitude_deg")?,
        row_number,
        "longitude_deg",
    )?;
    let latitude = parse_coordinate(
        cell(schema.latitude, "latitude_deg")?,
        row_number,
        "latitude_deg",
    )?;
    let elevation_ft = parse_elevation(cell(schema.elevation, "elevation_ft")?, row_number)?;

    let service_cell = cell(schema.scheduled_service, "scheduled_service")?;
    let scheduled_service = service_cell
        .parse::<ScheduledService>()
        .map_err(|_| Error::invalid_field(row_number, "scheduled_service", service_cell))?;

    Ok(AirportRecord::new(
        cell(schema.name, "name")?.to_string(),
        cell(schema.airport_type, "type")?.to_string(),
        region,
        cell(schema.municipality, "municipality")?.to_string(),
        longitude,
        latitude,
        elevation_ft,
        scheduled_service,
        options.sealevel_threshold_ft,
    ))
}

fn cell_at<'a>(
    row: &'a [String],
    index: usize,
    column: &str,
    row_number: usize,
) -> Result<&'a str> {
    row.get(index)
        .map(|s| s.trim())
        .ok_or_else(|| Error::invalid_field(row_number, column, ""))
}

fn parse_coordinate(value: &str, row: usize, column: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::invalid_field(row, column, value))
}

fn parse_elevation(value: &str, row: usize) -> Result<Option<f64>> {
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    parse_coordinate(value, row, "elevation_ft").map(Some)
}
