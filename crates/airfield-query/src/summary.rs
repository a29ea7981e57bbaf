//! Headline figures for a filtered view

use airfield_core::Dataset;
use serde::Serialize;

/// Mean position of a set of airports
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub longitude: f64,
    pub latitude: f64,
}

/// Summary metrics shown above the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSummary {
    pub total_airports: usize,
    /// Mean over airports with a known elevation
    pub average_elevation_ft: Option<f64>,
    /// Airports contributing to the average
    pub airports_with_elevation: usize,
    /// `None` for an empty view
    pub centroid: Option<Centroid>,
}

/// Compute the summary of a view
pub fn summarize(dataset: &Dataset) -> ViewSummary {
    let (elevation_sum, with_elevation) = dataset
        .iter()
        .filter_map(|r| r.elevation_ft())
        .fold((0.0, 0usize), |(sum, n), e| (sum + e, n + 1));

    let centroid = (!dataset.is_empty()).then(|| {
        let n = dataset.len() as f64;
        let (lon, lat) = dataset
            .iter()
            .fold((0.0, 0.0), |(lon, lat), r| (lon + r.longitude(), lat + r.latitude()));
        Centroid {
            longitude: lon / n,
            latitude: lat / n,
        }
    });

    ViewSummary {
        total_airports: dataset.len(),
        average_elevation_ft: (with_elevation > 0).then(|| elevation_sum / with_elevation as f64),
        airports_with_elevation: with_elevation,
        centroid,
    }
}
