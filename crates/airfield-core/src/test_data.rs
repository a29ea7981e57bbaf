//! Fixture tables for tests, examples and benchmarks
//!
//! The New England sample is small enough to reason about by hand: 15
//! airports over 6 states and 6 types, one of them with an unknown
//! elevation.

use crate::{normalize, Dataset, RawTable, REQUIRED_COLUMNS};

/// Header of the sample table: the required columns wrapped in extra ones
pub const SAMPLE_HEADERS: [&str; 10] = [
    "id",
    "name",
    "type",
    "iso_region",
    "municipality",
    "longitude_deg",
    "latitude_deg",
    "elevation_ft",
    "scheduled_service",
    "gps_code",
];

const SAMPLE_ROWS: [[&str; 10]; 15] = [
    ["3422", "General Edward Lawrence Logan International Airport", "large_airport", "US-MA", "Boston", "-71.00520", "42.36429", "20", "yes", "KBOS"],
    ["3520", "Bradley International Airport", "large_airport", "US-CT", "Windsor Locks", "-72.68320", "41.93890", "173", "yes", "KBDL"],
    ["3764", "Portland International Jetport", "medium_airport", "US-ME", "Portland", "-70.30930", "43.64620", "76", "yes", "KPWM"],
    ["3472", "Burlington International Airport", "medium_airport", "US-VT", "South Burlington", "-73.15330", "44.47190", "335", "yes", "KBTV"],
    ["3692", "Manchester-Boston Regional Airport", "medium_airport", "US-NH", "Manchester", "-71.43570", "42.93260", "266", "yes", "KMHT"],
    ["21195", "Mount Washington Regional Airport", "small_airport", "US-NH", "Whitefield", "-71.54450", "44.36830", "1074", "no", "KHIE"],
    ["3551", "Laurence G Hanscom Field", "medium_airport", "US-MA", "Bedford", "-71.28900", "42.47000", "133", "no", "KBED"],
    ["20906", "Plum Island Airport", "small_airport", "US-MA", "Newburyport", "-70.83720", "42.79570", "11", "no", "2B2"],
    ["7351", "Boston Medical Center Heliport", "heliport", "US-MA", "Boston", "-71.07000", "42.33500", "", "no", "MA27"],
    ["3530", "Hancock County-Bar Harbor Airport", "medium_airport", "US-ME", "Bar Harbor", "-68.36130", "44.45070", "83", "yes", "KBHB"],
    ["6954", "Greenville Seaplane Base", "seaplane_base", "US-ME", "Greenville", "-69.59000", "45.46000", "1028", "no", "52B"],
    ["3769", "Theodore Francis Green State Airport", "large_airport", "US-RI", "Warwick", "-71.42040", "41.73260", "55", "yes", "KPVD"],
    ["3937", "Westerly State Airport", "small_airport", "US-RI", "Westerly", "-71.80340", "41.34960", "81", "yes", "KWST"],
    ["41001", "Old Orchard Beach Airfield", "closed", "US-ME", "Old Orchard Beach", "-70.38000", "43.51000", "20", "no", ""],
    ["7412", "Massachusetts General Hospital Heliport", "heliport", "US-MA", "Boston", "-71.06900", "42.36200", "215", "no", "MA14"],
];

/// Standard fixture tables
pub struct TestAirports;

impl TestAirports {
    /// Fifteen New England airports with extra columns around the required ones
    pub fn new_england_raw() -> RawTable {
        SAMPLE_ROWS
            .iter()
            .fold(RawTable::new(SAMPLE_HEADERS), |table, row| table.with_row(*row))
    }

    /// The New England sample, normalized
    pub fn new_england() -> Dataset {
        normalize(&Self::new_england_raw()).expect("sample table is well formed")
    }

    /// A table with `yes` and `no` scheduled-service counts per airport type
    ///
    /// Each entry is `(type, yes_count, no_count)`. States alternate between
    /// `MA` and `NH` and elevations increase with the row index.
    pub fn service_split(counts: &[(&str, usize, usize)]) -> RawTable {
        let mut table = RawTable::new(REQUIRED_COLUMNS);
        let mut index = 0usize;

        for &(kind, yes, no) in counts {
            let services = std::iter::repeat("yes")
                .take(yes)
                .chain(std::iter::repeat("no").take(no));
            for service in services {
                let state = if index % 2 == 0 { "US-MA" } else { "US-NH" };
                table.push_row([
                    format!("{kind} {index}"),
                    kind.to_string(),
                    state.to_string(),
                    format!("Town {}", index % 4),
                    "-71.0".to_string(),
                    "42.5".to_string(),
                    (index * 10).to_string(),
                    service.to_string(),
                ]);
                index += 1;
            }
        }
        table
    }

    /// [`service_split`](Self::service_split), normalized
    pub fn service_dataset(counts: &[(&str, usize, usize)]) -> Dataset {
        normalize(&Self::service_split(counts)).expect("service table is well formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let dataset = TestAirports::new_england();
        assert_eq!(dataset.len(), 15);
        assert_eq!(dataset.type_domain().len(), 6);
        assert_eq!(dataset.state_domain().len(), 6);
    }

    #[test]
    fn test_service_split_counts() {
        let dataset = TestAirports::service_dataset(&[("a", 2, 3), ("b", 1, 0)]);
        assert_eq!(dataset.len(), 6);
        let a_yes = dataset
            .iter()
            .filter(|r| r.airport_type() == "a" && r.scheduled_service().as_str() == "yes")
            .count();
        assert_eq!(a_yes, 2);
    }
}
