//! Reading CSV sources into raw tables

use crate::Result;
use airfield_core::{normalize_with, Dataset, NormalizeOptions, RawTable};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Read a CSV stream with a header row into a [`RawTable`]
///
/// Rows of differing length are accepted here; the normalizer reports any
/// row too short to hold the required columns.
pub fn from_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut table = RawTable::new(rdr.headers()?.iter());
    for record in rdr.records() {
        let record = record?;
        table.push_row(record.iter());
    }

    debug!(columns = table.headers().len(), rows = table.len(), "read csv table");
    Ok(table)
}

/// Read a CSV file into a [`RawTable`]
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let file = File::open(path.as_ref())?;
    from_reader(file)
}

/// Read and normalize a CSV file with default options
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    load_dataset_with(path, &NormalizeOptions::default())
}

/// Read and normalize a CSV file
pub fn load_dataset_with<P: AsRef<Path>>(path: P, options: &NormalizeOptions) -> Result<Dataset> {
    let table = read_table(path)?;
    Ok(normalize_with(&table, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_keeps_cells_verbatim() {
        let data = "name,type,note\n\"Logan, Boston\",large_airport,\n";
        let table = from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["name", "type", "note"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0], vec!["Logan, Boston", "large_airport", ""]);
    }

    #[test]
    fn test_from_reader_accepts_ragged_rows() {
        let data = "a,b,c\n1,2\n1,2,3,4\n";
        let table = from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].len(), 2);
        assert_eq!(table.rows()[1].len(), 4);
    }
}
