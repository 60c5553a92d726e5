use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::LaunchDataError;

/// Embedded sample of the launch dataset, used by tests.
pub static SAMPLE_CSV: &str = include_str!("../../fixtures/spacex_launch_dash.csv");

/// CSV columns that must be present in the dataset header.
///
/// The real file carries an unnamed leading index column and a
/// `Booster Version` column as well; only these four drive the charts,
/// but parsing keeps the full record.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version Category",
];

/// One row of the launch records table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number")]
    pub flight_number: u32,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Binary outcome: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub outcome: u8,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome == 1
    }
}

/// The launch records table: loaded once, never mutated afterwards.
///
/// Both figure builders take the table by shared reference; row order is
/// the file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
}

impl LaunchTable {
    /// Build a table from already-parsed records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        LaunchTable { records }
    }

    /// Parse a CSV string of launch records into a table.
    ///
    /// The header row must contain every column in [`REQUIRED_COLUMNS`];
    /// anything else in the file (index column, extra columns) is kept or
    /// ignored by name.
    pub fn parse_csv(csv_object: &str) -> Result<Self, LaunchDataError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LaunchDataError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: LaunchRecord = row?;
            records.push(record);
        }
        Ok(LaunchTable { records })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Scan the payload mass column once and return (min, max).
    ///
    /// Used to initialize the payload range control at startup. Returns
    /// `None` on an empty table; callers surface that as a load error
    /// rather than inventing bounds.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for payload in iter {
            if payload < min {
                min = payload;
            }
            if payload > max {
                max = payload;
            }
        }
        Some((min, max))
    }

    /// Distinct launch site names, sorted.
    pub fn site_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|r| r.launch_site.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_csv() {
        let table = LaunchTable::parse_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 28);

        let first = &table.records()[0];
        assert_eq!(first.flight_number, 1);
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.outcome, 0);
        assert_eq!(first.payload_mass_kg, 0.0);
        assert_eq!(first.booster_category, "v1.0");
    }

    #[test]
    fn test_payload_bounds() {
        let table = LaunchTable::parse_csv(SAMPLE_CSV).unwrap();
        assert_eq!(table.payload_bounds(), Some((0.0, 9600.0)));
    }

    #[test]
    fn test_payload_bounds_empty_table() {
        let table = LaunchTable::from_records(Vec::new());
        assert_eq!(table.payload_bounds(), None);
    }

    #[test]
    fn test_site_names_sorted_distinct() {
        let table = LaunchTable::parse_csv(SAMPLE_CSV).unwrap();
        assert_eq!(
            table.site_names(),
            vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv = "Flight Number,Launch Site,class\n1,CCAFS LC-40,1\n";
        match LaunchTable::parse_csv(csv) {
            Err(LaunchDataError::MissingColumn(col)) => {
                assert_eq!(col, "Payload Mass (kg)");
            }
            other => panic!("expected MissingColumn, got {:?}", other.map(|t| t.len())),
        }
    }
}
