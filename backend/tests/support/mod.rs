#![allow(dead_code)]

use std::io::Write;

use spacex_dash::api::{LaunchRecord, OutcomeClass};
use spacex_dash::data::LaunchTable;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str =
    "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";

/// Write `content` to a temporary CSV file that lives as long as the handle.
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("create temp file");
    write!(temp_file, "{}", content).expect("write temp csv");
    temp_file
}

/// The four-record table used throughout the scenarios.
pub fn scenario_records() -> Vec<LaunchRecord> {
    vec![
        LaunchRecord::new("KSC LC-39A", 5000.0, OutcomeClass::Success, "F9"),
        LaunchRecord::new("KSC LC-39A", 3000.0, OutcomeClass::Failure, "F9"),
        LaunchRecord::new("CCAFS LC-40", 2000.0, OutcomeClass::Success, "F9"),
        LaunchRecord::new("CCAFS LC-40", 2000.0, OutcomeClass::Success, "F9B5"),
    ]
}

pub fn scenario_table() -> LaunchTable {
    LaunchTable::from_records(scenario_records())
}

/// Same records as [`scenario_records`], as CSV text.
pub fn scenario_csv() -> String {
    let mut csv = CSV_HEADER.to_string();
    for (i, r) in scenario_records().iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{},F9 test B{:04},{}\n",
            i + 1,
            r.launch_site,
            r.class,
            r.payload_mass_kg,
            1000 + i,
            r.booster_version_category
        ));
    }
    csv
}

/// Path of the bundled launch data.
pub fn bundled_csv_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("spacex_launch_dash.csv")
}
