//! The immutable launch table backing every chart.

use polars::prelude::*;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::checksum::calculate_checksum;
use super::error::{LoadError, LoadResult};
use crate::models::{LaunchRecord, OutcomeClass, PayloadRange};

pub const LAUNCH_SITE: &str = "Launch Site";
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const CLASS: &str = "class";
pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";
pub const FLIGHT_NUMBER: &str = "Flight Number";
pub const BOOSTER_VERSION: &str = "Booster Version";

/// Columns that must be present in the CSV header.
pub const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_VERSION_CATEGORY];

/// Launch records loaded once at startup.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: PayloadRange,
    checksum: String,
}

impl LaunchTable {
    /// Load the launch table from a CSV file.
    ///
    /// # Errors
    /// * `LoadError::NotFound` if `path` does not exist
    /// * `LoadError::Unreadable` if the file cannot be read or parsed
    /// * `LoadError::MissingColumn` if any of [`REQUIRED_COLUMNS`] is absent
    /// * `LoadError::InvalidValue` if a required cell is null or out of domain
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|e| unreadable(path, e))?;
        let checksum = calculate_checksum(&bytes);
        let df = parse_launch_csv(bytes, path)?;
        let records = dataframe_to_records(&df)?;

        let mut table = Self::from_records(records);
        table.checksum = checksum;

        log::info!(
            "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
            table.len(),
            path.display(),
            table.sites.len(),
            table.payload_bounds.low,
            table.payload_bounds.high
        );
        Ok(table)
    }

    /// Build a table from records already in memory.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |bounds: Option<(f64, f64)>, mass| match bounds {
                None => Some((mass, mass)),
                Some((lo, hi)) => Some((lo.min(mass), hi.max(mass))),
            })
            .map(PayloadRange::from)
            .unwrap_or(PayloadRange::new(0.0, 0.0));

        Self {
            records,
            sites,
            payload_bounds,
            checksum: String::new(),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed (min, max) payload mass; `(0, 0)` for an empty table.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    /// SHA-256 of the source file; empty for tables built in memory.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn unreadable(path: &Path, err: impl ToString) -> LoadError {
    LoadError::Unreadable {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

/// Parse launch CSV bytes into a DataFrame and check the header.
///
/// `source` is only used in error messages.
pub fn parse_launch_csv(bytes: Vec<u8>, source: &Path) -> LoadResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| unreadable(source, e))?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|name| name == required) {
            return Err(LoadError::missing_column(required));
        }
    }

    Ok(df)
}

fn cast_column(df: &DataFrame, name: &str, dtype: &DataType) -> LoadResult<Column> {
    df.column(name)
        .and_then(|c| c.cast(dtype))
        .map_err(|e| LoadError::invalid_value(name, 0, format!("cannot read column as {}: {}", dtype, e)))
}

fn outcome_class(value: f64) -> Option<OutcomeClass> {
    if value == 0.0 {
        Some(OutcomeClass::Failure)
    } else if value == 1.0 {
        Some(OutcomeClass::Success)
    } else {
        None
    }
}

/// Convert a launch DataFrame into records.
pub fn dataframe_to_records(df: &DataFrame) -> LoadResult<Vec<LaunchRecord>> {
    let type_err = |name: &str| {
        let name = name.to_string();
        move |e: PolarsError| LoadError::invalid_value(name, 0, e.to_string())
    };

    let site_col = cast_column(df, LAUNCH_SITE, &DataType::String)?;
    let payload_col = cast_column(df, PAYLOAD_MASS, &DataType::Float64)?;
    // Float64 so that fractional classes are seen and rejected, not truncated
    let class_col = cast_column(df, CLASS, &DataType::Float64)?;
    let category_col = cast_column(df, BOOSTER_VERSION_CATEGORY, &DataType::String)?;

    let sites = site_col.str().map_err(type_err(LAUNCH_SITE))?;
    let payloads = payload_col.f64().map_err(type_err(PAYLOAD_MASS))?;
    let classes = class_col.f64().map_err(type_err(CLASS))?;
    let categories = category_col.str().map_err(type_err(BOOSTER_VERSION_CATEGORY))?;

    let flight_col = if df.column(FLIGHT_NUMBER).is_ok() {
        Some(cast_column(df, FLIGHT_NUMBER, &DataType::Int64)?)
    } else {
        None
    };
    let version_col = if df.column(BOOSTER_VERSION).is_ok() {
        Some(cast_column(df, BOOSTER_VERSION, &DataType::String)?)
    } else {
        None
    };
    let flights = flight_col.as_ref().and_then(|c| c.i64().ok());
    let versions = version_col.as_ref().and_then(|c| c.str().ok());

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let launch_site = sites
            .get(i)
            .ok_or_else(|| LoadError::invalid_value(LAUNCH_SITE, i, "missing launch site"))?;

        let payload_mass_kg = payloads
            .get(i)
            .ok_or_else(|| LoadError::invalid_value(PAYLOAD_MASS, i, "missing payload mass"))?;
        if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
            return Err(LoadError::invalid_value(
                PAYLOAD_MASS,
                i,
                format!("payload mass must be a non-negative number, got {}", payload_mass_kg),
            ));
        }

        let class = classes
            .get(i)
            .ok_or_else(|| LoadError::invalid_value(CLASS, i, "missing outcome class"))
            .and_then(|v| outcome_class(v).ok_or_else(|| {
                LoadError::invalid_value(CLASS, i, format!("outcome class must be 0 or 1, got {}", v))
            }))?;

        let category = categories.get(i).ok_or_else(|| {
            LoadError::invalid_value(BOOSTER_VERSION_CATEGORY, i, "missing booster version category")
        })?;

        records.push(LaunchRecord {
            flight_number: flights.and_then(|col| col.get(i)),
            launch_site: launch_site.to_string(),
            payload_mass_kg,
            class,
            booster_version: versions.and_then(|col| col.get(i)).map(|s| s.to_string()),
            booster_version_category: category.to_string(),
        });
    }

    Ok(records)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
