//! Load snapshot records from JSON or CSV files

use csv::Reader;
use log::info;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::errors::{Error, Result};

/// Load all records from `<dir>/<stem>.json`, falling back to `<dir>/<stem>.csv`
pub fn load_records<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<Vec<T>> {
    let json_path = dir.join(format!("{}.json", stem));
    if json_path.is_file() {
        return load_json(&json_path);
    }

    let csv_path = dir.join(format!("{}.csv", stem));
    if csv_path.is_file() {
        return load_csv(&csv_path);
    }

    Err(Error::Io(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no {}.json or {}.csv in {}", stem, stem, dir.display()),
    )))
}

/// Load a JSON array of records
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<T> = serde_json::from_reader(reader)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load records from a CSV file with a header row
pub fn load_csv<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let records = load_csv_from_reader(File::open(path)?)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load CSV records from any reader (e.g., string buffer, network stream)
pub fn load_csv_from_reader<T: DeserializeOwned, R: io::Read>(reader: R) -> Result<Vec<T>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: T = result?;
        records.push(record);
    }

    Ok(records)
}
