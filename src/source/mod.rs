pub mod types;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use self::types::CategoryRecord;

/// Parse a JSON array of categories as returned by the commerce API.
pub fn parse_records(json: &str) -> Result<Vec<CategoryRecord>> {
    let records: Vec<CategoryRecord> =
        serde_json::from_str(json).context("category payload is not a JSON array of categories")?;
    tracing::debug!("Parsed {} category records", records.len());
    Ok(records)
}

/// Read categories from any reader (HTTP body, file, stdin).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CategoryRecord>> {
    let records: Vec<CategoryRecord> = serde_json::from_reader(reader)
        .context("category payload is not a JSON array of categories")?;
    tracing::debug!("Read {} category records", records.len());
    Ok(records)
}

/// Load a category dump from disk.
pub fn load_records(path: &Path) -> Result<Vec<CategoryRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open category dump {}", path.display()))?;
    let records = read_records(BufReader::new(file))
        .with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::info!("Loaded {} categories from {}", records.len(), path.display());
    Ok(records)
}
