use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{filter::FilterCriteria, location::LocationRecord};

/// Parse a JSON array of location records, rejecting implausible coordinates.
pub fn parse_locations(text: &str) -> Result<Vec<LocationRecord>> {
    let locations: Vec<LocationRecord> = serde_json::from_str(text)
        .context("Failed to parse location records")?;
    for (i, location) in locations.iter().enumerate() {
        location.validate().with_context(|| format!("Invalid location record at index {i}"))?;
    }
    tracing::debug!(count = locations.len(), "parsed location records");
    Ok(locations)
}

/// Read a JSON array of location records from `path`.
pub fn read_locations(path: &Path) -> Result<Vec<LocationRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locations file: {}", path.display()))?;
    parse_locations(&text).with_context(|| format!("In {}", path.display()))
}

/// Parse filter criteria in the dashboard's JSON shape. Unknown keys are ignored.
pub fn parse_criteria(text: &str) -> Result<FilterCriteria> {
    serde_json::from_str(text).context("Failed to parse filter criteria")
}

/// Read filter criteria from `path`.
pub fn read_criteria(path: &Path) -> Result<FilterCriteria> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read criteria file: {}", path.display()))?;
    parse_criteria(&text).with_context(|| format!("In {}", path.display()))
}

/// Pretty-printed JSON text for any serializable value.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}
