//! Loading records from JSON dumps of the REST API

use anyhow::{bail, Context};
use contracts::shared::record::{Record, DEFAULT_DATE_CANDIDATES};
use serde_json::Value;
use std::path::Path;

/// Keys under which list endpoints wrap their arrays
const ENVELOPE_KEYS: &[&str] = &["data", "items"];

/// Parses a JSON array of objects, or an object wrapping it under `data`/`items`.
///
/// The display date of every record is resolved here, once.
pub fn parse_records(json: &str) -> anyhow::Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json).context("records are not valid JSON")?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let key = ENVELOPE_KEYS
                .iter()
                .find(|key| matches!(map.get(**key), Some(Value::Array(_))));
            match key.and_then(|key| map.remove(*key)) {
                Some(Value::Array(items)) => items,
                _ => bail!("expected a JSON array or an object with a `data`/`items` array"),
            }
        }
        _ => bail!("expected a JSON array or an object with a `data`/`items` array"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Record::from_value(item)
                .map(|record| record.with_display_date(DEFAULT_DATE_CANDIDATES))
                .with_context(|| format!("item {} is not a JSON object", index))
        })
        .collect()
}

/// Reads and parses a records file
pub fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read records from {}", path.display()))?;
    let records = parse_records(&contents)
        .with_context(|| format!("cannot parse records from {}", path.display()))?;
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
