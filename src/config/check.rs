use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries.
pub const EXPECTED_KEYS: [&str; 6] = [
    "data_file",
    "role",
    "technician_id",
    "default_sort",
    "default_direction",
    "separator_char",
];

/// Keys absent from the YAML document at `path`.
/// A missing file reports every key.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    missing_fields_in(&content)
}

pub fn missing_fields_in(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = match yaml {
        Value::Mapping(m) => m,
        Value::Null => return Ok(EXPECTED_KEYS.to_vec()),
        _ => {
            return Err(AppError::Config(
                "configuration file is not a YAML mapping".to_string(),
            ));
        }
    };

    Ok(EXPECTED_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
