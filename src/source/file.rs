use super::{InterventionSource, ensure_unique_ids, scope_to_technician};
use crate::errors::{AppError, AppResult};
use crate::models::Intervention;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Csv,
}

/// Snapshot of the interventions API stored on disk, as a JSON array or a
/// CSV file whose header uses the API field names.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let format = match ext.as_str() {
            "json" => SnapshotFormat::Json,
            "csv" => SnapshotFormat::Csv,
            _ => return Err(AppError::UnsupportedSource(path.display().to_string())),
        };

        Ok(Self { path, format })
    }

    fn read_all(&self) -> AppResult<Vec<Intervention>> {
        if !self.path.exists() {
            warning(format!(
                "Data file '{}' not found: no interventions to show.",
                self.path.display()
            ));
            return Ok(Vec::new());
        }

        let records = match self.format {
            SnapshotFormat::Json => read_json(&self.path)?,
            SnapshotFormat::Csv => read_csv(&self.path)?,
        };

        debug!(path = %self.path.display(), count = records.len(), "loaded snapshot");
        Ok(records)
    }
}

impl InterventionSource for FileSource {
    fn fetch(&self, technician: Option<i64>) -> AppResult<Vec<Intervention>> {
        let records = self.read_all()?;
        ensure_unique_ids(&records)?;
        Ok(scope_to_technician(records, technician))
    }
}

fn read_json(path: &Path) -> AppResult<Vec<Intervention>> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    // The API answers `null` when there is nothing to list.
    let records: Option<Vec<Intervention>> = serde_json::from_str(&content)?;
    Ok(records.unwrap_or_default())
}

fn read_csv(path: &Path) -> AppResult<Vec<Intervention>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
