// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::core::access::visible_columns;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_rows;
use crate::models::{Intervention, Role};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use tracing::debug;

/// High-level export of a derived view.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes `view` to `file` in `format`.
    ///
    /// - `file`: absolute path of the output file (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export(
        view: &[&Intervention],
        role: Role,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if view.is_empty() {
            warning("No interventions match the selected filters. Nothing to export.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        let rows = to_rows(view, role);
        debug!(count = rows.len(), format = format.as_str(), "exporting view");

        match format {
            ExportFormat::Csv => export_csv(&rows, &visible_columns(role), &path),
            ExportFormat::Json => export_json(&rows, &path),
        }
    }
}
