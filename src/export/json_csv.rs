// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{InterventionExport, notify_export_success};
use crate::models::Column;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON export: array of rows, pretty-printed, keys from the serde names.
pub(crate) fn export_json(rows: &[InterventionExport], path: &Path) -> AppResult<()> {
    info(format!(
        "Exporting {} intervention(s) to JSON: {}",
        rows.len(),
        path.display()
    ));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Header cells contributed by `column`. `Durée` is followed by the raw
/// minute count so spreadsheets can sum it.
fn csv_headers(column: Column) -> Vec<&'static str> {
    match column {
        Column::Duration => vec![column.header(), "Minutes"],
        _ => vec![column.header()],
    }
}

/// Row cells for `column`, aligned with `csv_headers`.
fn csv_cells(row: &InterventionExport, column: Column) -> Vec<String> {
    match column {
        Column::InterId => vec![row.id.to_string()],
        Column::Client => vec![row.client.clone()],
        Column::Ville => vec![row.ville.clone()],
        Column::Km => vec![row.km.map(|k| k.to_string()).unwrap_or_default()],
        Column::Technician => vec![row.technician.clone().unwrap_or_default()],
        Column::Date => vec![row.date.clone()],
        Column::StartTime => vec![row.start_time.clone()],
        Column::FinishTime => vec![row.finish_time.clone()],
        Column::Duration => vec![row.duration.clone(), row.duration_minutes.to_string()],
        Column::InterUrl => vec![row.photo_url.clone()],
    }
}

/// CSV export laid out like the terminal table: same French labels, same
/// column order, only the `columns` the caller may see.
pub(crate) fn export_csv(
    rows: &[InterventionExport],
    columns: &[Column],
    path: &Path,
) -> AppResult<()> {
    info(format!(
        "Exporting {} intervention(s) to CSV: {}",
        rows.len(),
        path.display()
    ));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    let header: Vec<&str> = columns.iter().flat_map(|c| csv_headers(*c)).collect();
    wtr.write_record(&header)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in rows {
        let record: Vec<String> = columns.iter().flat_map(|c| csv_cells(row, *c)).collect();
        wtr.write_record(&record)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
