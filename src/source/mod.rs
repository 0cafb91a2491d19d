//! Record sources: where the interventions snapshot comes from.

mod file;

pub use file::FileSource;

use crate::errors::{AppError, AppResult};
use crate::models::Intervention;
use std::collections::HashSet;

/// Supplies the interventions visible to the caller.
///
/// `technician = None` returns every record (administrator view);
/// `Some(id)` returns only the records assigned to that technician.
pub trait InterventionSource {
    fn fetch(&self, technician: Option<i64>) -> AppResult<Vec<Intervention>>;
}

/// Rejects snapshots where two records share an `interId`.
pub(crate) fn ensure_unique_ids(records: &[Intervention]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for r in records {
        if !seen.insert(r.inter_id) {
            return Err(AppError::DuplicateId(r.inter_id));
        }
    }
    Ok(())
}

pub(crate) fn scope_to_technician(
    records: Vec<Intervention>,
    technician: Option<i64>,
) -> Vec<Intervention> {
    match technician {
        None => records,
        Some(id) => records
            .into_iter()
            .filter(|r| r.technician_id == Some(id))
            .collect(),
    }
}
