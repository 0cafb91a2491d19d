// src/export/model.rs

use crate::models::{Intervention, Role};
use crate::utils::{format_date, format_technician, parse_duration_minutes};
use serde::Serialize;

/// Flat, display-formatted row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InterventionExport {
    pub id: i64,
    pub client: String,
    pub ville: String,
    pub km: Option<f64>,
    /// Only present in administrator exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    pub date: String,
    pub start_time: String,
    pub finish_time: String,
    pub duration: String,
    pub duration_minutes: i64,
    pub photo_url: String,
}

impl InterventionExport {
    pub fn from_record(r: &Intervention, role: Role) -> Self {
        let technician = role.is_admin().then(|| {
            format_technician(r.technician_fn.as_deref(), r.technician_ln.as_deref())
        });

        Self {
            id: r.inter_id,
            client: r.client.clone().unwrap_or_default(),
            ville: r.ville.clone().unwrap_or_default(),
            km: r.km,
            technician,
            date: format_date(r.date.as_deref()),
            start_time: r.start_time.clone().unwrap_or_default(),
            finish_time: r.finish_time.clone().unwrap_or_default(),
            duration: r.duration.clone().unwrap_or_default(),
            duration_minutes: parse_duration_minutes(r.duration.as_deref()),
            photo_url: r.inter_url.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn to_rows(view: &[&Intervention], role: Role) -> Vec<InterventionExport> {
    view.iter()
        .map(|r| InterventionExport::from_record(r, role))
        .collect()
}
