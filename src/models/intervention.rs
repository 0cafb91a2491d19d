use serde::{Deserialize, Serialize};

use super::column::Field;

/// A field-service visit as delivered by the interventions API.
///
/// Every field except `inter_id` may be missing in the payload; the table
/// engine treats missing values as nulls instead of rejecting the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    pub inter_id: i64,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub ville: Option<String>,
    #[serde(default)]
    pub km: Option<f64>,
    #[serde(default, rename = "technicianFN")]
    pub technician_fn: Option<String>,
    #[serde(default, rename = "technicianLN")]
    pub technician_ln: Option<String>,
    #[serde(default)]
    pub technician_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub finish_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub inter_url: Option<String>,
}

impl Intervention {
    pub fn new(inter_id: i64) -> Self {
        Self {
            inter_id,
            ..Default::default()
        }
    }

    /// Raw value of a stored field coerced to text; `None` when the field is absent.
    pub fn field_text(&self, field: Field) -> Option<String> {
        match field {
            Field::InterId => Some(self.inter_id.to_string()),
            Field::Km => self.km.map(|km| km.to_string()),
            _ => self.field_str(field).map(str::to_string),
        }
    }

    /// Borrowed access to the text fields. Numeric fields return `None`.
    pub fn field_str(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Client => &self.client,
            Field::Ville => &self.ville,
            Field::Date => &self.date,
            Field::StartTime => &self.start_time,
            Field::FinishTime => &self.finish_time,
            Field::Duration => &self.duration,
            Field::InterUrl => &self.inter_url,
            Field::InterId | Field::Km => return None,
        };
        value.as_deref()
    }

    pub fn has_photo(&self) -> bool {
        self.inter_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}
