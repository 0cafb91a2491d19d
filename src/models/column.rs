use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields stored directly on an intervention record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    InterId,
    Client,
    Ville,
    Km,
    Date,
    StartTime,
    FinishTime,
    Duration,
    InterUrl,
}

/// Columns computed from other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Derived {
    /// "First Last" built from `technicianFN` / `technicianLN`.
    Technician,
}

/// How a column obtains its filter value and its sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Direct(Field),
    Derived(Derived),
}

/// Column identifiers of the interventions table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Column {
    InterId,
    Client,
    Ville,
    Km,
    Technician,
    Date,
    StartTime,
    FinishTime,
    Duration,
    InterUrl,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::InterId,
        Column::Client,
        Column::Ville,
        Column::Km,
        Column::Technician,
        Column::Date,
        Column::StartTime,
        Column::FinishTime,
        Column::Duration,
        Column::InterUrl,
    ];

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::InterId => ColumnKind::Direct(Field::InterId),
            Column::Client => ColumnKind::Direct(Field::Client),
            Column::Ville => ColumnKind::Direct(Field::Ville),
            Column::Km => ColumnKind::Direct(Field::Km),
            Column::Technician => ColumnKind::Derived(Derived::Technician),
            Column::Date => ColumnKind::Direct(Field::Date),
            Column::StartTime => ColumnKind::Direct(Field::StartTime),
            Column::FinishTime => ColumnKind::Direct(Field::FinishTime),
            Column::Duration => ColumnKind::Direct(Field::Duration),
            Column::InterUrl => ColumnKind::Direct(Field::InterUrl),
        }
    }

    /// Identifier used in the API payload and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Column::InterId => "interId",
            Column::Client => "client",
            Column::Ville => "ville",
            Column::Km => "km",
            Column::Technician => "technician",
            Column::Date => "date",
            Column::StartTime => "startTime",
            Column::FinishTime => "finishTime",
            Column::Duration => "duration",
            Column::InterUrl => "interUrl",
        }
    }

    /// Table header, as shown in the original back office.
    pub fn header(self) -> &'static str {
        match self {
            Column::InterId => "N°",
            Column::Client => "Client",
            Column::Ville => "Ville",
            Column::Km => "Km",
            Column::Technician => "Technicien",
            Column::Date => "Date",
            Column::StartTime => "Début",
            Column::FinishTime => "Fin",
            Column::Duration => "Durée",
            Column::InterUrl => "Photo",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Column {
    type Err = AppError;

    /// Case-insensitive; snake_case spellings are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Column::ALL
            .into_iter()
            .find(|c| c.id().to_lowercase() == normalized)
            .ok_or_else(|| AppError::InvalidColumn(s.to_string()))
    }
}

impl TryFrom<String> for Column {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Column> for String {
    fn from(c: Column) -> Self {
        c.id().to_string()
    }
}
