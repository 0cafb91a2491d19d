//! Sort keys and the null-aware comparator of the interventions table.

use crate::models::{Column, ColumnKind, Derived, Field, Intervention, SortDirection};
use crate::utils::formatting::format_technician;
use crate::utils::text::{collate, fold};
use crate::utils::time::parse_duration_minutes;
use std::cmp::Ordering;

/// Comparable value extracted once per record before sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Int(i64),
    Num(f64),
    /// Case-folded text.
    Text(String),
}

impl SortKey {
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Num(a), SortKey::Num(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => collate(a, b),
            // A column always yields one kind of key.
            _ => Ordering::Equal,
        }
    }
}

/// Sort key of `record` for `column`; `None` when the underlying field is null.
pub fn sort_key(record: &Intervention, column: Column) -> Option<SortKey> {
    match column.kind() {
        ColumnKind::Derived(Derived::Technician) => Some(SortKey::Text(fold(&format_technician(
            record.technician_fn.as_deref(),
            record.technician_ln.as_deref(),
        )))),
        ColumnKind::Direct(Field::InterId) => Some(SortKey::Int(record.inter_id)),
        ColumnKind::Direct(Field::Km) => record.km.map(SortKey::Num),
        ColumnKind::Direct(Field::Duration) => Some(SortKey::Int(parse_duration_minutes(
            record.duration.as_deref(),
        ))),
        ColumnKind::Direct(field) => record.field_str(field).map(|s| SortKey::Text(fold(s))),
    }
}

/// Null keys sit below every defined key when ascending and above every
/// defined key when descending, whichever side they are on. The direction
/// only flips comparisons between two defined keys. Two nulls are equal,
/// which keeps them in input order under a stable sort.
pub fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    let null_side = match direction {
        SortDirection::Asc => Ordering::Less,
        SortDirection::Desc => Ordering::Greater,
    };

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => null_side,
        (Some(_), None) => null_side.reverse(),
        (Some(a), Some(b)) => direction.apply(a.compare(b)),
    }
}
