//! Filtered and sorted view of the interventions table.

use super::compare::{SortKey, compare_keys, sort_key};
use crate::models::{Column, ColumnKind, Derived, FilterSet, Intervention, SortDirection};
use crate::utils::formatting::format_technician;
use crate::utils::text::contains_folded;

/// Text a filter pattern is matched against; `None` when the field is null.
pub fn filter_value(record: &Intervention, column: Column) -> Option<String> {
    match column.kind() {
        ColumnKind::Derived(Derived::Technician) => Some(format_technician(
            record.technician_fn.as_deref(),
            record.technician_ln.as_deref(),
        )),
        ColumnKind::Direct(field) => record.field_text(field),
    }
}

/// True when `record` satisfies every non-empty pattern of `filters`.
pub fn matches(record: &Intervention, filters: &FilterSet) -> bool {
    filters.active().all(|(column, pattern)| {
        filter_value(record, column).is_some_and(|value| contains_folded(&value, pattern))
    })
}

/// Applies `filters`, then a stable sort on `sort_column` / `direction`.
///
/// Returns references to the input records; equal keys keep their input
/// order. Pure: the same arguments always give the same sequence.
pub fn derive_view<'a>(
    records: &'a [Intervention],
    filters: &FilterSet,
    sort_column: Column,
    direction: SortDirection,
) -> Vec<&'a Intervention> {
    let mut keyed: Vec<(Option<SortKey>, &Intervention)> = records
        .iter()
        .filter(|r| matches(r, filters))
        .map(|r| (sort_key(r, sort_column), r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), direction));

    keyed.into_iter().map(|(_, r)| r).collect()
}
