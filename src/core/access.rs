//! Role-based column visibility.

use crate::errors::{AppError, AppResult};
use crate::models::{Column, FilterSet, Role, SortState};

/// Columns a role may see, in display order. Only administrators see the
/// technician column.
pub fn visible_columns(role: Role) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|c| is_visible(role, *c))
        .collect()
}

pub fn is_visible(role: Role, column: Column) -> bool {
    role.is_admin() || column != Column::Technician
}

/// Rejects filters or a sort on columns hidden from `role`.
pub fn check_view_request(role: Role, filters: &FilterSet, sort: &SortState) -> AppResult<()> {
    if let Some((column, _)) = filters.active().find(|(c, _)| !is_visible(role, *c)) {
        return Err(AppError::ColumnNotVisible(column.to_string()));
    }
    if !is_visible(role, sort.column) {
        return Err(AppError::ColumnNotVisible(sort.column.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortDirection;

    #[test]
    fn admins_see_every_column() {
        assert_eq!(visible_columns(Role::Admin), Column::ALL.to_vec());
    }

    #[test]
    fn technicians_never_see_technician_column() {
        let cols = visible_columns(Role::Technician);
        assert_eq!(cols.len(), Column::ALL.len() - 1);
        assert!(!cols.contains(&Column::Technician));
    }

    #[test]
    fn technician_cannot_filter_or_sort_by_technician() {
        let sort = SortState::default();
        let filters = FilterSet::new().with(Column::Technician, "jean");
        assert!(matches!(
            check_view_request(Role::Technician, &filters, &sort),
            Err(AppError::ColumnNotVisible(_))
        ));

        let by_tech = SortState::new(Column::Technician, SortDirection::Asc);
        assert!(check_view_request(Role::Technician, &FilterSet::new(), &by_tech).is_err());
        assert!(check_view_request(Role::Admin, &filters, &by_tech).is_ok());
    }

    #[test]
    fn empty_technician_pattern_is_ignored() {
        let filters = FilterSet::new().with(Column::Technician, "");
        assert!(check_view_request(Role::Technician, &filters, &SortState::default()).is_ok());
    }
}
