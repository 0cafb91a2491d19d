use crate::core::{access, view};
use crate::errors::AppResult;
use crate::models::{Column, FilterSet, Intervention, Role, SortState};
use tracing::debug;

/// Everything the list and export commands need to render one view.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    pub filters: FilterSet,
    pub sort: SortState,
}

pub struct Core;

impl Core {
    /// Checks the request against the caller's role and derives the view.
    pub fn build_view<'a>(
        records: &'a [Intervention],
        role: Role,
        request: &ViewRequest,
    ) -> AppResult<Vec<&'a Intervention>> {
        access::check_view_request(role, &request.filters, &request.sort)?;

        let rows = view::derive_view(
            records,
            &request.filters,
            request.sort.column,
            request.sort.direction,
        );

        debug!(
            total = records.len(),
            shown = rows.len(),
            sort = %request.sort.column,
            direction = request.sort.direction.as_str(),
            "derived interventions view"
        );

        Ok(rows)
    }

    pub fn columns(role: Role) -> Vec<Column> {
        access::visible_columns(role)
    }
}
