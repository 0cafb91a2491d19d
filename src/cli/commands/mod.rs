pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::cli::parser::{Cli, ViewArgs};
use crate::config::Config;
use crate::core::ViewRequest;
use crate::errors::{AppError, AppResult};
use crate::models::{FilterSet, Intervention, Role, SortState};
use crate::source::{FileSource, InterventionSource};
use tracing::debug;

/// Caller identity and snapshot shared by the view commands.
pub(crate) struct ViewContext {
    pub role: Role,
    pub records: Vec<Intervention>,
}

/// Resolves the role, then fetches the records that role may see.
pub(crate) fn load_context(cli: &Cli, cfg: &Config) -> AppResult<ViewContext> {
    let role = cli.role.unwrap_or(cfg.role);

    let technician = match role {
        Role::Admin => None,
        Role::Technician => Some(
            cli.technician
                .or(cfg.technician_id)
                .ok_or(AppError::MissingTechnicianId)?,
        ),
    };

    let source = FileSource::new(cfg.data_path())?;
    let records = source.fetch(technician)?;

    debug!(
        role = role.as_str(),
        technician = ?technician,
        count = records.len(),
        "records fetched"
    );

    Ok(ViewContext { role, records })
}

/// Builds the view request from CLI arguments, falling back to the
/// configured default sort.
pub(crate) fn view_request(args: &ViewArgs, cfg: &Config) -> AppResult<ViewRequest> {
    let filters = FilterSet::from_args(&args.filters)?;

    let column = match &args.sort {
        Some(s) => s.parse()?,
        None => cfg.default_sort,
    };
    let direction = match &args.direction {
        Some(d) => d.parse()?,
        None => cfg.default_direction,
    };

    Ok(ViewRequest {
        filters,
        sort: SortState::new(column, direction),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, SortDirection};

    #[test]
    fn request_uses_config_defaults() {
        let cfg = Config {
            default_sort: Column::Date,
            default_direction: SortDirection::Desc,
            ..Config::default()
        };

        let req = view_request(&ViewArgs::default(), &cfg).unwrap();
        assert_eq!(req.sort, SortState::new(Column::Date, SortDirection::Desc));
        assert!(req.filters.is_empty());
    }

    #[test]
    fn request_arguments_override_defaults() {
        let args = ViewArgs {
            filters: vec!["client=acme".into()],
            sort: Some("duration".into()),
            direction: Some("ascending".into()),
        };
        let cfg = Config {
            default_direction: SortDirection::Desc,
            ..Config::default()
        };

        let req = view_request(&args, &cfg).unwrap();
        assert_eq!(req.sort, SortState::new(Column::Duration, SortDirection::Asc));
        assert_eq!(req.filters.get(Column::Client), Some("acme"));
    }

    #[test]
    fn unknown_sort_column_is_an_error() {
        let args = ViewArgs {
            sort: Some("photo".into()),
            ..ViewArgs::default()
        };
        assert!(matches!(
            view_request(&args, &Config::default()),
            Err(AppError::InvalidColumn(_))
        ));
    }

    #[test]
    fn unknown_direction_is_an_error() {
        let args = ViewArgs {
            direction: Some("sideways".into()),
            ..ViewArgs::default()
        };
        assert!(matches!(
            view_request(&args, &Config::default()),
            Err(AppError::InvalidDirection(d)) if d == "sideways"
        ));
    }
}
