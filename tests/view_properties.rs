//! Library-level checks of the table engine on the shared sample data.

mod common;
use common::sample_records;
use rintertrack::core::Core;
use rintertrack::core::ViewRequest;
use rintertrack::models::{Role, SortState};
use rintertrack::utils::text::contains_folded;
use rintertrack::{
    Column, FilterSet, Intervention, SortDirection, derive_view, format_technician,
    parse_duration_minutes,
};

fn ids(view: &[&Intervention]) -> Vec<i64> {
    view.iter().map(|r| r.inter_id).collect()
}

#[test]
fn every_row_matches_every_active_filter() {
    let records = sample_records();
    let cases = [
        (Column::Client, "ac"),
        (Column::Ville, "Y"),
        (Column::Technician, "jean"),
        (Column::Date, "2024-03"),
        (Column::Duration, "h"),
    ];

    for (column, pattern) in cases {
        let filters = FilterSet::new().with(column, pattern);
        let view = derive_view(&records, &filters, Column::InterId, SortDirection::Asc);
        assert!(!view.is_empty(), "no row for {column}={pattern}");

        for r in view {
            let value = match column {
                Column::Technician => Some(format_technician(
                    r.technician_fn.as_deref(),
                    r.technician_ln.as_deref(),
                )),
                Column::Client => r.client.clone(),
                Column::Ville => r.ville.clone(),
                Column::Date => r.date.clone(),
                Column::Duration => r.duration.clone(),
                _ => unreachable!(),
            };
            assert!(contains_folded(&value.unwrap(), pattern));
        }
    }
}

#[test]
fn output_is_a_permutation_of_the_filtered_input() {
    let records = sample_records();
    let filters = FilterSet::new().with(Column::Technician, "dupont");

    let mut got = ids(&derive_view(&records, &filters, Column::Km, SortDirection::Desc));
    got.sort();
    assert_eq!(got, vec![1, 4]);

    let mut all = ids(&derive_view(&records, &FilterSet::new(), Column::Client, SortDirection::Asc));
    all.sort();
    assert_eq!(all, vec![1, 2, 3, 4]);
}

#[test]
fn reversing_direction_reverses_distinct_keys() {
    let records = sample_records();
    let filters = FilterSet::new();

    for column in [Column::InterId, Column::Client, Column::Duration] {
        let asc = ids(&derive_view(&records, &filters, column, SortDirection::Asc));
        let mut desc = ids(&derive_view(&records, &filters, column, SortDirection::Desc));
        desc.reverse();
        assert_eq!(asc, desc, "column {column}");
    }
}

#[test]
fn equal_technicians_keep_input_order_both_ways() {
    let records = sample_records();
    let filters = FilterSet::new();

    let asc = ids(&derive_view(&records, &filters, Column::Technician, SortDirection::Asc));
    let desc = ids(&derive_view(&records, &filters, Column::Technician, SortDirection::Desc));
    assert_eq!(asc, vec![1, 4, 2, 3]);
    assert_eq!(desc, vec![3, 2, 1, 4]);
}

#[test]
fn duration_sort_scenario() {
    let records = vec![
        Intervention {
            inter_id: 1,
            duration: Some("1h".into()),
            client: Some("Acme".into()),
            ..Default::default()
        },
        Intervention {
            inter_id: 2,
            duration: Some("45m".into()),
            client: Some("Beta".into()),
            ..Default::default()
        },
    ];

    let filters = FilterSet::new().with(Column::Client, "a");
    let view = derive_view(&records, &filters, Column::Duration, SortDirection::Asc);
    assert_eq!(ids(&view), vec![2, 1]);
}

#[test]
fn huge_durations_sort_last_without_overflow() {
    let records = vec![
        Intervention {
            inter_id: 1,
            duration: Some("153722867280912931h".into()),
            ..Default::default()
        },
        Intervention {
            inter_id: 2,
            duration: Some("1234567890123456789012345h".into()),
            ..Default::default()
        },
        Intervention {
            inter_id: 3,
            duration: Some("2h".into()),
            ..Default::default()
        },
    ];

    let asc = derive_view(&records, &FilterSet::new(), Column::Duration, SortDirection::Asc);
    assert_eq!(ids(&asc), vec![2, 3, 1]);

    let desc = derive_view(&records, &FilterSet::new(), Column::Duration, SortDirection::Desc);
    assert_eq!(ids(&desc), vec![1, 3, 2]);
}

#[test]
fn accented_clients_sort_with_their_base_letter() {
    let clients = ["zeta", "Ștefan", "sud", "tango", "Čapek", "Ōsaka", "carlo"];
    let records: Vec<Intervention> = clients
        .iter()
        .enumerate()
        .map(|(i, c)| Intervention {
            inter_id: i as i64 + 1,
            client: Some((*c).into()),
            ..Default::default()
        })
        .collect();

    let view = derive_view(&records, &FilterSet::new(), Column::Client, SortDirection::Asc);
    let sorted: Vec<&str> = view.iter().filter_map(|r| r.client.as_deref()).collect();
    assert_eq!(
        sorted,
        vec!["Čapek", "carlo", "Ōsaka", "Ștefan", "sud", "tango", "zeta"]
    );
}

#[test]
fn derive_view_is_idempotent() {
    let records = sample_records();
    let filters = FilterSet::new().with(Column::Client, "a");

    let first = derive_view(&records, &filters, Column::Technician, SortDirection::Desc);
    let second = derive_view(&records, &filters, Column::Technician, SortDirection::Desc);
    assert_eq!(first, second);
}

#[test]
fn helpers_behave_as_documented() {
    assert_eq!(parse_duration_minutes(Some("2h30m")), 150);
    assert_eq!(parse_duration_minutes(Some("1h")), 60);
    assert_eq!(parse_duration_minutes(Some("45m")), 45);
    assert_eq!(parse_duration_minutes(Some("")), 0);
    assert_eq!(parse_duration_minutes(Some("garbage")), 0);

    assert_eq!(format_technician(Some("Jean"), Some("Dupont")), "Jean Dupont");
    assert_eq!(format_technician(Some(""), Some("")), "Non spécifiée");
    assert_eq!(format_technician(Some("Jean"), Some("")), "Jean");
}

#[test]
fn core_hides_technician_column_from_technicians() {
    let records = sample_records();
    let request = ViewRequest {
        filters: FilterSet::new(),
        sort: SortState::new(Column::Technician, SortDirection::Asc),
    };

    assert!(Core::build_view(&records, Role::Technician, &request).is_err());
    assert_eq!(Core::build_view(&records, Role::Admin, &request).unwrap().len(), 4);
    assert!(!Core::columns(Role::Technician).contains(&Column::Technician));
}
