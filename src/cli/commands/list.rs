use super::{load_context, view_request};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::models::{Column, Intervention};
use crate::ui::messages::{header, info};
use crate::utils::table::{Align, Column as TableColumn, Table};
use crate::utils::time::format_minutes;
use crate::utils::{format_date, format_technician, parse_duration_minutes};
use std::io::IsTerminal;

const PHOTO_WIDTH: usize = 32;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { view } = &cli.command {
        let ctx = load_context(cli, cfg)?;
        let request = view_request(view, cfg)?;
        let rows = Core::build_view(&ctx.records, ctx.role, &request)?;

        header(format!(
            "Interventions (sorted by {} {})",
            request.sort.column,
            request.sort.direction.as_str()
        ));

        if rows.is_empty() {
            info("Aucune intervention");
            return Ok(());
        }

        let columns = Core::columns(ctx.role);
        let color = std::io::stdout().is_terminal();
        print!("{}", render_table(&rows, &columns, cfg.separator(), color));
        println!("\n{} / {} interventions", rows.len(), ctx.records.len());
    }
    Ok(())
}

/// Display text of one cell.
pub(crate) fn cell_text(r: &Intervention, column: Column) -> String {
    let or_dash = |v: Option<&str>| v.filter(|s| !s.is_empty()).unwrap_or("-").to_string();

    match column {
        Column::InterId => r.inter_id.to_string(),
        Column::Client => or_dash(r.client.as_deref()),
        Column::Ville => or_dash(r.ville.as_deref()),
        Column::Km => r.km.map(|k| k.to_string()).unwrap_or_else(|| "-".into()),
        Column::Technician => {
            format_technician(r.technician_fn.as_deref(), r.technician_ln.as_deref())
        }
        Column::Date => format_date(r.date.as_deref()),
        Column::StartTime => or_dash(r.start_time.as_deref()),
        Column::FinishTime => or_dash(r.finish_time.as_deref()),
        Column::Duration => format_minutes(parse_duration_minutes(r.duration.as_deref())),
        Column::InterUrl if r.has_photo() => or_dash(r.inter_url.as_deref()),
        Column::InterUrl => "-".to_string(),
    }
}

pub(crate) fn render_table(
    rows: &[&Intervention],
    columns: &[Column],
    separator: char,
    color: bool,
) -> String {
    let table_columns = columns
        .iter()
        .map(|c| {
            let align = match c {
                Column::InterId | Column::Km | Column::Duration => Align::Right,
                _ => Align::Left,
            };
            let col = TableColumn::new(c.header(), align);
            if *c == Column::InterUrl {
                col.max_width(PHOTO_WIDTH)
            } else {
                col
            }
        })
        .collect();

    let mut table = Table::new(table_columns).separator(separator).colored(color);
    for r in rows {
        table.add_row(columns.iter().map(|c| cell_text(r, *c)).collect());
    }
    table.render()
}
