use super::{load_context, view_request};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        view,
    } = &cli.command
    {
        let ctx = load_context(cli, cfg)?;
        let request = view_request(view, cfg)?;
        let rows = Core::build_view(&ctx.records, ctx.role, &request)?;

        ExportLogic::export(&rows, ctx.role, *format, file, *force)?;
    }
    Ok(())
}
