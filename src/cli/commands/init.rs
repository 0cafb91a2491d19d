use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty interventions snapshot, unless the data file already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rInterTrack…");

    Config::init_all(cli.data.clone(), cli.test)?;

    println!("🎉 rInterTrack initialization completed!");
    Ok(())
}
