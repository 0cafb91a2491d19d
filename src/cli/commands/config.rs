use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_fields;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}: defaults are in use (run `rintertrack init`).",
                    path.display()
                ));
                return Ok(());
            }

            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in &missing {
                    warning(format!("Missing field: {key} (default value in use)"));
                }
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check.");
        }
    }

    Ok(())
}
