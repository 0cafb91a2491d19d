use crate::export::ExportFormat;
use crate::models::Role;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rInterTrack
/// CLI application to browse field-service interventions
#[derive(Parser)]
#[command(
    name = "rintertrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse, filter, sort and export field-service interventions",
    long_about = None
)]
pub struct Cli {
    /// Override the interventions data file (JSON or CSV snapshot)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the caller role
    #[arg(global = true, long = "role", value_enum)]
    pub role: Option<Role>,

    /// Technician id used for the technician role
    #[arg(global = true, long = "technician")]
    pub technician: Option<i64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter and sort options shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Column filter, repeatable (e.g. --filter client=acme --filter ville=lyon)
    #[arg(long = "filter", short = 'f', value_name = "COLUMN=PATTERN")]
    pub filters: Vec<String>,

    /// Sort column (interId, client, ville, km, technician, date, startTime,
    /// finishTime, duration, interUrl)
    #[arg(long = "sort", short = 's', value_name = "COLUMN")]
    pub sort: Option<String>,

    /// Sort direction (asc, desc, ascending, descending)
    #[arg(long = "direction", short = 'd', value_name = "DIRECTION")]
    pub direction: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List interventions as a table
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Export the filtered and sorted interventions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Overwrite output file without confirmation")]
        force: bool,

        #[command(flatten)]
        view: ViewArgs,
    },
}
