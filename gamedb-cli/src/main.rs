//! gamedb CLI
//!
//! Reports how complete each per-console game catalog is against the dead
//! consoles reference dataset, and renders the same data as a static site.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = dispatch(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let command = cli.command.as_ref().unwrap_or(&Commands::Run);

    // Printing the settings path must work even when the file is broken.
    if let Commands::Config {
        action: ConfigAction::Path,
    } = command
    {
        commands::config::run_config_path();
        return Ok(());
    }

    let settings = commands::resolve_settings(cli.overrides());

    match command {
        Commands::Run => commands::run::run_all(&settings),
        Commands::Report => commands::report::run_report(&settings),
        Commands::Site => commands::site::run_site(&settings),
        Commands::Missing { limit } => commands::missing::run_missing(&settings, *limit),
        Commands::Config { .. } => commands::config::run_config_show(&settings),
    }
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
