use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedb_progress::{SettingsFile, TrackerSettings, settings_path};

use crate::CliError;

pub(crate) fn run_config_show(settings: &TrackerSettings) -> Result<(), CliError> {
    let path = settings_path();
    log::info!(
        "{}",
        "Effective settings".if_supports_color(Stdout, |t| t.bold()),
    );
    if !path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display(),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else if let Err(e) = SettingsFile::load(&path) {
        log::info!(
            "  Settings file: {} {}",
            path.display(),
            "(invalid, using defaults)".if_supports_color(Stdout, |t| t.yellow()),
        );
        log::info!("  {}", e);
    } else {
        log::info!("  Settings file: {}", path.display());
    }
    crate::log_blank();
    for line in settings.to_toml_string()?.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
