pub(crate) mod config;
pub(crate) mod missing;
pub(crate) mod report;
pub(crate) mod run;
pub(crate) mod site;

use gamedb_progress::{SettingsFile, SettingsOverrides, TrackerSettings, settings_path};

/// Resolve settings from CLI overrides and the settings file. A broken
/// settings file is reported and then ignored.
pub(crate) fn resolve_settings(overrides: SettingsOverrides) -> TrackerSettings {
    let file = SettingsFile::load_or_default(&settings_path());
    let settings = TrackerSettings::resolve(overrides, &file);
    log::debug!("Input directory: {}", settings.input_dir.display());
    log::debug!("Output directory: {}", settings.output_dir.display());
    log::debug!("Match strategy: {}", settings.strategy);
    settings
}

/// Local time with the date kept, for report and site timestamps.
pub(crate) fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
