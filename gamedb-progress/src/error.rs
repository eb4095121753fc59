use thiserror::Error;

use gamedb_catalog::CatalogError;

/// Errors that can occur while resolving settings or running the tracker.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("I/O error reading {path}: {source}")]
    SettingsIo {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    SettingsParse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
}
