use thiserror::Error;

use gamedb_progress::ProgressError;
use gamedb_site::SiteError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings or tracker failure
    #[error("{0}")]
    Tracker(#[from] ProgressError),

    /// Site generation failure
    #[error("Site generation failed: {0}")]
    Site(#[from] SiteError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
