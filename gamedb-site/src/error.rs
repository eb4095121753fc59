/// Errors that can occur during site generation.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output directory: {0}")]
    InvalidOutput(String),
}
