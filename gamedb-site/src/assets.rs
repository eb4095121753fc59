//! Static stylesheet and script shipped with the site.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::SiteError;

pub const STYLE_FILENAME: &str = "style.css";
pub const SCRIPT_FILENAME: &str = "script.js";

pub const STYLE_CSS: &str = include_str!("../assets/style.css");
pub const SCRIPT_JS: &str = include_str!("../assets/script.js");

/// Create `path` with `contents` unless it already exists.
///
/// Returns `true` if the file was written. An existing file is never
/// touched, even if its contents differ.
pub fn write_if_absent(path: &Path, contents: &str) -> Result<bool, SiteError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => {
            fill_new_file(path, file, contents.as_bytes())?;
            log::debug!("Created {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            log::debug!("Keeping existing {}", path.display());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Write `contents` into a file that was just created at `path`. On failure
/// the partial file is removed, otherwise it would be kept forever.
fn fill_new_file(path: &Path, mut writer: impl Write, contents: &[u8]) -> Result<(), SiteError> {
    if let Err(e) = writer.write_all(contents).and_then(|()| writer.flush()) {
        if let Err(remove) = std::fs::remove_file(path) {
            log::warn!("Could not remove partial {}: {}", path.display(), remove);
        }
        return Err(e.into());
    }
    Ok(())
}
