//! Static HTML site generation for the game database tracker.
//!
//! The site is three files in one directory: `index.html`, regenerated on
//! every run, plus `style.css` and `script.js`, written once and then left
//! alone so they can be customized by hand.

pub mod assets;
pub mod date;
pub mod error;
pub mod html;
pub mod render;

pub use date::format_release_date;
pub use error::SiteError;
pub use render::{SitePage, console_slug, render_index};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Filename of the generated HTML document.
pub const INDEX_FILENAME: &str = "index.html";

/// What [`write_site`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteArtifacts {
    pub index_path: PathBuf,
    /// `false` when an existing `style.css` was left in place.
    pub style_written: bool,
    /// `false` when an existing `script.js` was left in place.
    pub script_written: bool,
}

/// Write the site into `output_dir`, creating the directory if needed.
pub fn write_site(output_dir: &Path, page: &SitePage<'_>) -> Result<SiteArtifacts, SiteError> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(SiteError::InvalidOutput(format!(
            "{} exists and is not a directory",
            output_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    let style_written = assets::write_if_absent(
        &output_dir.join(assets::STYLE_FILENAME),
        assets::STYLE_CSS,
    )?;
    let script_written = assets::write_if_absent(
        &output_dir.join(assets::SCRIPT_FILENAME),
        assets::SCRIPT_JS,
    )?;

    let html = render_index(page);
    let index_path = output_dir.join(INDEX_FILENAME);
    let mut file = fs::File::create(&index_path)?;
    file.write_all(html.as_bytes())?;
    log::debug!("Wrote {} ({} bytes)", index_path.display(), html.len());

    Ok(SiteArtifacts {
        index_path,
        style_written,
        script_written,
    })
}
