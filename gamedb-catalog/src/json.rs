//! JSON loading for the reference dataset and individual catalog files.

use std::path::Path;

use crate::error::CatalogError;
use crate::types::{CatalogDocument, DiscoveredCatalog, ReferenceConsole, ReferenceDataset};

/// Load the master reference dataset.
///
/// A missing file is not an error: the tracker keeps running with zero
/// reference consoles and says so. A file that exists but cannot be read or
/// parsed is returned as an error.
pub fn load_reference(path: &Path) -> Result<Vec<ReferenceConsole>, CatalogError> {
    if !path.exists() {
        log::warn!("Reference dataset not found: {}", path.display());
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::io(path.display().to_string(), e))?;
    let dataset: ReferenceDataset = serde_json::from_str(&contents)
        .map_err(|e| CatalogError::parse(path.display().to_string(), e))?;

    log::debug!(
        "Loaded {} reference consoles from {}",
        dataset.consoles.len(),
        path.display()
    );
    Ok(dataset.consoles)
}

/// Read and parse one catalog file, attaching the given console name.
///
/// The document must be a JSON object with a `games` field.
pub fn load_catalog_file(
    path: &Path,
    console_name: &str,
) -> Result<DiscoveredCatalog, CatalogError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(&display, e))?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| CatalogError::parse(&display, e))?;

    if value.get("games").is_none() {
        return Err(CatalogError::MissingGames { path: display });
    }

    let doc: CatalogDocument =
        serde_json::from_value(value).map_err(|e| CatalogError::parse(&display, e))?;

    let source_filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());

    Ok(DiscoveredCatalog {
        source_filename,
        console_name: console_name.to_string(),
        last_updated: doc.last_updated,
        games: doc.games,
    })
}
