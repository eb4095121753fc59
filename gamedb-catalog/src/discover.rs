//! Directory scanning for per-console catalog files.

use std::path::Path;

use crate::error::CatalogError;
use crate::json::load_catalog_file;
use crate::types::DiscoveredCatalog;

/// Default suffix that marks a file as a per-console catalog.
pub const DEFAULT_CATALOG_SUFFIX: &str = "_games.json";

/// Default filename of the master reference dataset.
pub const DEFAULT_REFERENCE_FILENAME: &str = "dead_consoles.json";

/// Filename conventions used when scanning a directory.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub catalog_suffix: String,
    /// Never treated as a catalog, even if it happens to carry the suffix.
    pub reference_filename: String,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            catalog_suffix: DEFAULT_CATALOG_SUFFIX.to_string(),
            reference_filename: DEFAULT_REFERENCE_FILENAME.to_string(),
        }
    }
}

/// A catalog file that was found but could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCatalog {
    pub filename: String,
    pub reason: String,
}

/// Result of scanning a directory.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Catalogs in filename order, unique by derived console name.
    pub catalogs: Vec<DiscoveredCatalog>,
    pub skipped: Vec<SkippedCatalog>,
}

impl Discovery {
    pub fn get(&self, console_name: &str) -> Option<&DiscoveredCatalog> {
        self.catalogs.iter().find(|c| c.console_name == console_name)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Insert a catalog, replacing any earlier one with the same derived name
    /// while keeping its position.
    fn insert(&mut self, catalog: DiscoveredCatalog) {
        match self
            .catalogs
            .iter_mut()
            .find(|c| c.console_name == catalog.console_name)
        {
            Some(existing) => {
                log::warn!(
                    "{} and {} both map to \"{}\"; using {}",
                    existing.source_filename,
                    catalog.source_filename,
                    catalog.console_name,
                    catalog.source_filename,
                );
                *existing = catalog;
            }
            None => self.catalogs.push(catalog),
        }
    }
}

/// Scan `dir` for catalog files and parse each one.
///
/// Files that cannot be read or parsed, or that lack a `games` field, are
/// skipped with a warning and listed in [`Discovery::skipped`]. A missing
/// directory yields an empty result.
pub fn discover_catalogs(dir: &Path, options: &DiscoveryOptions) -> Result<Discovery, CatalogError> {
    let mut discovery = Discovery::default();

    if !dir.exists() {
        log::warn!("Catalog directory not found: {}", dir.display());
        return Ok(discovery);
    }
    if !dir.is_dir() {
        return Err(CatalogError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| CatalogError::io(dir.display().to_string(), e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let filename = entry.file_name().to_string_lossy().into_owned();
        if filename == options.reference_filename {
            continue;
        }
        let Some(console_name) = derive_console_name(&filename, &options.catalog_suffix) else {
            continue;
        };

        match load_catalog_file(&entry.path(), &console_name) {
            Ok(catalog) => {
                log::debug!(
                    "Found {} ({} games) in {}",
                    catalog.console_name,
                    catalog.game_count(),
                    filename
                );
                discovery.insert(catalog);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", filename, e);
                discovery.skipped.push(SkippedCatalog {
                    filename,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(discovery)
}

/// Derive a display name from a catalog filename.
///
/// `sega_genesis_games.json` → `Sega Genesis`. Returns `None` when the
/// filename does not end with `suffix` or nothing is left once it is removed.
pub fn derive_console_name(filename: &str, suffix: &str) -> Option<String> {
    let stem = filename.strip_suffix(suffix)?;
    if stem.is_empty() {
        return None;
    }
    Some(title_case(&stem.replace('_', " ")))
}

/// Uppercase every letter that follows a non-letter and lowercase the rest.
///
/// Digits count as non-letters, so `n64` becomes `N64` and `3do` becomes `3Do`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/discover_tests.rs"]
mod tests;
