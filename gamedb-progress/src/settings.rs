//! Tracker settings: where to read catalogs, where to write the site, and
//! how to match names.
//!
//! Each value is resolved through a priority chain:
//!
//! 1. CLI override (if `Some`)
//! 2. `~/.config/gamedb/settings.toml`
//! 3. Built-in default (current directory, `dead_consoles.json`, ...)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gamedb_catalog::{DEFAULT_CATALOG_SUFFIX, DEFAULT_REFERENCE_FILENAME, DiscoveryOptions};

use crate::error::ProgressError;
use crate::matcher::MatchStrategy;

/// Default number of missing consoles shown on the site.
pub const DEFAULT_MISSING_LIMIT: usize = 12;

/// Name of the site directory created under the input directory by default.
pub const DEFAULT_SITE_DIR: &str = "site";

/// Canonical path to the settings file: `~/.config/gamedb/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamedb").join("settings.toml")
}

/// On-disk settings. Every field is optional.
///
/// ```toml
/// [paths]
/// input_dir = "/home/me/gamedb"
/// output_dir = "/home/me/gamedb/docs"
/// reference_file = "dead_consoles.json"
/// catalog_suffix = "_games.json"
///
/// [matching]
/// strategy = "first-substring"
///
/// [site]
/// missing_limit = 12
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub paths: PathSettings,
    pub matching: MatchingSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub reference_file: Option<String>,
    pub catalog_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingSettings {
    pub strategy: Option<MatchStrategy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub missing_limit: Option<usize>,
}

impl SettingsFile {
    /// Load a settings file. A missing file yields the empty default.
    pub fn load(path: &Path) -> Result<Self, ProgressError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| ProgressError::SettingsIo {
                path: path.display().to_string(),
                source: e,
            })?;
        toml::from_str(&contents).map_err(|e| ProgressError::SettingsParse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Like [`load`](Self::load), but a file that cannot be read or parsed
    /// is logged and replaced by the empty default so a run can proceed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }
}

/// Values given on the command line. `None` defers to the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub reference_file: Option<String>,
    pub strategy: Option<MatchStrategy>,
}

/// Fully resolved settings for one tracker run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub reference_file: String,
    pub catalog_suffix: String,
    pub strategy: MatchStrategy,
    pub missing_limit: usize,
}

impl TrackerSettings {
    /// Defaults rooted at `input_dir`; the site goes to `<input_dir>/site`.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        Self {
            output_dir: input_dir.join(DEFAULT_SITE_DIR),
            input_dir,
            reference_file: DEFAULT_REFERENCE_FILENAME.to_string(),
            catalog_suffix: DEFAULT_CATALOG_SUFFIX.to_string(),
            strategy: MatchStrategy::default(),
            missing_limit: DEFAULT_MISSING_LIMIT,
        }
    }

    /// Combine CLI overrides with the settings file, falling back to the
    /// current directory for the input path.
    pub fn resolve(overrides: SettingsOverrides, file: &SettingsFile) -> Self {
        let input_dir = overrides
            .input_dir
            .or_else(|| file.paths.input_dir.clone())
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let mut settings = Self::new(input_dir);
        if let Some(output) = overrides.output_dir.or_else(|| file.paths.output_dir.clone()) {
            settings.output_dir = output;
        }
        if let Some(reference) = overrides
            .reference_file
            .or_else(|| file.paths.reference_file.clone())
        {
            settings.reference_file = reference;
        }
        if let Some(suffix) = file.paths.catalog_suffix.clone() {
            settings.catalog_suffix = suffix;
        }
        if let Some(strategy) = overrides.strategy.or(file.matching.strategy) {
            settings.strategy = strategy;
        }
        if let Some(limit) = file.site.missing_limit {
            settings.missing_limit = limit;
        }
        settings
    }

    /// Path of the reference dataset inside the input directory.
    pub fn reference_path(&self) -> PathBuf {
        self.input_dir.join(&self.reference_file)
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            catalog_suffix: self.catalog_suffix.clone(),
            reference_filename: self.reference_file.clone(),
        }
    }

    /// Pretty-printed TOML for display.
    pub fn to_toml_string(&self) -> Result<String, ProgressError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
