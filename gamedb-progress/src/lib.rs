//! Matching, progress calculation, and text reporting for the game database tracker.
//!
//! The pipeline is: load the reference dataset and discover catalogs
//! (`gamedb-catalog`), match each catalog to a reference console, compute
//! completion per console, then render. [`run_tracker`] does the whole
//! load-and-calculate half in one call.

pub mod display;
pub mod error;
pub mod matcher;
pub mod progress;
pub mod report;
pub mod settings;
pub mod tracker;

pub use error::ProgressError;
pub use matcher::{MatchStrategy, MatchStrategyParseError, match_console};
pub use progress::{
    CatalogMatch, ProgressEntry, ProgressSummary, StatusTier, calculate_progress,
    completion_percentage,
};
pub use report::render_report;
pub use settings::{SettingsFile, SettingsOverrides, TrackerSettings, settings_path};
pub use tracker::{TrackerRun, run_tracker};

// Re-export the input model so downstream crates need only this one.
pub use gamedb_catalog::{
    DiscoveredCatalog, Discovery, GameRecord, Generation, ReferenceConsole, SkippedCatalog, UNKNOWN,
};
