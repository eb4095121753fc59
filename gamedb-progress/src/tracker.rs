//! The load-and-calculate half of the pipeline.

use gamedb_catalog::{Discovery, ReferenceConsole, discover_catalogs, load_reference};

use crate::error::ProgressError;
use crate::progress::{ProgressSummary, calculate_progress};
use crate::settings::TrackerSettings;

/// Everything loaded and computed for one run.
#[derive(Debug, Clone)]
pub struct TrackerRun {
    pub references: Vec<ReferenceConsole>,
    pub discovery: Discovery,
    pub summary: ProgressSummary,
}

impl TrackerRun {
    /// The discovered catalogs, in discovery order.
    pub fn catalogs(&self) -> &[gamedb_catalog::DiscoveredCatalog] {
        &self.discovery.catalogs
    }
}

/// Load the reference dataset, discover catalogs, and compute progress.
///
/// Data problems never abort the run: a missing or unreadable reference
/// dataset is logged and treated as empty, and bad catalog files are
/// skipped. Only a failure to read the input directory itself is an error.
pub fn run_tracker(settings: &TrackerSettings) -> Result<TrackerRun, ProgressError> {
    let references = match load_reference(&settings.reference_path()) {
        Ok(references) => references,
        Err(e) => {
            log::error!("Error reading reference dataset: {}", e);
            Vec::new()
        }
    };

    let discovery = discover_catalogs(&settings.input_dir, &settings.discovery_options())?;
    let summary = calculate_progress(&references, &discovery.catalogs, settings.strategy);

    Ok(TrackerRun {
        references,
        discovery,
        summary,
    })
}
