use gamedb_progress::{TrackerSettings, run_tracker};

use crate::CliError;

/// Report then site, from a single load of the input directory.
pub(crate) fn run_all(settings: &TrackerSettings) -> Result<(), CliError> {
    let run = run_tracker(settings)?;
    super::report::print_report(&run);
    super::site::generate_site(settings, &run)
}
