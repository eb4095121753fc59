use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedb_progress::{TrackerRun, TrackerSettings, run_tracker};
use gamedb_site::{SitePage, write_site};

use crate::CliError;

pub(crate) fn run_site(settings: &TrackerSettings) -> Result<(), CliError> {
    let run = run_tracker(settings)?;
    generate_site(settings, &run)
}

pub(crate) fn generate_site(settings: &TrackerSettings, run: &TrackerRun) -> Result<(), CliError> {
    let page = SitePage {
        summary: &run.summary,
        catalogs: run.catalogs(),
        missing_limit: settings.missing_limit,
        generated_at: super::now(),
    };
    let artifacts = write_site(&settings.output_dir, &page)?;

    crate::log_blank();
    log::info!(
        "{} {}",
        "Site written:".if_supports_color(Stdout, |t| t.green()),
        artifacts.index_path.display(),
    );
    if !artifacts.style_written || !artifacts.script_written {
        log::info!(
            "  {}",
            "Existing style.css/script.js kept as-is".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
