use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedb_progress::display::format_count;
use gamedb_progress::{TrackerSettings, run_tracker};

use crate::CliError;

/// List reference consoles without a catalog, most official games first.
pub(crate) fn run_missing(settings: &TrackerSettings, limit: Option<usize>) -> Result<(), CliError> {
    let run = run_tracker(settings)?;
    let missing = &run.summary.missing;

    if missing.is_empty() {
        log::info!("No missing consoles: every reference console has a catalog.");
        return Ok(());
    }

    let shown = limit.unwrap_or(missing.len()).min(missing.len());
    log::info!(
        "{}",
        format!(
            "Consoles without a database ({} of {}):",
            shown,
            run.summary.reference_count
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for console in &missing[..shown] {
        log::info!(
            "  {} {} {}",
            "\u{2022}".if_supports_color(Stdout, |t| t.dimmed()),
            console.name,
            format!("({})", console.manufacturer()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!(
            "    {} games | Gen {} | {}",
            format_count(console.total_official_games),
            console.generation_label(),
            console.year_range(),
        );
    }
    if shown < missing.len() {
        log::info!(
            "  ... (showing first {}, use --limit to see more)",
            shown
        );
    }
    Ok(())
}
