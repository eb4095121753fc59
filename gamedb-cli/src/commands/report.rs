use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedb_progress::{TrackerRun, TrackerSettings, render_report, run_tracker};

use crate::CliError;

pub(crate) fn run_report(settings: &TrackerSettings) -> Result<(), CliError> {
    let run = run_tracker(settings)?;
    print_report(&run);
    Ok(())
}

/// Send the rendered report through the logger, one line at a time.
pub(crate) fn print_report(run: &TrackerRun) {
    let text = render_report(&run.summary, &run.discovery.skipped, super::now());

    crate::log_blank();
    for line in text.lines() {
        if is_rule(line) {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.dimmed()));
        } else if is_heading(line) {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.bold()));
        } else {
            log::info!("{}", line);
        }
    }
}

fn is_rule(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '=')
}

fn is_heading(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_uppercase())
        && line
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == ' ')
}
