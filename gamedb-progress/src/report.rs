//! Plain-text progress report.
//!
//! [`render_report`] is a pure function: given the same summary and
//! timestamp it always returns the same text.

use std::fmt::Write;

use chrono::NaiveDateTime;

use gamedb_catalog::SkippedCatalog;

use crate::display::{BAR_WIDTH, format_count, format_percentage, progress_bar};
use crate::progress::ProgressSummary;

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 50;

/// Render the full report: summary, per-console detail, missing consoles,
/// unmatched and skipped catalogs, then the generation timestamp.
pub fn render_report(
    summary: &ProgressSummary,
    skipped: &[SkippedCatalog],
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();
    write_summary(&mut out, summary);
    write_details(&mut out, summary);
    write_missing(&mut out, summary);
    write_unmatched(&mut out, summary);
    write_skipped(&mut out, skipped);

    out.push('\n');
    let _ = writeln!(
        out,
        "Report generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    out
}

fn heading(out: &mut String, title: &str, rule: usize) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(rule));
    out.push('\n');
}

fn write_summary(out: &mut String, summary: &ProgressSummary) {
    heading(out, "GAME DATABASE PROGRESS TRACKER", NARROW_RULE);
    let _ = writeln!(out, "Total Dead Consoles: {}", summary.reference_count);
    let _ = writeln!(out, "Databases Created: {}", summary.created_count());
    let _ = writeln!(
        out,
        "Coverage: {:.1}% of consoles",
        summary.coverage_percentage()
    );
    out.push('\n');

    if summary.entries.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "Overall Game Progress: {} / {} games ({:.1}%)",
        format_count(summary.total_current_games()),
        format_count(summary.total_target_games()),
        summary.overall_percentage()
    );
    out.push('\n');
}

fn write_details(out: &mut String, summary: &ProgressSummary) {
    if summary.entries.is_empty() {
        out.push_str("No console databases found!\n");
        return;
    }

    heading(out, "DETAILED PROGRESS BY CONSOLE", WIDE_RULE);
    for entry in &summary.entries {
        let pct = format_percentage(entry.percentage_complete);
        out.push('\n');
        let _ = writeln!(out, "\u{1F3AE} {}", entry.console);
        let _ = writeln!(out, "   Manufacturer: {}", entry.manufacturer);
        let _ = writeln!(
            out,
            "   Generation: {} ({})",
            entry.generation_label(),
            entry.year_range()
        );
        let _ = writeln!(
            out,
            "   Progress: {} / {} games ({}%)",
            format_count(entry.current_games),
            format_count(entry.total_official_games),
            pct
        );
        let _ = writeln!(out, "   Status: {}", entry.status);
        let _ = writeln!(out, "   File: {}", entry.source_filename);
        let _ = writeln!(out, "   Last Updated: {}", entry.last_updated);
        let _ = writeln!(
            out,
            "   [{}] {}%",
            progress_bar(entry.percentage_complete, BAR_WIDTH),
            pct
        );
    }
}

fn write_missing(out: &mut String, summary: &ProgressSummary) {
    if summary.missing.is_empty() {
        return;
    }

    out.push('\n');
    heading(out, "MISSING CONSOLE DATABASES", NARROW_RULE);
    for console in &summary.missing {
        let _ = writeln!(out, "\u{26AB} {} ({})", console.name, console.manufacturer());
        let _ = writeln!(
            out,
            "   {} games | Gen {} | {}",
            format_count(console.total_official_games),
            console.generation_label(),
            console.year_range()
        );
    }
}

fn write_unmatched(out: &mut String, summary: &ProgressSummary) {
    let unmatched: Vec<_> = summary.unmatched().collect();
    if unmatched.is_empty() {
        return;
    }

    out.push('\n');
    heading(out, "UNMATCHED CATALOGS", NARROW_RULE);
    for m in unmatched {
        let _ = writeln!(out, "? {} ({})", m.console_name, m.source_filename);
    }
}

fn write_skipped(out: &mut String, skipped: &[SkippedCatalog]) {
    if skipped.is_empty() {
        return;
    }

    out.push('\n');
    heading(out, "SKIPPED FILES", NARROW_RULE);
    for s in skipped {
        let _ = writeln!(out, "! {}: {}", s.filename, s.reason);
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
