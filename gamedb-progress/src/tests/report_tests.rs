use super::*;
use crate::matcher::MatchStrategy;
use crate::progress::calculate_progress;
use chrono::NaiveDate;
use gamedb_catalog::{DiscoveredCatalog, GameRecord, Generation, ReferenceConsole};

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn reference(name: &str, manufacturer: &str, total: u64) -> ReferenceConsole {
    ReferenceConsole {
        name: name.to_string(),
        manufacturer: Some(manufacturer.to_string()),
        generation: Some(Generation::Number(4)),
        release_year: Some(1988),
        discontinuation_year: Some(1997),
        total_official_games: total,
    }
}

fn catalog(file: &str, name: &str, games: usize) -> DiscoveredCatalog {
    DiscoveredCatalog {
        source_filename: file.to_string(),
        console_name: name.to_string(),
        last_updated: Some("2024-02-28".to_string()),
        games: vec![GameRecord::default(); games],
    }
}

fn sample_summary() -> ProgressSummary {
    let refs = vec![
        reference("Sega Genesis", "Sega", 10),
        reference("Neo Geo", "SNK", 1500),
    ];
    calculate_progress(
        &refs,
        &[catalog("sega_genesis_games.json", "Sega Genesis", 3)],
        MatchStrategy::default(),
    )
}

#[test]
fn summary_section() {
    let text = render_report(&sample_summary(), &[], timestamp());
    assert!(text.starts_with("GAME DATABASE PROGRESS TRACKER\n"));
    assert!(text.contains("Total Dead Consoles: 2\n"));
    assert!(text.contains("Databases Created: 1\n"));
    assert!(text.contains("Coverage: 50.0% of consoles\n"));
    assert!(text.contains("Overall Game Progress: 3 / 10 games (30.0%)\n"));
}

#[test]
fn detail_block() {
    let text = render_report(&sample_summary(), &[], timestamp());
    let expected = "\n\u{1F3AE} Sega Genesis\n\
                    \x20  Manufacturer: Sega\n\
                    \x20  Generation: 4 (1988-1997)\n\
                    \x20  Progress: 3 / 10 games (30.0%)\n\
                    \x20  Status: \u{1F7E0} Started\n\
                    \x20  File: sega_genesis_games.json\n\
                    \x20  Last Updated: 2024-02-28\n";
    assert!(text.contains(expected), "missing detail block in:\n{}", text);

    let bar = format!("[{}{}] 30.0%", "\u{2588}".repeat(9), "\u{2591}".repeat(21));
    assert!(text.contains(&bar));
}

#[test]
fn missing_block_uses_separators() {
    let text = render_report(&sample_summary(), &[], timestamp());
    assert!(text.contains("MISSING CONSOLE DATABASES\n"));
    assert!(text.contains("\u{26AB} Neo Geo (SNK)\n"));
    assert!(text.contains("   1,500 games | Gen 4 | 1988-1997\n"));
}

#[test]
fn empty_run_reports_no_databases() {
    let summary = calculate_progress(&[], &[], MatchStrategy::default());
    let text = render_report(&summary, &[], timestamp());
    assert!(text.contains("Total Dead Consoles: 0\n"));
    assert!(text.contains("Coverage: 0.0% of consoles\n"));
    assert!(text.contains("No console databases found!\n"));
    assert!(!text.contains("Overall Game Progress"));
    assert!(!text.contains("MISSING CONSOLE DATABASES"));
}

#[test]
fn unmatched_and_skipped_sections() {
    let refs = vec![reference("Sega Genesis", "Sega", 10)];
    let summary = calculate_progress(
        &refs,
        &[catalog("ouya_games.json", "Ouya", 2)],
        MatchStrategy::default(),
    );
    let skipped = vec![SkippedCatalog {
        filename: "bad_games.json".to_string(),
        reason: "JSON parse error".to_string(),
    }];

    let text = render_report(&summary, &skipped, timestamp());
    assert!(text.contains("UNMATCHED CATALOGS\n"));
    assert!(text.contains("? Ouya (ouya_games.json)\n"));
    assert!(text.contains("SKIPPED FILES\n"));
    assert!(text.contains("! bad_games.json: JSON parse error\n"));
}

#[test]
fn report_is_reproducible() {
    let summary = sample_summary();
    let a = render_report(&summary, &[], timestamp());
    let b = render_report(&summary, &[], timestamp());
    assert_eq!(a, b);
    assert!(a.ends_with("Report generated: 2024-03-01 09:30:00\n"));
}

#[test]
fn overall_progress_needs_at_least_one_entry() {
    let refs = vec![reference("Neo Geo", "SNK", 1500)];
    let unmatched = calculate_progress(
        &refs,
        &[catalog("ouya_games.json", "Ouya", 2)],
        MatchStrategy::default(),
    );
    let text = render_report(&unmatched, &[], timestamp());
    assert!(text.contains("Databases Created: 0\n"));
    assert!(!text.contains("Overall Game Progress"));
    assert!(!text.contains("0 / 0 games"));
}
