use super::*;
use gamedb_catalog::GameRecord;

fn reference(name: &str, total: u64) -> ReferenceConsole {
    ReferenceConsole {
        name: name.to_string(),
        manufacturer: Some("Test Co".to_string()),
        generation: Some(Generation::Number(4)),
        release_year: Some(1990),
        discontinuation_year: Some(1995),
        total_official_games: total,
    }
}

fn catalog(name: &str, games: usize) -> DiscoveredCatalog {
    DiscoveredCatalog {
        source_filename: format!("{}_games.json", name.to_lowercase().replace(' ', "_")),
        console_name: name.to_string(),
        last_updated: None,
        games: vec![GameRecord::default(); games],
    }
}

#[test]
fn percentage_rounds_to_two_decimals() {
    assert_eq!(completion_percentage(3, 10), 30.0);
    assert_eq!(completion_percentage(1, 3), 33.33);
    assert_eq!(completion_percentage(2, 3), 66.67);
    assert_eq!(completion_percentage(1, 8), 12.5);
    // 1/16 = 6.25 exactly; half away from zero would need 6.255.
    assert_eq!(completion_percentage(1, 16), 6.25);
    assert_eq!(completion_percentage(1, 800), 0.13);
}

#[test]
fn zero_total_is_zero_percent() {
    assert_eq!(completion_percentage(0, 0), 0.0);
    assert_eq!(completion_percentage(25, 0), 0.0);
}

#[test]
fn hundred_percent_only_when_complete() {
    assert_eq!(completion_percentage(10, 10), 100.0);
    assert_eq!(completion_percentage(12, 10), 100.0);
    assert_eq!(completion_percentage(99_999, 100_000), 99.99);
    assert!(completion_percentage(99_999, 100_000) < 100.0);
}

#[test]
fn status_tier_thresholds() {
    assert_eq!(StatusTier::from_percentage(100.0), StatusTier::Complete);
    assert_eq!(StatusTier::from_percentage(75.0), StatusTier::NearlyDone);
    assert_eq!(StatusTier::from_percentage(74.99), StatusTier::InProgress);
    assert_eq!(StatusTier::from_percentage(50.0), StatusTier::InProgress);
    assert_eq!(StatusTier::from_percentage(25.0), StatusTier::Started);
    assert_eq!(StatusTier::from_percentage(0.01), StatusTier::Minimal);
    assert_eq!(StatusTier::from_percentage(0.0), StatusTier::NotStarted);
}

#[test]
fn status_labels() {
    assert_eq!(StatusTier::NearlyDone.label(), "Nearly Done");
    assert_eq!(StatusTier::NotStarted.css_class(), "not-started");
    assert_eq!(StatusTier::Complete.to_string(), "\u{2705} Complete");
}

#[test]
fn genesis_example() {
    let refs = vec![reference("Sega Genesis", 10)];
    let summary = calculate_progress(&refs, &[catalog("Sega Genesis", 3)], MatchStrategy::default());

    assert_eq!(summary.entries.len(), 1);
    let entry = &summary.entries[0];
    assert_eq!(entry.console, "Sega Genesis");
    assert_eq!(entry.current_games, 3);
    assert_eq!(entry.total_official_games, 10);
    assert_eq!(entry.percentage_complete, 30.0);
    assert_eq!(entry.status, StatusTier::Started);
    assert_eq!(entry.source_filename, "sega_genesis_games.json");
    assert_eq!(entry.last_updated, "Unknown");
    assert_eq!(entry.year_range(), "1990-1995");
    assert!(summary.missing.is_empty());
}

#[test]
fn zero_total_reference_is_not_started() {
    let refs = vec![reference("Pippin", 0)];
    let summary = calculate_progress(&refs, &[catalog("Pippin", 4)], MatchStrategy::default());
    let entry = &summary.entries[0];
    assert_eq!(entry.percentage_complete, 0.0);
    assert_eq!(entry.status, StatusTier::NotStarted);
}

#[test]
fn over_complete_catalog_is_complete() {
    let refs = vec![reference("Virtual Boy", 22)];
    let summary = calculate_progress(&refs, &[catalog("Virtual Boy", 24)], MatchStrategy::default());
    assert_eq!(summary.entries[0].percentage_complete, 100.0);
    assert_eq!(summary.entries[0].status, StatusTier::Complete);
}

#[test]
fn entries_sort_descending_and_stable() {
    let refs = vec![
        reference("Atari 2600", 10),
        reference("Atari 7800", 10),
        reference("Atari Jaguar", 10),
        reference("Atari Lynx", 10),
    ];
    let catalogs = vec![
        catalog("Atari 2600", 2),
        catalog("Atari 7800", 5),
        catalog("Atari Jaguar", 2),
        catalog("Atari Lynx", 2),
    ];
    let summary = calculate_progress(&refs, &catalogs, MatchStrategy::default());
    let order: Vec<_> = summary.entries.iter().map(|e| e.console.as_str()).collect();
    assert_eq!(order, vec!["Atari 7800", "Atari 2600", "Atari Jaguar", "Atari Lynx"]);
}

#[test]
fn missing_is_complement_sorted_by_game_count() {
    let refs = vec![
        reference("Sega Genesis", 915),
        reference("Sega Saturn", 1100),
        reference("Neo Geo", 150),
        reference("Game Boy", 1046),
    ];
    let summary = calculate_progress(&refs, &[catalog("Sega Genesis", 3)], MatchStrategy::default());

    let missing: Vec<_> = summary.missing.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(missing, vec!["Sega Saturn", "Game Boy", "Neo Geo"]);
    assert_eq!(summary.created_count() + summary.missing.len(), refs.len());
}

#[test]
fn unmatched_catalog_is_kept_but_not_counted() {
    let refs = vec![reference("Sega Genesis", 10)];
    let catalogs = vec![catalog("Sega Genesis", 3), catalog("Ouya", 7)];
    let summary = calculate_progress(&refs, &catalogs, MatchStrategy::default());

    assert_eq!(summary.created_count(), 1);
    assert_eq!(summary.matches.len(), 2);
    let unmatched: Vec<_> = summary.unmatched().map(|m| m.console_name.as_str()).collect();
    assert_eq!(unmatched, vec!["Ouya"]);
    assert_eq!(summary.matches[0].display_name(), "Sega Genesis");
    assert_eq!(summary.matches[1].display_name(), "Ouya");
}

#[test]
fn aggregate_totals() {
    let refs = vec![reference("Sega Genesis", 10), reference("Neo Geo", 30)];
    let catalogs = vec![catalog("Sega Genesis", 5), catalog("Neo Geo", 5)];
    let summary = calculate_progress(&refs, &catalogs, MatchStrategy::default());

    assert_eq!(summary.total_current_games(), 10);
    assert_eq!(summary.total_target_games(), 40);
    assert_eq!(summary.overall_percentage(), 25.0);
    assert_eq!(summary.coverage_percentage(), 100.0);
}

#[test]
fn empty_inputs() {
    let summary = calculate_progress(&[], &[], MatchStrategy::default());
    assert_eq!(summary.reference_count, 0);
    assert_eq!(summary.coverage_percentage(), 0.0);
    assert_eq!(summary.overall_percentage(), 0.0);
}
