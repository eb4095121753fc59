//! Completion percentages, status tiers, and the missing-console list.

use std::collections::HashSet;

use gamedb_catalog::{DiscoveredCatalog, Generation, ReferenceConsole, UNKNOWN};

use crate::matcher::{MatchStrategy, match_console};

// ---------------------------------------------------------------------------
// Status tier
// ---------------------------------------------------------------------------

/// Coarse completion bucket for a console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTier {
    Complete,
    NearlyDone,
    InProgress,
    Started,
    Minimal,
    NotStarted,
}

impl StatusTier {
    /// Classify a percentage. Lower bounds are inclusive except for
    /// `Minimal`, which needs anything above zero.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Complete
        } else if percentage >= 75.0 {
            Self::NearlyDone
        } else if percentage >= 50.0 {
            Self::InProgress
        } else if percentage >= 25.0 {
            Self::Started
        } else if percentage > 0.0 {
            Self::Minimal
        } else {
            Self::NotStarted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::NearlyDone => "Nearly Done",
            Self::InProgress => "In Progress",
            Self::Started => "Started",
            Self::Minimal => "Minimal",
            Self::NotStarted => "Not Started",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Complete => "\u{2705}",
            Self::NearlyDone => "\u{1F7E2}",
            Self::InProgress => "\u{1F7E1}",
            Self::Started => "\u{1F7E0}",
            Self::Minimal => "\u{1F534}",
            Self::NotStarted => "\u{26AB}",
        }
    }

    /// CSS class suffix used by the site's status badges.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::NearlyDone => "nearly-done",
            Self::InProgress => "in-progress",
            Self::Started => "started",
            Self::Minimal => "minimal",
            Self::NotStarted => "not-started",
        }
    }
}

impl std::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

// ---------------------------------------------------------------------------
// Percentages
// ---------------------------------------------------------------------------

/// Completion percentage in `0.0..=100.0`, rounded to two decimals
/// (half away from zero).
///
/// A zero total gives 0. Exactly 100 is reserved for catalogs that have at
/// least as many games as the reference total, so an incomplete catalog
/// tops out at 99.99 even when rounding would reach 100.
pub fn completion_percentage(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    if current >= total {
        return 100.0;
    }
    round2(raw_percentage(current, total)).min(99.99)
}

fn raw_percentage(current: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        current as f64 * 100.0 / total as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Computed completion statistics for one matched catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    /// Reference console name.
    pub console: String,
    pub manufacturer: String,
    pub generation: Option<Generation>,
    pub release_year: Option<i32>,
    pub discontinuation_year: Option<i32>,
    pub total_official_games: u64,
    pub current_games: u64,
    pub percentage_complete: f64,
    pub status: StatusTier,
    pub source_filename: String,
    pub last_updated: String,
}

impl ProgressEntry {
    pub fn new(catalog: &DiscoveredCatalog, reference: &ReferenceConsole) -> Self {
        let current = catalog.game_count();
        let total = reference.total_official_games;
        Self {
            console: reference.name.clone(),
            manufacturer: reference.manufacturer().to_string(),
            generation: reference.generation.clone(),
            release_year: reference.release_year,
            discontinuation_year: reference.discontinuation_year,
            total_official_games: total,
            current_games: current,
            percentage_complete: completion_percentage(current, total),
            status: StatusTier::from_percentage(raw_percentage(current, total)),
            source_filename: catalog.source_filename.clone(),
            last_updated: catalog.last_updated().to_string(),
        }
    }

    pub fn generation_label(&self) -> String {
        self.generation
            .as_ref()
            .map(|g| g.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn year_range(&self) -> String {
        let year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_else(|| "?".into());
        format!(
            "{}-{}",
            year(self.release_year),
            year(self.discontinuation_year)
        )
    }
}

/// Which reference console (if any) a discovered catalog was matched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatch {
    /// Name derived from the catalog filename.
    pub console_name: String,
    pub source_filename: String,
    /// Reference console name, `None` when nothing matched.
    pub matched: Option<String>,
}

impl CatalogMatch {
    /// Name to show for this catalog's games: the reference name when
    /// matched, the derived name otherwise.
    pub fn display_name(&self) -> &str {
        self.matched.as_deref().unwrap_or(&self.console_name)
    }
}

/// Everything the renderers need, computed in one pass.
#[derive(Debug, Clone, Default)]
pub struct ProgressSummary {
    /// Sorted by completion, highest first; ties keep discovery order.
    pub entries: Vec<ProgressEntry>,
    /// Reference consoles with no catalog, most official games first.
    pub missing: Vec<ReferenceConsole>,
    /// One per discovered catalog, in discovery order.
    pub matches: Vec<CatalogMatch>,
    pub reference_count: usize,
}

impl ProgressSummary {
    pub fn created_count(&self) -> usize {
        self.entries.len()
    }

    /// Share of reference consoles that have a catalog.
    pub fn coverage_percentage(&self) -> f64 {
        raw_percentage(self.created_count() as u64, self.reference_count as u64)
    }

    pub fn total_current_games(&self) -> u64 {
        self.entries.iter().map(|e| e.current_games).sum()
    }

    pub fn total_target_games(&self) -> u64 {
        self.entries.iter().map(|e| e.total_official_games).sum()
    }

    /// Games catalogued across all matched consoles against their combined total.
    pub fn overall_percentage(&self) -> f64 {
        raw_percentage(self.total_current_games(), self.total_target_games())
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &CatalogMatch> {
        self.matches.iter().filter(|m| m.matched.is_none())
    }
}

/// Match every catalog against the reference list and compute progress.
///
/// `catalogs` must be in discovery order; that order breaks ties between
/// entries with equal percentages.
pub fn calculate_progress(
    references: &[ReferenceConsole],
    catalogs: &[DiscoveredCatalog],
    strategy: MatchStrategy,
) -> ProgressSummary {
    let mut entries = Vec::new();
    let mut matches = Vec::with_capacity(catalogs.len());
    let mut matched_names: HashSet<&str> = HashSet::new();

    for catalog in catalogs {
        let reference = match_console(&catalog.console_name, references, strategy);
        match reference {
            Some(reference) => {
                log::debug!(
                    "Matched {} to \"{}\"",
                    catalog.source_filename,
                    reference.name
                );
                matched_names.insert(reference.name.as_str());
                entries.push(ProgressEntry::new(catalog, reference));
            }
            None => {
                log::debug!(
                    "No reference console matches \"{}\" ({})",
                    catalog.console_name,
                    catalog.source_filename
                );
            }
        }
        matches.push(CatalogMatch {
            console_name: catalog.console_name.clone(),
            source_filename: catalog.source_filename.clone(),
            matched: reference.map(|r| r.name.clone()),
        });
    }

    // `sort_by` is stable, which keeps discovery order among ties.
    entries.sort_by(|a, b| b.percentage_complete.total_cmp(&a.percentage_complete));

    let mut missing: Vec<ReferenceConsole> = references
        .iter()
        .filter(|r| !matched_names.contains(r.name.as_str()))
        .cloned()
        .collect();
    missing.sort_by(|a, b| b.total_official_games.cmp(&a.total_official_games));

    ProgressSummary {
        entries,
        missing,
        matches,
        reference_count: references.len(),
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
