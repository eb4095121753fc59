use serde::{Deserialize, Serialize};

use gamedb_catalog::ReferenceConsole;

/// How a derived catalog name is associated with a reference console.
///
/// Both strategies are case-insensitive and only look for the derived name
/// *inside* the reference name, never the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// An exact name wins; otherwise the first reference containing the name.
    #[default]
    ExactThenSubstring,
    /// The first reference containing the name, in list order.
    FirstSubstring,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactThenSubstring => "exact-then-substring",
            Self::FirstSubstring => "first-substring",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a match strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStrategyParseError(pub String);

impl std::fmt::Display for MatchStrategyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown match strategy: '{}' (expected 'exact-then-substring' or 'first-substring')",
            self.0
        )
    }
}

impl std::error::Error for MatchStrategyParseError {}

impl std::str::FromStr for MatchStrategy {
    type Err = MatchStrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "exact-then-substring" | "exact" => Ok(Self::ExactThenSubstring),
            "first-substring" | "substring" | "first" => Ok(Self::FirstSubstring),
            _ => Err(MatchStrategyParseError(s.to_string())),
        }
    }
}

/// Find the reference console a derived catalog name belongs to.
///
/// Deterministic: the same name and list always give the same answer.
/// An empty name never matches.
pub fn match_console<'a>(
    derived_name: &str,
    references: &'a [ReferenceConsole],
    strategy: MatchStrategy,
) -> Option<&'a ReferenceConsole> {
    let needle = derived_name.to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if strategy == MatchStrategy::ExactThenSubstring {
        if let Some(exact) = references.iter().find(|r| r.name.to_lowercase() == needle) {
            return Some(exact);
        }
    }

    references
        .iter()
        .find(|r| r.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
