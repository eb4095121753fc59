//! Data model types for the reference dataset and per-console catalogs.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel shown wherever an optional field is absent.
pub const UNKNOWN: &str = "Unknown";

// ── Reference ───────────────────────────────────────────────────────────────

/// Console generation. The reference data uses both plain numbers and
/// free-form labels ("3", "Handheld 4th"), so both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Generation {
    Number(u32),
    Label(String),
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// A historical console from the master reference dataset.
///
/// Identity is [`name`](Self::name); entries are never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConsole {
    #[serde(rename = "console")]
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub generation: Option<Generation>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub discontinuation_year: Option<i32>,
    #[serde(default)]
    pub total_official_games: u64,
}

impl ReferenceConsole {
    pub fn manufacturer(&self) -> &str {
        self.manufacturer.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn generation_label(&self) -> String {
        self.generation
            .as_ref()
            .map(|g| g.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Active years as `"1989-1997"`, with `?` standing in for a missing year.
    pub fn year_range(&self) -> String {
        let year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_else(|| "?".into());
        format!(
            "{}-{}",
            year(self.release_year),
            year(self.discontinuation_year)
        )
    }
}

/// Top-level shape of the reference dataset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDataset {
    #[serde(default)]
    pub consoles: Vec<ReferenceConsole>,
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// One game listed in a per-console catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub developer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub publisher: Option<String>,
    /// ISO date (`1991-06-23`), bare year (`1991`), or anything else the
    /// catalog author typed.
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_date: Option<String>,
}

impl GameRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn developer(&self) -> &str {
        self.developer.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn publisher(&self) -> &str {
        self.publisher.as_deref().unwrap_or(UNKNOWN)
    }

    /// Leading four-digit year of the release date, if there is one.
    pub fn release_year(&self) -> Option<&str> {
        let date = self.release_date.as_deref()?;
        let year = date.get(..4)?;
        year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
    }
}

/// On-disk shape of a `<slug>_games.json` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(deserialize_with = "lenient_games")]
    pub games: Vec<GameRecord>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_updated: Option<String>,
}

/// A catalog file found on disk, with the console name derived from its filename.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredCatalog {
    /// Filename only, e.g. `sega_genesis_games.json`.
    pub source_filename: String,
    /// Human-readable name derived from the filename, e.g. `Sega Genesis`.
    pub console_name: String,
    pub last_updated: Option<String>,
    pub games: Vec<GameRecord>,
}

impl DiscoveredCatalog {
    pub fn game_count(&self) -> u64 {
        self.games.len() as u64
    }

    pub fn last_updated(&self) -> &str {
        self.last_updated.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Accept strings, numbers and booleans for free-text fields.
///
/// Hand-maintained catalogs regularly write `"release_date": 1991`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Keep one record per array element, whatever its shape.
///
/// A `null` or a bare string still counts as a game; it just has no known
/// fields. The array itself must be an array.
fn lenient_games<'de, D>(deserializer: D) -> Result<Vec<GameRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => GameRecord::default(),
        })
        .collect())
}
