use chrono::NaiveDate;

use gamedb_progress::UNKNOWN;

/// Format a catalog release date for display.
///
/// - absent or empty → `Unknown`
/// - four characters (a bare year) → unchanged
/// - ten or more characters starting with `YYYY-MM-DD` → `Jun 23, 1991`
/// - anything else, including unparseable dates → unchanged
pub fn format_release_date(date: Option<&str>) -> String {
    let date = match date {
        Some(d) if !d.is_empty() => d,
        _ => return UNKNOWN.to_string(),
    };

    let len = date.chars().count();
    if len == 4 {
        return date.to_string();
    }
    if len >= 10 {
        if let Some(parsed) = date
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        {
            return parsed.format("%b %d, %Y").to_string();
        }
    }
    date.to_string()
}
