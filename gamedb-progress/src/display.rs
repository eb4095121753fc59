//! Number and bar formatting shared by the text report and the site.

/// Width of the text progress bar, in cells.
pub const BAR_WIDTH: usize = 30;

/// Format a count with thousands separators (`1046` → `1,046`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a percentage with at most two decimals and at least one
/// (`30.0`, `12.5`, `33.33`).
pub fn format_percentage(percentage: f64) -> String {
    let mut s = format!("{:.2}", percentage);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.push('0');
    }
    s
}

/// Number of filled cells for a percentage: `floor(width * pct / 100)`,
/// clamped to `0..=width`.
pub fn filled_cells(percentage: f64, width: usize) -> usize {
    let filled = (width as f64 * percentage / 100.0).floor();
    if filled <= 0.0 {
        0
    } else {
        (filled as usize).min(width)
    }
}

/// Block-character progress bar, e.g. `█████████░░░░░░░░░░░░░░░░░░░░░`.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = filled_cells(percentage, width);
    let mut bar = "\u{2588}".repeat(filled);
    bar.push_str(&"\u{2591}".repeat(width - filled));
    bar
}
