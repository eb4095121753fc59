//! `index.html` rendering.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use gamedb_progress::display::{format_count, format_percentage};
use gamedb_progress::{
    DiscoveredCatalog, GameRecord, ProgressEntry, ProgressSummary, ReferenceConsole,
};

use crate::assets::{SCRIPT_FILENAME, STYLE_FILENAME};
use crate::date::format_release_date;
use crate::html::HtmlBuilder;

const TITLE: &str = "Dead Console Game Database";

/// Everything needed to render the page.
#[derive(Debug, Clone, Copy)]
pub struct SitePage<'a> {
    pub summary: &'a ProgressSummary,
    /// Discovered catalogs in discovery order; their games become cards.
    pub catalogs: &'a [DiscoveredCatalog],
    /// Maximum number of missing consoles to list.
    pub missing_limit: usize,
    pub generated_at: NaiveDateTime,
}

/// Filter key for a console: lowercase with spaces replaced by hyphens.
pub fn console_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Render the complete HTML document.
///
/// Output depends only on `page`, so two renders with the same timestamp
/// are byte-identical.
pub fn render_index(page: &SitePage<'_>) -> String {
    let generated = page.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let mut html = HtmlBuilder::new();

    html.doctype().open("html", &[("lang", "en")]);
    html.open("head", &[])
        .void("meta", &[("charset", "UTF-8")])
        .void(
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1.0"),
            ],
        )
        .element("title", &[], TITLE)
        .void("link", &[("rel", "stylesheet"), ("href", STYLE_FILENAME)])
        .close("head");

    html.open("body", &[]);
    html.open("header", &[("class", "site-header")])
        .element("h1", &[], TITLE)
        .element(
            "p",
            &[("class", "subtitle")],
            "Tracking every official release for discontinued consoles",
        )
        .element("p", &[("class", "generated")], &format!("Last updated: {}", generated))
        .close("header");

    html.open("main", &[]);
    write_stats(&mut html, page.summary);
    write_progress_cards(&mut html, &page.summary.entries);
    write_missing(&mut html, &page.summary.missing, page.missing_limit);
    write_games(&mut html, page);
    html.close("main");

    html.open("footer", &[("class", "site-footer")])
        .element(
            "p",
            &[],
            &format!(
                "Generated {} from {} catalog files",
                generated,
                page.catalogs.len()
            ),
        )
        .close("footer");
    html.element("script", &[("src", SCRIPT_FILENAME)], "");
    html.close("body").close("html");
    html.finish()
}

fn stat_card(html: &mut HtmlBuilder, value: &str, label: &str) {
    html.open("div", &[("class", "stat-card")])
        .element("span", &[("class", "stat-value")], value)
        .element("span", &[("class", "stat-label")], label)
        .close("div");
}

fn write_stats(html: &mut HtmlBuilder, summary: &ProgressSummary) {
    html.open("section", &[("class", "stats")]);
    stat_card(html, &format_count(summary.reference_count as u64), "Dead Consoles");
    stat_card(html, &format_count(summary.created_count() as u64), "Databases Created");
    stat_card(html, &format_count(summary.total_current_games()), "Games Catalogued");
    stat_card(
        html,
        &format!("{:.1}%", summary.overall_percentage()),
        "Overall Progress",
    );
    html.close("section");
}

fn write_progress_cards(html: &mut HtmlBuilder, entries: &[ProgressEntry]) {
    html.open("section", &[("class", "progress-section")])
        .element("h2", &[], "Console Progress");

    if entries.is_empty() {
        html.element("p", &[("class", "empty")], "No console databases found.");
        html.close("section");
        return;
    }

    html.open("div", &[("class", "progress-grid")]);
    for entry in entries {
        let slug = console_slug(&entry.console);
        let pct = format_percentage(entry.percentage_complete);
        let status_class = format!("status-{}", entry.status.css_class());
        let fill_class = format!("progress-fill {}", status_class);
        let badge_class = format!("status-badge {}", status_class);

        html.open("div", &[("class", "progress-card"), ("data-console", slug.as_str())])
            .element("h3", &[], &entry.console)
            .element(
                "p",
                &[("class", "console-meta")],
                &format!(
                    "{} \u{b7} Gen {} \u{b7} {}",
                    entry.manufacturer,
                    entry.generation_label(),
                    entry.year_range()
                ),
            );
        html.open("div", &[("class", "progress-bar")])
            .element(
                "div",
                &[
                    ("class", fill_class.as_str()),
                    ("data-percentage", pct.as_str()),
                ],
                "",
            )
            .close("div");
        html.open("div", &[("class", "progress-details")])
            .element(
                "span",
                &[("class", badge_class.as_str())],
                entry.status.label(),
            )
            .element(
                "span",
                &[("class", "progress-count")],
                &format!(
                    "{} / {} games ({}%)",
                    format_count(entry.current_games),
                    format_count(entry.total_official_games),
                    pct
                ),
            )
            .close("div");
        html.element(
            "p",
            &[("class", "file-info")],
            &format!(
                "{} \u{b7} Updated {}",
                entry.source_filename, entry.last_updated
            ),
        );
        html.close("div");
    }
    html.close("div").close("section");
}

fn write_missing(html: &mut HtmlBuilder, missing: &[ReferenceConsole], limit: usize) {
    if missing.is_empty() {
        return;
    }

    let shown = missing.len().min(limit);
    html.open("section", &[("class", "missing-section")])
        .element("h2", &[], "Missing Consoles")
        .element(
            "p",
            &[("class", "section-note")],
            &format!(
                "Top {} of {} consoles without a database, by official game count",
                shown,
                missing.len()
            ),
        );
    html.open("div", &[("class", "missing-grid")]);
    // `missing` is already sorted by official game count, largest first.
    for console in &missing[..shown] {
        html.open("div", &[("class", "missing-card")])
            .element("h4", &[], &console.name)
            .element("p", &[("class", "console-meta")], console.manufacturer())
            .element(
                "p",
                &[("class", "missing-count")],
                &format!(
                    "{} games \u{b7} Gen {} \u{b7} {}",
                    format_count(console.total_official_games),
                    console.generation_label(),
                    console.year_range()
                ),
            )
            .close("div");
    }
    html.close("div").close("section");
}

fn write_games(html: &mut HtmlBuilder, page: &SitePage<'_>) {
    let total_games: usize = page.catalogs.iter().map(|c| c.games.len()).sum();

    html.open("section", &[("class", "games-section")])
        .element("h2", &[], "All Games");

    html.open("div", &[("class", "controls")]).void(
        "input",
        &[
            ("type", "search"),
            ("id", "search"),
            ("placeholder", "Search by title, developer or publisher..."),
        ],
    );
    html.open("select", &[("id", "console-filter")])
        .element("option", &[("value", "all")], "All Consoles");
    let mut seen = HashSet::new();
    for entry in &page.summary.entries {
        if seen.insert(entry.console.as_str()) {
            let slug = console_slug(&entry.console);
            html.element("option", &[("value", slug.as_str())], &entry.console);
        }
    }
    html.close("select");
    html.open("select", &[("id", "sort-by")])
        .element("option", &[("value", "title")], "Sort by Title")
        .element("option", &[("value", "year")], "Sort by Year")
        .element("option", &[("value", "console")], "Sort by Console")
        .close("select");
    html.close("div");

    html.element(
        "p",
        &[("id", "game-count"), ("class", "section-note")],
        &format!("{} games", format_count(total_games as u64)),
    );

    html.open("div", &[("class", "games-grid"), ("id", "games-grid")]);
    for catalog in page.catalogs {
        let console = display_name(page.summary, catalog);
        let slug = console_slug(console);
        for game in &catalog.games {
            write_game_card(html, game, console, &slug);
        }
    }
    html.close("div").close("section");
}

fn write_game_card(html: &mut HtmlBuilder, game: &GameRecord, console: &str, slug: &str) {
    let release = format_release_date(game.release_date.as_deref());
    html.open(
        "div",
        &[
            ("class", "game-card"),
            ("data-title", game.title()),
            ("data-developer", game.developer()),
            ("data-publisher", game.publisher()),
            ("data-console", slug),
            ("data-year", game.release_year().unwrap_or("")),
            ("data-release-date", game.release_date.as_deref().unwrap_or("")),
        ],
    )
    .element("h4", &[("class", "game-title")], game.title())
    .element("p", &[("class", "game-console")], console)
    .element(
        "p",
        &[("class", "game-meta")],
        &format!("Developer: {}", game.developer()),
    )
    .element(
        "p",
        &[("class", "game-meta")],
        &format!("Publisher: {}", game.publisher()),
    )
    .element(
        "p",
        &[("class", "game-meta")],
        &format!("Released: {}", release),
    )
    .close("div");
}

/// Reference name for matched catalogs, derived name otherwise.
fn display_name<'a>(summary: &'a ProgressSummary, catalog: &'a DiscoveredCatalog) -> &'a str {
    summary
        .matches
        .iter()
        .find(|m| m.source_filename == catalog.source_filename)
        .map(|m| m.display_name())
        .unwrap_or(catalog.console_name.as_str())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
