use chrono::NaiveDate;
use gamedb_progress::{MatchStrategy, calculate_progress};
use gamedb_site::{INDEX_FILENAME, SiteError, SitePage, write_site};
use std::fs;
use tempfile::TempDir;

fn page_at<'a>(
    summary: &'a gamedb_progress::ProgressSummary,
    hour: u32,
) -> SitePage<'a> {
    SitePage {
        summary,
        catalogs: &[],
        missing_limit: 12,
        generated_at: NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
    }
}

#[test]
fn writes_all_three_files() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("site");
    let summary = calculate_progress(&[], &[], MatchStrategy::default());

    let artifacts = write_site(&out, &page_at(&summary, 9)).unwrap();
    assert!(artifacts.style_written);
    assert!(artifacts.script_written);
    assert_eq!(artifacts.index_path, out.join(INDEX_FILENAME));
    assert!(out.join("style.css").exists());
    assert!(out.join("script.js").exists());
    assert!(fs::read_to_string(out.join("index.html")).unwrap().contains("<html lang=\"en\">"));
}

#[test]
fn assets_are_never_overwritten() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path();
    fs::write(out.join("style.css"), "/* customized */").unwrap();
    let summary = calculate_progress(&[], &[], MatchStrategy::default());

    let artifacts = write_site(out, &page_at(&summary, 9)).unwrap();
    assert!(!artifacts.style_written);
    assert!(artifacts.script_written);
    assert_eq!(fs::read_to_string(out.join("style.css")).unwrap(), "/* customized */");

    let again = write_site(out, &page_at(&summary, 10)).unwrap();
    assert!(!again.style_written);
    assert!(!again.script_written);
}

#[test]
fn index_is_overwritten_and_only_timestamps_change() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path();
    let summary = calculate_progress(&[], &[], MatchStrategy::default());

    write_site(out, &page_at(&summary, 9)).unwrap();
    let first = fs::read_to_string(out.join(INDEX_FILENAME)).unwrap();
    write_site(out, &page_at(&summary, 10)).unwrap();
    let second = fs::read_to_string(out.join(INDEX_FILENAME)).unwrap();

    assert_ne!(first, second);
    assert_eq!(
        first.replace("2024-03-01 09:00:00", "TS"),
        second.replace("2024-03-01 10:00:00", "TS")
    );
}

#[test]
fn output_path_that_is_a_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("site");
    fs::write(&out, "not a dir").unwrap();
    let summary = calculate_progress(&[], &[], MatchStrategy::default());

    let err = write_site(&out, &page_at(&summary, 9)).unwrap_err();
    assert!(matches!(err, SiteError::InvalidOutput(_)));
}
