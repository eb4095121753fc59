use super::*;
use tempfile::TempDir;

#[test]
fn defaults_are_rooted_at_input_dir() {
    let settings = TrackerSettings::new("/data/gamedb");
    assert_eq!(settings.output_dir, PathBuf::from("/data/gamedb/site"));
    assert_eq!(settings.reference_path(), PathBuf::from("/data/gamedb/dead_consoles.json"));
    assert_eq!(settings.catalog_suffix, "_games.json");
    assert_eq!(settings.strategy, MatchStrategy::ExactThenSubstring);
    assert_eq!(settings.missing_limit, 12);
}

#[test]
fn cli_overrides_win_over_file() {
    let file = SettingsFile {
        paths: PathSettings {
            input_dir: Some(PathBuf::from("/from/file")),
            output_dir: Some(PathBuf::from("/from/file/docs")),
            reference_file: Some("consoles.json".into()),
            catalog_suffix: Some("_db.json".into()),
        },
        matching: MatchingSettings {
            strategy: Some(MatchStrategy::FirstSubstring),
        },
        site: SiteSettings {
            missing_limit: Some(5),
        },
    };

    let from_file = TrackerSettings::resolve(SettingsOverrides::default(), &file);
    assert_eq!(from_file.input_dir, PathBuf::from("/from/file"));
    assert_eq!(from_file.output_dir, PathBuf::from("/from/file/docs"));
    assert_eq!(from_file.reference_file, "consoles.json");
    assert_eq!(from_file.catalog_suffix, "_db.json");
    assert_eq!(from_file.strategy, MatchStrategy::FirstSubstring);
    assert_eq!(from_file.missing_limit, 5);

    let overrides = SettingsOverrides {
        input_dir: Some(PathBuf::from("/from/cli")),
        output_dir: None,
        reference_file: None,
        strategy: Some(MatchStrategy::ExactThenSubstring),
    };
    let resolved = TrackerSettings::resolve(overrides, &file);
    assert_eq!(resolved.input_dir, PathBuf::from("/from/cli"));
    assert_eq!(resolved.output_dir, PathBuf::from("/from/file/docs"));
    assert_eq!(resolved.strategy, MatchStrategy::ExactThenSubstring);
}

#[test]
fn output_defaults_follow_overridden_input() {
    let overrides = SettingsOverrides {
        input_dir: Some(PathBuf::from("/games")),
        ..Default::default()
    };
    let resolved = TrackerSettings::resolve(overrides, &SettingsFile::default());
    assert_eq!(resolved.output_dir, PathBuf::from("/games/site"));
}

#[test]
fn load_settings_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[paths]
input_dir = "/home/me/gamedb"

[matching]
strategy = "first-substring"
"#,
    )
    .unwrap();

    let file = SettingsFile::load(&path).unwrap();
    assert_eq!(file.paths.input_dir, Some(PathBuf::from("/home/me/gamedb")));
    assert_eq!(file.matching.strategy, Some(MatchStrategy::FirstSubstring));
    assert_eq!(file.site.missing_limit, None);
}

#[test]
fn missing_settings_file_is_default() {
    let tmp = TempDir::new().unwrap();
    let file = SettingsFile::load(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(file, SettingsFile::default());
}

#[test]
fn invalid_settings_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[matching]\nstrategy = \"fuzzy\"\n").unwrap();

    let err = SettingsFile::load(&path).unwrap_err();
    assert!(matches!(err, ProgressError::SettingsParse { .. }));
}

#[test]
fn settings_render_as_toml() {
    let text = TrackerSettings::new("/data").to_toml_string().unwrap();
    assert!(text.contains("reference_file = \"dead_consoles.json\""));
    assert!(text.contains("strategy = \"exact-then-substring\""));
}

#[test]
fn broken_settings_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "paths = \"oops\n").unwrap();

    assert!(SettingsFile::load(&path).is_err());
    let file = SettingsFile::load_or_default(&path);
    assert_eq!(file, SettingsFile::default());

    let resolved = TrackerSettings::resolve(
        SettingsOverrides {
            input_dir: Some(PathBuf::from("/games")),
            ..Default::default()
        },
        &file,
    );
    assert_eq!(resolved, TrackerSettings::new("/games"));
}
