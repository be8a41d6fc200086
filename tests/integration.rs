// SPDX-License-Identifier: MPL-2.0
use iced_translator::config::{self, Config, DEFAULT_MAX_FILE_MB, DEFAULT_SERVER_URL};
use iced_translator::i18n::fluent::I18n;
use iced_translator::ui::theming::ThemeMode;
use std::path::Path;
use tempfile::tempdir;

fn write_settings(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    std::fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    write_settings(&initial, &path);

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("tab-pdf"), "PDF");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    write_settings(&french, &path);

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("tab-text"), "Texte");
}

#[test]
fn test_cli_language_wins_over_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_partial_settings_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[server]\nbase_url = \"http://translate.lan:9000\"\n\n[general]\ntheme_mode = \"dark\"\n",
    )
    .expect("Failed to write settings");

    let loaded = config::load_from_path(&path).expect("Failed to load settings");
    assert_eq!(loaded.server.base_url, "http://translate.lan:9000");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.languages.default_target, "zh-TW");
    assert_eq!(
        loaded.upload.max_file_bytes(),
        u64::from(DEFAULT_MAX_FILE_MB) * 1024 * 1024
    );
}

#[test]
fn test_missing_settings_dir_yields_defaults_without_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().join("absent")));

    assert!(warning.is_none());
    assert_eq!(loaded.server.base_url, DEFAULT_SERVER_URL);
}

#[test]
fn test_corrupt_settings_file_warns() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[server\nbase_url = ")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_load_with_override_reads_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.languages.default_source = "en".to_string();
    config.upload.max_file_mb = Some(10);

    write_settings(&config, &dir.path().join("settings.toml"));
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}
