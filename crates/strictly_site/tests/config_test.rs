//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use strictly_memory::Difficulty;
use strictly_site::SiteConfig;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = SiteConfig::default();
    assert_eq!(config.db_path(), &PathBuf::from("strictly_site.db"));
    assert_eq!(*config.game().tick_ms(), 1000);
    assert_eq!(*config.game().reveal_ms(), 1000);
    assert_eq!(*config.game().default_difficulty(), Difficulty::Easy);
    assert_eq!(config.form().timings().popup, Duration::from_millis(2500));
    assert_eq!(config.form().phone_format().format("061234567"), "+370 612 34567");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = SiteConfig::from_toml_str(
        r#"
        db_path = "scores.db"

        [game]
        default_difficulty = "hard"
        reveal_ms = 500
        "#,
    )
    .expect("valid config");

    assert_eq!(config.db_path(), &PathBuf::from("scores.db"));
    assert_eq!(config.log_path(), &PathBuf::from("strictly_site.log"));
    assert_eq!(*config.game().default_difficulty(), Difficulty::Hard);
    assert_eq!(config.game().timings().reveal, Duration::from_millis(500));
    assert_eq!(config.game().timings().tick, Duration::from_secs(1));
    assert_eq!(config.form().country_code(), "370");
}

#[test]
fn test_custom_phone_format() {
    let config = SiteConfig::from_toml_str(
        r#"
        [form]
        country_code = "44"
        national_digits = 10
        popup_ms = 1000
        "#,
    )
    .expect("valid config");

    assert_eq!(config.form().phone_format().format("07911123456"), "+44 791 1123456");
    assert_eq!(config.form().timings().popup, Duration::from_secs(1));
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(SiteConfig::from_toml_str("[game]\ntick_ms = 0").is_err());
    assert!(SiteConfig::from_toml_str("[form]\ncountry_code = \"+370\"").is_err());
    assert!(SiteConfig::from_toml_str("[game]\ndefault_difficulty = \"medium\"").is_err());
    assert!(SiteConfig::from_toml_str("db_path = ").is_err());
}

#[test]
fn test_missing_file_means_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = SiteConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "log_path = \"site.log\"").expect("write");

    let config = SiteConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(config.log_path(), &PathBuf::from("site.log"));
}

#[test]
fn test_db_path_override() {
    let config = SiteConfig::default().with_db_path("/tmp/other.db");
    assert_eq!(config.db_path(), &PathBuf::from("/tmp/other.db"));
}
