//! Configuration loading tests

use std::fs;

use qa_checklist::config::AppConfig;
use qa_checklist::core::services::{DEFAULT_ENDPOINTS, PolicyKind};
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = AppConfig::from_toml("").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.validation.policy, PolicyKind::RequireNoteIfUnchecked);
    assert!(config.network.enabled);
    assert_eq!(config.network.endpoints.len(), DEFAULT_ENDPOINTS.len());
    assert_eq!(config.layout.bottom_margin, 280.0);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = AppConfig::from_toml(
        r#"
[validation]
policy = "always-pass"

[network]
enabled = false
attempts = 4

[layout]
bottom_margin = 200.0
"#,
    )
    .unwrap();

    assert_eq!(config.validation.policy, PolicyKind::AlwaysPass);
    assert!(!config.network.enabled);
    assert_eq!(config.network.attempts, 4);
    assert_eq!(config.network.timeout_secs, 5);
    assert_eq!(config.layout.bottom_margin, 200.0);
    assert_eq!(config.layout.top_margin, 15.0);
}

#[test]
fn unknown_policy_is_rejected() {
    assert!(AppConfig::from_toml("[validation]\npolicy = \"lenient\"\n").is_err());
}

#[test]
fn explicit_file_must_exist() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qa.toml");
    fs::write(&path, "[output]\ndirectory = \"reports\"\n").unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.output.directory.as_deref(), Some(std::path::Path::new("reports")));
}

#[cfg(feature = "net")]
#[test]
fn default_network_config_matches_default_lookup() {
    use qa_checklist::core::services::AddressLookup;

    assert_eq!(AppConfig::default().network.lookup(), AddressLookup::default());
}
