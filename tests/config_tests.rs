use std::io::Write;

use pulsewatch::config::MonitorConfig;
use pulsewatch::core::RhythmMode;

#[test]
fn test_empty_config_uses_defaults() {
    let config = MonitorConfig::from_json(serde_json::json!({})).unwrap();

    assert_eq!(config, MonitorConfig::default());
    assert_eq!(config.sample_interval_ms, 100);
    assert_eq!(config.window_size, 30);
    assert_eq!(config.rhythm_mode(), RhythmMode::Normal);
    assert_eq!(config.sample_interval_secs(), 0.1);
}

#[test]
fn test_partial_config_overrides() {
    let config = MonitorConfig::from_json(serde_json::json!({
        "mode": "afib",
        "motion_level": 0.4,
        "seed": 9
    }))
    .unwrap();

    assert_eq!(config.rhythm_mode(), RhythmMode::Afib);
    assert_eq!(config.motion_level, 0.4);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.channel_capacity, 100);
}

#[test]
fn test_unknown_mode_is_accepted_as_normal() {
    let config = MonitorConfig::from_json(serde_json::json!({"mode": "flutter"})).unwrap();
    assert_eq!(config.rhythm_mode(), RhythmMode::Normal);
}

#[test]
fn test_zero_interval_rejected() {
    let err = MonitorConfig::from_json(serde_json::json!({"sample_interval_ms": 0})).unwrap_err();
    assert!(err.to_string().contains("sample_interval_ms"));
}

#[test]
fn test_wrong_type_rejected() {
    assert!(MonitorConfig::from_json(serde_json::json!({"window_size": "thirty"})).is_err());
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"mode": "bradycardia", "sample_interval_ms": 50}}"#).unwrap();

    let config = MonitorConfig::load(file.path()).await.unwrap();
    assert_eq!(config.rhythm_mode(), RhythmMode::Bradycardia);
    assert_eq!(config.sample_interval_ms, 50);
}

#[tokio::test]
async fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = MonitorConfig::load(dir.path().join("missing.json")).await;
    assert!(result.is_err());
}
