use aquaflow::core::config::{Config, DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL_SECS};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.endpoint.is_none());
    assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    assert_eq!(config.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
}

#[test]
fn test_config_set_endpoint() {
    let mut config = Config::default();
    config.set_endpoint("http://plant.example:5000".to_string());
    assert_eq!(config.endpoint(), "http://plant.example:5000");
}

#[test]
fn test_config_json_roundtrip() {
    let mut config = Config::default();
    config.set_endpoint("http://water.example".to_string());
    config.set_poll_interval(10);

    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.endpoint(), "http://water.example");
    assert_eq!(restored.poll_interval_secs, 10);
}

#[test]
fn test_config_save_and_load() {
    // Point the config directory at a temp location
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

    let mut config = Config::default();
    config.set_endpoint("http://roundtrip.example".to_string());
    config.save().unwrap();

    let loaded = Config::load().unwrap();
    assert_eq!(loaded.endpoint(), "http://roundtrip.example");

    std::env::remove_var("XDG_CONFIG_HOME");
}

#[test]
fn test_corrupted_config_falls_back_to_default() {
    let config: Config = serde_json::from_str(r#"{"poll_interval_secs":45}"#).unwrap();
    assert_eq!(config.poll_interval_secs, 45);
    assert!(config.endpoint.is_none());
}
