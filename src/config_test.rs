use super::*;

#[test]
fn default_config_redirect_targets_differ() {
    let config = AppConfig::default();
    assert_eq!(config.entry_path, "/");
    assert_eq!(config.landing_path, "/dashboard");
    assert_ne!(config.entry_path, config.landing_path);
}

#[test]
fn default_idle_timeout_is_thirty_minutes() {
    assert_eq!(AppConfig::default().idle_timeout_minutes, 30);
}
