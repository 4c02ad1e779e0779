//! Tests for configuration system

use mysticalbeach::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config =
        Config::load(Some("config/default.toml".to_string())).expect("Failed to load config");

    assert_eq!(config.email.endpoint, "https://api.resend.com/emails");
    assert_eq!(
        config.email.from_address,
        "Mystical Beach <onboarding@resend.dev>"
    );
    assert!(!config.email.contact_address.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_defaults_without_file() {
    let config =
        Config::load(Some("config/missing.toml".to_string())).expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert_eq!(config.email.endpoint, "https://api.resend.com/emails");
    assert!(!config.logging.level.is_empty());
}
