use intake::infrastructure::observability::TracingConfig;
use intake::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings("prod", &logging);

    assert_eq!(config.environment, "prod");
    assert_eq!(config.level, "warn");
    assert!(config.json_format);
}
