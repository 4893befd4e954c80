/*!
 * Tests for configuration validation and deserialization
 */

use sublate::app_config::{Config, LogLevel};
use crate::common;

/// Test a fully populated config passes validation
#[test]
fn test_validate_withCompleteConfig_shouldSucceed() {
    let config = common::test_config();
    assert!(config.validate().is_ok());
}

/// Test that a missing API key is fatal
#[test]
fn test_validate_withEmptyApiKey_shouldFail() {
    let mut config = common::test_config();
    config.translation.api_key = String::new();
    assert!(config.validate().is_err());
}

/// Test batch count range enforcement
#[test]
fn test_validate_withBatchCountOutOfRange_shouldFail() {
    let mut config = common::test_config();

    config.translation.batch_count = 0;
    assert!(config.validate().is_err());

    config.translation.batch_count = 101;
    assert!(config.validate().is_err());

    config.translation.batch_count = 1;
    assert!(config.validate().is_ok());

    config.translation.batch_count = 100;
    assert!(config.validate().is_ok());
}

/// Test temperature range enforcement
#[test]
fn test_validate_withTemperatureOutOfRange_shouldFail() {
    let mut config = common::test_config();

    config.translation.temperature = 1.5;
    assert!(config.validate().is_err());

    config.translation.temperature = -0.1;
    assert!(config.validate().is_err());

    config.translation.temperature = 0.0;
    assert!(config.validate().is_ok());

    config.translation.temperature = 1.0;
    assert!(config.validate().is_ok());
}

/// Test endpoint URL validation
#[test]
fn test_validate_withInvalidEndpoint_shouldFail() {
    let mut config = common::test_config();
    config.translation.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

/// Test deserialization from minimal JSON fills in defaults
#[test]
fn test_deserialize_withMinimalJson_shouldApplyDefaults() {
    let json = r#"{
        "target_language": "ja",
        "translation": { "api_key": "sk-test" }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.target_language, "ja");
    assert_eq!(config.translation.api_key, "sk-test");
    assert_eq!(config.translation.model, "gpt-4o-mini");
    assert_eq!(config.translation.batch_count, 10);
    assert!(config.translation.system_prompt.is_none());
    assert!(config.validate().is_ok());
}

/// Test the log level mapping used when applying the config-file level
#[test]
fn test_log_level_toLevelFilter_shouldMapAllVariants() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
}

/// Test serialization round trip
#[test]
fn test_serialize_withCompleteConfig_shouldRoundTrip() {
    let config = common::test_config();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let reparsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(reparsed.target_language, config.target_language);
    assert_eq!(reparsed.translation.endpoint, config.translation.endpoint);
    assert_eq!(reparsed.translation.batch_count, config.translation.batch_count);
}
