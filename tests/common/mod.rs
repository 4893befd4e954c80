/*!
 * Common test utilities and fixtures for the sublate test suite
 */

#![allow(dead_code)]

use sublate::app_config::{Config, TranslationConfig};
use sublate::providers::mock::MockProvider;
use sublate::translation::TranslationService;

/// A small well-formed SRT document with a numbering gap (1, 2, 5)
pub fn sample_srt() -> &'static str {
    "1\n\
     00:00:01,000 --> 00:00:04,000\n\
     Hello there\n\
     \n\
     2\n\
     00:00:05,000 --> 00:00:08,000\n\
     How are you?\n\
     Fine, thanks.\n\
     \n\
     5\n\
     00:00:09,000 --> 00:00:12,000\n\
     Goodbye\n"
}

/// A small ASS document with a title, styles, and two dialogue events
pub fn sample_ass() -> &'static str {
    "[Script Info]\n\
     Title: Example Show\n\
     ScriptType: v4.00+\n\
     \n\
     [V4+ Styles]\n\
     Format: Name, Fontname\n\
     Style: Default,Arial\n\
     \n\
     [Events]\n\
     Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n\
     Dialogue: 0,0:00:01.00,0:00:04.00,Default,,0,0,0,,Hello there\n\
     Dialogue: 0,0:00:05.00,0:00:08.00,Default,,0,0,0,,How are you?\n"
}

/// A translation config suitable for tests (never hits the network)
pub fn test_translation_config() -> TranslationConfig {
    TranslationConfig {
        api_key: "test-key".to_string(),
        ..TranslationConfig::default()
    }
}

/// A full application config that passes validation
pub fn test_config() -> Config {
    Config {
        target_language: "fr".to_string(),
        translation: test_translation_config(),
        ..Config::default()
    }
}

/// A translation service driven by a shared mock provider
pub fn mock_service(mock: &MockProvider) -> TranslationService<&MockProvider> {
    TranslationService::new(mock, test_translation_config(), "fr".to_string())
}
