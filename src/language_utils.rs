/*!
 * Language utilities for ISO language code handling.
 *
 * The translation prompt addresses the target language by name, not by code,
 * so the user-supplied ISO 639-1/639-3 code is resolved here.
 */

use anyhow::{Result, anyhow};
use isolang::Language;

/// Validate that a language code is a known ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized = code.trim().to_lowercase();

    if normalized.len() == 2 && Language::from_639_1(&normalized).is_some() {
        return Ok(());
    }
    if normalized.len() == 3 && Language::from_639_3(&normalized).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    let lang = if normalized.len() == 2 {
        Language::from_639_1(&normalized)
    } else {
        Language::from_639_3(&normalized)
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}

/// Resolve the label used inside translation prompts
///
/// Unknown codes fall back to the raw string so the prompt still carries the
/// user's intent instead of failing the run.
pub fn prompt_label(code: &str) -> String {
    get_language_name(code).unwrap_or_else(|_| code.trim().to_string())
}
