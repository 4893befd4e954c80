/*!
 * Translation service for subtitle translation.
 *
 * This module contains the functionality for translating dialogue text
 * through a chat-completion gateway. It is split into two submodules:
 * - `batch`: batch planning and response/count reconciliation
 * - `core`: the translation service (batch and title requests)
 */

// Re-export main types for easier usage
pub use self::core::TranslationService;
pub use self::batch::SPLITTER;

// Submodules
pub mod batch;
pub mod core;
