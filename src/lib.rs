/*!
 * # sublate
 *
 * A Rust library and CLI for translating subtitle files with an
 * OpenAI-compatible chat-completion endpoint.
 *
 * ## Features
 *
 * - Parse SubRip (.srt) and Advanced SubStation Alpha (.ass) files
 * - Translate dialogue text in configurable contiguous batches
 * - Preserve all non-dialogue structure byte-for-byte (ASS styles, script
 *   info, timing metadata)
 * - Degrade gracefully: gateway failures keep the original text and the run
 *   always produces an output file
 * - Preview records for a review/edit step before final export
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Format detection, parsing, and reassembly
 * - `translation`: batching and the translation service:
 *   - `translation::batch`: batch planning and count reconciliation
 *   - `translation::core`: batch and title translation requests
 * - `file_utils`: File system operations
 * - `app_controller`: Pipeline orchestration
 * - `language_utils`: ISO language code utilities
 * - `providers`: Chat-completion gateway clients:
 *   - `providers::openai`: OpenAI-compatible API client
 *   - `providers::mock`: canned-response provider for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod translation;
pub mod app_controller;
pub mod language_utils;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::{SubtitleDocument, SubtitleFormat, SubtitleLine, TitleInfo, TranslatedSubtitleLine};
pub use translation::TranslationService;
pub use app_controller::{Controller, PipelineResult, run_pipeline};
pub use errors::{AppError, ProviderError, SubtitleError, TranslationError};
