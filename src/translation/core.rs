/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which builds the
 * per-batch and title chat requests, invokes the provider, and degrades to
 * passthrough on any gateway failure.
 */

use log::{error, debug};

use crate::app_config::{Config, TranslationConfig};
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::openai::{ChatRequest, OpenAI};
use crate::subtitle_processor::TitleInfo;
use super::batch;

/// Translation service for one run
///
/// Holds the gateway client plus the request parameters. All methods are
/// infallible from the caller's point of view: gateway failures are logged and
/// the original text is returned unchanged.
#[derive(Debug)]
pub struct TranslationService<P: Provider> {
    /// Gateway client
    provider: P,

    /// Model, temperature, system prompt
    config: TranslationConfig,

    /// Target language code (ISO)
    target_language: String,
}

impl TranslationService<OpenAI> {
    /// Create a service backed by the real OpenAI-compatible client
    pub fn from_config(config: &Config) -> Self {
        let provider = OpenAI::new(&config.translation.api_key, &config.translation.endpoint);
        Self::new(provider, config.translation.clone(), config.target_language.clone())
    }
}

impl<P: Provider> TranslationService<P> {
    /// Create a service with an explicit provider
    pub fn new(provider: P, config: TranslationConfig, target_language: String) -> Self {
        Self {
            provider,
            config,
            target_language,
        }
    }

    /// Translate one batch of dialogue texts
    ///
    /// The returned vector always has exactly `texts.len()` entries. On any
    /// gateway failure the batch degrades to the untranslated sources.
    pub async fn translate_batch(&self, texts: &[String]) -> Vec<String> {
        if texts.is_empty() {
            return Vec::new();
        }

        let mut request = ChatRequest::new(&self.config.model)
            .temperature(self.config.temperature);

        if let Some(system_prompt) = &self.config.system_prompt {
            if !system_prompt.trim().is_empty() {
                request = request.add_message("system", system_prompt);
            }
        }
        request = request.add_message("user", self.batch_prompt(texts));

        match self.provider.complete(request).await {
            Ok(response) => {
                let segments = batch::split_response(&response.extract_text());
                batch::reconcile_counts(segments, texts)
            }
            Err(e) => {
                error!("Batch translation failed, keeping original text: {}", e);
                texts.to_vec()
            }
        }
    }

    /// Translate the optional ASS title
    ///
    /// Returns the full replacement line (`prefix + translation`); on failure,
    /// or when there is nothing to translate, the original title line is
    /// returned unchanged.
    pub async fn translate_title(&self, title: &TitleInfo) -> String {
        if !title.has_title || title.title_text.is_empty() {
            return title.title_line.clone();
        }

        let prompt = format!(
            "Translate the following film title into {}:\n{}\nReturn only the translation.",
            self.language_label(),
            title.title_text
        );
        let request = ChatRequest::new(&self.config.model).add_message("user", prompt);

        match self.provider.complete(request).await {
            Ok(response) => {
                let translated = response.extract_text();
                debug!("Title translated: '{}' -> '{}'", title.title_text, translated.trim());
                format!("{}{}", title.title_prefix, translated.trim())
            }
            Err(e) => {
                error!("Title translation failed, keeping original: {}", e);
                title.title_line.clone()
            }
        }
    }

    /// Build the user message for one batch
    fn batch_prompt(&self, texts: &[String]) -> String {
        format!(
            "Translate the following {count} subtitle entries into {language}.\n\
             \n\
             Rules (follow them strictly):\n\
             - Keep the output format identical to the input\n\
             - Translate each entry independently and keep the original segmentation; never merge or split entries\n\
             - If an entry is blank or only whitespace, return a blank entry\n\
             \n\
             Return only the translations, separated by \"{splitter}\", with exactly as many entries as the input:\n\
             \n\
             {entries}",
            count = texts.len(),
            language = self.language_label(),
            splitter = batch::SPLITTER,
            entries = batch::join_entries(texts),
        )
    }

    /// Human-readable target language name for the prompt
    fn language_label(&self) -> String {
        language_utils::prompt_label(&self.target_language)
    }
}
