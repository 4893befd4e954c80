use anyhow::{Result, anyhow};
use log::{info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::providers::Provider;
use crate::subtitle_processor::{SubtitleDocument, SubtitleFormat, TranslatedSubtitleLine};
use crate::translation::TranslationService;
use crate::translation::batch;

// @module: Pipeline orchestration

/// Everything one translation run produced
///
/// `records` feed the preview/edit step; after edits they can be re-rendered
/// through [`SubtitleDocument::render_edited`] without re-running the
/// pipeline.
pub struct PipelineResult {
    /// Detected input format
    pub format: SubtitleFormat,

    /// The parsed document, kept for re-rendering after edits
    pub document: SubtitleDocument,

    /// Translated title line (empty when the input has no title)
    pub translated_title: String,

    /// Per-dialogue-line preview records, dense 1..N
    pub records: Vec<TranslatedSubtitleLine>,

    /// Fully reconstructed output text
    pub output: String,
}

/// Main application controller
pub struct Controller {
    /// Application configuration
    config: Config,
}

impl Controller {
    /// Create a controller with a validated configuration
    ///
    /// Configuration problems (missing credential, bad endpoint, out-of-range
    /// knobs) are fatal and surface here, before any processing begins.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Controller { config })
    }

    /// Translate one subtitle file and write the output next to it
    pub async fn run(&self, input_file: &Path, output_file: Option<&Path>) -> Result<PathBuf> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let raw = FileManager::read_to_string(input_file)?;
        let service = TranslationService::from_config(&self.config);

        // Progress measured in completed dialogue lines
        let progress_bar = ProgressBar::new(0);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);
        progress_bar.set_message("Translating");

        let result = run_pipeline(
            &raw,
            &service,
            self.config.translation.batch_count,
            |completed, total| {
                progress_bar.set_length(total as u64);
                progress_bar.set_position(completed as u64);
            },
        )
        .await;

        progress_bar.finish_and_clear();

        let output_path = match output_file {
            Some(path) => path.to_path_buf(),
            None => FileManager::generate_output_path(input_file, "translated_")?,
        };
        FileManager::write_to_file(&output_path, &result.output)?;

        info!(
            "Translated {} dialogue lines ({}) -> {:?}",
            result.records.len(),
            result.format,
            output_path
        );

        Ok(output_path)
    }
}

/// Run the parse -> batch -> translate -> reassemble pipeline over raw text
///
/// Batches are translated strictly sequentially: each gateway call is awaited
/// to completion before the next begins, and `progress` is invoked with
/// (completed dialogue lines, total) after each batch. Per-batch failures
/// degrade to passthrough inside the service, so the run always completes and
/// produces output.
pub async fn run_pipeline<P: Provider>(
    raw: &str,
    service: &TranslationService<P>,
    batch_count: usize,
    mut progress: impl FnMut(usize, usize),
) -> PipelineResult {
    debug!("Parsing subtitle document");
    let document = SubtitleDocument::parse(raw);

    let translated_title = if document.title.has_title {
        service.translate_title(&document.title).await
    } else {
        String::new()
    };

    let texts = document.dialogue_texts();
    let total = texts.len();
    debug!(
        "Translating {} dialogue lines in up to {} batches",
        total, batch_count
    );

    let mut translated: Vec<String> = Vec::with_capacity(total);
    for chunk in batch::plan_batches(&texts, batch_count) {
        let batch_result = service.translate_batch(chunk).await;
        translated.extend(batch_result);
        progress(translated.len(), total);
    }

    debug!("Reassembling output document");
    let records = document.preview_records(&translated);
    let output = document.reassemble(&translated, &translated_title);

    PipelineResult {
        format: document.format,
        document,
        translated_title,
        records,
        output,
    }
}
