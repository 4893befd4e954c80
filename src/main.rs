// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod translation;
mod subtitle_processor;
mod file_utils;
mod app_controller;
mod language_utils;
mod providers;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// sublate - subtitle translation via chat-completion APIs
///
/// Parses .srt and .ass subtitle files, translates their dialogue text in
/// batches through an OpenAI-compatible endpoint, and writes a
/// format-preserving translated_<name> next to the input.
#[derive(Parser, Debug)]
#[command(name = "sublate")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered subtitle file translation")]
#[command(long_about = "sublate translates .srt and .ass subtitle files through an OpenAI-compatible chat-completion endpoint, preserving all non-dialogue structure.

EXAMPLES:
    sublate movie.srt -t es                     # Translate to Spanish
    sublate show.ass -t ja -b 20                # Translate in 20 batches
    sublate movie.srt -m gpt-4o -o out.srt      # Specific model and output path
    SUBLATE_API_KEY=sk-... sublate movie.srt    # API key from the environment

CONFIGURATION:
    Defaults are read from conf.json when present; command-line options
    override it. The API key can also be supplied via SUBLATE_API_KEY.")]
struct CommandLineOptions {
    /// Input subtitle file (.srt or .ass)
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output file path (defaults to translated_<name> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// API key for the chat-completion endpoint
    #[arg(short = 'k', long, env = "SUBLATE_API_KEY")]
    api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[arg(long)]
    api_url: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Target language code (e.g., 'zh', 'en', 'ja', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Number of batches to split the dialogue lines into (1-100)
    #[arg(short, long)]
    batch_count: Option<usize>,

    /// Sampling temperature (0.0-1.0)
    #[arg(long)]
    temperature: Option<f32>,

    /// Optional system prompt prepended to every batch request
    #[arg(short, long)]
    system_prompt: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default; the effective
    // level comes from the CLI flag or the config file below
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    // Load configuration when a config file is present
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        if config_path != "conf.json" {
            warn!("Config file not found at '{}', using defaults.", config_path);
        }
        Config::default()
    };

    // The config-file log level applies unless the CLI flag already set one
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Override config with CLI options if provided
    if let Some(api_key) = cli.api_key {
        config.translation.api_key = api_key;
    }
    if let Some(api_url) = cli.api_url {
        config.translation.endpoint = api_url;
    }
    if let Some(model) = cli.model {
        config.translation.model = model;
    }
    if let Some(target_language) = cli.target_language {
        config.target_language = target_language;
    }
    if let Some(batch_count) = cli.batch_count {
        config.translation.batch_count = batch_count;
    }
    if let Some(temperature) = cli.temperature {
        config.translation.temperature = temperature;
    }
    if let Some(system_prompt) = cli.system_prompt {
        config.translation.system_prompt = Some(system_prompt);
    }

    // Fatal input errors (missing credential, bad ranges) surface here,
    // before any file processing begins
    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    controller.run(&cli.input_file, cli.output.as_deref()).await?;

    Ok(())
}
