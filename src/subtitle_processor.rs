use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use log::warn;

// @module: Subtitle parsing and document reconstruction

// @const: SRT timing line pattern, digits only, not calendar-validated
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3}\s*-->\s*\d{2}:\d{2}:\d{2},\d{3}$").unwrap()
});

/// Subtitle file format family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// SubRip: numbered timestamped text blocks
    Srt,
    /// Advanced SubStation Alpha: event/style script with Dialogue: lines
    Ass,
}

impl SubtitleFormat {
    /// Classify raw file text
    ///
    /// Anything without a `[Script Info]` section is treated as SRT. That is a
    /// policy default, not a validation step.
    pub fn detect(content: &str) -> Self {
        if content.contains("[Script Info]") {
            SubtitleFormat::Ass
        } else {
            SubtitleFormat::Srt
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Ass => "ass",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Classification of a parsed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Carries translatable text
    Dialogue,
    /// Structural line reproduced verbatim
    Format,
    /// ASS style definition
    Style,
    /// ASS section header / script info
    Info,
}

/// One parsed line (ASS) or block (SRT)
///
/// For dialogue records `prefix + text` reconstructs `content`.
#[derive(Debug, Clone)]
pub struct SubtitleLine {
    // @field: Line classification
    pub line_type: LineType,

    // @field: Original raw text, used verbatim when no translation applies
    pub content: String,

    // @field: Extracted translatable text (dialogue only)
    pub text: Option<String>,

    // @field: Non-text header re-emitted unchanged ahead of translated text
    pub prefix: Option<String>,

    // @field: Sequence number (SRT only)
    pub index: Option<usize>,

    // @field: Start-end timestamp line (SRT only)
    pub timing: Option<String>,
}

impl SubtitleLine {
    fn structural(line_type: LineType, content: String) -> Self {
        SubtitleLine {
            line_type,
            content,
            text: None,
            prefix: None,
            index: None,
            timing: None,
        }
    }

    /// Whether this line participates in translation
    ///
    /// Degenerate dialogue lines (no field separator, or empty text) are
    /// carried through verbatim and never sent to the gateway.
    pub fn is_translatable(&self) -> bool {
        self.line_type == LineType::Dialogue
            && self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Optional ASS header title metadata
#[derive(Debug, Clone, Default)]
pub struct TitleInfo {
    /// Whether a Title: line was found
    pub has_title: bool,

    /// Full original title line
    pub title_line: String,

    /// Extracted title value
    pub title_text: String,

    /// Key/label portion, e.g. "Title: "
    pub title_prefix: String,
}

impl TitleInfo {
    /// Scan for the first `Title:` line in ASS header metadata
    ///
    /// SRT input, or ASS without a title, yields the absent default.
    pub fn parse(content: &str, format: SubtitleFormat) -> Self {
        if format != SubtitleFormat::Ass {
            return TitleInfo::default();
        }

        for line in content.split('\n') {
            if let Some(rest) = line.strip_prefix("Title:") {
                return TitleInfo {
                    has_title: true,
                    title_line: line.to_string(),
                    title_text: rest.trim().to_string(),
                    title_prefix: "Title: ".to_string(),
                };
            }
        }

        TitleInfo::default()
    }
}

/// Post-translation record consumed by the preview/edit step
#[derive(Debug, Clone)]
pub struct TranslatedSubtitleLine {
    /// Dense 1..N index, independent of source numbering gaps
    pub index: usize,

    /// Timing string (SRT timing line, or the ASS start-time field)
    pub timing: String,

    /// Original text
    pub text: String,

    /// Translated text, editable before export
    pub translated_text: String,
}

/// A parsed subtitle document held in memory for one translation run
#[derive(Debug)]
pub struct SubtitleDocument {
    /// Detected format family
    pub format: SubtitleFormat,

    /// Every line of the document, original order preserved
    pub lines: Vec<SubtitleLine>,

    /// Title metadata (ASS only)
    pub title: TitleInfo,
}

impl SubtitleDocument {
    /// Parse raw file text into a document
    pub fn parse(raw: &str) -> Self {
        let content = strip_bom(raw);
        let format = SubtitleFormat::detect(content);

        let lines = match format {
            SubtitleFormat::Srt => parse_srt(content),
            SubtitleFormat::Ass => parse_ass(content),
        };
        let title = TitleInfo::parse(content, format);

        SubtitleDocument { format, lines, title }
    }

    /// Translatable dialogue texts, in document order
    pub fn dialogue_texts(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| line.is_translatable())
            .filter_map(|line| line.text.clone())
            .collect()
    }

    /// Merge translated dialogue texts back into the original structure
    ///
    /// `translated` must be positionally aligned with [`dialogue_texts`];
    /// missing entries fall back to the original text. For ASS the translated
    /// title replaces the original title line in place.
    pub fn reassemble(&self, translated: &[String], translated_title: &str) -> String {
        match self.format {
            SubtitleFormat::Srt => self.rebuild_srt(translated),
            SubtitleFormat::Ass => self.rebuild_ass(translated, translated_title),
        }
    }

    /// Build preview records for the edit step
    pub fn preview_records(&self, translated: &[String]) -> Vec<TranslatedSubtitleLine> {
        self.lines
            .iter()
            .filter(|line| line.is_translatable())
            .enumerate()
            .map(|(i, line)| {
                let original = line.text.clone().unwrap_or_default();
                let timing = match self.format {
                    SubtitleFormat::Srt => line.timing.clone().unwrap_or_default(),
                    // Second comma-separated field of a Dialogue: line is the
                    // event start time
                    SubtitleFormat::Ass => line
                        .content
                        .split(',')
                        .nth(1)
                        .unwrap_or_default()
                        .to_string(),
                };

                TranslatedSubtitleLine {
                    index: i + 1,
                    timing,
                    text: original.clone(),
                    translated_text: translated.get(i).cloned().unwrap_or(original),
                }
            })
            .collect()
    }

    /// Re-render the document from (possibly edited) preview records
    pub fn render_edited(
        &self,
        records: &[TranslatedSubtitleLine],
        translated_title: &str,
    ) -> String {
        let texts: Vec<String> = records
            .iter()
            .map(|record| record.translated_text.clone())
            .collect();
        self.reassemble(&texts, translated_title)
    }

    // @generates: SRT output with dense 1..N numbering
    fn rebuild_srt(&self, translated: &[String]) -> String {
        let blocks: Vec<String> = self
            .lines
            .iter()
            .filter(|line| line.is_translatable())
            .enumerate()
            .map(|(i, line)| {
                let text = translated
                    .get(i)
                    .map(String::as_str)
                    .or(line.text.as_deref())
                    .unwrap_or_default();
                format!(
                    "{}\n{}\n{}",
                    i + 1,
                    line.timing.as_deref().unwrap_or_default(),
                    text
                )
            })
            .collect();

        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    // @generates: ASS output by walking the full original line sequence
    fn rebuild_ass(&self, translated: &[String], translated_title: &str) -> String {
        let mut dialogue_idx = 0;
        let rendered: Vec<String> = self
            .lines
            .iter()
            .map(|line| {
                if self.title.has_title && line.content == self.title.title_line {
                    return translated_title.to_string();
                }
                if line.is_translatable() {
                    let text = translated
                        .get(dialogue_idx)
                        .map(String::as_str)
                        .or(line.text.as_deref())
                        .unwrap_or_default();
                    dialogue_idx += 1;
                    return format!("{}{}", line.prefix.as_deref().unwrap_or_default(), text);
                }
                line.content.clone()
            })
            .collect();

        rendered.join("\n")
    }
}

/// Strip a leading byte-order marker if present
fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Parse SRT text into dialogue records
///
/// Accumulates {index, timing, text} per block; a blank line, or a new
/// all-digit index line while a block is open, flushes the accumulator. Blocks
/// with timing that does not match `DD:DD:DD,DDD --> DD:DD:DD,DDD` are dropped
/// with a warning rather than emitted.
fn parse_srt(content: &str) -> Vec<SubtitleLine> {
    let mut records = Vec::new();
    let mut current_index: Option<usize> = None;
    let mut current_timing: Option<String> = None;
    let mut current_text: Vec<String> = Vec::new();

    fn flush_block(
        records: &mut Vec<SubtitleLine>,
        index: &mut Option<usize>,
        timing: &mut Option<String>,
        text: &mut Vec<String>,
    ) {
        if let (Some(idx), Some(tm)) = (*index, timing.as_deref()) {
            if !text.is_empty() {
                if TIMING_REGEX.is_match(tm) {
                    let body = text.join("\n");
                    let prefix = format!("{}\n{}\n", idx, tm);
                    records.push(SubtitleLine {
                        line_type: LineType::Dialogue,
                        content: format!("{}{}", prefix, body),
                        text: Some(body),
                        prefix: Some(prefix),
                        index: Some(idx),
                        timing: Some(tm.to_string()),
                    });
                } else {
                    warn!("Dropping subtitle block {}: invalid timing '{}'", idx, tm);
                }
            }
        }
        *index = None;
        *timing = None;
        text.clear();
    }

    for line in content.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_block(&mut records, &mut current_index, &mut current_timing, &mut current_text);
        } else if let Some(idx) = parse_index_line(trimmed) {
            if current_index.is_some() {
                flush_block(&mut records, &mut current_index, &mut current_timing, &mut current_text);
            }
            current_index = Some(idx);
        } else if line.contains("-->") {
            current_timing = Some(trimmed.to_string());
        } else if current_index.is_some() && current_timing.is_some() {
            current_text.push(line.trim_end_matches('\r').to_string());
        } else {
            warn!("Ignoring text outside of a subtitle block: '{}'", trimmed);
        }
    }

    // Trailing block without a terminating blank line
    flush_block(&mut records, &mut current_index, &mut current_timing, &mut current_text);

    check_index_continuity(&records);

    records
}

/// An all-digit line starts (or restarts) a block
fn parse_index_line(trimmed: &str) -> Option<usize> {
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        trimmed.parse().ok()
    } else {
        None
    }
}

/// Report non-sequential source indices
///
/// Diagnostic only; parsing output is not altered.
fn check_index_continuity(records: &[SubtitleLine]) {
    let mut previous = 0;
    let mut anomalies = Vec::new();

    for record in records {
        if let Some(idx) = record.index {
            if idx != previous + 1 {
                anomalies.push(idx);
            }
            previous = idx;
        }
    }

    if !anomalies.is_empty() {
        warn!("Non-sequential subtitle indices found: {:?}", anomalies);
    }
}

/// Parse ASS text, one record per line, order preserved
///
/// `Dialogue:` lines split at the last comma into prefix and text. The
/// heuristic assumes dialogue text never ends with a pattern matching the
/// final field boundary; subtitle text containing such a comma misattributes
/// prefix/text.
fn parse_ass(content: &str) -> Vec<SubtitleLine> {
    content
        .split('\n')
        .map(|line| {
            if line.starts_with("Dialogue:") {
                match line.rfind(',') {
                    Some(pos) => {
                        let prefix = &line[..=pos];
                        let text = line[pos + 1..].trim();
                        SubtitleLine {
                            line_type: LineType::Dialogue,
                            content: line.to_string(),
                            text: Some(text.to_string()),
                            prefix: Some(prefix.to_string()),
                            index: None,
                            timing: None,
                        }
                    }
                    // No field separator at all; keep the line but never
                    // translate it
                    None => SubtitleLine::structural(LineType::Dialogue, line.to_string()),
                }
            } else if line.starts_with("Style:") {
                SubtitleLine::structural(LineType::Style, line.to_string())
            } else if line.trim_start().starts_with('[') {
                SubtitleLine::structural(LineType::Info, line.to_string())
            } else {
                SubtitleLine::structural(LineType::Format, line.to_string())
            }
        })
        .collect()
}
