//! Plain-text and Markdown to HTML conversion.
//!
//! Converts one in-memory document into an HTML body and wraps it in a
//! standalone page. The engine is line oriented: a title heuristic for plain
//! text, a paragraph state machine, and for Markdown a block classifier plus an
//! ordered table of inline rewrite rules. It never touches the filesystem.

mod block;
mod html;
mod inline;
mod segment;
mod title;

use tracing::{debug, instrument};

use ssgo_shared::{Dialect, Result, SsgoError};

pub use block::{Block, classify};
pub use html::assemble_document;
pub use inline::rewrite_inline;
pub use segment::segment;
pub use title::{TitleDetection, detect_title};

use segment::Segmenter;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A source document as an ordered, already materialized list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split raw text into lines, normalizing `\r\n` to `\n` first.
    pub fn from_text(raw: &str) -> Self {
        let normalized = raw.replace("\r\n", "\n");
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    /// The document's lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    /// The HTML body, without the document shell.
    pub body: String,
    /// Detected title, or the caller's fallback.
    pub title: String,
    /// Whether `title` came from the document itself.
    pub title_detected: bool,
}

impl ConvertResult {
    /// Wrap the body in the full HTML document.
    pub fn into_document(self) -> String {
        assemble_document(&self.title, &self.body)
    }
}

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// Convert plain text.
///
/// A standalone first line (followed by two blank lines) becomes the title and
/// is rendered as `<h1>` at the top of the body. Everything else is split into
/// paragraphs; no Markdown is interpreted.
#[instrument(skip(lines), fields(line_count = lines.len()))]
pub fn convert_plain_text<S: AsRef<str>>(
    lines: &[S],
    fallback_title: &str,
) -> Result<ConvertResult> {
    validate(lines, fallback_title)?;

    let detection = detect_title(lines);
    let mut segmenter = Segmenter::new(Dialect::PlainText);

    if let Some(title) = &detection.title {
        segmenter.push_heading(1, title);
    }
    for line in &lines[detection.body_start..] {
        segmenter.push_line(line.as_ref());
    }

    let body = segmenter.finish();
    let title_detected = detection.title.is_some();
    let title = detection
        .title
        .unwrap_or_else(|| fallback_title.to_string());

    debug!(%title, title_detected, body_len = body.len(), "plain text converted");

    Ok(ConvertResult {
        body,
        title,
        title_detected,
    })
}

/// Convert Markdown.
///
/// No title heuristic applies: the fallback is always the page title and
/// headings stay in the body where they were written.
#[instrument(skip(lines), fields(line_count = lines.len()))]
pub fn convert_markdown<S: AsRef<str>>(
    lines: &[S],
    fallback_title: &str,
) -> Result<ConvertResult> {
    validate(lines, fallback_title)?;

    let body = segment(lines, Dialect::Markdown);

    debug!(body_len = body.len(), "markdown converted");

    Ok(ConvertResult {
        body,
        title: fallback_title.to_string(),
        title_detected: false,
    })
}

/// Convert raw source text in the given dialect.
pub fn convert(raw: &str, dialect: Dialect, fallback_title: &str) -> Result<ConvertResult> {
    let document = Document::from_text(raw);
    match dialect {
        Dialect::PlainText => convert_plain_text(document.lines(), fallback_title),
        Dialect::Markdown => convert_markdown(document.lines(), fallback_title),
    }
}

/// Convert raw source text and wrap it in the HTML document shell.
pub fn render(raw: &str, dialect: Dialect, fallback_title: &str) -> Result<String> {
    convert(raw, dialect, fallback_title).map(ConvertResult::into_document)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject calls that break the engine's contract.
fn validate<S: AsRef<str>>(lines: &[S], fallback_title: &str) -> Result<()> {
    if fallback_title.trim().is_empty() {
        return Err(SsgoError::invalid_input("fallback title is blank"));
    }

    if let Some(idx) = lines.iter().position(|line| line.as_ref().contains('\n')) {
        return Err(SsgoError::invalid_input(format!(
            "line {idx} contains a newline; split the document into lines first"
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
