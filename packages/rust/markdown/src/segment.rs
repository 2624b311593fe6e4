//! Paragraph segmentation: the line-by-line state machine that turns a
//! document body into HTML block fragments.
//!
//! Blank lines, headings and rules are paragraph delimiters. A `<p>` is only
//! opened by the first content line after a delimiter, so trailing blank lines
//! never produce empty paragraphs, and headings and rules never end up inside
//! one.
//!
//! Output format: every block fragment ends in `\n` and fragments are joined
//! with one more `\n`. Lines of one paragraph are concatenated, each followed
//! by a single space.

use ssgo_shared::Dialect;

use crate::block::{self, Block};
use crate::inline::rewrite_inline;
use crate::title::is_blank;

/// Segment body lines into HTML.
pub fn segment<S: AsRef<str>>(lines: &[S], dialect: Dialect) -> String {
    let mut segmenter = Segmenter::new(dialect);
    for line in lines {
        segmenter.push_line(line.as_ref());
    }
    segmenter.finish()
}

/// Paragraph bookkeeping for one segmentation run.
#[derive(Debug)]
struct ParagraphState {
    /// Text of the open paragraph; `None` while no `<p>` is open.
    open: Option<String>,
    /// A blank line or block element was seen since the last content line.
    delimiter_pending: bool,
}

impl Default for ParagraphState {
    fn default() -> Self {
        // Pending from the start so the first content line opens a paragraph.
        Self {
            open: None,
            delimiter_pending: true,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Segmenter {
    dialect: Dialect,
    state: ParagraphState,
    blocks: Vec<String>,
}

impl Segmenter {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            state: ParagraphState::default(),
            blocks: Vec::new(),
        }
    }

    /// Feed one line of the body.
    pub(crate) fn push_line(&mut self, line: &str) {
        if is_blank(line) {
            self.state.delimiter_pending = true;
            return;
        }

        let text = line.trim();
        let kind = match self.dialect {
            Dialect::PlainText => Block::Content,
            Dialect::Markdown => block::classify(text),
        };

        match kind {
            Block::HorizontalRule => {
                self.close_paragraph();
                self.blocks.push("<hr>\n".to_string());
                self.state.delimiter_pending = true;
            }
            Block::Heading { level, text } => {
                let text = rewrite_inline(text);
                self.push_heading(level, &text);
            }
            Block::Content => {
                let text = match self.dialect {
                    Dialect::PlainText => text.to_string(),
                    Dialect::Markdown => rewrite_inline(text),
                };
                self.push_content(&text);
            }
        }
    }

    /// Emit a heading, closing any open paragraph first.
    pub(crate) fn push_heading(&mut self, level: u8, text: &str) {
        self.close_paragraph();
        self.blocks.push(format!("<h{level}>{text}</h{level}>\n"));
        self.state.delimiter_pending = true;
    }

    fn push_content(&mut self, text: &str) {
        if self.state.delimiter_pending {
            self.close_paragraph();
            self.state.open = Some(String::new());
            self.state.delimiter_pending = false;
        }

        let paragraph = self.state.open.get_or_insert_with(String::new);
        paragraph.push_str(text);
        paragraph.push(' ');
    }

    fn close_paragraph(&mut self) {
        if let Some(text) = self.state.open.take() {
            self.blocks.push(format!("<p>{text}</p>\n"));
        }
    }

    /// Flush any open paragraph and join the fragments into the body.
    pub(crate) fn finish(mut self) -> String {
        self.close_paragraph();
        tracing::trace!(blocks = self.blocks.len(), "segmentation complete");
        self.blocks.join("\n")
    }
}
