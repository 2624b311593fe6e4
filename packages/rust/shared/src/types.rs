//! Core domain types for SSGo sources.

use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Dialect
// ---------------------------------------------------------------------------

/// The input language of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `.txt` — paragraphs and an optional title line, nothing else.
    PlainText,
    /// `.md` — headings, rules and inline spans on top of paragraphs.
    Markdown,
}

impl Dialect {
    /// Map a file extension (including the leading dot) to a dialect.
    ///
    /// Matching is case-sensitive: `.TXT` is not accepted.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".txt" => Some(Self::PlainText),
            ".md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlainText => f.write_str("plain text"),
            Self::Markdown => f.write_str("markdown"),
        }
    }
}

// ---------------------------------------------------------------------------
// SourceFile
// ---------------------------------------------------------------------------

/// A discovered input file ready for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path to the file on disk.
    pub path: PathBuf,
    /// File name without its extension; used as fallback title and output name.
    pub name: String,
    /// Dialect derived from the extension.
    pub dialect: Dialect,
}

impl SourceFile {
    /// Build a source from a path, or `None` if its extension is not accepted.
    pub fn from_path(path: &Path) -> Option<Self> {
        let basename = path.file_name()?.to_str()?;
        let (name, ext) = split_name_and_ext(basename);
        let dialect = Dialect::from_extension(ext)?;
        Some(Self {
            path: path.to_path_buf(),
            name: name.to_string(),
            dialect,
        })
    }

    /// File name of the generated page (`<name>.html`).
    pub fn output_file_name(&self) -> String {
        format!("{}.html", self.name)
    }
}

/// Split a base name into name and extension at the last dot.
///
/// The extension keeps its dot. A name with no dot has an empty extension;
/// a dotfile such as `.test` is all extension.
pub fn split_name_and_ext(basename: &str) -> (&str, &str) {
    match basename.rfind('.') {
        Some(idx) => basename.split_at(idx),
        None => (basename, ""),
    }
}
