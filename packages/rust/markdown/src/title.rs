//! Document title heuristic for plain-text sources.

/// Number of lines the heuristic looks at: the title and two blank separators.
const TITLE_LOOKAHEAD: usize = 3;

/// Outcome of [`detect_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleDetection {
    /// The trimmed first line, if it stands alone as a title.
    pub title: Option<String>,
    /// Index of the first line that belongs to the body.
    pub body_start: usize,
}

/// Decide whether a document opens with a standalone title line.
///
/// A title exists iff there are at least three lines, the first is non-blank
/// and the second and third are blank. The body then starts after the two
/// separators; otherwise every line is body.
pub fn detect_title<S: AsRef<str>>(lines: &[S]) -> TitleDetection {
    let no_title = TitleDetection {
        title: None,
        body_start: 0,
    };

    let [first, second, third, ..] = lines else {
        return no_title;
    };

    let first = first.as_ref().trim();
    if first.is_empty() || !is_blank(second.as_ref()) || !is_blank(third.as_ref()) {
        return no_title;
    }

    TitleDetection {
        title: Some(first.to_string()),
        body_start: TITLE_LOOKAHEAD,
    }
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
