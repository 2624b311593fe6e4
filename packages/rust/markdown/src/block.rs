//! Whole-line block classification: horizontal rules and headings.

/// Prefixes that start a horizontal rule. The rest of the line must repeat
/// the prefix character.
const RULE_PREFIXES: &[&str] = &["---", "***", "___"];

/// Recognized heading prefixes and the level each one renders as.
const HEADING_PREFIXES: &[(&str, u8)] = &[("# ", 1), ("## ", 2)];

/// Classification of one trimmed, non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// `---`, `***`, `___` or longer runs of one of those characters.
    HorizontalRule,
    /// A heading with its prefix stripped.
    Heading { level: u8, text: &'a str },
    /// Ordinary paragraph text.
    Content,
}

/// Classify a trimmed, non-blank line.
///
/// The rule check runs before the heading check; a line is never both.
pub fn classify(line: &str) -> Block<'_> {
    if is_horizontal_rule(line) {
        return Block::HorizontalRule;
    }

    for &(prefix, level) in HEADING_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block::Heading { level, text };
        }
    }

    Block::Content
}

fn is_horizontal_rule(line: &str) -> bool {
    RULE_PREFIXES
        .iter()
        .find(|prefix| line.starts_with(**prefix))
        .is_some_and(|prefix| {
            let marker = prefix.as_bytes()[0] as char;
            line.chars().all(|c| c == marker)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_of_each_character() {
        assert_eq!(classify("---"), Block::HorizontalRule);
        assert_eq!(classify("***"), Block::HorizontalRule);
        assert_eq!(classify("___"), Block::HorizontalRule);
        assert_eq!(classify("----------"), Block::HorizontalRule);
        assert_eq!(classify("****"), Block::HorizontalRule);
    }

    #[test]
    fn mixed_rule_characters_are_content() {
        assert_eq!(classify("--*"), Block::Content);
        assert_eq!(classify("---*"), Block::Content);
        assert_eq!(classify("-- -"), Block::Content);
        assert_eq!(classify("--- title"), Block::Content);
    }

    #[test]
    fn short_runs_are_content() {
        assert_eq!(classify("--"), Block::Content);
        assert_eq!(classify("**"), Block::Content);
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify("# Title"),
            Block::Heading {
                level: 1,
                text: "Title"
            }
        );
        assert_eq!(
            classify("## Section two"),
            Block::Heading {
                level: 2,
                text: "Section two"
            }
        );
    }

    #[test]
    fn unrecognized_heading_prefixes_are_content() {
        assert_eq!(classify("### Deep"), Block::Content);
        assert_eq!(classify("#NoSpace"), Block::Content);
        assert_eq!(classify("#"), Block::Content);
    }

    #[test]
    fn plain_text_is_content() {
        assert_eq!(classify("Just words."), Block::Content);
    }
}
