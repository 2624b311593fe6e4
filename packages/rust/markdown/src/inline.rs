//! Inline span rewriting for Markdown content lines.
//!
//! Each rule is a `(pattern, replacement)` pair applied in table order with
//! replace-all semantics. A rule sees the output of every rule before it, so
//! the order is part of the behavior: bold before italic, and code and links
//! last. Delimiters cannot be escaped, and nested spans of the same kind are
//! not supported.

use std::sync::LazyLock;

use regex::Regex;

/// One inline rewrite rule.
struct InlineRule {
    pattern: Regex,
    replacement: &'static str,
}

/// Source table for [`RULES`]. Non-greedy so `**a** and **b**` is two spans.
const RULE_TABLE: &[(&str, &str)] = &[
    (r"\*\*(.*?)\*\*", "<b>${1}</b>"),
    (r"__(.*?)__", "<b>${1}</b>"),
    (r"_(.*?)_", "<i>${1}</i>"),
    (r"\*(.*?)\*", "<i>${1}</i>"),
    (r"`(.*?)`", "<code>${1}</code>"),
    (r"\[(.*?)\]\((.*?)\)", r#"<a href="${2}">${1}</a>"#),
];

static RULES: LazyLock<Vec<InlineRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, replacement)| InlineRule {
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement,
        })
        .collect()
});

/// Rewrite the inline Markdown spans of one line into HTML.
pub fn rewrite_inline(line: &str) -> String {
    let mut result = line.to_string();

    for rule in RULES.iter() {
        result = rule
            .pattern
            .replace_all(&result, rule.replacement)
            .into_owned();
    }

    result
}
