//! Line classification.
//!
//! Every raw input line maps to exactly one [`ClassifiedLine`]. Rules are
//! checked in a fixed precedence order and the first match wins:
//! divider, heading, nested list, list, empty, body.
//!
//! All rules except the nested-list rule look at the right-trimmed line.
//! The nested-list rule looks at the raw line, because leading indentation
//! is what separates a nested item from a top-level one.

use super::ParseOptions;
use crate::model::{ClassifiedLine, LineKind};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Heading markers, longest first so `####` is tried before `###`.
const HEADING_MARKERS: [(&str, LineKind); 4] = [
    ("#### ", LineKind::H4),
    ("### ", LineKind::H3),
    ("## ", LineKind::H2),
    ("# ", LineKind::H1),
];

/// Prefix given to nested list content.
const NESTED_PREFIX: &str = "  - ";

static CLASSIFIER: Lazy<LineClassifier> = Lazy::new(LineClassifier::new);

/// Classifies individual Markdown lines.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    divider_regex: Regex,
    nested_list_regex: Regex,
}

impl LineClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self {
            divider_regex: Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap(),
            nested_list_regex: Regex::new(r"^(?:\s{2,}|\t)-\s").unwrap(),
        }
    }

    /// Classify one raw line.
    pub fn classify(&self, line: &str) -> ClassifiedLine {
        let trimmed = line.trim_end();

        if self.divider_regex.is_match(trimmed) {
            return ClassifiedLine::bare(LineKind::Divider);
        }

        for (marker, kind) in HEADING_MARKERS {
            if let Some(rest) = trimmed.strip_prefix(marker) {
                return ClassifiedLine::new(kind, rest);
            }
        }

        if let Some(found) = self.nested_list_regex.find(line) {
            // The match ends after the first whitespace following the dash;
            // any further leading whitespace belongs to the marker too.
            // Trailing whitespace is content, apart from a CRLF carriage return.
            let rest = line[found.end()..].trim_start().trim_end_matches('\r');
            return ClassifiedLine::new(LineKind::NestedList, format!("{}{}", NESTED_PREFIX, rest));
        }

        if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            return ClassifiedLine::new(LineKind::List, rest.trim_start());
        }

        if trimmed.is_empty() {
            return ClassifiedLine::bare(LineKind::Empty);
        }

        ClassifiedLine::new(LineKind::Body, trimmed)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a single raw line with the shared classifier.
pub fn classify_line(line: &str) -> ClassifiedLine {
    CLASSIFIER.classify(line)
}

/// Split Markdown text on `\n` and classify every line, in order.
///
/// A trailing newline yields a final empty line, as does every blank line.
pub fn classify_lines(markdown: &str, options: &ParseOptions) -> Vec<ClassifiedLine> {
    let normalized;
    let source = if options.normalize_unicode {
        normalized = markdown.nfc().collect::<String>();
        normalized.as_str()
    } else {
        markdown
    };

    let lines: Vec<&str> = source.split('\n').collect();
    let classified = classify_all(&lines, options);

    if log::log_enabled!(log::Level::Trace) {
        for (i, line) in classified.iter().enumerate() {
            log::trace!("line {}: {} {:?}", i + 1, line.kind, line.content);
        }
    }

    classified
}

#[cfg(feature = "parallel")]
fn classify_all(lines: &[&str], options: &ParseOptions) -> Vec<ClassifiedLine> {
    use rayon::prelude::*;

    if options.parallel && lines.len() >= options.parallel_threshold {
        log::debug!("Classifying {} lines in parallel", lines.len());
        lines.par_iter().map(|line| classify_line(line)).collect()
    } else {
        lines.iter().map(|line| classify_line(line)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn classify_all(lines: &[&str], _options: &ParseOptions) -> Vec<ClassifiedLine> {
    lines.iter().map(|line| classify_line(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(line: &str) -> LineKind {
        classify_line(line).kind
    }

    #[test]
    fn test_dividers() {
        for line in ["---", "***", "___", "------", "---   ", "*****\t"] {
            assert_eq!(classify_line(line), ClassifiedLine::bare(LineKind::Divider), "{line:?}");
        }
        // Too short, mixed, or indented: not dividers
        assert_eq!(kind("--"), LineKind::Body);
        assert_eq!(kind("-*-"), LineKind::Body);
        assert_eq!(kind("  ---"), LineKind::Body);
    }

    #[test]
    fn test_headings() {
        assert_eq!(classify_line("# Name"), ClassifiedLine::new(LineKind::H1, "Name"));
        assert_eq!(classify_line("## Experience"), ClassifiedLine::new(LineKind::H2, "Experience"));
        assert_eq!(classify_line("### Title"), ClassifiedLine::new(LineKind::H3, "Title"));
        assert_eq!(classify_line("#### Sub  "), ClassifiedLine::new(LineKind::H4, "Sub"));
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(classify_line("####Title"), ClassifiedLine::new(LineKind::Body, "####Title"));
        assert_eq!(classify_line("#Title").kind, LineKind::Body);
        // The marker alone is right-trimmed away from its space.
        assert_eq!(classify_line("#### ").kind, LineKind::Body);
        assert_eq!(classify_line("##### Five").kind, LineKind::Body);
    }

    #[test]
    fn test_heading_strips_one_space_only() {
        assert_eq!(classify_line("##  Two").content, " Two");
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            classify_line("   - sub item"),
            ClassifiedLine::new(LineKind::NestedList, "  - sub item")
        );
        assert_eq!(
            classify_line("\t- tabbed"),
            ClassifiedLine::new(LineKind::NestedList, "  - tabbed")
        );
        assert_eq!(
            classify_line("  -   spaced  "),
            ClassifiedLine::new(LineKind::NestedList, "  - spaced  ")
        );
    }

    #[test]
    fn test_nested_list_keeps_trailing_whitespace() {
        assert_eq!(
            classify_line("\t- #a\t"),
            ClassifiedLine::new(LineKind::NestedList, "  - #a\t")
        );
        assert_eq!(
            classify_line("  - item\r"),
            ClassifiedLine::new(LineKind::NestedList, "  - item")
        );
    }

    #[test]
    fn test_single_space_indent_is_not_nested() {
        // One space is neither nested nor a top-level marker.
        assert_eq!(classify_line(" - item"), ClassifiedLine::new(LineKind::Body, " - item"));
    }

    #[test]
    fn test_list() {
        assert_eq!(classify_line("- item"), ClassifiedLine::new(LineKind::List, "item"));
        assert_eq!(classify_line("* item"), ClassifiedLine::new(LineKind::List, "item"));
        assert_eq!(classify_line("-  wide"), ClassifiedLine::new(LineKind::List, "wide"));
        assert_eq!(kind("-item"), LineKind::Body);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(classify_line(""), ClassifiedLine::bare(LineKind::Empty));
        assert_eq!(classify_line("   \t "), ClassifiedLine::bare(LineKind::Empty));
        assert_eq!(classify_line("\r"), ClassifiedLine::bare(LineKind::Empty));
    }

    #[test]
    fn test_body_keeps_leading_indent() {
        assert_eq!(classify_line("  text  "), ClassifiedLine::new(LineKind::Body, "  text"));
        assert_eq!(classify_line("**bold** start").kind, LineKind::Body);
    }

    #[test]
    fn test_precedence() {
        // A star run is a divider, not a list item
        assert_eq!(kind("***"), LineKind::Divider);
        // Nested beats list
        assert_eq!(kind("  - x"), LineKind::NestedList);
        // Heading beats everything but divider
        assert_eq!(kind("# - x"), LineKind::H1);
    }

    #[test]
    fn test_classify_lines_splits_on_newline() {
        let lines = classify_lines("# A\n\n- b\n", &ParseOptions::default());
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::H1, LineKind::Empty, LineKind::List, LineKind::Empty]
        );
    }

    #[test]
    fn test_classify_lines_crlf() {
        let lines = classify_lines("# A\r\nbody\r\n", &ParseOptions::default());
        assert_eq!(lines[0], ClassifiedLine::new(LineKind::H1, "A"));
        assert_eq!(lines[1], ClassifiedLine::new(LineKind::Body, "body"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "# T\n- a\n  - b\n---\ntext\n\n".repeat(50);
        let parallel = classify_lines(&text, &ParseOptions::new().with_parallel_threshold(1));
        let sequential = classify_lines(&text, &ParseOptions::new().sequential());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_unicode_normalization() {
        // "e" + combining acute accent composes to a single code point.
        let lines = classify_lines(
            "Cafe\u{301}",
            &ParseOptions::new().with_unicode_normalization(true),
        );
        assert_eq!(lines[0].content, "Caf\u{e9}");
    }
}
