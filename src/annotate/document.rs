//! Annotated Document
//!
//! The document is the ordered sequence of source lines, each keeping its
//! line terminator. Annotation is a single forward pass: every line is tested
//! against the rule set with its indentation stripped, and a matched line gets
//! its comment block placed directly above it, carrying the same indentation.
//!
//! The pass builds a fresh line vector rather than splicing into the one it
//! walks, so comment lines are never themselves scanned and original lines are
//! never touched, only preceded.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::comment::LineMatch;
use super::fragments::expand;
use super::rules::RuleSet;

static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    let pattern = expand("^{w}").expect("whitespace fragment exists");
    Regex::new(&pattern).expect("leading whitespace pattern is valid")
});

/// Split a line into its leading spaces/tabs and the rest
fn split_indentation(line: &str) -> (&str, &str) {
    let end = LEADING_WHITESPACE.find(line).map_or(0, |m| m.end());
    line.split_at(end)
}

/// Terminator for comments placed above `line`: its own `\r\n`, otherwise `\n`
fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Counts reported by one annotation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// Original lines that matched a rule
    pub annotated: usize,
    /// Synthetic comment lines inserted
    pub inserted: usize,
}

/// An in-memory C source file, as lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split source text into lines, keeping each line's terminator
    pub fn from_source(source: &str) -> Self {
        Self::new(source.split_inclusive('\n').map(str::to_string).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenate the lines back into source text
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Match a single line, returning its comment if any rule accepts it
    pub fn match_line(rules: &RuleSet, line: &str) -> Option<LineMatch> {
        let (whitespace, stripped) = split_indentation(line);
        rules
            .match_line(stripped)
            .map(|matched| LineMatch::new(whitespace, matched.description))
    }

    /// Insert a comment block above every line some rule recognizes
    pub fn annotate(&mut self, rules: &RuleSet) -> AnnotationSummary {
        let mut summary = AnnotationSummary::default();
        let mut annotated = Vec::with_capacity(self.lines.len());

        for (index, line) in self.lines.drain(..).enumerate() {
            let (whitespace, stripped) = split_indentation(&line);
            if let Some(matched) = rules.match_line(stripped) {
                let comment =
                    LineMatch::new(whitespace, matched.description).lines(line_ending(&line));
                debug!(
                    line = index + 1,
                    rule = matched.rule,
                    inserted = comment.len(),
                    "annotated line"
                );
                summary.annotated += 1;
                summary.inserted += comment.len();
                annotated.extend(comment);
            }
            annotated.push(line);
        }

        self.lines = annotated;
        summary
    }

    /// Annotate with [`RuleSet::builtin`]
    pub fn annotate_with_builtin_rules(&mut self) -> AnnotationSummary {
        self.annotate(RuleSet::builtin())
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}
