//! Annotation engine
//!
//! Recognizes a handful of C constructs line by line and writes a plain-words
//! comment above each one. There is no C parsing here: every construct is a
//! regex matched against the start of a single line, and anything that isn't
//! recognized is left exactly as it was.
//!
//! - [`fragments`]: reusable pattern pieces referenced from rule templates
//! - [`rules`]: the ordered rule set, first match wins
//! - [`comment`]: turning a description into indented comment lines
//! - [`document`]: the line sequence and the annotation pass

pub mod comment;
pub mod document;
pub mod fragments;
pub mod rules;

pub use comment::LineMatch;
pub use document::{AnnotationSummary, Document};
pub use rules::{ForLoopRule, PatternRule, Rule, RuleMatch, RuleSet};

/// Annotate C source text with the built-in rules
pub fn annotate_source(source: &str) -> String {
    let mut doc = Document::from_source(source);
    doc.annotate_with_builtin_rules();
    doc.render()
}
