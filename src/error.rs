//! Error types
//!
//! Lines that match no rule are not errors; they pass through unchanged.
//! The only runtime failures are I/O failures, reported as [`SuperfluousError`].
//! [`RuleError`] covers malformed rule templates, which only happens when a
//! rule set is built from bad input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a document
#[derive(Debug, Error)]
pub enum SuperfluousError {
    #[error("cannot read {}: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("cannot read standard input: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("cannot write {}: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("cannot write standard output: {0}")]
    WriteStdout(#[source] io::Error),
}

/// Errors raised while building a rule from its templates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("unknown pattern fragment `{{{name}}}` in template `{template}`")]
    UnknownFragment { name: String, template: String },

    #[error("unclosed fragment placeholder in template `{0}`")]
    UnclosedPlaceholder(String),

    #[error("invalid regex pattern: {0}")]
    InvalidPattern(String),
}

pub type Result<T> = std::result::Result<T, SuperfluousError>;
