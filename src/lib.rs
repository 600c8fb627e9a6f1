//! # superfluous
//!
//! Adds redundant, self-evident comments to C source files:
//!
//! ```text
//! #include <stdio.h>
//! int x;
//! ```
//!
//! becomes
//!
//! ```text
//! // include stdio.h
//! #include <stdio.h>
//! // declare, but do not initialize x
//! int x;
//! ```
//!
//! The engine lives in [`annotate`]; [`driver`] wires it to files and the
//! standard streams.

pub mod annotate;
pub mod driver;
pub mod error;

pub use annotate::{annotate_source, Document, RuleSet};
pub use error::{Result, SuperfluousError};
