//! Driver
//!
//! Reads a whole document from a file or standard input, annotates it, and
//! writes the result to a file or standard output. Handles are opened and
//! dropped within a single [`run`] call.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::info;

use crate::annotate::{AnnotationSummary, Document, RuleSet};
use crate::error::{Result, SuperfluousError};

/// Argument value standing for a standard stream
pub const STDIO_ARG: &str = "-";

/// Where the source document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// `-` means standard input, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIO_ARG {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }

    /// Read every line, terminators included
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match self {
            Input::Stdin => read_lines(io::stdin().lock()).map_err(SuperfluousError::ReadStdin),
            Input::Path(path) => {
                let read_error = |source| SuperfluousError::ReadInput {
                    path: path.clone(),
                    source,
                };
                let file = File::open(path).map_err(read_error)?;
                read_lines(BufReader::new(file)).map_err(read_error)
            }
        }
    }
}

/// Where the annotated document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    Path(PathBuf),
}

impl Output {
    /// `-` means standard output, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIO_ARG {
            Output::Stdout
        } else {
            Output::Path(PathBuf::from(arg))
        }
    }

    /// Write `text` and flush
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Output::Stdout => {
                write_text(io::stdout().lock(), text).map_err(SuperfluousError::WriteStdout)
            }
            Output::Path(path) => {
                let write_error = |source| SuperfluousError::WriteOutput {
                    path: path.clone(),
                    source,
                };
                let file = File::create(path).map_err(write_error)?;
                write_text(file, text).map_err(write_error)
            }
        }
    }
}

/// Collect lines from `reader`, keeping each line's terminator
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(lines);
        }
        lines.push(line);
    }
}

fn write_text<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Annotate `input` with `rules` and write the result to `output`
pub fn run_with_rules(
    input: &Input,
    output: &Output,
    rules: &RuleSet,
) -> Result<AnnotationSummary> {
    let mut doc = Document::new(input.read_lines()?);
    let read = doc.len();
    let summary = doc.annotate(rules);
    output.write(&doc.render())?;

    info!(
        lines = read,
        annotated = summary.annotated,
        inserted = summary.inserted,
        "annotation complete"
    );
    Ok(summary)
}

/// Annotate `input` with the built-in rules and write the result to `output`
pub fn run(input: &Input, output: &Output) -> Result<AnnotationSummary> {
    run_with_rules(input, output, RuleSet::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_from_arg() {
        assert_eq!(Input::from_arg("-"), Input::Stdin);
        assert_eq!(
            Input::from_arg("main.c"),
            Input::Path(PathBuf::from("main.c"))
        );
        assert_eq!(Output::from_arg("-"), Output::Stdout);
        assert_eq!(
            Output::from_arg("out.c"),
            Output::Path(PathBuf::from("out.c"))
        );
    }

    #[test]
    fn test_read_lines_keeps_terminators() {
        let lines = read_lines(Cursor::new("a\nb\r\nc")).unwrap();
        assert_eq!(lines, vec!["a\n", "b\r\n", "c"]);
    }

    #[test]
    fn test_read_lines_empty() {
        assert!(read_lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_run_between_files() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("in.c");
        let output_path = dir.path().join("out.c");
        fs::write(&input_path, "int main(void)\n{\n    return;\n}\n").unwrap();

        let summary = run(
            &Input::Path(input_path),
            &Output::Path(output_path.clone()),
        )
        .unwrap();

        assert_eq!(summary.annotated, 1);
        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            "int main(void)\n{\n    // return without value\n    return;\n}\n"
        );
    }

    #[test]
    fn test_missing_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.c");
        let err = run(&Input::Path(missing.clone()), &Output::Stdout).unwrap_err();

        assert!(matches!(err, SuperfluousError::ReadInput { ref path, .. } if *path == missing));
        assert!(err.to_string().contains("missing.c"));
    }

    #[test]
    fn test_unwritable_output_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("in.c");
        fs::write(&input_path, "int x;\n").unwrap();
        let output_path = dir.path().join("no-such-dir").join("out.c");

        let err = run(&Input::Path(input_path), &Output::Path(output_path)).unwrap_err();

        assert!(matches!(err, SuperfluousError::WriteOutput { .. }));
    }
}
