//! Synthetic comment rendering

/// Marker opening every synthetic comment line
pub const COMMENT_MARKER: &str = "// ";

/// A matched line's description together with the line's indentation
#[derive(Debug, Clone, PartialEq)]
pub struct LineMatch {
    /// Leading spaces and tabs of the matched line, verbatim
    pub whitespace: String,
    /// Description, possibly spanning several lines separated by `'\n'`
    pub description: String,
}

impl LineMatch {
    pub fn new(whitespace: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            whitespace: whitespace.into(),
            description: description.into(),
        }
    }

    /// Render the comment block, one line per description line, each ending
    /// with `terminator`
    pub fn lines(&self, terminator: &str) -> Vec<String> {
        self.description
            .split('\n')
            .map(|part| format!("{}{}{}{}", self.whitespace, COMMENT_MARKER, part, terminator))
            .collect()
    }
}
