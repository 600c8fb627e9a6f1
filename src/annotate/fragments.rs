//! Pattern Fragments
//!
//! Rule patterns are written as templates that reference small reusable
//! fragments by name, e.g. `int{w}(?P<id>{i}){w};`. Each `{name}` is replaced
//! with the fragment's regex text once, when the rule is built.
//!
//! | name | matches                         | pattern       |
//! |------|---------------------------------|---------------|
//! | `i`  | a C identifier                  | `[^\d\W]\w*`  |
//! | `w`  | optional horizontal whitespace  | `[ \t]*`      |

use crate::error::RuleError;

/// Fragment table, as (name, pattern) pairs.
pub const FRAGMENTS: &[(&str, &str)] = &[
    // identifier: a word character that isn't a digit, then word characters
    ("i", r"[^\d\W]\w*"),
    // whitespace
    ("w", r"[ \t]*"),
];

/// Look up a fragment's pattern text by name
pub fn fragment(name: &str) -> Option<&'static str> {
    FRAGMENTS
        .iter()
        .find(|(fragment_name, _)| *fragment_name == name)
        .map(|(_, pattern)| *pattern)
}

/// Expand every `{name}` reference in `template` into its fragment pattern.
///
/// Everything outside braces is copied through untouched, so regex syntax in
/// the template is preserved.
pub fn expand(template: &str) -> Result<String, RuleError> {
    let mut expanded = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        expanded.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let close = after_open
            .find('}')
            .ok_or_else(|| RuleError::UnclosedPlaceholder(template.to_string()))?;
        let name = &after_open[..close];
        let pattern = fragment(name).ok_or_else(|| RuleError::UnknownFragment {
            name: name.to_string(),
            template: template.to_string(),
        })?;
        expanded.push_str(pattern);
        rest = &after_open[close + 1..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}
