//! Construct Rules
//!
//! A rule recognizes one C construct at the start of a line (leading
//! whitespace already stripped) and describes it in plain words.
//!
//! # Rule Order
//!
//! Rules are tried in declaration order and the first match wins:
//!
//! 1. print - `printf("...");`, the literal may contain escapes like `\"`
//! 2. include - `#include <x.h>` or `#include "x.h"`
//! 3. declaration - `int x;`
//! 4. return - `return;`, tried before `return_value` which would otherwise
//!    accept the empty return
//! 5. return_value - `return expr;`
//! 6. for_loop - single-line `for (init; cond; action)` header

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::fragments::expand;
use crate::error::RuleError;

/// Built-in pattern rules as (name, pattern template, description template).
///
/// Pattern templates reference [`super::fragments::FRAGMENTS`] with `{name}`.
/// Description templates reference named captures with `${name}`.
const PATTERN_RULES: &[(&str, &str, &str)] = &[
    (
        "print",
        r#"printf{w}\({w}"(?P<str>(?:\\.|[^"\\])*)"{w}\){w};"#,
        r#"print the string: "${str}""#,
    ),
    (
        "include",
        r#"#include{w}[<"](?P<id>[^>"]+)[>"]"#,
        "include ${id}",
    ),
    (
        "declaration",
        r"int{w}(?P<id>{i}){w};",
        "declare, but do not initialize ${id}",
    ),
    ("return", r"return{w};", "return without value"),
    ("return_value", r"return{w}(?P<val>[^;]+){w};", "return ${val}"),
];

/// For-loop header with three semicolon-free sections, each matched lazily
const FOR_LOOP_PATTERN: &str = concat!(
    r"{w}for{w}\(",
    r"{w}(?P<init>[^;]*?){w};",
    r"{w}(?P<cond>[^;]*?){w};",
    r"{w}(?P<action>[^;]*?){w}\)",
);

/// Indent of the for-loop's continuation lines, under "loop, "
const FOR_LOOP_CONTINUATION: &str = "      ";

static FOR_LOOP_REGEX: Lazy<Regex> = Lazy::new(|| {
    compile_anchored(FOR_LOOP_PATTERN).expect("built-in for-loop pattern is valid")
});

static BUILTIN_RULES: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::builtin_rules().expect("built-in rule patterns are valid"));

/// Expand a pattern template and anchor it at the start of the line
fn compile_anchored(template: &str) -> Result<Regex, RuleError> {
    let pattern = format!("^(?:{})", expand(template)?);
    Regex::new(&pattern).map_err(|e| RuleError::InvalidPattern(e.to_string()))
}

/// A rule driven by a pattern template and a description template
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: &'static str,
    regex: Regex,
    description: String,
}

impl PatternRule {
    /// Build a rule, expanding fragments in `pattern` and compiling it.
    pub fn new(name: &'static str, pattern: &str, description: &str) -> Result<Self, RuleError> {
        Ok(Self {
            name,
            regex: compile_anchored(pattern)?,
            description: description.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Describe `line` if it starts with this rule's construct
    pub fn match_line(&self, line: &str) -> Option<String> {
        let caps = self.regex.captures(line)?;
        let mut description = String::new();
        caps.expand(&self.description, &mut description);
        Some(description)
    }
}

/// The for-loop rule.
///
/// Hand-built because it captures three sections and describes them over
/// three lines instead of one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForLoopRule;

impl ForLoopRule {
    pub fn name(&self) -> &'static str {
        "for_loop"
    }

    pub fn match_line(&self, line: &str) -> Option<String> {
        let caps = FOR_LOOP_REGEX.captures(line)?;
        Some(Self::describe(&caps))
    }

    fn describe(caps: &Captures<'_>) -> String {
        let section = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        format!(
            "loop, starting with {},\n{indent}do {} each time,\n{indent}while {}",
            section("init"),
            section("action"),
            section("cond"),
            indent = FOR_LOOP_CONTINUATION,
        )
    }
}

/// A single construct matcher
#[derive(Debug, Clone)]
pub enum Rule {
    Pattern(PatternRule),
    ForLoop(ForLoopRule),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Pattern(rule) => rule.name(),
            Rule::ForLoop(rule) => rule.name(),
        }
    }

    /// Describe `line`, or `None` if the rule declines it.
    ///
    /// The description may span several lines, separated by `'\n'`.
    pub fn match_line(&self, line: &str) -> Option<String> {
        match self {
            Rule::Pattern(rule) => rule.match_line(line),
            Rule::ForLoop(rule) => rule.match_line(line),
        }
    }
}

/// Outcome of the first rule that accepted a line
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub rule: &'static str,
    pub description: String,
}

/// Ordered rules, first match wins
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The shared built-in rule set, compiled on first use
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN_RULES
    }

    fn builtin_rules() -> Result<Self, RuleError> {
        let mut rules = PATTERN_RULES
            .iter()
            .map(|&(name, pattern, description)| {
                PatternRule::new(name, pattern, description).map(Rule::Pattern)
            })
            .collect::<Result<Vec<_>, _>>()?;
        rules.push(Rule::ForLoop(ForLoopRule));
        Ok(Self::new(rules))
    }

    /// Try each rule in order against an already-stripped line
    pub fn match_line(&self, line: &str) -> Option<RuleMatch> {
        self.rules.iter().find_map(|rule| {
            rule.match_line(line).map(|description| RuleMatch {
                rule: rule.name(),
                description,
            })
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
