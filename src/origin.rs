use crate::constants::defaults;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;

/// Replacement for every `*` inside a non-leading-wildcard entry: one or more
/// ASCII word characters or hyphens. Dots, colons and slashes never match.
const WILDCARD_SEGMENT: &str = "[0-9A-Za-z_-]+";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single compiled allow-list entry.
#[derive(Clone)]
pub enum OriginPattern {
    /// Entry without a leading `*`, matched as an anchored template.
    Template { source: String, regex: Regex },
    /// Entry with a leading `*`; only whole-string equality is checked.
    Literal(String),
    /// Entry that could not be compiled. Never matches.
    Invalid(String),
}

impl OriginPattern {
    pub fn compile(entry: &str) -> Self {
        if entry.starts_with('*') {
            return Self::Literal(entry.to_owned());
        }

        match Self::compile_template(entry) {
            Ok(regex) => Self::Template {
                source: entry.to_owned(),
                regex,
            },
            Err(err) => {
                tracing::warn!(
                    pattern = entry,
                    error = %err,
                    "origin pattern rejected, entry will never match"
                );
                Self::Invalid(entry.to_owned())
            }
        }
    }

    fn compile_template(entry: &str) -> Result<Regex, PatternError> {
        if entry.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: entry.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Regex::new(&template_to_regex(entry)).map_err(|err| PatternError::Build(Box::new(err)))
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Template { source, .. } => source,
            Self::Literal(source) | Self::Invalid(source) => source,
        }
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Template { regex, .. } => regex.is_match(origin),
            Self::Literal(value) => value == origin,
            Self::Invalid(_) => false,
        }
    }
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template { source, .. } => f.debug_tuple("Template").field(source).finish(),
            Self::Literal(source) => f.debug_tuple("Literal").field(source).finish(),
            Self::Invalid(source) => f.debug_tuple("Invalid").field(source).finish(),
        }
    }
}

/// Escapes the literal parts of `entry` and joins them with the wildcard
/// segment, anchored at both ends.
pub(crate) fn template_to_regex(entry: &str) -> String {
    let body = entry
        .split('*')
        .map(regex_syntax::escape)
        .collect::<Vec<_>>()
        .join(WILDCARD_SEGMENT);
    format!("^(?:{body})$")
}

/// Ordered origin allow-list, compiled once.
#[derive(Clone, Debug, Default)]
pub struct OriginList {
    patterns: Vec<OriginPattern>,
    allow_any: bool,
}

impl OriginList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allow_any = false;
        let patterns = entries
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                allow_any |= entry == defaults::WILDCARD_ALL;
                OriginPattern::compile(entry)
            })
            .collect();

        Self {
            patterns,
            allow_any,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn allows_any(&self) -> bool {
        self.allow_any
    }

    pub fn patterns(&self) -> &[OriginPattern] {
        &self.patterns
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(OriginPattern::source)
    }

    /// Fails closed: an empty list or an empty origin never matches. A `"*"`
    /// entry admits any origin; otherwise the first matching entry wins.
    pub fn matches(&self, origin: &str) -> bool {
        if self.patterns.is_empty() || origin.is_empty() {
            return false;
        }
        if self.allow_any {
            return true;
        }

        self.patterns.iter().any(|pattern| pattern.matches(origin))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
