use std::{cmp::Ordering, fmt};

use crate::rule::{Diagnostic, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingDomain,
    InvalidType,
    InvalidDomain,
    UnnecessaryDefault,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingDomain => write!(f, "missing"),
            Rule::InvalidType => write!(f, "invalid-type"),
            Rule::InvalidDomain => write!(f, "invalid-domain"),
            Rule::UnnecessaryDefault => write!(f, "unnecessary-default"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// A display-ready finding at a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub source_line: Option<String>,
    /// True when the diagnostic carries an autofix.
    pub fixable: bool,
}

impl Issue {
    pub fn from_diagnostic(
        diagnostic: &Diagnostic,
        file_path: &str,
        line: usize,
        col: usize,
        source_line: Option<String>,
    ) -> Self {
        let (rule, severity) = match diagnostic.message_id {
            MessageId::Missing => (Rule::MissingDomain, Severity::Error),
            MessageId::InvalidType => (Rule::InvalidType, Severity::Error),
            MessageId::InvalidValue => (Rule::InvalidDomain, Severity::Error),
            MessageId::UnnecessaryDefault => (Rule::UnnecessaryDefault, Severity::Warning),
            // Reserved id, kept for catalog parity.
            MessageId::UseAllowedValue => (Rule::InvalidDomain, Severity::Error),
        };
        Self {
            file_path: file_path.to_string(),
            line,
            col,
            message: diagnostic.message(),
            severity,
            rule,
            source_line,
            fixable: diagnostic.fix.is_some(),
        }
    }

    pub fn parse_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: 1,
            col: 1,
            message: format!("Failed to parse: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            source_line: None,
            fixable: false,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file_path, line, col, then message. The message comparison
        // keeps output deterministic when several issues share a location.
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
