//! Autofix edits for text domain diagnostics.
//!
//! A fix is a single textual edit addressed by file-relative byte offsets.
//! Fixes are only generated when they are unambiguous: insertion and
//! replacement require exactly one allowed text domain, removal of a
//! redundant `'default'` domain is always safe.

use super::call::ArgumentNode;

/// A machine-generated source edit attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fix {
    /// Insert `text` at `offset`.
    Insert { offset: usize, text: String },
    /// Replace the bytes in `range` with `text`.
    Replace { range: (usize, usize), text: String },
    /// Delete the bytes in `range`.
    Delete { range: (usize, usize) },
}

impl Fix {
    /// Offset where the edit begins, used to order edits within a file.
    pub fn start(&self) -> usize {
        match self {
            Fix::Insert { offset, .. } => *offset,
            Fix::Replace { range, .. } | Fix::Delete { range } => range.0,
        }
    }

    /// Apply this edit to `source`, returning the rewritten text.
    pub fn apply(&self, source: &str) -> String {
        match self {
            Fix::Insert { offset, text } => {
                format!("{}{}{}", &source[..*offset], text, &source[*offset..])
            }
            Fix::Replace { range, text } => {
                format!("{}{}{}", &source[..range.0], text, &source[range.1..])
            }
            Fix::Delete { range } => {
                format!("{}{}", &source[..range.0], &source[range.1..])
            }
        }
    }
}

/// Fix for a missing domain: append `, '<domain>'` after the last argument
/// actually present. Only when exactly one domain is allowed and the call
/// has at least one argument to anchor the insertion on.
pub fn insertion_fix(args: &[ArgumentNode], allowed: &[String]) -> Option<Fix> {
    let [domain] = allowed else {
        return None;
    };
    let last = args.last()?;
    Some(Fix::Insert {
        offset: last.range.1,
        text: format!(", '{}'", domain),
    })
}

/// Fix for an invalid domain: rewrite the literal's inner text, keeping the
/// surrounding quotes. Only when exactly one domain is allowed.
pub fn replacement_fix(literal_range: (usize, usize), allowed: &[String]) -> Option<Fix> {
    let [domain] = allowed else {
        return None;
    };
    Some(Fix::Replace {
        range: (literal_range.0 + 1, literal_range.1 - 1),
        text: domain.clone(),
    })
}

/// Fix for a redundant `'default'` domain: delete from the end of the
/// nearest preceding argument through the end of the literal, taking the
/// separator with it.
pub fn removal_fix(args: &[ArgumentNode], literal_range: (usize, usize)) -> Fix {
    let previous = args
        .iter()
        .rev()
        .find(|arg| arg.range.1 < literal_range.0)
        .unwrap_or_else(|| {
            // The domain is never the first argument of a recognized form,
            // so a missing predecessor means the host supplied an argument
            // list that is out of order or incomplete.
            unreachable!("domain literal has no preceding argument")
        });
    Fix::Delete {
        range: (previous.range.1, literal_range.1),
    }
}
