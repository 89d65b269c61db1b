//! Call-shape classification for the WordPress translation functions.
//!
//! The four recognized forms all take the text domain as their trailing
//! argument, so `domain_index` is always `required_args - 1`.

/// Shape of one recognized translation-marking function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    /// Number of arguments a complete call carries, text domain included.
    pub required_args: usize,
    /// Index of the text domain argument.
    pub domain_index: usize,
}

/// The translation-marking functions of the WordPress i18n API.
pub const TRANSLATION_FUNCTIONS: &[FunctionSpec] = &[
    FunctionSpec {
        name: "__",
        required_args: 2,
        domain_index: 1,
    },
    FunctionSpec {
        name: "_x",
        required_args: 3,
        domain_index: 2,
    },
    FunctionSpec {
        name: "_n",
        required_args: 4,
        domain_index: 3,
    },
    FunctionSpec {
        name: "_nx",
        required_args: 5,
        domain_index: 4,
    },
];

/// Look up the spec for a callee name.
///
/// `None` means the call is not a translation call and is skipped entirely.
pub fn classify(name: &str) -> Option<&'static FunctionSpec> {
    TRANSLATION_FUNCTIONS.iter().find(|spec| spec.name == name)
}

/// One argument of a visited call, reduced to what domain validation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentNode {
    /// The string value when the argument is a string literal.
    pub literal: Option<String>,
    /// File-relative byte range of the argument. For string literals the
    /// range covers the quote characters on both sides.
    pub range: (usize, usize),
}

impl ArgumentNode {
    pub fn literal(value: impl Into<String>, range: (usize, usize)) -> Self {
        Self {
            literal: Some(value.into()),
            range,
        }
    }

    /// A syntactically present argument that is not a string literal
    /// (identifier, call, spread, template, ...).
    pub fn expression(range: (usize, usize)) -> Self {
        Self {
            literal: None,
            range,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.literal.is_some()
    }
}

/// A single visited translation call, detached from the AST.
///
/// Holds only the current call's local data; discarded after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub callee: String,
    /// Arguments in source order.
    pub args: Vec<ArgumentNode>,
    /// File-relative byte range of the whole call expression.
    pub range: (usize, usize),
}
