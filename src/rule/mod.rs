//! The text domain validation rule.
//!
//! Every WordPress translation-marking call (`__`, `_x`, `_n`, `_nx`) must
//! carry an allowed text domain as its trailing argument. This module is the
//! stateless core of that check: [`check_call`] is a pure function of one
//! call record and the rule options, producing at most one diagnostic with
//! an optional autofix. AST traversal and rendering live in the adapters
//! (`collector`, `check`, `reporter`).

pub mod call;
pub mod fix;
pub mod messages;

pub use call::{ArgumentNode, CallRecord, FunctionSpec, TRANSLATION_FUNCTIONS, classify};
pub use fix::Fix;
pub use messages::MessageId;

use fix::{insertion_fix, removal_fix, replacement_fix};

/// Validation status of one call's text domain argument.
///
/// Derived per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Too few arguments for the call's form.
    Missing,
    /// The domain slot holds something other than a string literal.
    InvalidType,
    /// The domain literal is not in the allowed set.
    InvalidValue,
    Valid,
}

/// Options of the text domain rule, read-only after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Accept omission of the domain argument as an implicit default, and
    /// flag an explicit `'default'` literal as removable.
    pub allow_default: bool,
    /// The only domain values accepted as valid. Unique, enforced by the
    /// configuration loader.
    pub allowed_text_domains: Vec<String>,
}

/// A diagnostic for one call, addressed by file-relative byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message_id: MessageId,
    /// Byte range of the whole call expression, for display mapping.
    pub call_range: (usize, usize),
    /// The offending domain value, for `InvalidValue`.
    pub data: Option<String>,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        self.message_id.format(self.data.as_deref())
    }
}

/// Derive the validation status of a classified call.
pub fn status_of(spec: &FunctionSpec, call: &CallRecord, allowed: &[String]) -> Status {
    if call.args.len() < spec.required_args {
        return Status::Missing;
    }
    let Some(domain) = call.args.get(spec.domain_index) else {
        return Status::InvalidType;
    };
    let Some(value) = &domain.literal else {
        return Status::InvalidType;
    };
    if allowed.iter().any(|d| d == value) {
        Status::Valid
    } else {
        Status::InvalidValue
    }
}

/// Validate one call against the rule options.
///
/// Returns `None` when the callee is not a translation function, the call is
/// valid, or omission is accepted via `allow_default`.
pub fn check_call(call: &CallRecord, options: &RuleOptions) -> Option<Diagnostic> {
    let spec = classify(&call.callee)?;
    let allowed = &options.allowed_text_domains;

    match status_of(spec, call, allowed) {
        Status::Valid => None,
        Status::Missing => {
            if options.allow_default {
                return None;
            }
            Some(Diagnostic {
                message_id: MessageId::Missing,
                call_range: call.range,
                data: None,
                fix: insertion_fix(&call.args, allowed),
            })
        }
        Status::InvalidType => Some(Diagnostic {
            message_id: MessageId::InvalidType,
            call_range: call.range,
            data: None,
            // The value is unknown, rewriting would be unsafe.
            fix: None,
        }),
        Status::InvalidValue => {
            let domain = &call.args[spec.domain_index];
            let value = domain
                .literal
                .clone()
                .unwrap_or_else(|| unreachable!("InvalidValue status without a literal value"));

            if value == "default" && options.allow_default {
                return Some(Diagnostic {
                    message_id: MessageId::UnnecessaryDefault,
                    call_range: call.range,
                    data: None,
                    fix: Some(removal_fix(&call.args, domain.range)),
                });
            }

            let fix = replacement_fix(domain.range, allowed);
            Some(Diagnostic {
                message_id: MessageId::InvalidValue,
                call_range: call.range,
                data: Some(value),
                fix,
            })
        }
    }
}
