//! Message catalog for text domain diagnostics.

use std::fmt;

/// Identifier of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// The call omits the text domain argument.
    Missing,
    /// The domain argument is not a string literal.
    InvalidType,
    /// The domain literal is not one of the allowed text domains.
    InvalidValue,
    /// An explicit `'default'` domain when omission already implies default.
    UnnecessaryDefault,
    /// Reserved: declared in the catalog but no reporting branch produces it.
    UseAllowedValue,
}

impl MessageId {
    /// Render the message, interpolating `data` where the template takes it
    /// (the offending domain for `InvalidValue`, the allowed list for
    /// `UseAllowedValue`).
    pub fn format(&self, data: Option<&str>) -> String {
        match self {
            MessageId::Missing => "Missing text domain".to_string(),
            MessageId::InvalidType => "Text domain is not a string literal".to_string(),
            MessageId::InvalidValue => {
                format!("Invalid text domain '{}'", data.unwrap_or(""))
            }
            MessageId::UnnecessaryDefault => "Unnecessary default text domain".to_string(),
            MessageId::UseAllowedValue => format!(
                "Use one of the whitelisted text domains: {}",
                data.unwrap_or("")
            ),
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Missing => write!(f, "missing"),
            MessageId::InvalidType => write!(f, "invalid-type"),
            MessageId::InvalidValue => write!(f, "invalid-domain"),
            MessageId::UnnecessaryDefault => write!(f, "unnecessary-default"),
            MessageId::UseAllowedValue => write!(f, "use-allowed-value"),
        }
    }
}
