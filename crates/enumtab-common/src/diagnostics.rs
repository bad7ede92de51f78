use std::fmt;

use serde::Serialize;

use crate::value::EnumValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        };
        f.write_str(text)
    }
}

pub mod diagnostic_codes {
    pub const EMPTY_ENUMERATION: u32 = 1001;
    pub const AMBIGUOUS_TYPE_SELECTION: u32 = 1002;
    pub const NAME_NOT_FOUND: u32 = 1003;
    pub const INVALID_DOMAIN: u32 = 1004;
    pub const VALUE_OUT_OF_DOMAIN: u32 = 1005;
    pub const DUPLICATE_VALUE_DROPPED: u32 = 2001;
    pub const DUPLICATE_DISPLAY_NAME: u32 = 2002;
}

/// A reportable event tied to one enumeration type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub type_name: String,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(type_name: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self::new(DiagnosticCategory::Error, type_name, message, code)
    }

    pub fn warning(type_name: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self::new(DiagnosticCategory::Warning, type_name, message, code)
    }

    pub fn message(type_name: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self::new(DiagnosticCategory::Message, type_name, message, code)
    }

    fn new(
        category: DiagnosticCategory,
        type_name: impl Into<String>,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category,
            code,
            type_name: type_name.into(),
            message_text: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ET{}: {}: {}",
            self.category, self.code, self.type_name, self.message_text
        )
    }
}

/// Errors produced while analyzing an enumeration or resolving its names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// No constants were declared for the requested type.
    EmptyEnumeration { type_name: String },
    /// The requested type name matched zero or several declared enumerations.
    AmbiguousTypeSelection {
        requested: String,
        candidates: usize,
    },
    /// Reverse lookup miss.
    NameNotFound { name: String, type_name: String },
    /// The collector reported a bit width outside the supported range.
    InvalidDomain { type_name: String, bit_width: u32 },
    /// A constant's value does not fit the enumeration's domain.
    ValueOutOfDomain {
        type_name: String,
        identifier: String,
        value: EnumValue,
    },
}

impl EnumError {
    /// Fatal errors abort generation for one enumeration (never its siblings).
    /// `NameNotFound` is returned to lookup callers and is always recoverable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EnumError::NameNotFound { .. })
    }

    pub fn code(&self) -> u32 {
        match self {
            EnumError::EmptyEnumeration { .. } => diagnostic_codes::EMPTY_ENUMERATION,
            EnumError::AmbiguousTypeSelection { .. } => diagnostic_codes::AMBIGUOUS_TYPE_SELECTION,
            EnumError::NameNotFound { .. } => diagnostic_codes::NAME_NOT_FOUND,
            EnumError::InvalidDomain { .. } => diagnostic_codes::INVALID_DOMAIN,
            EnumError::ValueOutOfDomain { .. } => diagnostic_codes::VALUE_OUT_OF_DOMAIN,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            EnumError::EmptyEnumeration { type_name }
            | EnumError::NameNotFound { type_name, .. }
            | EnumError::InvalidDomain { type_name, .. }
            | EnumError::ValueOutOfDomain { type_name, .. } => type_name,
            EnumError::AmbiguousTypeSelection { requested, .. } => requested,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.type_name(), self.to_string(), self.code())
    }
}

impl fmt::Display for EnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumError::EmptyEnumeration { type_name } => {
                write!(f, "no values defined for type {type_name}")
            }
            EnumError::AmbiguousTypeSelection {
                requested,
                candidates: 0,
            } => write!(f, "no enumeration type named {requested} was declared"),
            EnumError::AmbiguousTypeSelection {
                requested,
                candidates,
            } => write!(
                f,
                "type name {requested} matches {candidates} declared enumerations"
            ),
            EnumError::NameNotFound { name, type_name } => {
                write!(f, "{name} does not belong to {type_name} values")
            }
            EnumError::InvalidDomain {
                type_name,
                bit_width,
            } => write!(
                f,
                "type {type_name} has unsupported bit width {bit_width}"
            ),
            EnumError::ValueOutOfDomain {
                type_name,
                identifier,
                value,
            } => write!(f, "{identifier} = {value} overflows type {type_name}"),
        }
    }
}

impl std::error::Error for EnumError {}
