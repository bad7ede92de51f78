//! Serialization Adapters
//!
//! Each external format is an independent adapter over [`EnumAccessor`]:
//! encoding calls `to_name` and wraps the result, decoding extracts the
//! carried string and calls `from_name`. No adapter resolves names itself,
//! so adding a format never touches normalization or table generation.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::Serialize;

use enumtab_common::EnumValue;

use crate::accessor::EnumAccessor;

pub mod json;
pub mod sql;
pub mod text;
pub mod yaml;

pub use json::JsonAdapter;
pub use sql::{ColumnValue, SqlAdapter};
pub use text::TextAdapter;
pub use yaml::YamlAdapter;

/// External encodings an enumeration can be adapted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Plain text.
    Text,
    /// Document format (quoted JSON string).
    Json,
    /// Tagged-document format (YAML scalar).
    Yaml,
    /// Relational storage column.
    Sql,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Text, Format::Json, Format::Yaml, Format::Sql];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Sql => "sql",
        }
    }

    pub fn flag(self) -> FormatSet {
        match self {
            Format::Text => FormatSet::TEXT,
            Format::Json => FormatSet::JSON,
            Format::Yaml => FormatSet::YAML,
            Format::Sql => FormatSet::SQL,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" | "document" => Ok(Format::Json),
            "yaml" | "tagged-document" => Ok(Format::Yaml),
            "sql" | "storage-column" => Ok(Format::Sql),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

bitflags! {
    /// The set of adapters requested for generation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatSet: u8 {
        const TEXT = 1 << 0;
        const JSON = 1 << 1;
        const YAML = 1 << 2;
        const SQL = 1 << 3;
    }
}

impl FormatSet {
    /// Requested formats in canonical order.
    pub fn formats(self) -> impl Iterator<Item = Format> {
        Format::ALL.into_iter().filter(move |f| self.contains(f.flag()))
    }
}

impl FromIterator<Format> for FormatSet {
    fn from_iter<I: IntoIterator<Item = Format>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FormatSet::empty(), |set, format| set | format.flag())
    }
}

/// How a format carries the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Carrier {
    PlainString,
    QuotedString,
    DocumentScalar,
    ColumnString,
}

/// Front-end description of one generated adapter pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterContract {
    pub format: Format,
    pub carrier: Carrier,
    pub encode_symbol: String,
    pub decode_symbol: String,
    /// Accessor operation each side delegates to.
    pub encode_via: String,
    pub decode_via: String,
}

impl AdapterContract {
    pub fn generate(format: Format, accessor_to_name: &str, accessor_from_name: &str) -> Self {
        let (carrier, encode_symbol, decode_symbol) = match format {
            Format::Text => (Carrier::PlainString, "MarshalText", "UnmarshalText"),
            Format::Json => (Carrier::QuotedString, "MarshalJSON", "UnmarshalJSON"),
            Format::Yaml => (Carrier::DocumentScalar, "MarshalYAML", "UnmarshalYAML"),
            Format::Sql => (Carrier::ColumnString, "Value", "Scan"),
        };
        AdapterContract {
            format,
            carrier,
            encode_symbol: encode_symbol.to_string(),
            decode_symbol: decode_symbol.to_string(),
            encode_via: accessor_to_name.to_string(),
            decode_via: accessor_from_name.to_string(),
        }
    }
}

/// Decode failure. Every variant carries the offending input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The carried string is not a display name of the enumeration.
    NotFound {
        format: Format,
        name: String,
        type_name: String,
    },
    /// The input does not carry a string (wrong JSON type, NULL column, ...).
    UnexpectedShape {
        format: Format,
        type_name: String,
        found: String,
    },
    /// Byte input that is not UTF-8.
    InvalidUtf8 { format: Format, found: String },
}

impl DecodeError {
    pub fn format(&self) -> Format {
        match self {
            DecodeError::NotFound { format, .. }
            | DecodeError::UnexpectedShape { format, .. }
            | DecodeError::InvalidUtf8 { format, .. } => *format,
        }
    }

    /// The offending input as received.
    pub fn input(&self) -> &str {
        match self {
            DecodeError::NotFound { name, .. } => name,
            DecodeError::UnexpectedShape { found, .. } | DecodeError::InvalidUtf8 { found, .. } => {
                found
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotFound {
                format,
                name,
                type_name,
            } => write!(f, "{format}: {name} does not belong to {type_name} values"),
            DecodeError::UnexpectedShape {
                format,
                type_name,
                found,
            } => write!(f, "{format}: {type_name} should be a string, got {found}"),
            DecodeError::InvalidUtf8 { format, found } => {
                write!(f, "{format}: value is not valid UTF-8: {found}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A symmetric encode/decode pair for one format.
pub trait FormatAdapter {
    /// The format-level representation of a value.
    type Repr;

    fn format(&self) -> Format;

    fn encode(&self, accessor: &EnumAccessor<'_>, value: EnumValue) -> Self::Repr;

    fn decode(&self, accessor: &EnumAccessor<'_>, repr: &Self::Repr)
    -> Result<EnumValue, DecodeError>;
}

/// Shared decode tail: reverse lookup, with a miss reported per format.
pub(crate) fn resolve_name(
    accessor: &EnumAccessor<'_>,
    format: Format,
    name: &str,
) -> Result<EnumValue, DecodeError> {
    accessor
        .from_name(name)
        .map_err(|_| DecodeError::NotFound {
            format,
            name: name.to_string(),
            type_name: accessor.type_name().to_string(),
        })
}

pub(crate) fn unexpected_shape(
    accessor: &EnumAccessor<'_>,
    format: Format,
    found: impl Into<String>,
) -> DecodeError {
    DecodeError::UnexpectedShape {
        format,
        type_name: accessor.type_name().to_string(),
        found: found.into(),
    }
}
