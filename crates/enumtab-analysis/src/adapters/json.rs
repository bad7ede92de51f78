use serde_json::Value;

use enumtab_common::EnumValue;

use super::{DecodeError, Format, FormatAdapter, resolve_name, unexpected_shape};
use crate::accessor::EnumAccessor;

/// Document encoding: the display name as a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAdapter;

impl JsonAdapter {
    /// Encode straight to JSON text (a quoted, escaped string).
    pub fn encode_text(&self, accessor: &EnumAccessor<'_>, value: EnumValue) -> String {
        self.encode(accessor, value).to_string()
    }

    /// Decode raw JSON text. Anything that is not a JSON string is rejected
    /// with the text as received.
    pub fn decode_text(&self, accessor: &EnumAccessor<'_>, text: &str) -> Result<EnumValue, DecodeError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => self.decode(accessor, &value),
            Err(_) => Err(unexpected_shape(accessor, Format::Json, text)),
        }
    }
}

impl FormatAdapter for JsonAdapter {
    type Repr = Value;

    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, accessor: &EnumAccessor<'_>, value: EnumValue) -> Value {
        Value::String(accessor.to_name(value).into_owned())
    }

    fn decode(&self, accessor: &EnumAccessor<'_>, repr: &Value) -> Result<EnumValue, DecodeError> {
        match repr {
            Value::String(name) => resolve_name(accessor, Format::Json, name),
            other => Err(unexpected_shape(accessor, Format::Json, other.to_string())),
        }
    }
}
