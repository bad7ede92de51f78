//! Tagged-document encoding as a single YAML scalar.
//!
//! Decoding accepts any one-document YAML input whose root is a string
//! scalar. Null, numeric, boolean and collection roots are the wrong shape.

use serde_yaml::Value;

use enumtab_common::EnumValue;

use super::{DecodeError, Format, FormatAdapter, resolve_name, unexpected_shape};
use crate::accessor::EnumAccessor;

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlAdapter;

impl FormatAdapter for YamlAdapter {
    type Repr = String;

    fn format(&self) -> Format {
        Format::Yaml
    }

    fn encode(&self, accessor: &EnumAccessor<'_>, value: EnumValue) -> String {
        let name = accessor.to_name(value);
        match serde_yaml::to_string(name.as_ref()) {
            Ok(document) => document,
            // Not reachable for a plain string.
            Err(_) => serde_json::Value::String(name.into_owned()).to_string(),
        }
    }

    fn decode(&self, accessor: &EnumAccessor<'_>, repr: &String) -> Result<EnumValue, DecodeError> {
        match serde_yaml::from_str::<Value>(repr) {
            Ok(Value::String(name)) => resolve_name(accessor, Format::Yaml, &name),
            _ => Err(unexpected_shape(accessor, Format::Yaml, repr.as_str())),
        }
    }
}
