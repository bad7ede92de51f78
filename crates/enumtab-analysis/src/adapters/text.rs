use enumtab_common::EnumValue;

use super::{DecodeError, Format, FormatAdapter, resolve_name};
use crate::accessor::EnumAccessor;

/// Plain-text encoding: the display name as UTF-8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAdapter;

impl FormatAdapter for TextAdapter {
    type Repr = Vec<u8>;

    fn format(&self) -> Format {
        Format::Text
    }

    fn encode(&self, accessor: &EnumAccessor<'_>, value: EnumValue) -> Vec<u8> {
        accessor.to_name(value).into_owned().into_bytes()
    }

    fn decode(&self, accessor: &EnumAccessor<'_>, repr: &Vec<u8>) -> Result<EnumValue, DecodeError> {
        let text = std::str::from_utf8(repr).map_err(|_| DecodeError::InvalidUtf8 {
            format: Format::Text,
            found: String::from_utf8_lossy(repr).into_owned(),
        })?;
        resolve_name(accessor, Format::Text, text)
    }
}
