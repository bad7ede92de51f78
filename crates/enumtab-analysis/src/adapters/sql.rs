use serde::Serialize;

use enumtab_common::EnumValue;

use super::{DecodeError, Format, FormatAdapter, resolve_name, unexpected_shape};
use crate::accessor::EnumAccessor;

/// A value as stored in or read from a relational column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ColumnValue {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
}

/// Storage-column encoding: the display name stored as a text column.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlAdapter;

impl SqlAdapter {
    /// Read a column. A `NULL` column carries no value and scans to `None`.
    pub fn scan(
        &self,
        accessor: &EnumAccessor<'_>,
        column: &ColumnValue,
    ) -> Result<Option<EnumValue>, DecodeError> {
        match column {
            ColumnValue::Null => Ok(None),
            ColumnValue::Text(text) => resolve_name(accessor, Format::Sql, text).map(Some),
            ColumnValue::Bytes(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 {
                    format: Format::Sql,
                    found: String::from_utf8_lossy(bytes).into_owned(),
                })?;
                resolve_name(accessor, Format::Sql, text).map(Some)
            }
            ColumnValue::Integer(n) => Err(unexpected_shape(accessor, Format::Sql, n.to_string())),
        }
    }
}

impl FormatAdapter for SqlAdapter {
    type Repr = ColumnValue;

    fn format(&self) -> Format {
        Format::Sql
    }

    fn encode(&self, accessor: &EnumAccessor<'_>, value: EnumValue) -> ColumnValue {
        ColumnValue::Text(accessor.to_name(value).into_owned())
    }

    /// Like [`SqlAdapter::scan`], but a `NULL` column is an error.
    fn decode(&self, accessor: &EnumAccessor<'_>, repr: &ColumnValue) -> Result<EnumValue, DecodeError> {
        self.scan(accessor, repr)?
            .ok_or_else(|| unexpected_shape(accessor, Format::Sql, "NULL"))
    }
}
