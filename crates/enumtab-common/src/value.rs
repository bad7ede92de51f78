//! Enumeration values, numeric domains and raw collector output.
//!
//! Everything here is an immutable value object scoped to one enumeration's
//! generation pass. The Constant Collector produces `DeclaredEnum`s; the
//! analysis stages only ever read them.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::diagnostics::EnumError;
use crate::limits::{MAX_BIT_WIDTH, MIN_BIT_WIDTH};

/// An integer constant value.
///
/// The `i128` carrier holds every value of any supported domain, signed or
/// unsigned, so plain integer ordering is the domain ordering for any value
/// that [`EnumDomain::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EnumValue(pub i128);

impl EnumValue {
    #[inline]
    pub fn get(self) -> i128 {
        self.0
    }
}

impl From<i128> for EnumValue {
    fn from(value: i128) -> Self {
        EnumValue(value)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue(i128::from(value))
    }
}

impl From<u64> for EnumValue {
    fn from(value: u64) -> Self {
        EnumValue(i128::from(value))
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        EnumValue(i128::from(value))
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Ok(v) = i64::try_from(self.0) {
            serializer.serialize_i64(v)
        } else if let Ok(v) = u64::try_from(self.0) {
            serializer.serialize_u64(v)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for EnumValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EnumValueVisitor)
    }
}

/// Accepts JSON integers or decimal strings (for values outside `i64`/`u64`).
struct EnumValueVisitor;

impl<'de> Visitor<'de> for EnumValueVisitor {
    type Value = EnumValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal integer string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EnumValue, E> {
        Ok(EnumValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EnumValue, E> {
        Ok(EnumValue::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<EnumValue, E> {
        Ok(EnumValue(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<EnumValue, E> {
        i128::try_from(v)
            .map(EnumValue)
            .map_err(|_| E::custom(format!("integer {v} does not fit in 128 signed bits")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<EnumValue, E> {
        v.trim()
            .parse::<i128>()
            .map(EnumValue)
            .map_err(|_| E::custom(format!("invalid integer literal: '{v}'")))
    }
}

/// The numeric universe an enumeration's values live in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDomain {
    pub type_name: String,
    pub signed: bool,
    pub bit_width: u32,
}

impl EnumDomain {
    pub fn new(
        type_name: impl Into<String>,
        signed: bool,
        bit_width: u32,
    ) -> Result<Self, EnumError> {
        let domain = EnumDomain {
            type_name: type_name.into(),
            signed,
            bit_width,
        };
        domain.validate()?;
        Ok(domain)
    }

    /// Signed 64-bit domain, the common case for `int`-like declarations.
    pub fn signed(type_name: impl Into<String>) -> Self {
        EnumDomain {
            type_name: type_name.into(),
            signed: true,
            bit_width: MAX_BIT_WIDTH,
        }
    }

    /// Unsigned 64-bit domain.
    pub fn unsigned(type_name: impl Into<String>) -> Self {
        EnumDomain {
            type_name: type_name.into(),
            signed: false,
            bit_width: MAX_BIT_WIDTH,
        }
    }

    pub fn validate(&self) -> Result<(), EnumError> {
        if (MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&self.bit_width) {
            Ok(())
        } else {
            Err(EnumError::InvalidDomain {
                type_name: self.type_name.clone(),
                bit_width: self.bit_width,
            })
        }
    }

    fn modulus(&self) -> i128 {
        1i128 << self.bit_width
    }

    pub fn min_value(&self) -> EnumValue {
        if self.signed {
            EnumValue(-(self.modulus() >> 1))
        } else {
            EnumValue(0)
        }
    }

    pub fn max_value(&self) -> EnumValue {
        if self.signed {
            EnumValue((self.modulus() >> 1) - 1)
        } else {
            EnumValue(self.modulus() - 1)
        }
    }

    pub fn contains(&self, value: EnumValue) -> bool {
        self.min_value() <= value && value <= self.max_value()
    }

    /// The "unknown value" representation, e.g. `Day(12)`.
    pub fn fallback_name(&self, value: EnumValue) -> String {
        format!("{}({})", self.type_name, value)
    }
}

/// One constant as declared in source, before any normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConstant {
    #[serde(rename = "name", alias = "identifier")]
    pub identifier: String,
    pub value: EnumValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl RawConstant {
    pub fn new(identifier: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        RawConstant {
            identifier: identifier.into(),
            value: value.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

/// Collector output for one declared enumeration type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaredEnum {
    pub domain: EnumDomain,
    pub constants: Vec<RawConstant>,
}

impl DeclaredEnum {
    pub fn new(domain: EnumDomain, constants: Vec<RawConstant>) -> Self {
        DeclaredEnum { domain, constants }
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.domain.type_name
    }
}

/// Everything the collector found in one source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    pub enums: Vec<DeclaredEnum>,
}

impl Collection {
    pub fn new(enums: Vec<DeclaredEnum>) -> Self {
        Collection { enums }
    }

    /// All declared enumerations whose type name is exactly `type_name`.
    pub fn matching<'a>(&'a self, type_name: &str) -> impl Iterator<Item = &'a DeclaredEnum> {
        self.enums.iter().filter(move |e| e.type_name() == type_name)
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.enums.iter().map(DeclaredEnum::type_name).collect()
    }
}
