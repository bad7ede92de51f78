//! Enum Normalizer
//!
//! Turns the collector's declaration-ordered constants into the canonical,
//! ascending, duplicate-free entry list every later stage consumes.
//!
//! Duplicate values are resolved first-declaration-wins: a later constant with
//! an already-seen value never contributes an entry, even when its display
//! name differs. It is recorded in [`NormalizedEnum::dropped`] instead.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, trace, warn};

use enumtab_common::{DeclaredEnum, Diagnostic, EnumDomain, EnumError, EnumValue, diagnostic_codes};

use crate::naming::resolve_display_name;
use crate::options::NamingOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEntry {
    pub value: EnumValue,
    pub display_name: String,
}

/// A constant ignored because an earlier constant already claimed its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedDuplicate {
    pub identifier: String,
    pub value: EnumValue,
    /// Identifier of the constant that kept the value.
    pub kept: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEnum {
    pub domain: EnumDomain,
    /// Strictly ascending by value.
    pub entries: Vec<NormalizedEntry>,
    pub dropped: Vec<DroppedDuplicate>,
}

impl NormalizedEnum {
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.domain.type_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    /// Display names shared by more than one value, in first-seen order.
    pub fn duplicate_display_names(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let name = entry.display_name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                duplicates.push(name);
            }
        }
        duplicates
    }

    /// Informational and warning diagnostics produced while normalizing.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let type_name = self.type_name();
        let mut diagnostics = Vec::new();
        for dropped in &self.dropped {
            diagnostics.push(Diagnostic::message(
                type_name,
                format!(
                    "{} duplicates value {} of {} and was dropped",
                    dropped.identifier, dropped.value, dropped.kept
                ),
                diagnostic_codes::DUPLICATE_VALUE_DROPPED,
            ));
        }
        for name in self.duplicate_display_names() {
            diagnostics.push(Diagnostic::warning(
                type_name,
                format!("display name '{name}' is shared by several values; lookup by name resolves to the lowest"),
                diagnostic_codes::DUPLICATE_DISPLAY_NAME,
            ));
        }
        diagnostics
    }
}

/// Normalize one declared enumeration.
pub fn normalize(declared: &DeclaredEnum, naming: &NamingOptions) -> Result<NormalizedEnum, EnumError> {
    let domain = &declared.domain;
    domain.validate()?;
    if declared.constants.is_empty() {
        return Err(EnumError::EmptyEnumeration {
            type_name: domain.type_name.clone(),
        });
    }

    let mut first_by_value: FxHashMap<EnumValue, usize> = FxHashMap::default();
    let mut entries: Vec<NormalizedEntry> = Vec::with_capacity(declared.constants.len());
    let mut dropped = Vec::new();

    for (index, constant) in declared.constants.iter().enumerate() {
        let value = constant.value;
        if !domain.contains(value) {
            return Err(EnumError::ValueOutOfDomain {
                type_name: domain.type_name.clone(),
                identifier: constant.identifier.clone(),
                value,
            });
        }

        if let Some(&first) = first_by_value.get(&value) {
            trace!(identifier = %constant.identifier, value = %value, "duplicate value dropped");
            dropped.push(DroppedDuplicate {
                identifier: constant.identifier.clone(),
                value,
                kept: declared.constants[first].identifier.clone(),
            });
            continue;
        }

        first_by_value.insert(value, index);
        entries.push(NormalizedEntry {
            value,
            display_name: resolve_display_name(constant, naming),
        });
    }

    // Values are unique after dedup, so ordering by value alone is total.
    entries.sort_unstable_by_key(|entry| entry.value);

    let normalized = NormalizedEnum {
        domain: domain.clone(),
        entries,
        dropped,
    };

    for name in normalized.duplicate_display_names() {
        warn!(type_name = %domain.type_name, name, "display name shared by several values");
    }
    debug!(
        type_name = %domain.type_name,
        entries = normalized.len(),
        dropped = normalized.dropped.len(),
        "normalized enumeration"
    );
    Ok(normalized)
}
