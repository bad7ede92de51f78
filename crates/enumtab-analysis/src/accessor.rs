//! Accessor Contract Generator
//!
//! Every binding of an enumeration provides four operations:
//!
//! - `to_name(value)`: the display name, or the `Type(value)` fallback for
//!   undeclared values. Never fails.
//! - `from_name(name)`: exact reverse lookup, `NameNotFound` on a miss.
//! - `all_values()`: the ascending, duplicate-free value list.
//! - `is_valid(value)`: true exactly when `to_name` takes the table path.
//!
//! [`AccessorContract`] describes those operations for a code-emission front
//! end. [`EnumAccessor`] evaluates the same contract at runtime over the
//! generated name table and representation plan.

use std::borrow::Cow;

use serde::Serialize;

use enumtab_common::{EnumDomain, EnumError, EnumValue};

use crate::name_table::NameTable;
use crate::representation::{RepresentationPlan, Strategy};

/// Conventional symbol names a front end renders for one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorSymbols {
    /// Packed name string constant.
    pub packed_name: String,
    /// Forward table: a boundary index for direct indexing, a map otherwise.
    pub forward_table: String,
    pub reverse_index: String,
    pub values_table: String,
    pub to_name: String,
    pub from_name: String,
    pub all_values: String,
    pub is_valid: String,
}

impl AccessorSymbols {
    pub fn for_type(type_name: &str, strategy: Strategy) -> Self {
        let forward_table = if strategy.is_direct_index() {
            format!("_{type_name}Index")
        } else {
            format!("_{type_name}Map")
        };
        AccessorSymbols {
            packed_name: format!("_{type_name}Name"),
            forward_table,
            reverse_index: format!("_{type_name}NameToValueMap"),
            values_table: format!("_{type_name}Values"),
            to_name: "String".to_string(),
            from_name: format!("{type_name}String"),
            all_values: format!("{type_name}Values"),
            is_valid: format!("IsA{type_name}"),
        }
    }
}

/// Language-neutral description of the four accessor operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorContract {
    pub type_name: String,
    pub signed: bool,
    pub bit_width: u32,
    pub strategy: Strategy,
    pub symbols: AccessorSymbols,
    /// `%d` is replaced by the decimal value.
    pub fallback_template: String,
    /// `%s` is replaced by the rejected name.
    pub not_found_template: String,
    pub value_count: usize,
}

impl AccessorContract {
    pub fn generate(domain: &EnumDomain, plan: &RepresentationPlan, table: &NameTable) -> Self {
        let type_name = domain.type_name.as_str();
        let strategy = plan.strategy();
        AccessorContract {
            type_name: type_name.to_string(),
            signed: domain.signed,
            bit_width: domain.bit_width,
            strategy,
            symbols: AccessorSymbols::for_type(type_name, strategy),
            fallback_template: format!("{type_name}(%d)"),
            not_found_template: format!("%s does not belong to {type_name} values"),
            value_count: table.len(),
        }
    }
}

/// Runtime evaluator of the accessor contract.
///
/// The reverse index stores span positions sorted by name, so name lookup is
/// a binary search over the packed string and never copies a name.
#[derive(Debug, Clone)]
pub struct EnumAccessor<'a> {
    domain: &'a EnumDomain,
    table: &'a NameTable,
    plan: &'a RepresentationPlan,
    values: Vec<EnumValue>,
    by_name: Vec<usize>,
}

impl<'a> EnumAccessor<'a> {
    pub fn new(domain: &'a EnumDomain, table: &'a NameTable, plan: &'a RepresentationPlan) -> Self {
        let values = table.spans().iter().map(|span| span.value).collect();

        // Stable sort: among equal names the lowest value stays first.
        let mut by_name: Vec<usize> = (0..table.len()).collect();
        by_name.sort_by(|&a, &b| {
            let (a, b) = (&table.spans()[a], &table.spans()[b]);
            table.name(a).cmp(table.name(b))
        });

        EnumAccessor {
            domain,
            table,
            plan,
            values,
            by_name,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.domain.type_name
    }

    #[inline]
    pub fn domain(&self) -> &EnumDomain {
        self.domain
    }

    #[inline]
    pub fn plan(&self) -> &RepresentationPlan {
        self.plan
    }

    /// Display name of `value`, or the `Type(value)` fallback.
    pub fn to_name(&self, value: EnumValue) -> Cow<'a, str> {
        let table: &'a NameTable = self.table;
        match self.plan.span_of(value) {
            Some((start, end)) => Cow::Borrowed(&table.packed()[start..end]),
            None => Cow::Owned(self.domain.fallback_name(value)),
        }
    }

    /// Exact reverse lookup by display name.
    pub fn from_name(&self, name: &str) -> Result<EnumValue, EnumError> {
        let spans = self.table.spans();
        let first = self
            .by_name
            .partition_point(|&i| self.table.name(&spans[i]) < name);
        match self.by_name.get(first) {
            Some(&i) if self.table.name(&spans[i]) == name => Ok(spans[i].value),
            _ => Err(EnumError::NameNotFound {
                name: name.to_string(),
                type_name: self.domain.type_name.clone(),
            }),
        }
    }

    /// All declared values, ascending and duplicate-free.
    #[inline]
    pub fn all_values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn is_valid(&self, value: EnumValue) -> bool {
        self.plan.locate(value).is_some()
    }
}
