//! Representation Selector
//!
//! A value set with no gaps (`max - min + 1 == n`) is indexed directly by
//! `value - min`. Any gap selects an explicit value-to-span lookup table.
//! The threshold is exact contiguity, not a density ratio, and depends only on
//! the set of values.

use serde::Serialize;
use tracing::debug;

use enumtab_common::EnumValue;
use enumtab_common::limits::OFFSET_WIDTHS;

use crate::name_table::{NameSpan, NameTable};
use crate::normalize::NormalizedEntry;

/// The lookup strategy chosen for one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Strategy {
    #[serde(rename_all = "camelCase")]
    DirectIndex {
        min_value: EnumValue,
        max_value: EnumValue,
    },
    LookupTable,
}

impl Strategy {
    pub fn is_direct_index(&self) -> bool {
        matches!(self, Strategy::DirectIndex { .. })
    }
}

/// Choose the strategy for an ascending, duplicate-free entry list.
///
/// An empty list selects `LookupTable`; the normalizer never produces one.
pub fn select_strategy(entries: &[NormalizedEntry]) -> Strategy {
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return Strategy::LookupTable;
    };
    let (min_value, max_value) = (first.value, last.value);

    // Domain values are at most 64 bits wide, so the range fits in u128
    // even for a full unsigned domain.
    let range = max_value.get().abs_diff(min_value.get()) + 1;
    if range == entries.len() as u128 {
        Strategy::DirectIndex {
            min_value,
            max_value,
        }
    } else {
        Strategy::LookupTable
    }
}

/// Narrowest unsigned width (in bits) able to hold every offset up to `len`.
pub fn offset_width(len: usize) -> u32 {
    let len = len as u128;
    OFFSET_WIDTHS
        .into_iter()
        .find(|&bits| len < (1u128 << bits))
        .unwrap_or(64)
}

/// The chosen strategy plus the per-value offset data its accessor needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RepresentationPlan {
    /// Entry `value - min_value` covers `boundaries[i]..boundaries[i + 1]`.
    #[serde(rename_all = "camelCase")]
    DirectIndex {
        min_value: EnumValue,
        max_value: EnumValue,
        boundaries: Vec<usize>,
        offset_width: u32,
    },
    /// Ascending `(value, start, end)` rows searched by value.
    #[serde(rename_all = "camelCase")]
    LookupTable {
        rows: Vec<NameSpan>,
        offset_width: u32,
    },
}

impl RepresentationPlan {
    /// Select a strategy for `entries` and derive its data from `table`.
    pub fn build(entries: &[NormalizedEntry], table: &NameTable) -> Self {
        let strategy = select_strategy(entries);
        let offset_width = offset_width(table.packed().len());
        debug!(?strategy, offset_width, "selected representation");

        match strategy {
            Strategy::DirectIndex {
                min_value,
                max_value,
            } => RepresentationPlan::DirectIndex {
                min_value,
                max_value,
                boundaries: table.boundaries(),
                offset_width,
            },
            Strategy::LookupTable => RepresentationPlan::LookupTable {
                rows: table.spans().to_vec(),
                offset_width,
            },
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            RepresentationPlan::DirectIndex {
                min_value,
                max_value,
                ..
            } => Strategy::DirectIndex {
                min_value: *min_value,
                max_value: *max_value,
            },
            RepresentationPlan::LookupTable { .. } => Strategy::LookupTable,
        }
    }

    pub fn offset_width(&self) -> u32 {
        match self {
            RepresentationPlan::DirectIndex { offset_width, .. }
            | RepresentationPlan::LookupTable { offset_width, .. } => *offset_width,
        }
    }

    /// Position of `value` in ascending entry order, if the value is declared.
    pub fn locate(&self, value: EnumValue) -> Option<usize> {
        match self {
            RepresentationPlan::DirectIndex {
                min_value,
                max_value,
                ..
            } => {
                if value < *min_value || value > *max_value {
                    return None;
                }
                usize::try_from(value.get() - min_value.get()).ok()
            }
            RepresentationPlan::LookupTable { rows, .. } => rows
                .binary_search_by_key(&value, |row| row.value)
                .ok(),
        }
    }

    /// Byte range of `value`'s name inside the packed string.
    pub fn span_of(&self, value: EnumValue) -> Option<(usize, usize)> {
        let index = self.locate(value)?;
        match self {
            RepresentationPlan::DirectIndex { boundaries, .. } => {
                Some((*boundaries.get(index)?, *boundaries.get(index + 1)?))
            }
            RepresentationPlan::LookupTable { rows, .. } => {
                rows.get(index).map(|row| (row.start, row.end))
            }
        }
    }
}
