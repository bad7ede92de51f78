//! Enum analysis and name-table generation.
//!
//! Each declared enumeration flows through the same pure stages:
//!
//! 1. [`normalize`] - resolve display names, drop later duplicates of a value,
//!    sort ascending by value.
//! 2. [`representation`] - pick direct indexing for contiguous value sets and
//!    an explicit lookup table otherwise.
//! 3. [`name_table`] - pack all display names into one string and record a
//!    byte span per value.
//! 4. [`accessor`] - the to-name / from-name / all-values / is-valid contract,
//!    plus a runtime evaluator of that contract.
//! 5. [`adapters`] - text, JSON, YAML and SQL column wrappers over the accessor.
//!
//! [`pipeline`] chains the stages for one enumeration and runs independent
//! enumerations of a batch in parallel.

pub mod options;
pub use options::{GenerateOptions, NamingOptions};

pub mod naming;
pub use naming::{NameTransform, resolve_display_name, split_words};

pub mod normalize;
pub use normalize::{DroppedDuplicate, NormalizedEntry, NormalizedEnum, normalize};

pub mod representation;
pub use representation::{RepresentationPlan, Strategy, select_strategy};

pub mod name_table;
pub use name_table::{NameSpan, NameTable};

pub mod accessor;
pub use accessor::{AccessorContract, AccessorSymbols, EnumAccessor};

pub mod adapters;
pub use adapters::{
    AdapterContract, Carrier, ColumnValue, DecodeError, Format, FormatAdapter, FormatSet,
    JsonAdapter, SqlAdapter, TextAdapter, YamlAdapter,
};

pub mod pipeline;
pub use pipeline::{BatchReport, EnumArtifacts, process_batch, process_enum, select_type};

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod naming_tests;
#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod normalize_tests;
#[cfg(test)]
#[path = "tests/representation_tests.rs"]
mod representation_tests;
#[cfg(test)]
#[path = "tests/name_table_tests.rs"]
mod name_table_tests;
#[cfg(test)]
#[path = "tests/accessor_tests.rs"]
mod accessor_tests;
#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod adapter_tests;
