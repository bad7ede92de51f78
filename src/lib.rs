//! enumtab: enum analysis and name-table generation.
//!
//! The engine lives in two workspace crates re-exported here:
//! [`common`] holds the shared value objects and errors, [`analysis`] the
//! normalization, representation, name-table, accessor and adapter stages.
//! This package adds the command-line front end.

pub use enumtab_analysis as analysis;
pub use enumtab_common as common;

pub use enumtab_analysis::{
    BatchReport, EnumAccessor, EnumArtifacts, FormatSet, GenerateOptions, NamingOptions,
    process_batch, process_enum,
};
pub use enumtab_common::{Collection, DeclaredEnum, EnumDomain, EnumError, EnumValue, RawConstant};

pub mod cli;
pub mod tracing_config;
