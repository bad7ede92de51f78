//! Common types and utilities for enumtab.
//!
//! This crate provides the value objects every pipeline stage shares:
//! - Integer values and their numeric domain (`EnumValue`, `EnumDomain`)
//! - Raw collector output (`RawConstant`, `DeclaredEnum`, `Collection`)
//! - The error type (`EnumError`) and diagnostics with stable codes
//! - Centralized limits

// Values, domains and collector input
pub mod value;
pub use value::{Collection, DeclaredEnum, EnumDomain, EnumValue, RawConstant};

// Errors and diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, EnumError, diagnostic_codes};

// Centralized limits
pub mod limits;

#[cfg(test)]
#[path = "tests/value_tests.rs"]
mod value_tests;
#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
