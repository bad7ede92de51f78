//! Per-enumeration pipeline and batch driver.
//!
//! Every stage returns an immutable value consumed by the next, so
//! independent enumerations run in parallel with no shared mutable state.
//! A fatal error aborts only the enumeration it belongs to.

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, debug_span};

use enumtab_common::{Collection, DeclaredEnum, Diagnostic, EnumDomain, EnumError};

use crate::accessor::{AccessorContract, EnumAccessor};
use crate::adapters::AdapterContract;
use crate::name_table::NameTable;
use crate::normalize::{NormalizedEnum, normalize};
use crate::options::GenerateOptions;
use crate::representation::RepresentationPlan;

/// Everything generated for one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumArtifacts {
    pub normalized: NormalizedEnum,
    pub table: NameTable,
    pub plan: RepresentationPlan,
    pub contract: AccessorContract,
    pub adapters: Vec<AdapterContract>,
}

impl EnumArtifacts {
    #[inline]
    pub fn domain(&self) -> &EnumDomain {
        &self.normalized.domain
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        self.normalized.type_name()
    }

    /// Runtime evaluator of this enumeration's accessor contract.
    pub fn accessor(&self) -> EnumAccessor<'_> {
        EnumAccessor::new(&self.normalized.domain, &self.table, &self.plan)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.normalized.diagnostics()
    }
}

/// Run the whole pipeline for one declared enumeration.
pub fn process_enum(
    declared: &DeclaredEnum,
    options: &GenerateOptions,
) -> Result<EnumArtifacts, EnumError> {
    let span = debug_span!("enum", type_name = %declared.type_name());
    let _guard = span.enter();

    let normalized = normalize(declared, &options.naming)?;
    let table = NameTable::build(&normalized.entries);
    debug_assert!(table.is_partition());
    let plan = RepresentationPlan::build(&normalized.entries, &table);
    let contract = AccessorContract::generate(&normalized.domain, &plan, &table);
    let adapters = options
        .formats
        .formats()
        .map(|format| {
            AdapterContract::generate(format, &contract.symbols.to_name, &contract.symbols.from_name)
        })
        .collect();

    Ok(EnumArtifacts {
        normalized,
        table,
        plan,
        contract,
        adapters,
    })
}

/// Resolve a requested type name to exactly one declared enumeration.
pub fn select_type<'a>(
    collection: &'a Collection,
    type_name: &str,
) -> Result<&'a DeclaredEnum, EnumError> {
    let mut matches = collection.matching(type_name);
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (None, _) => Err(EnumError::AmbiguousTypeSelection {
            requested: type_name.to_string(),
            candidates: 0,
        }),
        (Some(_), Some(_)) => Err(EnumError::AmbiguousTypeSelection {
            requested: type_name.to_string(),
            candidates: collection.matching(type_name).count(),
        }),
    }
}

/// Per-type outcomes of a batch, in request order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: IndexMap<String, Result<EnumArtifacts, EnumError>>,
}

impl BatchReport {
    pub fn artifacts(&self) -> impl Iterator<Item = &EnumArtifacts> {
        self.results.values().filter_map(|r| r.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &EnumError> {
        self.results.values().filter_map(|r| r.as_ref().err())
    }

    pub fn get(&self, type_name: &str) -> Option<&Result<EnumArtifacts, EnumError>> {
        self.results.get(type_name)
    }

    pub fn has_fatal(&self) -> bool {
        self.errors().any(EnumError::is_fatal)
    }

    /// Fatal errors first, then every enumeration's own diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = self.errors().map(EnumError::to_diagnostic).collect();
        for artifacts in self.artifacts() {
            diagnostics.extend(artifacts.diagnostics());
        }
        diagnostics
    }
}

/// Process every requested enumeration of `collection` independently.
///
/// With no type names requested, every declared enumeration is processed
/// (each distinct type name once).
pub fn process_batch(collection: &Collection, options: &GenerateOptions) -> BatchReport {
    let mut requested: Vec<&str> = if options.type_names.is_empty() {
        collection.type_names()
    } else {
        options.type_names.iter().map(String::as_str).collect()
    };
    let mut seen = FxHashSet::default();
    requested.retain(|name| seen.insert(*name));

    let outcomes: Vec<(String, Result<EnumArtifacts, EnumError>)> = requested
        .par_iter()
        .map(|&type_name| {
            let outcome = select_type(collection, type_name)
                .and_then(|declared| process_enum(declared, options));
            (type_name.to_string(), outcome)
        })
        .collect();

    let report = BatchReport {
        results: outcomes.into_iter().collect(),
    };
    debug!(
        requested = report.results.len(),
        failed = report.errors().count(),
        "processed batch"
    );
    report
}
