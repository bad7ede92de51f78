use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

use enumtab_analysis::{BatchReport, GenerateOptions, process_batch};
use enumtab_common::Diagnostic;

use crate::cli::args::CliArgs;
use crate::cli::config::{discover_config, resolve_options};
use crate::cli::manifest::load_manifest;

/// Outcome of one `enumtab` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub options: GenerateOptions,
    pub report: BatchReport,
    /// Fatal errors first, then per-enumeration warnings and messages.
    pub diagnostics: Vec<Diagnostic>,
    /// Generated artifacts keyed by type name, as JSON text.
    pub output: String,
}

impl RunResult {
    pub fn has_fatal(&self) -> bool {
        self.report.has_fatal()
    }
}

/// Resolve paths in `args` against `cwd`, load the manifest and config, and
/// run the batch.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let span = info_span!("run", manifest = %args.manifest.display());
    let _guard = span.enter();

    let manifest_path = resolve_path(cwd, &args.manifest);
    let collection = load_manifest(&manifest_path)?;

    let mut resolved_args = args.clone();
    resolved_args.project = args.project.as_deref().map(|p| resolve_path(cwd, p));
    resolved_args.manifest = manifest_path;
    let config = discover_config(&resolved_args)?.unwrap_or_default();
    let options = resolve_options(&config, &resolved_args)?;
    debug!(?options, declared = collection.enums.len(), "resolved options");

    let report = process_batch(&collection, &options);
    let diagnostics = report.diagnostics();
    let output = render_artifacts(&report, args.pretty)?;

    Ok(RunResult {
        options,
        report,
        diagnostics,
        output,
    })
}

/// Successful enumerations as one JSON object keyed by type name, in request
/// order. Failed enumerations are omitted; they appear as diagnostics.
pub fn render_artifacts(report: &BatchReport, pretty: bool) -> Result<String> {
    let mut object = Map::new();
    for artifacts in report.artifacts() {
        let value = serde_json::to_value(artifacts)
            .with_context(|| format!("failed to serialize {}", artifacts.type_name()))?;
        object.insert(artifacts.type_name().to_string(), value);
    }
    let value = Value::Object(object);
    let text = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    text.context("failed to render generated artifacts")
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
