use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use enumtab_analysis::NameTransform;

/// CLI arguments for the enumtab binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "enumtab",
    version,
    about = "Generate name tables and lookup accessors for integer enumerations"
)]
pub struct CliArgs {
    /// Collector manifest (JSON) describing the declared enumerations.
    pub manifest: PathBuf,

    /// Path to enumtab.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    // ==================== Selection ====================
    /// Enumeration types to process; all declared types when omitted.
    #[arg(short = 't', long = "type", value_delimiter = ',')]
    pub types: Vec<String>,

    // ==================== Naming ====================
    /// Strip this literal prefix from each constant identifier.
    #[arg(long = "trimprefix", alias = "trim-prefix")]
    pub trim_prefix: Option<String>,

    /// Prepend this prefix to each identifier-derived name.
    #[arg(long = "addprefix", alias = "add-prefix")]
    pub add_prefix: Option<String>,

    /// Reshape identifiers (snake, kebab-upper, camel, title, ...).
    #[arg(long)]
    pub transform: Option<NameTransform>,

    /// Use a constant's trailing line comment, when present, as its name.
    #[arg(long = "linecomment", alias = "line-comment")]
    pub line_comment: bool,

    // ==================== Adapters ====================
    /// Generate a document (JSON string) adapter.
    #[arg(long)]
    pub json: bool,

    /// Generate a tagged-document (YAML scalar) adapter.
    #[arg(long)]
    pub yaml: bool,

    /// Generate a storage-column (SQL) adapter.
    #[arg(long)]
    pub sql: bool,

    /// Generate a plain-text adapter.
    #[arg(long)]
    pub text: bool,

    // ==================== Output ====================
    /// Pretty-print the generated JSON.
    #[arg(long)]
    pub pretty: bool,

    /// When to color diagnostics on stderr.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
