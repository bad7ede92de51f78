//! Tracing setup for the `enumtab` binary.
//!
//! `ENUMTAB_LOG_FORMAT` selects the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented per-enumeration spans via `tracing-tree`
//! - `json`: one JSON object per span or event
//!
//! ```bash
//! ENUMTAB_LOG=debug ENUMTAB_LOG_FORMAT=tree enumtab enums.json
//! ENUMTAB_LOG="enumtab_analysis::normalize=trace" enumtab enums.json
//! ```
//!
//! Nothing is installed unless `ENUMTAB_LOG` or `RUST_LOG` is set. All output
//! goes to stderr; stdout carries only the generated artifacts.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "ENUMTAB_LOG";
pub const LOG_FORMAT_ENV: &str = "ENUMTAB_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown or empty values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// `ENUMTAB_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

pub fn init_tracing() {
    let has_own_log = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
