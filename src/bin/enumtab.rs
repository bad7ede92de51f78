#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use enumtab::cli::args::CliArgs;
use enumtab::cli::{driver, reporter::Reporter};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FATAL_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if ENUMTAB_LOG or RUST_LOG is set.
    enumtab::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let color = args.color.enabled(std::io::stderr().is_terminal());
    colored::control::set_override(color);

    let result = driver::run(&args, &cwd)?;

    let reporter = Reporter::new(color);
    if !result.diagnostics.is_empty() {
        eprintln!("{}", reporter.render(&result.diagnostics));
    }
    if let Some(summary) = reporter.summary(&result.diagnostics) {
        eprintln!("\n{summary}");
    }
    println!("{}", result.output);

    let code = if result.has_fatal() {
        EXIT_FATAL_DIAGNOSTICS
    } else {
        EXIT_SUCCESS
    };
    std::process::exit(code);
}
