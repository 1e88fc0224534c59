//! packspec - run conformance spec documents against a host registry.
//!
//! Loads spec documents (a file, a directory of `*.yml`, or the
//! conventional `packspec.yml` / `packspec/` locations), executes them
//! against the Rust target, and maps the aggregate verdict to the exit
//! code.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use packspec_core::Registry;
use packspec_parser::{parse_document, Target};
use packspec_runner::{run_specs, RunError, Spec};

mod console;
mod discover;

use console::ConsoleReporter;

#[derive(Debug, Parser)]
#[command(name = "packspec", about = "Cross-implementation conformance spec runner")]
struct Args {
    /// Spec file or directory of spec files.
    path: Option<PathBuf>,

    /// Stop the whole run at the first failed feature.
    #[arg(short = 'x', long)]
    exit_first: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("packspec: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let target = Target::default();
    let registry = Registry::default();

    let mut specs = Vec::new();
    for path in discover::discover(args.path.as_deref())? {
        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match parse_document(&source, &target) {
            Ok(Some(document)) => specs.push(Spec::new(document, &registry)),
            // Not a spec for this target.
            Ok(None) => {}
            Err(error) => eprintln!("packspec: skipping {}: {}", path.display(), error),
        }
    }

    let mut reporter = ConsoleReporter::new(&target);
    match run_specs(&mut specs, &mut reporter, args.exit_first) {
        Ok(success) => Ok(success),
        Err(RunError::Assertion { .. }) => Ok(false),
        Err(RunError::Fault { message }) => Err(anyhow::anyhow!(message)),
    }
}
