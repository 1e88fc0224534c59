//! Colorized console reporter.
//!
//! Mirrors the reporting conventions shared by the packspec runners: a bold
//! target banner, bold section comments, one symbol-prefixed line per
//! feature, and a colored per-spec summary.

use colored::Colorize;
use packspec_core::Binding;
use packspec_parser::Target;
use packspec_runner::{Reporter, SpecOutcome};

const PASS: &str = "\u{2714}"; // heavy check mark
const FAIL: &str = "\u{2716}"; // heavy multiplication x
const SKIP: &str = "\u{2796}"; // heavy minus sign

pub struct ConsoleReporter {
    banner: String,
}

impl ConsoleReporter {
    pub fn new(target: &Target) -> Self {
        let name = match target.id() {
            "rs" => "Rust".to_string(),
            other => other.to_string(),
        };
        Self { banner: name }
    }
}

impl Reporter for ConsoleReporter {
    fn run_started(&mut self) {
        println!("\n {}\n", format!("#  {}", self.banner).bold());
    }

    fn spec_started(&mut self, _package: &str) {
        println!("{}{}{}", SKIP, SKIP, SKIP);
    }

    fn comment(&mut self, text: &str) {
        println!("\n #  {}\n", text.bold());
    }

    fn skipped(&mut self, text: &str) {
        println!(" {}  {}", SKIP.yellow(), text);
    }

    fn passed(&mut self, text: &str) {
        println!(" {}  {}", PASS.green(), text);
    }

    fn failed(
        &mut self,
        text: &str,
        actual: &Binding,
        expected: Option<&Binding>,
        fault: Option<&str>,
    ) {
        println!(" {}  {} # {}", FAIL.red(), text, actual);
        match fault {
            Some(message) => {
                println!("{}", format!("Exception: {}", message).red().bold());
            }
            None => {
                let expected_text = expected
                    .map(|binding| binding.to_string())
                    .unwrap_or_else(|| "no fault".to_string());
                println!(
                    "{}",
                    format!("Assertion: {} != {}", actual, expected_text)
                        .red()
                        .bold()
                );
            }
        }
    }

    fn aborted(&mut self, scope_names: &[String], _fault: Option<&str>) {
        println!("---");
        println!("Scope (current execution scope):");
        println!("[{}]", scope_names.join(", "));
    }

    fn spec_finished(&mut self, package: &str, outcome: &SpecOutcome) {
        let summary = format!(
            "{}: {}/{}",
            package, outcome.tests_passed, outcome.tests_count
        );
        if outcome.success {
            println!("\n\n {}  {}\n", PASS.green().bold(), summary.green().bold());
        } else {
            println!("\n\n {}  {}\n", FAIL.red().bold(), summary.red().bold());
        }
    }
}
