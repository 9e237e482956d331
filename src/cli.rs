//! Command-line entry point: a thin dispatch shim over the rule registry.

use crate::ir::load_service;
use crate::rule::{RuleOptions, Severity, Violation};
use crate::rules;
use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "svclint")]
#[command(about = "Contract linter for parsed API service descriptions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one or more rules against a service IR document
    Check {
        /// Path to the service IR (YAML or JSON)
        #[arg(short, long)]
        service: PathBuf,

        /// Rule name; repeat to run several rules
        #[arg(short, long = "rule", required = true)]
        rules: Vec<String>,

        /// Rule options as a JSON object
        #[arg(short, long)]
        options: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List registered rule names
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse arguments, dispatch, and print results. Returns the number of
/// error-severity violations so `main` can set the exit code.
pub fn run_cli() -> anyhow::Result<usize> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Rules => {
            for name in rules::names() {
                println!("{name}");
            }
            Ok(0)
        }
        Commands::Check {
            service,
            rules: rule_names,
            options,
            format,
        } => {
            let service = load_service(&service)?;
            let options = match options.as_deref() {
                Some(raw) => RuleOptions::from_json(raw)?,
                None => RuleOptions::default(),
            };

            let mut violations = Vec::new();
            for name in &rule_names {
                // An unknown rule name is a configuration error, not an
                // empty result.
                let Some(rule) = rules::by_name(name) else {
                    bail!("unknown rule: {name}");
                };
                debug!(rule = %name, "running rule");
                violations.extend(rule(&service, &options));
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&violations)?),
                OutputFormat::Text => print_violations(&violations),
            }

            Ok(violations
                .iter()
                .filter(|v| v.severity == Severity::Error)
                .count())
        }
    }
}

/// Print violations grouped by severity.
pub fn print_violations(violations: &[Violation]) {
    if violations.is_empty() {
        println!("✅ No violations found!");
        return;
    }

    let count = |severity: Severity| violations.iter().filter(|v| v.severity == severity).count();
    println!(
        "{} error(s), {} warning(s), {} info(s)",
        count(Severity::Error),
        count(Severity::Warning),
        count(Severity::Info)
    );

    for violation in violations {
        println!(
            "[{}] {}:{}:{} {} {}",
            violation.severity,
            violation.source_path,
            violation.range.start.line,
            violation.range.start.column,
            violation.code,
            violation.message
        );
    }
}
