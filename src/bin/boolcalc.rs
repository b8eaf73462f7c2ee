//! Boolean Calculator - Command Line Interface
//!
//! Evaluates one expression (argument or stdin) or a batch file and prints a
//! text report or JSON.

use boolean_calculator::batch::{read_batch_file, BatchEntry};
use boolean_calculator::{evaluate_expression_with, CalculatorConfig, Evaluation, Failure};
use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

const RULE_HEAVY: &str = "═══════════════════════════════════════════════";
const RULE_LIGHT: &str = "───────────────────────────────────────────────";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON payload
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "boolcalc")]
#[command(about = "Minimal SOP/POS, canonical forms and truth tables for boolean expressions", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to evaluate (read from stdin if omitted)
    #[arg(value_name = "EXPR", conflicts_with = "file")]
    expression: Option<String>,

    /// Evaluate every line of FILE (`expr` or `label = expr`, `#` comments)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    format: Format,

    /// Maximum number of distinct variables (at most 5)
    #[arg(long = "max-variables", default_value_t = boolean_calculator::MAX_VARIABLES)]
    max_variables: usize,

    /// Maximum nesting depth of the expression
    #[arg(long = "max-depth", default_value_t = boolean_calculator::expression::DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    // A second logger cannot be installed; that is harmless here
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = CalculatorConfig {
        max_variables: args.max_variables,
        max_nesting_depth: args.max_depth,
    };
    if args.max_variables > boolean_calculator::MAX_VARIABLES {
        log::warn!(
            "--max-variables {} exceeds the supported bound, using {}",
            args.max_variables,
            config.variable_limit()
        );
    }

    let (output, success) = match &args.file {
        Some(path) => match read_batch_file(path, &config) {
            Ok(entries) => {
                log::info!("read {} expressions from {}", entries.len(), path.display());
                let success = entries.iter().all(|e| e.outcome.is_ok());
                (render_batch(&entries, args.format), success)
            }
            Err(e) => {
                eprintln!("Error reading batch file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let text = match &args.expression {
                Some(text) => text.clone(),
                None => read_stdin(),
            };
            match evaluate_expression_with(&text, &config) {
                Ok(evaluation) => (render_evaluation(&evaluation, args.format), true),
                Err(e) => (render_failure(&Failure::from(&e), args.format), false),
            }
        }
    };

    match &args.output_file {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing output file: {}", e);
                process::exit(1);
            }
            log::info!("wrote output to {}", path.display());
        }
        None => print!("{}", output),
    }

    if !success {
        process::exit(1);
    }
}

fn read_stdin() -> String {
    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        eprintln!("Error reading stdin: {}", e);
        process::exit(1);
    }
    text.trim_end_matches(|c| c == '\r' || c == '\n').to_string()
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json + "\n",
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn render_evaluation(evaluation: &Evaluation, format: Format) -> String {
    match format {
        Format::Json => to_json(evaluation),
        Format::Text => Report(evaluation).to_string(),
    }
}

fn render_failure(failure: &Failure, format: Format) -> String {
    match format {
        Format::Json => to_json(failure),
        Format::Text => format!("{:?}: {}\n", failure.kind, failure.message),
    }
}

fn render_batch(entries: &[BatchEntry], format: Format) -> String {
    match format {
        Format::Json => to_json(&entries),
        Format::Text => entries
            .iter()
            .map(|entry| {
                let body = match &entry.outcome {
                    Ok(evaluation) => Report(evaluation).to_string(),
                    Err(e) => render_failure(&Failure::from(e), format),
                };
                format!("[line {}] {}\n{}\n", entry.line, entry.name(), body)
            })
            .collect(),
    }
}

/// Human-readable report of one evaluation
struct Report<'a>(&'a Evaluation);

impl Report<'_> {
    fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f, "{}", RULE_LIGHT)?;
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", RULE_LIGHT)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let evaluation = self.0;
        let variables: Vec<&str> = evaluation.variables.iter().map(|v| v.as_ref()).collect();

        writeln!(f, "{}", RULE_HEAVY)?;
        writeln!(f, "   BOOLEAN ALGEBRA CALCULATOR - RESULTS")?;
        writeln!(f, "{}", RULE_HEAVY)?;
        writeln!(f)?;
        writeln!(f, "Expression: {}", evaluation.expression)?;
        writeln!(f, "Normalized: {}", evaluation.normalized_infix)?;
        writeln!(f, "Variables: {}", variables.join(", "))?;
        writeln!(f)?;

        Self::section(f, "SIMPLIFIED FORMS")?;
        writeln!(f, "Minimal SOP: {}", evaluation.minimal_sop)?;
        writeln!(f, "Minimal POS: {}", evaluation.minimal_pos)?;
        writeln!(f, "Canonical DNF: {}", evaluation.canonical_dnf)?;
        writeln!(f, "Canonical CNF: {}", evaluation.canonical_cnf)?;
        writeln!(f)?;

        Self::section(f, "PRIME IMPLICANT CHART")?;
        for row in &evaluation.sop.chart {
            let covers: Vec<String> = row.covers.iter().map(|m| m.to_string()).collect();
            writeln!(f, "{:<24} m({})", row.term, covers.join(", "))?;
        }
        writeln!(f)?;

        Self::section(f, "SIMPLIFICATION STEPS")?;
        for (idx, step) in evaluation.derivation_steps.iter().enumerate() {
            writeln!(f, "{}. {}", idx + 1, step)?;
        }
        writeln!(f)?;

        Self::section(f, "TRUTH TABLE")?;
        let header = if variables.is_empty() {
            "F".to_string()
        } else {
            format!("{} | F", variables.join(" | "))
        };
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "─".repeat(header.chars().count()))?;
        for row in &evaluation.truth_table.rows {
            let mut cells: Vec<&str> = row.bits().map(|b| if b { "1" } else { "0" }).collect();
            cells.push(if row.output { "1" } else { "0" });
            writeln!(f, "{}", cells.join(" | "))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", RULE_HEAVY)
    }
}
