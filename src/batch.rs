//! Evaluating many expressions read line by line
//!
//! Each non-blank line that does not start with `#` is either a bare
//! expression or `label = expression`. Every line is evaluated on its own; a
//! failing line does not stop the ones after it.
//!
//! ```text
//! # majority and parity
//! maj = A B + A C + B C
//! A ^ B ^ C
//! ```

use crate::calculator::{evaluate_expression_with, CalculatorConfig, Evaluation};
use crate::error::{CalculatorError, Failure};
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One evaluated line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the input
    pub line: usize,
    /// Text before `=`, if the line had one
    pub label: Option<String>,
    /// The expression text, trimmed
    pub expression: String,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<Evaluation, CalculatorError>,
}

impl BatchEntry {
    /// Label if present, otherwise the expression text
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.expression)
    }
}

fn serialize_outcome<S: Serializer>(
    outcome: &Result<Evaluation, CalculatorError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    enum Outcome<'a> {
        #[serde(rename = "result")]
        Success(&'a Evaluation),
        #[serde(rename = "error")]
        Failure(Failure),
    }

    match outcome {
        Ok(evaluation) => Outcome::Success(evaluation).serialize(serializer),
        Err(err) => Outcome::Failure(Failure::from(err)).serialize(serializer),
    }
}

/// Split a line into an optional label and the expression text
fn split_label(line: &str) -> (Option<String>, &str) {
    match line.split_once('=') {
        Some((label, expression)) => {
            let label = label.trim();
            let label = (!label.is_empty()).then(|| label.to_string());
            (label, expression.trim())
        }
        None => (None, line),
    }
}

/// Evaluate every expression line of `reader`
///
/// Only I/O failures are returned as errors; evaluation failures are recorded
/// per entry.
///
/// # Examples
///
/// ```
/// use boolean_calculator::{batch, CalculatorConfig};
/// use std::io::Cursor;
///
/// let input = "# comment\nf = A B\n\nA +\n";
/// let entries = batch::read_batch(Cursor::new(input), &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].line, 2);
/// assert_eq!(entries[0].label.as_deref(), Some("f"));
/// assert!(entries[0].outcome.is_ok());
/// assert_eq!(entries[1].line, 4);
/// assert!(entries[1].outcome.is_err());
/// ```
pub fn read_batch<R: BufRead>(reader: R, config: &CalculatorConfig) -> io::Result<Vec<BatchEntry>> {
    let mut entries = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (label, expression) = split_label(line);
        let outcome = evaluate_expression_with(expression, config);
        if let Err(err) = &outcome {
            log::debug!("line {}: {}", line_num + 1, err);
        }
        entries.push(BatchEntry {
            line: line_num + 1,
            label,
            expression: expression.to_string(),
            outcome,
        });
    }

    log::debug!("evaluated {} batch entries", entries.len());
    Ok(entries)
}

/// Evaluate every expression line of the file at `path`
pub fn read_batch_file<P: AsRef<Path>>(path: P, config: &CalculatorConfig) -> io::Result<Vec<BatchEntry>> {
    let file = File::open(path)?;
    read_batch(BufReader::new(file), config)
}
