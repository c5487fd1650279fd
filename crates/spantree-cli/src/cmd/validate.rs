//! Implementation of `spantree validate <file>`.
//!
//! Runs every structural check over a parsed graph file without stopping at
//! the first problem.
//!
//! Errors: duplicate vertex id, edge endpoint naming no vertex.
//! Warnings: self-loop, parallel edge, disconnected graph.
//!
//! Output (human mode): one line per finding plus a summary, on stderr.
//! Output (JSON mode): `{"source", "diagnostics", "errors", "warnings"}` on
//! stdout.
//!
//! Exit codes: 0 = no errors (warnings allowed), 1 = at least one error,
//! 2 = the file could not be read or parsed.
use serde::Serialize;
use spantree_core::{Diagnostic, GraphFile, validate};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{
    FormatterConfig, stderr_error, write_diagnostic_human, write_json, write_summary_human,
};

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    diagnostics: &'a [Diagnostic],
    errors: usize,
    warnings: usize,
}

/// Runs the `validate` command over an already parsed file.
///
/// # Errors
///
/// - [`CliError::ValidationErrors`] when any error-level finding exists.
/// - [`CliError::IoError`] if output cannot be written.
pub fn run(
    file: &GraphFile,
    source: &str,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let result = validate(file);
    let errors = result.errors().count();
    let warnings = result.warnings().count();

    match format {
        OutputFormat::Human => {
            let stderr = std::io::stderr();
            let mut err_out = stderr.lock();
            for diag in &result.diagnostics {
                write_diagnostic_human(&mut err_out, diag, config).map_err(stderr_error)?;
            }
            write_summary_human(&mut err_out, errors, warnings, config).map_err(stderr_error)?;
        }
        OutputFormat::Json => {
            let report = Report {
                source,
                diagnostics: &result.diagnostics,
                errors,
                warnings,
            };
            write_json(&mut std::io::stdout().lock(), &report)?;
        }
    }

    if result.has_errors() {
        Err(CliError::ValidationErrors)
    } else {
        Ok(())
    }
}
