/// Output formatting shared by every command.
///
/// Two strategies exist, selected by `--format`:
///
/// - **Human** (default): aligned text tables on stdout and one line per
///   diagnostic on stderr. Severity tags and step actions are color-coded
///   unless `--no-color` is set, `NO_COLOR` is present, or the stream is not
///   a TTY.
/// - **JSON**: one pretty-printed document on stdout per invocation.
///
/// A **quiet** flag suppresses warnings and summaries on stderr; a
/// **verbose** flag adds timing lines.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use serde::Serialize;
use spantree_core::{Diagnostic, Severity, StepAction};

use crate::error::CliError;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted.
///
/// Colors are off when `no_color_flag` is set, when the `NO_COLOR`
/// environment variable is present with any value, or when stdout is not a
/// TTY.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Formatting switches derived from the global CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Builds a config from the raw flags; color detection also consults
    /// `NO_COLOR` and the stdout TTY state.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }

    /// Wraps `text` in `color` when colors are on.
    fn paint(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{ANSI_RESET}")
        } else {
            text.to_owned()
        }
    }

    /// Renders a heading line.
    pub fn heading(&self, text: &str) -> String {
        self.paint(text, ANSI_BOLD)
    }

    /// Renders a pass/fail marker such as `yes` or `no`.
    pub fn verdict(&self, ok: bool, yes: &str, no: &str) -> String {
        if ok {
            self.paint(yes, ANSI_GREEN)
        } else {
            self.paint(no, ANSI_RED)
        }
    }

    /// Renders a Kruskal step action.
    pub fn action(&self, action: StepAction) -> String {
        match action {
            StepAction::Added => self.paint("added", ANSI_GREEN),
            StepAction::Skipped => self.paint("skipped", ANSI_YELLOW),
        }
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Writes `rows` under `headers` with every column left-aligned to its
/// widest cell. Widths ignore ANSI escapes so colored cells still line up.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_table<W: Write>(
    writer: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = visible_width(cell);
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_owned()).collect();
    write_row(writer, &header_cells, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(writer, &rule, &widths)?;
    for row in rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, cells: &[String], widths: &[usize]) -> std::io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let width = widths.get(i).copied().unwrap_or(0);
        let pad = width.saturating_sub(visible_width(cell));
        if i + 1 < cells.len() {
            line.extend(std::iter::repeat_n(' ', pad));
        }
    }
    writeln!(writer, "{line}")
}

/// Counts characters outside ANSI `ESC [ ... m` sequences.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Writes a single [`Diagnostic`] in human-readable form.
///
/// Format: `[E] dangling-edge  edge #1: endpoint "Q" is not a declared vertex`
///
/// In quiet mode warnings are suppressed.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic_human<W: Write>(
    writer: &mut W,
    diag: &Diagnostic,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let (tag, color) = match diag.severity {
        Severity::Error => ("[E]", ANSI_RED),
        Severity::Warning if config.quiet => return Ok(()),
        Severity::Warning => ("[W]", ANSI_YELLOW),
    };
    writeln!(
        writer,
        "{} {}  {}: {}",
        config.paint(tag, color),
        diag.check,
        diag.location,
        diag.message
    )
}

/// Writes the `N errors, M warnings` summary line; suppressed when quiet.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{errors} {}, {warnings} {}",
        pluralize(errors, "error", "errors"),
        pluralize(warnings, "warning", "warnings"),
    )
}

/// Writes `label in Nms` when verbose.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Writes `value` as one pretty-printed JSON document followed by a newline.
///
/// # Errors
///
/// [`CliError::InternalError`] if serialization fails, or
/// [`CliError::IoError`] if writing to `writer` fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CliError::InternalError {
        detail: format!("JSON serialization failed: {e}"),
    })?;
    writeln!(writer, "{json}").map_err(stdout_error)
}

/// Maps a failed write on stdout.
pub fn stdout_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        input: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

/// Maps a failed write on stderr.
pub fn stderr_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        input: "stderr".to_owned(),
        detail: e.to_string(),
    }
}

/// Returns the singular or plural form of `word` depending on `count`.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
