//! Implementation of `spantree compare <file>`.
//!
//! Runs Kruskal's and Prim's algorithms with default settings and reports
//! whether they agree. Disagreement is reported, not treated as failure.
//!
//! Output (human mode): a two-column table and three yes/no lines.
//! Output (JSON mode): the serialized `Comparison`.
//!
//! Exit codes: 0 = success, 2 = read/parse/build failure.
use std::io::Write;

use spantree_core::{Comparison, Edge, SpanGraph, compare};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatterConfig, stdout_error, write_json, write_table};

/// Runs the `compare` command.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    graph: &SpanGraph,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let comparison = compare(graph);
    log::debug!(
        "compare: kruskal {} vs prim {}",
        comparison.kruskal_total,
        comparison.prim_total
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &comparison, config).map_err(stdout_error),
        OutputFormat::Json => write_json(&mut out, &comparison),
    }
}

fn print_human<W: Write>(
    w: &mut W,
    c: &Comparison,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let rows = vec![
        vec![
            "total weight".to_owned(),
            c.kruskal_total.to_string(),
            c.prim_total.to_string(),
        ],
        vec![
            "edges".to_owned(),
            c.kruskal_edges.len().to_string(),
            c.prim_edges.len().to_string(),
        ],
        vec![
            "chosen".to_owned(),
            edge_list(&c.kruskal_edges),
            edge_list(&c.prim_edges),
        ],
    ];
    write_table(w, &["", "kruskal", "prim"], &rows)?;
    writeln!(w)?;
    writeln!(w, "Totals agree:  {}", config.verdict(c.totals_agree, "yes", "no"))?;
    writeln!(w, "Same edge set: {}", config.verdict(c.same_edge_set, "yes", "no"))?;
    writeln!(
        w,
        "Spanning:      {}",
        config.verdict(c.spanning, "yes", "no (Prim covers only the first vertex's component)")
    )
}

fn edge_list(edges: &[Edge]) -> String {
    let names: Vec<String> = edges.iter().map(ToString::to_string).collect();
    names.join(", ")
}
