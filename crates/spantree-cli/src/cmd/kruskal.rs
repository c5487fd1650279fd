//! Implementation of `spantree kruskal <file>`.
//!
//! Runs Kruskal's algorithm and writes every accept/skip decision.
//!
//! Flags:
//! - `--stop-when-spanning`: stop once `n - 1` edges are accepted. The trace
//!   then ends at the accepting step instead of listing every edge.
//!
//! Output (human mode): a step table followed by the chosen edges and total.
//! Output (JSON mode): the serialized `MstResult`.
//!
//! Exit codes: 0 = success, 2 = read/parse/build failure.
use std::io::Write;

use spantree_core::{KruskalConfig, MstResult, ScanPolicy, SpanGraph, kruskal};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatterConfig, pluralize, stdout_error, write_json, write_table};

/// Runs the `kruskal` command.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    graph: &SpanGraph,
    stop_when_spanning: bool,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let scan = if stop_when_spanning {
        ScanPolicy::StopWhenSpanning
    } else {
        ScanPolicy::Exhaustive
    };
    if stop_when_spanning && !graph.is_connected() {
        log::warn!("--stop-when-spanning has no effect on a disconnected graph");
    }

    let result = kruskal(graph, &KruskalConfig { scan });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, graph, &result, config).map_err(stdout_error),
        OutputFormat::Json => write_json(&mut out, &result),
    }
}

fn print_human<W: Write>(
    w: &mut W,
    graph: &SpanGraph,
    result: &MstResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    writeln!(
        w,
        "{}",
        config.heading(&format!(
            "Kruskal trace: {} {}, {} {}",
            graph.vertex_count(),
            pluralize(graph.vertex_count(), "vertex", "vertices"),
            graph.edge_count(),
            pluralize(graph.edge_count(), "edge", "edges"),
        ))
    )?;

    if result.kruskal_trace.is_empty() {
        writeln!(w, "(no edges)")?;
    } else {
        let rows: Vec<Vec<String>> = result
            .kruskal_trace
            .iter()
            .map(|s| {
                vec![
                    s.step.to_string(),
                    s.edge.to_string(),
                    config.action(s.action),
                    s.total_weight.to_string(),
                    s.reason.clone(),
                ]
            })
            .collect();
        write_table(w, &["#", "edge", "action", "total", "reason"], &rows)?;
    }

    writeln!(w)?;
    let chosen: Vec<String> = result.mst_edges.iter().map(ToString::to_string).collect();
    if result.is_spanning_tree() || graph.is_empty() {
        writeln!(w, "Minimum spanning tree: {}", join_or_none(&chosen))?;
    } else {
        writeln!(
            w,
            "Minimum spanning forest ({} trees): {}",
            result.component_count,
            join_or_none(&chosen)
        )?;
    }
    writeln!(w, "Total weight: {}", result.total_weight)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_owned()
    } else {
        items.join(", ")
    }
}
