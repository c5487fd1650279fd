//! Implementation of `spantree prim <file>`.
//!
//! Grows a tree with Prim's algorithm and writes the vertex each step
//! brings in. `--start <vertex>` picks the seed; the default is the first
//! vertex in the file.
//!
//! Output (human mode): a step table, then the total and how many vertices
//! the tree reached.
//! Output (JSON mode): the serialized `PrimResult`.
//!
//! Exit codes: 0 = success, 1 = unknown start vertex, 2 = read/parse/build
//! failure.
use std::io::Write;

use spantree_core::{PrimResult, QueryError, SpanGraph, prim_trace, prim_trace_from};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatterConfig, stdout_error, write_json, write_table};

/// Runs the `prim` command.
///
/// # Errors
///
/// - [`CliError::VertexNotFound`] if `start` names no vertex.
/// - [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    graph: &SpanGraph,
    start: Option<&str>,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let result = match start {
        Some(seed) => prim_trace_from(graph, seed).map_err(query_error_to_cli)?,
        None => prim_trace(graph),
    };

    if !result.spans(graph.vertex_count()) {
        log::warn!(
            "graph is disconnected: the tree reached {} of {} vertices",
            result.reached_count(),
            graph.vertex_count()
        );
    }

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
    result: &PrimResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let Some(seed) = &result.seed else {
        return writeln!(w, "Graph has no vertices.");
    };
    writeln!(w, "{}", config.heading(&format!("Prim trace from {seed}")))?;

    if result.prim_trace.is_empty() {
        writeln!(w, "(no edges leave {seed})")?;
    } else {
        let rows: Vec<Vec<String>> = result
            .prim_trace
            .iter()
            .map(|s| {
                let reached: Vec<&str> = s.reached.iter().map(|v| &**v).collect();
                vec![
                    s.step.to_string(),
                    s.edge.to_string(),
                    s.new_vertex.to_string(),
                    s.total_weight.to_string(),
                    reached.join(", "),
                ]
            })
            .collect();
        write_table(w, &["#", "edge", "new vertex", "total", "reached"], &rows)?;
    }

    writeln!(w)?;
    writeln!(w, "Total weight: {}", result.total_weight)?;
    writeln!(
        w,
        "Reached {} of {} vertices: {}",
        result.reached_count(),
        graph.vertex_count(),
        config.verdict(
            result.spans(graph.vertex_count()),
            "spanning tree",
            "partial tree (graph is disconnected)"
        )
    )
}

fn query_error_to_cli(e: QueryError) -> CliError {
    match e {
        QueryError::VertexNotFound(id) => CliError::VertexNotFound { vertex_id: id },
    }
}
