//! Implementation of `spantree score <file> --edge FROM,TO ...`.
//!
//! Checks a hand-picked edge selection against the minimum spanning tree.
//! Each `--edge` names an unordered vertex pair; when parallel edges join
//! the pair, repeated picks take them in file order.
//!
//! Output (human mode): the verdict with weights and counts.
//! Output (JSON mode): the serialized `Verdict`.
//!
//! Exit codes: 0 = optimal selection, 1 = non-optimal or unknown edge,
//! 2 = read/parse/build failure.
use std::io::Write;

use spantree_core::{Edge, KruskalConfig, SpanGraph, Verdict, kruskal, score_selection};

use crate::error::CliError;
use crate::format::{FormatterConfig, stdout_error, write_json};
use crate::{EdgeArg, OutputFormat};

/// Runs the `score` command.
///
/// # Errors
///
/// - [`CliError::InvalidSelection`] if a pair is not joined by any edge.
/// - [`CliError::NotOptimal`] after printing a non-optimal verdict.
/// - [`CliError::IoError`] if stdout cannot be written.
pub fn run(
    graph: &SpanGraph,
    picks: &[EdgeArg],
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let selected = resolve_picks(graph, picks)?;
    let mst = kruskal(graph, &KruskalConfig::default());
    let verdict =
        score_selection(graph, &selected, &mst).map_err(|e| CliError::InvalidSelection {
            detail: e.to_string(),
        })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            print_human(&mut out, &selected, &verdict, config).map_err(stdout_error)?;
        }
        OutputFormat::Json => write_json(&mut out, &verdict)?,
    }

    if verdict.is_optimal {
        Ok(())
    } else {
        Err(CliError::NotOptimal)
    }
}

/// Maps each `FROM,TO` pick onto a graph edge.
///
/// A pair joined by several edges hands out the next unused one; once they
/// are all used the first is repeated so scoring reports the duplicate.
fn resolve_picks(graph: &SpanGraph, picks: &[EdgeArg]) -> Result<Vec<Edge>, CliError> {
    let mut used = vec![false; graph.edge_count()];
    let mut selected = Vec::with_capacity(picks.len());
    for pick in picks {
        let mut candidates = graph
            .edges()
            .filter(|e| e.edge.connects(&pick.from, &pick.to))
            .peekable();
        let Some(first) = candidates.peek().copied() else {
            return Err(CliError::InvalidSelection {
                detail: format!("no edge joins {:?} and {:?}", pick.from, pick.to),
            });
        };
        let chosen = candidates.find(|e| !used[e.index]).unwrap_or(first);
        used[chosen.index] = true;
        selected.push(chosen.edge.clone());
    }
    Ok(selected)
}

fn print_human<W: Write>(
    w: &mut W,
    selected: &[Edge],
    v: &Verdict,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let names: Vec<String> = selected.iter().map(ToString::to_string).collect();
    writeln!(
        w,
        "Selected:       {}",
        if names.is_empty() {
            "(none)".to_owned()
        } else {
            names.join(", ")
        }
    )?;
    writeln!(
        w,
        "Edges:          {} of {} required",
        v.selected_count, v.required_count
    )?;
    writeln!(w, "Your weight:    {}", v.player_weight)?;
    writeln!(w, "Optimal weight: {}", v.optimal_weight)?;
    writeln!(
        w,
        "Forms a cycle:  {}",
        config.verdict(!v.forms_cycle, "no", "yes")
    )?;
    writeln!(
        w,
        "Spans all:      {}",
        config.verdict(v.spans_all, "yes", "no")
    )?;
    writeln!(w)?;
    let summary = config.verdict(
        v.is_optimal,
        "Optimal: this is a minimum spanning tree.",
        "Not optimal.",
    );
    if v.is_optimal {
        writeln!(w, "{summary}")
    } else if v.weight_difference < 0.0 {
        let short = v.optimal_weight.saturating_sub(v.player_weight);
        writeln!(w, "{summary} ({short} under the optimum)")
    } else {
        writeln!(w, "{summary} ({} over the optimum)", v.excess_weight)
    }
}
