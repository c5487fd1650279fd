/// Kruskal's algorithm with a full decision trace.
///
/// Edges are stably sorted by ascending weight (equal weights keep file
/// order), then offered one at a time to a fresh [`UnionFind`] over the
/// vertex ordinals. An edge whose endpoints are already connected would close
/// a cycle and is skipped; every other edge joins two trees and is added.
///
/// Each call allocates its own union-find and trace, so results never share
/// state across invocations.
///
/// # Scan policy
///
/// [`ScanPolicy::Exhaustive`] (the default) visits every edge, so the trace has
/// one entry per input edge and a disconnected graph yields a minimum spanning
/// forest. [`ScanPolicy::StopWhenSpanning`] stops as soon as `n - 1` edges are
/// accepted; the trace then covers only the visited prefix of the sorted
/// order. The shortcut never changes which edges are accepted.
use serde::{Deserialize, Serialize};

use crate::file::GraphFile;
use crate::graph::{GraphBuildError, SpanGraph, build_graph};
use crate::newtypes::Weight;
use crate::structures::Edge;
use crate::union_find::UnionFind;

/// Reason attached to an accepted edge.
pub const REASON_ADDED: &str = "joins two separate components";
/// Reason attached to a rejected edge.
pub const REASON_SKIPPED: &str = "would form a cycle";

/// How far the sorted edge scan runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Visit every edge.
    #[default]
    Exhaustive,
    /// Stop once `vertex_count - 1` edges have been accepted.
    StopWhenSpanning,
}

/// Configuration for [`kruskal`].
#[derive(Debug, Clone, Default)]
pub struct KruskalConfig {
    /// Scan policy. Default: [`ScanPolicy::Exhaustive`].
    pub scan: ScanPolicy,
}

/// Decision taken for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// The edge joined two components and is part of the result.
    Added,
    /// The edge's endpoints were already connected.
    Skipped,
}

/// One entry of the Kruskal trace, in sorted visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KruskalStep {
    /// 1-based position in the trace.
    pub step: usize,
    /// The edge considered.
    pub edge: Edge,
    /// Whether the edge was added or skipped.
    pub action: StepAction,
    /// Short explanation for display.
    pub reason: String,
    /// Sum of accepted weights after this step.
    pub total_weight: Weight,
}

/// Minimum spanning tree (or forest) plus the trace that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges in the order they were accepted.
    pub mst_edges: Vec<Edge>,
    /// Sum of `mst_edges[*].weight`.
    pub total_weight: Weight,
    /// Number of trees in the result; `1` for a connected non-empty graph.
    pub component_count: usize,
    /// One entry per visited edge.
    pub kruskal_trace: Vec<KruskalStep>,
}

impl MstResult {
    /// Returns `true` if the result is a single tree covering every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Iterates over the trace entries that added an edge.
    pub fn added_steps(&self) -> impl Iterator<Item = &KruskalStep> {
        self.kruskal_trace
            .iter()
            .filter(|s| s.action == StepAction::Added)
    }
}

/// Runs Kruskal's algorithm over `graph`.
///
/// Never fails: empty, edgeless and disconnected graphs produce a valid
/// (possibly empty) forest.
pub fn kruskal(graph: &SpanGraph, config: &KruskalConfig) -> MstResult {
    let n = graph.vertex_count();
    let spanning_size = n.saturating_sub(1);

    let mut sorted: Vec<_> = graph.edges().collect();
    // `sort_by_key` is stable: equal weights keep file order.
    sorted.sort_by_key(|e| e.edge.weight);

    let mut uf = UnionFind::new(n);
    let mut mst_edges: Vec<Edge> = Vec::with_capacity(spanning_size);
    let mut kruskal_trace: Vec<KruskalStep> = Vec::with_capacity(sorted.len());
    let mut total_weight = Weight::ZERO;

    for candidate in sorted {
        if config.scan == ScanPolicy::StopWhenSpanning && mst_edges.len() == spanning_size {
            log::debug!("kruskal: spanning tree complete, stopping scan early");
            break;
        }

        let (action, reason) = if uf.union(candidate.a, candidate.b) {
            total_weight += candidate.edge.weight;
            mst_edges.push(candidate.edge.clone());
            (StepAction::Added, REASON_ADDED)
        } else {
            (StepAction::Skipped, REASON_SKIPPED)
        };

        log::debug!(
            "kruskal step {}: {} {:?}, total {}",
            kruskal_trace.len() + 1,
            candidate.edge,
            action,
            total_weight
        );

        kruskal_trace.push(KruskalStep {
            step: kruskal_trace.len() + 1,
            edge: candidate.edge.clone(),
            action,
            reason: reason.to_owned(),
            total_weight,
        });
    }

    MstResult {
        component_count: n - mst_edges.len(),
        mst_edges,
        total_weight,
        kruskal_trace,
    }
}

/// Builds the graph from `file` and runs [`kruskal`] with the default
/// configuration.
///
/// # Errors
///
/// Returns [`GraphBuildError`] if the file has duplicate vertex ids or an edge
/// naming an unknown vertex.
pub fn compute_mst(file: &GraphFile) -> Result<MstResult, GraphBuildError> {
    let graph = build_graph(file)?;
    Ok(kruskal(&graph, &KruskalConfig::default()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::{classroom, edge, graph_file, span_graph, two_triangles, w};
    use crate::union_find::VertexSets;

    fn run(graph: &SpanGraph) -> MstResult {
        kruskal(graph, &KruskalConfig::default())
    }

    #[test]
    fn classroom_graph_mst() {
        let result = run(&classroom());
        assert_eq!(result.total_weight, w(23));
        assert_eq!(result.mst_edges.len(), 4);
        assert!(result.is_spanning_tree());

        let expected = [
            edge("A", "D", 5),
            edge("C", "E", 5),
            edge("E", "A", 6),
            edge("A", "B", 7),
        ];
        assert_eq!(result.mst_edges, expected);
    }

    #[test]
    fn classroom_trace_order_and_actions() {
        let result = run(&classroom());
        let summary: Vec<(String, StepAction, Weight)> = result
            .kruskal_trace
            .iter()
            .map(|s| (s.edge.to_string(), s.action, s.total_weight))
            .collect();
        let expected = vec![
            ("A-D (5)".to_owned(), StepAction::Added, w(5)),
            ("C-E (5)".to_owned(), StepAction::Added, w(10)),
            ("E-A (6)".to_owned(), StepAction::Added, w(16)),
            ("A-B (7)".to_owned(), StepAction::Added, w(23)),
            ("C-D (7)".to_owned(), StepAction::Skipped, w(23)),
            ("B-C (8)".to_owned(), StepAction::Skipped, w(23)),
            ("B-D (9)".to_owned(), StepAction::Skipped, w(23)),
            ("D-E (15)".to_owned(), StepAction::Skipped, w(23)),
        ];
        assert_eq!(summary, expected);
    }

    #[test]
    fn trace_steps_are_one_based_and_contiguous() {
        let result = run(&classroom());
        for (i, step) in result.kruskal_trace.iter().enumerate() {
            assert_eq!(step.step, i + 1);
        }
    }

    #[test]
    fn trace_has_one_entry_per_edge() {
        let g = classroom();
        let result = run(&g);
        assert_eq!(result.kruskal_trace.len(), g.edge_count());
        assert_eq!(result.added_steps().count(), result.mst_edges.len());
    }

    #[test]
    fn skipped_entries_carry_cycle_reason() {
        let result = run(&classroom());
        for step in &result.kruskal_trace {
            match step.action {
                StepAction::Added => assert_eq!(step.reason, REASON_ADDED),
                StepAction::Skipped => assert_eq!(step.reason, REASON_SKIPPED),
            }
        }
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let g = span_graph(
            &["A", "B", "C", "D"],
            &[("C", "D", 1), ("A", "B", 1), ("B", "C", 1)],
        );
        let result = run(&g);
        let order: Vec<String> = result.kruskal_trace.iter().map(|s| s.edge.to_string()).collect();
        assert_eq!(order, vec!["C-D (1)", "A-B (1)", "B-C (1)"]);
    }

    #[test]
    fn empty_graph_yields_empty_result() {
        let result = run(&span_graph(&[], &[]));
        assert!(result.mst_edges.is_empty());
        assert!(result.kruskal_trace.is_empty());
        assert_eq!(result.total_weight, Weight::ZERO);
        assert_eq!(result.component_count, 0);
        assert!(!result.is_spanning_tree());
    }

    #[test]
    fn single_vertex_is_a_spanning_tree() {
        let result = run(&span_graph(&["A"], &[]));
        assert!(result.mst_edges.is_empty());
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let result = run(&two_triangles());
        assert_eq!(result.mst_edges.len(), 4);
        assert_eq!(result.component_count, 2);
        assert_eq!(result.total_weight, w(1 + 2 + 4 + 5));
        assert_eq!(result.kruskal_trace.len(), 6);
    }

    #[test]
    fn accepted_edges_replay_without_cycle() {
        let g = classroom();
        let result = run(&g);
        let mut sets = VertexSets::initialize(g.vertex_ids());
        for e in &result.mst_edges {
            assert_eq!(sets.union(&e.from, &e.to), Ok(true), "{e} closes a cycle");
        }
    }

    #[test]
    fn lighter_parallel_edge_wins() {
        let g = span_graph(&["A", "B"], &[("A", "B", 9), ("B", "A", 2)]);
        let result = run(&g);
        assert_eq!(result.mst_edges, vec![edge("B", "A", 2)]);
        assert_eq!(result.kruskal_trace[1].action, StepAction::Skipped);
    }

    #[test]
    fn self_loop_is_skipped() {
        let g = span_graph(&["A", "B"], &[("A", "A", 0), ("A", "B", 4)]);
        let result = run(&g);
        assert_eq!(result.kruskal_trace[0].action, StepAction::Skipped);
        assert_eq!(result.mst_edges, vec![edge("A", "B", 4)]);
    }

    #[test]
    fn stop_when_spanning_truncates_trace_only() {
        let g = classroom();
        let config = KruskalConfig {
            scan: ScanPolicy::StopWhenSpanning,
        };
        let early = kruskal(&g, &config);
        let full = run(&g);
        assert_eq!(early.mst_edges, full.mst_edges);
        assert_eq!(early.total_weight, full.total_weight);
        assert_eq!(early.kruskal_trace.len(), 4);
    }

    #[test]
    fn stop_when_spanning_on_disconnected_graph_scans_everything() {
        let config = KruskalConfig {
            scan: ScanPolicy::StopWhenSpanning,
        };
        let result = kruskal(&two_triangles(), &config);
        assert_eq!(result.kruskal_trace.len(), 6);
        assert_eq!(result.mst_edges.len(), 4);
    }

    #[test]
    fn compute_mst_rejects_dangling_edge() {
        let file = graph_file(&["A"], &[("A", "B", 1)]);
        assert!(matches!(
            compute_mst(&file),
            Err(GraphBuildError::DanglingEdgeRef { .. })
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = classroom();
        let first = serde_json::to_string(&run(&g)).expect("serialize");
        let second = serde_json::to_string(&run(&g)).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn result_serializes_snake_case_actions() {
        let result = run(&classroom());
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["total_weight"], serde_json::json!(23));
        assert_eq!(json["kruskal_trace"][0]["action"], serde_json::json!("added"));
        assert_eq!(json["kruskal_trace"][4]["action"], serde_json::json!("skipped"));
        assert_eq!(json["mst_edges"][0]["from"], serde_json::json!("A"));
    }
}
