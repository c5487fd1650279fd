/// Prim's algorithm as a step-by-step trace.
///
/// Grows a single tree from a seed vertex. Each round scans every edge in
/// file order and picks the lightest one with exactly one endpoint inside the
/// reached set; among equally light candidates the first one in file order
/// wins. The round adds the outside endpoint and records a [`PrimStep`].
///
/// The loop ends when every vertex is reached or no crossing edge remains.
/// In the second case the graph is disconnected from the seed and the trace
/// is shorter than `n - 1`; that is a normal outcome, not an error.
///
/// The generator shares no state with [`crate::kruskal`]. For any graph
/// connected from the seed both algorithms reach the same total weight.
use serde::{Deserialize, Serialize};

use crate::file::GraphFile;
use crate::graph::{GraphBuildError, GraphEdge, QueryError, SpanGraph, build_graph};
use crate::newtypes::{VertexId, Weight};
use crate::structures::Edge;

/// One entry of the Prim trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimStep {
    /// 1-based position in the trace.
    pub step: usize,
    /// The crossing edge chosen this round.
    pub edge: Edge,
    /// The vertex that edge brought into the tree.
    pub new_vertex: VertexId,
    /// Reached vertices after this step, in the order they were reached.
    pub reached: Vec<VertexId>,
    /// Sum of chosen weights after this step.
    pub total_weight: Weight,
}

/// The full Prim trace for one seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimResult {
    /// Starting vertex; `None` only for an empty graph.
    pub seed: Option<VertexId>,
    /// One entry per vertex reached after the seed.
    pub prim_trace: Vec<PrimStep>,
    /// Sum of all chosen edge weights.
    pub total_weight: Weight,
}

impl PrimResult {
    /// Number of vertices in the grown tree, seed included.
    pub fn reached_count(&self) -> usize {
        if self.seed.is_some() {
            self.prim_trace.len() + 1
        } else {
            0
        }
    }

    /// Returns `true` if the tree reached all `vertex_count` vertices.
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.reached_count() == vertex_count
    }

    /// The chosen edges in the order they were chosen.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.prim_trace.iter().map(|s| &s.edge)
    }
}

/// Runs Prim's algorithm seeded at the first vertex of `graph`.
///
/// An empty graph produces an empty result with `seed == None`.
pub fn prim_trace(graph: &SpanGraph) -> PrimResult {
    match graph.vertex_id(0) {
        Some(_) => grow(graph, 0),
        None => PrimResult {
            seed: None,
            prim_trace: Vec::new(),
            total_weight: Weight::ZERO,
        },
    }
}

/// Runs Prim's algorithm seeded at `seed`.
///
/// # Errors
///
/// [`QueryError::VertexNotFound`] if `seed` is not a vertex of `graph`.
pub fn prim_trace_from(graph: &SpanGraph, seed: &str) -> Result<PrimResult, QueryError> {
    let start = graph
        .ordinal(seed)
        .ok_or_else(|| QueryError::VertexNotFound(seed.to_owned()))?;
    Ok(grow(graph, start))
}

/// Builds the graph from `file` and runs [`prim_trace`].
///
/// # Errors
///
/// Returns [`GraphBuildError`] if the file has duplicate vertex ids or an edge
/// naming an unknown vertex.
pub fn compute_prim_trace(file: &GraphFile) -> Result<PrimResult, GraphBuildError> {
    let graph = build_graph(file)?;
    Ok(prim_trace(&graph))
}

fn grow(graph: &SpanGraph, start: usize) -> PrimResult {
    let n = graph.vertex_count();
    let mut in_tree = vec![false; n];
    in_tree[start] = true;

    let mut reached: Vec<VertexId> = Vec::with_capacity(n);
    reached.extend(graph.vertex_id(start).cloned());

    let mut prim_trace: Vec<PrimStep> = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = Weight::ZERO;

    while reached.len() < n {
        let Some(best) = lightest_crossing(graph, &in_tree) else {
            log::debug!(
                "prim: no crossing edge left, {} of {n} vertices reached",
                reached.len()
            );
            break;
        };

        let outside = if in_tree[best.a] { best.b } else { best.a };
        in_tree[outside] = true;
        let Some(new_vertex) = graph.vertex_id(outside).cloned() else {
            break;
        };
        reached.push(new_vertex.clone());
        total_weight += best.edge.weight;

        log::debug!(
            "prim step {}: {} reaches {new_vertex}, total {total_weight}",
            prim_trace.len() + 1,
            best.edge
        );

        prim_trace.push(PrimStep {
            step: prim_trace.len() + 1,
            edge: best.edge.clone(),
            new_vertex,
            reached: reached.clone(),
            total_weight,
        });
    }

    PrimResult {
        seed: graph.vertex_id(start).cloned(),
        prim_trace,
        total_weight,
    }
}

/// Returns the first lightest edge with exactly one endpoint in the tree.
fn lightest_crossing<'g>(graph: &'g SpanGraph, in_tree: &[bool]) -> Option<GraphEdge<'g>> {
    let mut best: Option<GraphEdge<'g>> = None;
    for candidate in graph.edges() {
        if in_tree[candidate.a] == in_tree[candidate.b] {
            continue;
        }
        let lighter = match &best {
            Some(current) => candidate.edge.weight < current.edge.weight,
            None => true,
        };
        if lighter {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::{classroom, edge, graph_file, span_graph, two_triangles, w};

    fn ids(v: &[VertexId]) -> Vec<&str> {
        v.iter().map(|id| &**id).collect()
    }

    #[test]
    fn classroom_trace_matches_lesson() {
        let result = prim_trace(&classroom());
        assert_eq!(result.seed.as_deref(), Some("A"));
        assert_eq!(result.total_weight, w(23));

        let chosen: Vec<Edge> = result.edges().cloned().collect();
        assert_eq!(
            chosen,
            vec![
                edge("A", "D", 5),
                edge("E", "A", 6),
                edge("C", "E", 5),
                edge("A", "B", 7),
            ]
        );

        let new: Vec<&str> = result.prim_trace.iter().map(|s| &*s.new_vertex).collect();
        assert_eq!(new, vec!["D", "E", "C", "B"]);
    }

    #[test]
    fn reached_snapshots_grow_by_one() {
        let result = prim_trace(&classroom());
        let snapshots: Vec<Vec<&str>> = result.prim_trace.iter().map(|s| ids(&s.reached)).collect();
        assert_eq!(
            snapshots,
            vec![
                vec!["A", "D"],
                vec!["A", "D", "E"],
                vec!["A", "D", "E", "C"],
                vec!["A", "D", "E", "C", "B"],
            ]
        );
    }

    #[test]
    fn running_totals_accumulate() {
        let result = prim_trace(&classroom());
        let totals: Vec<Weight> = result.prim_trace.iter().map(|s| s.total_weight).collect();
        assert_eq!(totals, vec![w(5), w(11), w(16), w(23)]);
    }

    #[test]
    fn connected_graph_has_n_minus_one_steps() {
        let g = classroom();
        let result = prim_trace(&g);
        assert_eq!(result.prim_trace.len(), g.vertex_count() - 1);
        assert!(result.spans(g.vertex_count()));
    }

    #[test]
    fn ties_pick_first_edge_in_file_order() {
        let g = span_graph(&["A", "B", "C"], &[("A", "C", 4), ("A", "B", 4), ("B", "C", 9)]);
        let result = prim_trace(&g);
        assert_eq!(result.prim_trace[0].edge, edge("A", "C", 4));
    }

    #[test]
    fn disconnected_graph_stops_early() {
        let g = two_triangles();
        let result = prim_trace(&g);
        assert_eq!(result.prim_trace.len(), 2);
        assert_eq!(result.reached_count(), 3);
        assert!(!result.spans(g.vertex_count()));
        for step in &result.prim_trace {
            assert!(step.reached.iter().all(|v| ["A", "B", "C"].contains(&&**v)));
        }
    }

    #[test]
    fn explicit_seed_grows_the_other_component() {
        let result = prim_trace_from(&two_triangles(), "Y").expect("Y exists");
        assert_eq!(result.seed.as_deref(), Some("Y"));
        assert_eq!(result.total_weight, w(4 + 5));
    }

    #[test]
    fn unknown_seed_is_an_error() {
        let err = prim_trace_from(&classroom(), "Q").expect_err("unknown seed");
        assert_eq!(err, QueryError::VertexNotFound("Q".to_owned()));
    }

    #[test]
    fn empty_graph_has_no_seed() {
        let result = prim_trace(&span_graph(&[], &[]));
        assert!(result.seed.is_none());
        assert!(result.prim_trace.is_empty());
        assert_eq!(result.reached_count(), 0);
    }

    #[test]
    fn single_vertex_has_empty_trace() {
        let result = prim_trace(&span_graph(&["A"], &[]));
        assert_eq!(result.seed.as_deref(), Some("A"));
        assert!(result.prim_trace.is_empty());
        assert!(result.spans(1));
    }

    #[test]
    fn self_loops_never_cross() {
        let g = span_graph(&["A", "B"], &[("A", "A", 0), ("A", "B", 3)]);
        let result = prim_trace(&g);
        assert_eq!(result.prim_trace.len(), 1);
        assert_eq!(result.prim_trace[0].edge, edge("A", "B", 3));
    }

    #[test]
    fn compute_prim_trace_rejects_duplicate_vertex() {
        let file = graph_file(&["A", "A"], &[]);
        assert!(compute_prim_trace(&file).is_err());
    }
}
