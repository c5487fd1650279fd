//! Side-by-side comparison of Kruskal's and Prim's results on one graph.
use serde::{Deserialize, Serialize};

use crate::graph::SpanGraph;
use crate::kruskal::{KruskalConfig, MstResult, kruskal};
use crate::newtypes::Weight;
use crate::prim::{PrimResult, prim_trace};
use crate::structures::Edge;

/// Summary of running both algorithms over the same graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Total weight of Kruskal's forest.
    pub kruskal_total: Weight,
    /// Total weight of Prim's tree grown from the first vertex.
    pub prim_total: Weight,
    /// `true` if the totals match (within [`Weight::approx_eq`]).
    pub totals_agree: bool,
    /// `true` if both algorithms chose the same unordered set of links.
    ///
    /// Both break weight ties by file order, which orders all edges strictly
    /// and makes the minimum spanning tree unique, so on a connected graph
    /// this holds even when several trees share the minimum weight.
    pub same_edge_set: bool,
    /// `true` if the graph is connected, so that both results are full
    /// spanning trees.
    pub spanning: bool,
    /// Kruskal's accepted edges in acceptance order.
    pub kruskal_edges: Vec<Edge>,
    /// Prim's chosen edges in choice order.
    pub prim_edges: Vec<Edge>,
}

/// Runs both algorithms with their default settings and compares them.
///
/// On a disconnected graph Prim's tree covers only the seed's component, so
/// `totals_agree` is normally `false` there; `spanning` tells the two cases
/// apart.
pub fn compare(graph: &SpanGraph) -> Comparison {
    let mst = kruskal(graph, &KruskalConfig::default());
    let prim = prim_trace(graph);
    compare_results(graph, &mst, &prim)
}

/// Compares already computed results for `graph`.
pub fn compare_results(graph: &SpanGraph, mst: &MstResult, prim: &PrimResult) -> Comparison {
    let prim_edges: Vec<Edge> = prim.edges().cloned().collect();
    Comparison {
        kruskal_total: mst.total_weight,
        prim_total: prim.total_weight,
        totals_agree: mst.total_weight.approx_eq(prim.total_weight),
        same_edge_set: same_links(&mst.mst_edges, &prim_edges),
        spanning: graph.is_connected(),
        kruskal_edges: mst.mst_edges.clone(),
        prim_edges,
    }
}

/// Multiset equality of edges under [`Edge::same_link`].
pub fn same_links(left: &[Edge], right: &[Edge]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut used = vec![false; right.len()];
    left.iter().all(|l| {
        let hit = right
            .iter()
            .enumerate()
            .find(|&(i, r)| !used[i] && l.same_link(r))
            .map(|(i, _)| i);
        match hit {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::{classroom, edge, span_graph, two_triangles, w};

    #[test]
    fn classroom_algorithms_agree() {
        let c = compare(&classroom());
        assert_eq!(c.kruskal_total, w(23));
        assert_eq!(c.prim_total, w(23));
        assert!(c.totals_agree);
        assert!(c.same_edge_set, "same MST in a different order");
        assert!(c.spanning);
        assert_ne!(c.kruskal_edges, c.prim_edges, "acceptance order differs");
    }

    #[test]
    fn tied_weights_pick_the_same_tree() {
        let g = span_graph(
            &["A", "B", "C", "D"],
            &[("A", "D", 1), ("B", "C", 1), ("C", "D", 1), ("A", "B", 1)],
        );
        let c = compare(&g);
        assert!(c.totals_agree);
        assert_eq!(c.kruskal_total, w(3));
        assert!(c.same_edge_set);
        assert!(!c.kruskal_edges.contains(&edge("A", "B", 1)));
    }

    #[test]
    fn disconnected_graph_is_flagged() {
        let c = compare(&two_triangles());
        assert!(!c.spanning);
        assert!(!c.totals_agree);
        assert_eq!(c.prim_edges.len(), 2);
        assert_eq!(c.kruskal_edges.len(), 4);
    }

    #[test]
    fn same_links_is_a_multiset_comparison() {
        let a = [edge("A", "B", 1), edge("A", "B", 1)];
        let b = [edge("B", "A", 1), edge("C", "D", 1)];
        assert!(!same_links(&a, &b));
        assert!(same_links(&a, &[edge("B", "A", 1), edge("A", "B", 1)]));
        assert!(!same_links(&a, &a[..1]));
    }
}
