/// Scoring of a player's hand-picked edge selection against the optimum.
///
/// The game asks the player to click edges until every vertex is connected.
/// [`score_selection`] checks the selection against the graph and against a
/// precomputed [`MstResult`]:
///
/// - every selected edge must be an edge of the graph (same unordered
///   endpoints and equal weight), and no input edge may be selected twice;
/// - the selection is replayed through a [`VertexSets`] to detect cycles and
///   measure how many components remain;
/// - the selection is optimal when it has exactly `n - 1` edges, forms no
///   cycle and weighs the same as the minimum spanning tree.
use serde::{Deserialize, Serialize};

use crate::graph::SpanGraph;
use crate::kruskal::MstResult;
use crate::newtypes::Weight;
use crate::structures::Edge;
use crate::union_find::VertexSets;

/// Errors that make a selection impossible to score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The selected edge does not exist in the graph.
    #[error("selected edge {0} is not an edge of the graph")]
    UnknownEdge(Edge),

    /// Every matching graph edge has already been selected.
    #[error("edge {0} is selected more than once")]
    DuplicateSelection(Edge),
}

/// Outcome of scoring one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Sum of the selected weights.
    pub player_weight: Weight,
    /// Weight of the minimum spanning tree (or forest).
    pub optimal_weight: Weight,
    /// Number of selected edges.
    pub selected_count: usize,
    /// Number of edges a spanning tree needs (`n - 1`).
    pub required_count: usize,
    /// `true` if some selected edge joins two already connected vertices.
    pub forms_cycle: bool,
    /// `true` if the selection connects every vertex.
    pub spans_all: bool,
    /// `true` if the selection is a minimum spanning tree.
    pub is_optimal: bool,
    /// How much heavier the selection is than the optimum, clamped at zero.
    /// A lighter selection never spans, so it has no excess.
    pub excess_weight: Weight,
    /// `player_weight - optimal_weight`, negative when the selection is
    /// lighter than the optimum.
    pub weight_difference: f64,
}

/// Scores `selected` on `graph` against the precomputed `mst`.
///
/// # Errors
///
/// - [`ScoreError::UnknownEdge`]: a selected edge is not in the graph.
/// - [`ScoreError::DuplicateSelection`]: the same graph edge appears twice.
pub fn score_selection(
    graph: &SpanGraph,
    selected: &[Edge],
    mst: &MstResult,
) -> Result<Verdict, ScoreError> {
    let mut taken = vec![false; graph.edge_count()];
    for choice in selected {
        let mut matches = graph.edges().filter(|e| e.edge.same_link(choice));
        let Some(first) = matches.next() else {
            return Err(ScoreError::UnknownEdge(choice.clone()));
        };
        let slot = std::iter::once(first)
            .chain(matches)
            .find(|e| !taken[e.index])
            .ok_or_else(|| ScoreError::DuplicateSelection(choice.clone()))?;
        taken[slot.index] = true;
    }

    let mut sets = VertexSets::initialize(graph.vertex_ids());
    let mut forms_cycle = false;
    for choice in selected {
        // Membership was checked above, so both endpoints are known.
        if let Ok(false) = sets.union(&choice.from, &choice.to) {
            forms_cycle = true;
        }
    }

    let player_weight: Weight = selected.iter().map(|e| e.weight).sum();
    let required_count = graph.vertex_count().saturating_sub(1);
    let spans_all = sets.set_count() <= 1;
    let is_optimal = selected.len() == required_count
        && !forms_cycle
        && spans_all
        && player_weight.approx_eq(mst.total_weight);

    log::debug!(
        "score: {} edges, weight {player_weight} vs optimum {}, optimal = {is_optimal}",
        selected.len(),
        mst.total_weight
    );

    Ok(Verdict {
        player_weight,
        optimal_weight: mst.total_weight,
        selected_count: selected.len(),
        required_count,
        forms_cycle,
        spans_all,
        is_optimal,
        excess_weight: player_weight.saturating_sub(mst.total_weight),
        weight_difference: player_weight.get() - mst.total_weight.get(),
    })
}
