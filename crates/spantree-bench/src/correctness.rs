//! Post-operation invariant checkers for correctness validation.

use petgraph::algo::min_spanning_tree;
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use spantree_core::{GraphFile, MstResult, PrimResult, SpanGraph, StepAction, VertexSets, Weight};

/// Verifies graph construction invariants.
pub fn check_graph_invariants(file: &GraphFile, graph: &SpanGraph) -> Result<(), String> {
    if graph.vertex_count() != file.vertices.len() {
        return Err(format!(
            "vertex count mismatch: graph={}, file={}",
            graph.vertex_count(),
            file.vertices.len()
        ));
    }
    if graph.edge_count() != file.edges.len() {
        return Err(format!(
            "edge count mismatch: graph={}, file={}",
            graph.edge_count(),
            file.edges.len()
        ));
    }
    for (i, vertex) in file.vertices.iter().enumerate() {
        if graph.ordinal(&vertex.id) != Some(i) {
            return Err(format!("vertex {} is not at ordinal {i}", vertex.id));
        }
    }
    Ok(())
}

/// Verifies that the accepted edges form a maximal spanning forest whose
/// total is the sum of its edges.
pub fn check_forest(graph: &SpanGraph, result: &MstResult) -> Result<(), String> {
    let mut sets = VertexSets::initialize(graph.vertex_ids());
    for edge in &result.mst_edges {
        match sets.union(&edge.from, &edge.to) {
            Ok(true) => {}
            Ok(false) => return Err(format!("accepted edge {edge} closes a cycle")),
            Err(e) => return Err(format!("accepted edge {edge}: {e}")),
        }
    }

    let components = graph.connected_components();
    let expected = graph.vertex_count().saturating_sub(components);
    if result.mst_edges.len() != expected {
        return Err(format!(
            "forest has {} edges, expected n - components = {expected}",
            result.mst_edges.len()
        ));
    }
    if result.component_count != components {
        return Err(format!(
            "component_count = {}, graph has {components} components",
            result.component_count
        ));
    }

    let sum: Weight = result.mst_edges.iter().map(|e| e.weight).sum();
    if sum != result.total_weight {
        return Err(format!(
            "total_weight {} differs from edge sum {sum}",
            result.total_weight
        ));
    }
    Ok(())
}

/// Verifies the Kruskal trace of an exhaustive scan: one step per edge,
/// numbered from 1, non-decreasing weights, and running totals that match
/// the accepted edges.
pub fn check_kruskal_trace(graph: &SpanGraph, result: &MstResult) -> Result<(), String> {
    if result.kruskal_trace.len() != graph.edge_count() {
        return Err(format!(
            "trace has {} steps for {} edges",
            result.kruskal_trace.len(),
            graph.edge_count()
        ));
    }

    let mut running = Weight::ZERO;
    let mut previous: Option<Weight> = None;
    let mut accepted = result.mst_edges.iter();
    for (i, step) in result.kruskal_trace.iter().enumerate() {
        if step.step != i + 1 {
            return Err(format!("step {} found at position {i}", step.step));
        }
        if previous.is_some_and(|p| step.edge.weight < p) {
            return Err(format!("step {} breaks weight order", step.step));
        }
        previous = Some(step.edge.weight);

        if step.action == StepAction::Added {
            running += step.edge.weight;
            if accepted.next() != Some(&step.edge) {
                return Err(format!(
                    "step {} adds {} out of acceptance order",
                    step.step, step.edge
                ));
            }
        }
        if step.total_weight != running {
            return Err(format!(
                "step {} running total {} should be {running}",
                step.step, step.total_weight
            ));
        }
    }
    Ok(())
}

/// Verifies the Prim trace: every step adds a new vertex through an edge
/// from the already reached set, and the running total is consistent.
pub fn check_prim_trace(graph: &SpanGraph, result: &PrimResult) -> Result<(), String> {
    let Some(seed) = &result.seed else {
        return if graph.is_empty() && result.prim_trace.is_empty() {
            Ok(())
        } else {
            Err("missing seed on a non-empty graph".to_owned())
        };
    };

    let mut reached = vec![seed.clone()];
    let mut running = Weight::ZERO;
    for step in &result.prim_trace {
        if reached.contains(&step.new_vertex) {
            return Err(format!(
                "step {} re-adds {}",
                step.step, step.new_vertex
            ));
        }
        let Some(inside) = step.edge.other_end(&step.new_vertex) else {
            return Err(format!(
                "step {} edge {} does not touch {}",
                step.step, step.edge, step.new_vertex
            ));
        };
        if !reached.contains(inside) {
            return Err(format!(
                "step {} edge {} does not leave the tree",
                step.step, step.edge
            ));
        }
        reached.push(step.new_vertex.clone());
        running += step.edge.weight;
        if step.reached != reached {
            return Err(format!("step {} reached snapshot is wrong", step.step));
        }
    }
    if running != result.total_weight {
        return Err(format!(
            "total_weight {} differs from step sum {running}",
            result.total_weight
        ));
    }
    Ok(())
}

/// Minimum spanning forest weight computed by `petgraph` as an independent
/// reference.
pub fn reference_total(graph: &SpanGraph) -> Weight {
    let mut reference: UnGraph<(), f64> =
        UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for _ in 0..graph.vertex_count() {
        reference.add_node(());
    }
    for e in graph.edges() {
        reference.add_edge(NodeIndex::new(e.a), NodeIndex::new(e.b), e.edge.weight.get());
    }

    let mut total = Weight::ZERO;
    for element in min_spanning_tree(&reference) {
        if let Element::Edge { weight, .. } = element {
            total += Weight::try_from(weight).unwrap_or(Weight::ZERO);
        }
    }
    total
}

/// Verifies the total against [`reference_total`].
pub fn check_against_reference(graph: &SpanGraph, result: &MstResult) -> Result<(), String> {
    let reference = reference_total(graph);
    if result.total_weight.approx_eq(reference) {
        Ok(())
    } else {
        Err(format!(
            "total_weight {} differs from reference {reference}",
            result.total_weight
        ))
    }
}
