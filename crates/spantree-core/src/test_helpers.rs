//! Shared test helper functions for constructing test fixtures.
//!
//! This module is compiled only in test builds. Integration tests in
//! `crates/spantree-core/tests/` define their own local helpers because they
//! link against the non-test library build where this module is not
//! available.
#![allow(clippy::expect_used)]

use crate::file::GraphFile;
use crate::graph::{SpanGraph, build_graph};
use crate::newtypes::{VertexId, Weight};
use crate::structures::Edge;

/// Creates a [`VertexId`] from a string slice, panicking on invalid input.
pub fn vid(s: &str) -> VertexId {
    VertexId::try_from(s).expect("valid VertexId")
}

/// Creates an integral [`Weight`].
pub fn w(v: u32) -> Weight {
    Weight::from(v)
}

/// Creates an edge with an integral weight.
pub fn edge(from: &str, to: &str, weight: u32) -> Edge {
    Edge::new(vid(from), vid(to), w(weight))
}

/// Builds a [`GraphFile`] from bare ids and `(from, to, weight)` triples.
pub fn graph_file(vertices: &[&str], edges: &[(&str, &str, u32)]) -> GraphFile {
    GraphFile::new(
        vertices.iter().map(|v| vid(v)).collect(),
        edges.iter().map(|&(a, b, wt)| edge(a, b, wt)).collect(),
    )
}

/// Builds a [`SpanGraph`], panicking if the fixture is malformed.
pub fn span_graph(vertices: &[&str], edges: &[(&str, &str, u32)]) -> SpanGraph {
    build_graph(&graph_file(vertices, edges)).expect("fixture graph builds")
}

/// The five-vertex classroom graph used throughout the lessons.
///
/// Its minimum spanning tree is `A-D(5), C-E(5), E-A(6), A-B(7)`, total 23.
pub fn classroom() -> SpanGraph {
    span_graph(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 7),
            ("A", "D", 5),
            ("B", "C", 8),
            ("B", "D", 9),
            ("C", "D", 7),
            ("C", "E", 5),
            ("D", "E", 15),
            ("E", "A", 6),
        ],
    )
}

/// Two disjoint triangles: `{A, B, C}` and `{X, Y, Z}`.
pub fn two_triangles() -> SpanGraph {
    span_graph(
        &["A", "B", "C", "X", "Y", "Z"],
        &[
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "A", 3),
            ("X", "Y", 4),
            ("Y", "Z", 5),
            ("Z", "X", 6),
        ],
    )
}
