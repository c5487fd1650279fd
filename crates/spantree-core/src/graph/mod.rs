/// Graph construction from a [`GraphFile`] using `petgraph`.
///
/// [`build_graph`] is the only place where cross-references are checked.
/// Every algorithm in this crate takes a [`SpanGraph`], so an edge naming an
/// unknown vertex is rejected before any algorithm runs.
///
/// # Two-Pass Construction
///
/// 1. **Vertex pass**: inserts all vertices into an undirected `petgraph`
///    graph and records the `id → NodeIndex` mapping. Fails on duplicate ids.
/// 2. **Edge pass**: resolves both endpoints and inserts the edge. Fails if
///    either endpoint is not present in the vertex map.
///
/// Vertices and edges are never removed, so node index `i` is the `i`-th
/// vertex of the file and edge index `j` is the `j`-th edge. The algorithms
/// rely on this to use indices as union-find ordinals and to preserve input
/// order among equal-weight edges.
use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::file::GraphFile;
use crate::newtypes::VertexId;
use crate::structures::Edge;


/// Errors that can occur during graph construction from a [`GraphFile`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBuildError {
    /// Two vertices in the file share the same id.
    ///
    /// The contained string is the duplicate id.
    #[error("duplicate vertex ID: {0:?}")]
    DuplicateVertexId(String),

    /// An edge references a vertex id that is not present in the vertex list.
    #[error("edge #{edge_index} references unknown vertex {missing_vertex_id:?}")]
    DanglingEdgeRef {
        /// Zero-based position of the edge in the file's edge list.
        edge_index: usize,
        /// The vertex id that could not be resolved.
        missing_vertex_id: String,
    },
}

/// Errors that can occur when a query names a vertex.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The vertex id does not exist in the graph.
    #[error("vertex not found: {0:?}")]
    VertexNotFound(String),
}

/// One edge of a [`SpanGraph`] together with its resolved endpoint ordinals.
#[derive(Debug, Clone, Copy)]
pub struct GraphEdge<'g> {
    /// Position of the edge in the file's edge list.
    pub index: usize,
    /// Ordinal of `edge.from`.
    pub a: usize,
    /// Ordinal of `edge.to`.
    pub b: usize,
    /// The edge record.
    pub edge: &'g Edge,
}

/// An undirected weighted multigraph built from a [`GraphFile`].
///
/// Wraps a `petgraph` [`UnGraph`] whose node weights are vertex ids and whose
/// edge weights are the original [`Edge`] records. Parallel edges and
/// self-loops are stored as given; the algorithms handle both.
///
/// Construct with [`build_graph`].
#[derive(Debug, Clone)]
pub struct SpanGraph {
    graph: UnGraph<VertexId, Edge>,
    id_to_index: HashMap<VertexId, NodeIndex>,
}

impl SpanGraph {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns the ordinal (file position) of a vertex id.
    pub fn ordinal(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).map(|idx| idx.index())
    }

    /// Returns the vertex id at `ordinal`.
    pub fn vertex_id(&self, ordinal: usize) -> Option<&VertexId> {
        self.graph.node_weight(NodeIndex::new(ordinal))
    }

    /// Iterates over vertex ids in file order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> {
        self.graph.node_weights()
    }

    /// Returns the edge at `index` (file position).
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.graph.edge_weight(petgraph::graph::EdgeIndex::new(index))
    }

    /// Iterates over all edges in file order.
    pub fn edges(&self) -> impl Iterator<Item = GraphEdge<'_>> {
        self.graph.edge_references().map(|e| GraphEdge {
            index: e.id().index(),
            a: e.source().index(),
            b: e.target().index(),
            edge: e.weight(),
        })
    }

    /// Returns the first edge in file order that joins `a` and `b`, in either
    /// direction.
    pub fn find_edge(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges().map(|e| e.edge).find(|e| e.connects(a, b))
    }

    /// Returns the number of connected components. Isolated vertices count as
    /// their own component; an empty graph has zero.
    pub fn connected_components(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    /// Returns `true` if every vertex is reachable from every other.
    pub fn is_connected(&self) -> bool {
        self.connected_components() <= 1
    }

    /// Returns a reference to the underlying `petgraph` graph.
    pub fn graph(&self) -> &UnGraph<VertexId, Edge> {
        &self.graph
    }
}

/// Constructs a [`SpanGraph`] from a deserialized [`GraphFile`].
///
/// Construction is O(V + E).
///
/// # Errors
///
/// - [`GraphBuildError::DuplicateVertexId`]: two vertices share the same id.
/// - [`GraphBuildError::DanglingEdgeRef`]: an edge references a vertex that
///   does not exist.
pub fn build_graph(file: &GraphFile) -> Result<SpanGraph, GraphBuildError> {
    let mut graph: UnGraph<VertexId, Edge> =
        UnGraph::with_capacity(file.vertices.len(), file.edges.len());
    let mut id_to_index: HashMap<VertexId, NodeIndex> =
        HashMap::with_capacity(file.vertices.len());

    for vertex in &file.vertices {
        if id_to_index.contains_key(&vertex.id) {
            return Err(GraphBuildError::DuplicateVertexId(vertex.id.to_string()));
        }
        let idx = graph.add_node(vertex.id.clone());
        id_to_index.insert(vertex.id.clone(), idx);
    }

    for (edge_index, edge) in file.edges.iter().enumerate() {
        let resolve = |id: &VertexId| {
            id_to_index
                .get(id)
                .copied()
                .ok_or_else(|| GraphBuildError::DanglingEdgeRef {
                    edge_index,
                    missing_vertex_id: id.to_string(),
                })
        };
        let a = resolve(&edge.from)?;
        let b = resolve(&edge.to)?;
        graph.add_edge(a, b, edge.clone());
    }

    log::debug!(
        "built graph: {} vertices, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(SpanGraph { graph, id_to_index })
}
