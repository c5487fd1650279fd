/// Top-level graph document.
///
/// [`GraphFile`] is the JSON interchange shape consumed by every entry point
/// in this crate:
///
/// ```json
/// {
///   "vertices": [{"id": "A"}, {"id": "B"}],
///   "edges": [{"from": "A", "to": "B", "weight": 7}]
/// }
/// ```
///
/// Unknown top-level keys are absorbed into [`GraphFile::extra`] and written
/// back unchanged, so files produced by a graph generator that carries extra
/// metadata round-trip without data loss.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::newtypes::VertexId;
use crate::structures::{Edge, Vertex};

/// A vertex list plus an edge list over those vertices.
///
/// Deserialization only checks per-field shape (non-empty ids, non-negative
/// weights). Cross-references (duplicate ids, edges naming unknown vertices)
/// are checked by [`crate::graph::build_graph`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Vertices in file order. The first vertex seeds Prim's algorithm.
    #[serde(default)]
    pub vertices: Vec<Vertex>,

    /// Edges in file order. Equal-weight edges keep this order in Kruskal's
    /// sorted scan.
    #[serde(default)]
    pub edges: Vec<Edge>,

    /// Unknown keys preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl GraphFile {
    /// Creates a file from bare vertex ids and edges.
    pub fn new(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Vertex::new).collect(),
            edges,
            extra: BTreeMap::new(),
        }
    }

    /// Iterates over the vertex ids in file order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> {
        self.vertices.iter().map(|v| &v.id)
    }
}
