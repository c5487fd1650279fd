/// Vertex and edge records as they appear in a graph file.
///
/// A [`Vertex`] keeps any JSON keys it does not recognise in a flattened
/// `extra` map. The presentation layer stores canvas coordinates and labels
/// there (`x`, `y`, `label`); the algorithms never look at them, but a file
/// must round-trip without losing them. An [`Edge`] is exactly its endpoints
/// and weight; other keys on an edge are ignored when parsing.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::newtypes::{VertexId, Weight};

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier within the file.
    pub id: VertexId,

    /// Unknown keys preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Vertex {
    /// Creates a vertex with no extra attributes.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            extra: BTreeMap::new(),
        }
    }
}

/// An undirected, weighted edge.
///
/// `from` and `to` are interchangeable: `{u, v}` and `{v, u}` denote the same
/// link. Use [`Edge::same_link`] rather than `==` when testing membership
/// across inputs that may list endpoints in either order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint.
    pub from: VertexId,
    /// The other endpoint.
    pub to: VertexId,
    /// Non-negative edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Returns `true` if this edge joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (*self.from == *a && *self.to == *b) || (*self.from == *b && *self.to == *a)
    }

    /// Returns `true` if both edges join the same unordered vertex pair with
    /// the same weight.
    pub fn same_link(&self, other: &Edge) -> bool {
        self.weight == other.weight && self.connects(&other.from, &other.to)
    }

    /// Returns `true` if `v` is one of the endpoints.
    pub fn touches(&self, v: &str) -> bool {
        *self.from == *v || *self.to == *v
    }

    /// Returns the endpoint opposite `v`, or `None` if `v` is not an endpoint.
    pub fn other_end(&self, v: &str) -> Option<&VertexId> {
        if *self.from == *v {
            Some(&self.to)
        } else if *self.to == *v {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns the endpoints as an ordered pair (smaller id first).
    pub fn canonical_pair(&self) -> (&VertexId, &VertexId) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}
