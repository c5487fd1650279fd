//! Vertex placement on a 2-D canvas.

use rand::Rng;
use rand::rngs::StdRng;
use serde_json::json;
use spantree_core::{Vertex, VertexId};

/// Canvas size matching the lesson graphs.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Canvas size matching the lesson graphs.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// A generated vertex and its exact position.
#[derive(Debug, Clone)]
pub struct Placed {
    /// The vertex record, with rounded `x`/`y` in its extra fields.
    pub vertex: Vertex,
    /// Exact horizontal position.
    pub x: f64,
    /// Exact vertical position.
    pub y: f64,
}

impl Placed {
    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Placed) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Scatters `count` vertices uniformly over the canvas.
pub fn scatter(count: usize, rng: &mut StdRng) -> Vec<Placed> {
    (0..count)
        .map(|i| {
            let x = rng.gen_range(0.0..CANVAS_WIDTH);
            let y = rng.gen_range(0.0..CANVAS_HEIGHT);
            let mut vertex = Vertex::new(vertex_id(i));
            vertex.extra.insert("x".to_owned(), json!(x.round()));
            vertex.extra.insert("y".to_owned(), json!(y.round()));
            Placed { vertex, x, y }
        })
        .collect()
}

/// The id of the `index`-th generated vertex.
pub fn vertex_id(index: usize) -> VertexId {
    let s = format!("v{index}");
    VertexId::try_from(s.as_str()).unwrap_or_else(|_| unreachable!())
}
