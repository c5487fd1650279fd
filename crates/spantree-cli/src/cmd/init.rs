//! Implementation of `spantree init`.
//!
//! Writes a new graph file to stdout.
//!
//! Flags:
//! - `--example`: write the five-vertex classroom graph (minimum spanning
//!   tree weight 23) with canvas coordinates instead of an empty skeleton.
//!
//! Exit codes: 0 = always succeeds unless stdout write fails.
use serde_json::json;
use spantree_core::{Edge, GraphFile, Vertex, VertexId, Weight};

use crate::error::CliError;
use crate::format::write_json;

/// `(id, x, y)` for the classroom vertices.
const CLASSROOM_VERTICES: [(&str, u32, u32); 5] = [
    ("A", 150, 100),
    ("B", 350, 100),
    ("C", 450, 200),
    ("D", 250, 200),
    ("E", 150, 300),
];

const CLASSROOM_EDGES: [(&str, &str, u32); 8] = [
    ("A", "B", 7),
    ("A", "D", 5),
    ("B", "C", 8),
    ("B", "D", 9),
    ("C", "D", 7),
    ("C", "E", 5),
    ("D", "E", 15),
    ("E", "A", 6),
];

/// Runs the `init` command.
///
/// # Errors
///
/// [`CliError::InternalError`] if the built-in example has an invalid id,
/// or [`CliError::IoError`] if stdout cannot be written.
pub fn run(example: bool) -> Result<(), CliError> {
    let file = if example {
        build_example_file()?
    } else {
        GraphFile::default()
    };
    write_json(&mut std::io::stdout().lock(), &file)
}

fn build_example_file() -> Result<GraphFile, CliError> {
    let id = |s: &str| {
        VertexId::try_from(s).map_err(|e| CliError::InternalError {
            detail: format!("built-in example id {s:?} is invalid: {e}"),
        })
    };

    let mut vertices = Vec::with_capacity(CLASSROOM_VERTICES.len());
    for (name, x, y) in CLASSROOM_VERTICES {
        let mut vertex = Vertex::new(id(name)?);
        vertex.extra.insert("x".to_owned(), json!(x));
        vertex.extra.insert("y".to_owned(), json!(y));
        vertex.extra.insert("label".to_owned(), json!(name));
        vertices.push(vertex);
    }

    let mut edges = Vec::with_capacity(CLASSROOM_EDGES.len());
    for (from, to, weight) in CLASSROOM_EDGES {
        edges.push(Edge::new(id(from)?, id(to)?, Weight::from(weight)));
    }

    Ok(GraphFile {
        vertices,
        edges,
        ..GraphFile::default()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use spantree_core::compute_mst;

    use super::*;

    #[test]
    fn example_file_has_classroom_optimum() {
        let file = build_example_file().expect("example builds");
        let mst = compute_mst(&file).expect("example is a valid graph");
        assert_eq!(mst.total_weight, Weight::from(23));
        assert!(mst.is_spanning_tree());
    }

    #[test]
    fn example_vertices_carry_coordinates() {
        let file = build_example_file().expect("example builds");
        let json = serde_json::to_value(&file).expect("serialize");
        assert_eq!(json["vertices"][2]["x"], json!(450));
        assert_eq!(json["vertices"][2]["label"], json!("C"));
    }
}
