#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod compare;
pub mod file;
pub mod graph;
pub mod kruskal;
pub mod newtypes;
pub mod prim;
pub mod score;
pub mod structures;
pub mod union_find;
pub mod validation;

#[cfg(test)]
mod test_helpers;

pub use compare::{Comparison, compare, compare_results, same_links};
pub use file::GraphFile;
pub use graph::{GraphBuildError, GraphEdge, QueryError, SpanGraph, build_graph};
pub use kruskal::{
    KruskalConfig, KruskalStep, MstResult, ScanPolicy, StepAction, compute_mst, kruskal,
};
pub use newtypes::{NewtypeError, VertexId, Weight};
pub use prim::{PrimResult, PrimStep, compute_prim_trace, prim_trace, prim_trace_from};
pub use score::{ScoreError, Verdict, score_selection};
pub use structures::{Edge, Vertex};
pub use union_find::{UnionFind, UnknownVertex, VertexSets};
pub use validation::{Check, Diagnostic, Location, Severity, ValidationResult, validate};

/// Returns the current version of the spantree-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
