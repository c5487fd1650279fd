//! Weighted graph generator.
//!
//! Vertices are scattered over a canvas and every edge is weighted by the
//! distance between its endpoints, the way hand-drawn lesson graphs are.
//! Output is a plain [`GraphFile`] so benchmarks exercise the same parse and
//! build path as real input.

pub mod edges;
pub mod points;

use rand::SeedableRng;
use rand::rngs::StdRng;
use spantree_core::GraphFile;

/// How edges are laid between the vertices of one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Topology {
    /// Every pair of vertices is joined.
    Complete,
    /// A random spanning tree plus roughly `extra_per_vertex` extra edges
    /// per vertex.
    Sparse {
        /// Average number of non-tree edges per vertex.
        extra_per_vertex: f64,
    },
}

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Number of connected components; vertices are dealt out round-robin.
    pub components: usize,
    /// Edge layout inside each component.
    pub topology: Topology,
    /// Round weights to whole numbers instead of two decimals.
    pub integral_weights: bool,
    /// Fraction of edges whose weight is replaced by a small shared value,
    /// to exercise tie-breaking.
    pub tie_fraction: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 30 vertices, complete: 435 edges.
    Small,
    /// 150 vertices, complete: 11 175 edges.
    Medium,
    /// 2 000 vertices, sparse: about 8 000 edges.
    Large,
    /// 10 000 vertices, sparse: about 40 000 edges.
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (vertex_count, topology) = match self {
            SizeTier::Small => (30, Topology::Complete),
            SizeTier::Medium => (150, Topology::Complete),
            SizeTier::Large => (
                2_000,
                Topology::Sparse {
                    extra_per_vertex: 3.0,
                },
            ),
            SizeTier::XLarge => (
                10_000,
                Topology::Sparse {
                    extra_per_vertex: 3.0,
                },
            ),
        };
        GeneratorConfig {
            seed,
            vertex_count,
            components: 1,
            topology,
            integral_weights: false,
            tie_fraction: 0.05,
        }
    }
}

/// Generates a [`GraphFile`] from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Vertex ids
/// are `v0`, `v1`, ... in file order.
pub fn generate_graph(config: &GeneratorConfig) -> GraphFile {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let placed = points::scatter(config.vertex_count, &mut rng);
    let edges = edges::connect(&placed, config, &mut rng);
    let vertices = placed.into_iter().map(|p| p.vertex).collect();
    GraphFile {
        vertices,
        edges,
        ..GraphFile::default()
    }
}
