//! Edge layout and weighting.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use spantree_core::{Edge, Weight};

use super::points::Placed;
use super::{GeneratorConfig, Topology};

/// Weight given to edges picked for a forced tie.
const TIE_WEIGHT: f64 = 1.0;

/// Lays edges over `placed` according to `config` and shuffles them so file
/// order carries no information about weight or structure.
pub fn connect(placed: &[Placed], config: &GeneratorConfig, rng: &mut StdRng) -> Vec<Edge> {
    let n = placed.len();
    let k = config.components.clamp(1, n.max(1));
    let mut edges = Vec::new();

    for component in 0..k {
        let members: Vec<usize> = (component..n).step_by(k).collect();
        match config.topology {
            Topology::Complete => {
                for (i, &a) in members.iter().enumerate() {
                    for &b in &members[i + 1..] {
                        edges.push(weighted(placed, a, b, config, rng));
                    }
                }
            }
            Topology::Sparse { extra_per_vertex } => {
                for i in 1..members.len() {
                    let parent = members[rng.gen_range(0..i)];
                    edges.push(weighted(placed, members[i], parent, config, rng));
                }
                if members.len() >= 2 {
                    let extra = (members.len() as f64 * extra_per_vertex).round() as usize;
                    for _ in 0..extra {
                        let a = members[rng.gen_range(0..members.len())];
                        let b = members[rng.gen_range(0..members.len())];
                        if a != b {
                            edges.push(weighted(placed, a, b, config, rng));
                        }
                    }
                }
            }
        }
    }

    edges.shuffle(rng);
    edges
}

fn weighted(
    placed: &[Placed],
    a: usize,
    b: usize,
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> Edge {
    let raw = if rng.gen_bool(config.tie_fraction.clamp(0.0, 1.0)) {
        TIE_WEIGHT
    } else {
        placed[a].distance(&placed[b])
    };
    let rounded = if config.integral_weights {
        raw.round()
    } else {
        (raw * 100.0).round() / 100.0
    };
    let weight = Weight::try_from(rounded).unwrap_or(Weight::ZERO);

    // Randomize endpoint order; edges are undirected.
    let (from, to) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
    Edge::new(
        placed[from].vertex.id.clone(),
        placed[to].vertex.id.clone(),
        weight,
    )
}
