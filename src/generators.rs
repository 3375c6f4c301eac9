//! Random and structured graphs with weights and heuristics attached.
//!
//! Used by property tests and benchmarks. Heuristics generated here are
//! consistent, so A* and the heuristic Branch and Bound are optimal on them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::num::NonZeroU32;

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::graph::Graph;
use crate::graph::NodeId;
use crate::weights::EdgeWeights;
use crate::weights::Heuristics;

/// A graph, its weights, and heuristics towards `goal`.
#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph<u32>,
    pub weights: EdgeWeights<u32>,
    pub heuristics: Heuristics<u32>,
    pub goal: NodeId,
}

/// A connected graph over `0..nodes` with goal `nodes - 1`.
///
/// A random spanning tree keeps it connected, then up to `extra_edges`
/// random edges are added, skipping self-loops and repeats. Weights are
/// drawn from `1..=max_weight`, heuristics are half the true distance to the
/// goal, rounded down.
pub fn random_connected<R: Rng>(
    rng: &mut R,
    nodes: NonZeroU32,
    extra_edges: usize,
    max_weight: NonZeroU32,
) -> GeneratedGraph {
    let (nodes, max_weight) = (nodes.get(), max_weight.get());
    let mut graph = Graph::new();
    let mut weights = EdgeWeights::new();

    for n in 1..nodes {
        let parent = rng.random_range(0..n);
        let w = rng.random_range(1..=max_weight);
        connect(&mut graph, &mut weights, parent, n, w);
    }
    for _ in 0..extra_edges {
        let a = rng.random_range(0..nodes);
        let b = rng.random_range(0..nodes);
        let w = rng.random_range(1..=max_weight);
        connect(&mut graph, &mut weights, a, b, w);
    }

    let goal = nodes - 1;
    let heuristics = distances_to(&graph, &weights, goal)
        .into_iter()
        .map(|(n, d)| (n, d / 2))
        .collect();

    GeneratedGraph {
        graph,
        weights,
        heuristics,
        goal,
    }
}

fn connect(graph: &mut Graph<u32>, weights: &mut EdgeWeights<u32>, a: NodeId, b: NodeId, w: u32) {
    if a != b && !graph.has_edge(a, b) {
        graph
            .add_weighted_edge(a, b, w, weights)
            .expect("weights are positive");
    }
}

/// A 4-connected `width` x `height` grid with unit weights.
///
/// Node ids are `y * width + x`, the goal is the bottom-right corner and
/// heuristics are Manhattan distances to it.
#[must_use]
pub fn grid(width: u32, height: u32) -> GeneratedGraph {
    let mut graph = Graph::new();
    let mut weights = EdgeWeights::new();
    let mut heuristics = Heuristics::new();

    for y in 0..height {
        for x in 0..width {
            let id = y * width + x;
            if x + 1 < width {
                graph
                    .add_weighted_edge(id, id + 1, 1, &mut weights)
                    .expect("weights are positive");
            }
            if y + 1 < height {
                graph
                    .add_weighted_edge(id, id + width, 1, &mut weights)
                    .expect("weights are positive");
            }
            heuristics.insert(id, (width - 1 - x) + (height - 1 - y));
        }
    }

    GeneratedGraph {
        graph,
        weights,
        heuristics,
        goal: (width * height).saturating_sub(1),
    }
}

/// Cheapest cost from every reachable node to `goal`.
///
/// Plain Dijkstra, relying on weights being symmetric.
#[must_use]
pub fn distances_to(
    graph: &Graph<u32>,
    weights: &EdgeWeights<u32>,
    goal: NodeId,
) -> FxHashMap<NodeId, u32> {
    let mut distances = FxHashMap::default();
    let mut open = BinaryHeap::new();
    open.push(Reverse((0u32, goal)));

    while let Some(Reverse((d, node))) = open.pop() {
        if distances.contains_key(&node) {
            continue;
        }
        distances.insert(node, d);
        for &neighbour in graph.neighbours(node) {
            if !distances.contains_key(&neighbour) {
                let c = weights.cost_or_max(neighbour, node);
                open.push(Reverse((d.saturating_add(c), neighbour)));
            }
        }
    }
    distances
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn random_graphs_are_connected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            let g = random_connected(&mut rng, nz(12), 8, nz(5));
            assert_eq!(g.goal, 11);
            assert!(g.graph.is_symmetric());
            let distances = distances_to(&g.graph, &g.weights, g.goal);
            assert_eq!(distances.len(), 12);
            assert_eq!(g.heuristics.len(), 12);
        }
    }

    #[test]
    fn heuristics_are_consistent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let g = random_connected(&mut rng, nz(20), 20, nz(9));
        for (src, dest, w) in g.weights.iter() {
            let hs = g.heuristics.get(src).unwrap();
            let hd = g.heuristics.get(dest).unwrap();
            assert!(hs <= w + hd, "{src}->{dest}: {hs} > {w} + {hd}");
        }
        assert_eq!(g.heuristics.get(g.goal), Some(0));
    }

    #[test]
    fn grid_shape() {
        let g = grid(4, 3);
        assert_eq!(g.goal, 11);
        assert_eq!(g.graph.node_count(), 12);
        // 3 * 3 horizontal + 4 * 2 vertical
        assert_eq!(g.graph.edge_count(), 17);
        assert_eq!(g.heuristics.get(0), Some(5));
        assert_eq!(distances_to(&g.graph, &g.weights, g.goal)[&0], 5);
    }

    #[test]
    fn single_node() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let g = random_connected(&mut rng, nz(1), 3, nz(1));
        assert_eq!(g.goal, 0);
        assert_eq!(g.graph.node_count(), 0);
    }
}
