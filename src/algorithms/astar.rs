//! A* with oracle pruning and dead horses.

use rustc_hash::FxHashSet;

use super::SearchStats;
use super::dead_horse::DeadHorses;
use crate::cost::Cost;
use crate::frontier::AStarRank;
use crate::frontier::OpenList;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;
use crate::search::SearchTree;
use crate::weights::EdgeWeights;
use crate::weights::Heuristics;

/// A* search.
///
/// Expands by `f = g + h`, tie-breaking on lower `h` and then on insertion
/// order. Successors whose `f` exceeds `oracle` are pruned. Nodes are closed
/// when expanded and never pushed or expanded again. Dead horses, nodes with
/// at most one live neighbour left, are never pushed, and each expansion
/// re-checks the expanded node and its ancestors so dead branches stop being
/// offered.
///
/// Returns the path to the goal the first time it's popped. That's optimal
/// only when the heuristic is admissible, which isn't checked: an
/// overestimating heuristic silently yields a worse path.
///
/// Missing heuristics rank successors last (and get pruned by any oracle
/// below the sentinel). The start node's defaults to zero.
///
/// ```
/// use graph_search::algorithms::astar;
/// use graph_search::graph::Graph;
/// use graph_search::weights::{EdgeWeights, Heuristics};
///
/// let mut g = Graph::<u32>::new();
/// let mut w = EdgeWeights::new();
/// g.add_weighted_edge(0, 1, 1, &mut w).unwrap();
/// g.add_weighted_edge(1, 2, 1, &mut w).unwrap();
/// g.add_weighted_edge(0, 2, 5, &mut w).unwrap();
/// let h: Heuristics<u32> = [(0, 2), (1, 1), (2, 0)].into_iter().collect();
///
/// assert_eq!(astar(&g, 0, 2, &h, &w, 10).nodes(), &[0, 1, 2]);
/// ```
#[must_use]
pub fn astar<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
    oracle: C,
) -> Path {
    astar_with_stats(graph, start, goal, heuristics, weights, oracle).0
}

/// `astar`, also reporting the work it did.
pub fn astar_with_stats<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
    oracle: C,
) -> (Path, SearchStats) {
    let mut tree = SearchTree::<C>::new();
    let mut open = OpenList::<AStarRank<C>>::new();
    let mut closed = FxHashSet::<NodeId>::default();
    let mut dead_horses = DeadHorses::new(start, goal);
    let mut expanded = 0usize;

    let root = tree.push_root(start, heuristics.get_or(start, C::zero()));
    open.push(&tree, root);

    let mut path = Path::empty();
    while let Some(node_index) = open.pop() {
        let current = tree[node_index].node();
        if current == goal {
            path = tree.path(node_index);
            break;
        }

        if !closed.insert(current) || dead_horses.contains(current) {
            continue;
        }

        expanded += 1;
        let g = tree[node_index].g();
        for &neighbour in graph.neighbours(current) {
            if closed.contains(&neighbour) || dead_horses.check(graph, neighbour) {
                continue;
            }
            let c = weights.cost_or_max(current, neighbour);
            let h = heuristics.get_or_max(neighbour);
            let f = g.plus(c).plus(h);
            if f > oracle {
                log::trace!("A*: pruned {current}->{neighbour} at f={f} > {oracle}");
                continue;
            }
            let child = tree.push_child(node_index, neighbour, c, h);
            open.push(&tree, child);
        }
        dead_horses.propagate(graph, &tree, node_index);
    }

    let stats = SearchStats {
        expanded,
        generated: open.pushed(),
        dead_horses: dead_horses.len(),
    };
    log::debug!("A*({start}->{goal}, {oracle}): {path}, {stats:?}");
    (path, stats)
}
