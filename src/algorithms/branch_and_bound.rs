//! Branch and bound, in three flavours.
//!
//! - `branch_and_bound`: uniform-cost order, collects every goal path within
//!   the oracle bound.
//! - `branch_and_bound_dead_horse`: uniform-cost order with an extended list
//!   and dead-horse pruning, stops at the first goal.
//! - `branch_and_bound_with_heuristics`: `g + h` order, stops at the first
//!   goal within the oracle bound.

use rustc_hash::FxHashSet;

use super::SearchStats;
use super::dead_horse::DeadHorses;
use crate::cost::Cost;
use crate::frontier::AStarRank;
use crate::frontier::CostRank;
use crate::frontier::OpenList;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;
use crate::search::SearchTree;
use crate::weights::EdgeWeights;
use crate::weights::Heuristics;

/// Branch and bound collecting every goal path.
///
/// Nodes are expanded cheapest-first. Reaching the goal records the path and
/// keeps going, the goal itself is never expanded nor closed. A node is
/// closed when it's expanded, and closed nodes aren't pushed again, but
/// copies already queued still get expanded. Successors costing more than
/// `oracle` are dropped.
///
/// Paths come out in non-decreasing cost order.
#[must_use]
pub fn branch_and_bound<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
    oracle: C,
) -> Vec<Path> {
    let mut tree = SearchTree::<C>::new();
    let mut open = OpenList::<CostRank<C>>::new();
    let mut visited = FxHashSet::<NodeId>::default();
    let mut paths = vec![];

    let root = tree.push_root(start, heuristics.get_or(start, C::zero()));
    open.push(&tree, root);

    while let Some(node_index) = open.pop() {
        let current = tree[node_index].node();
        if current == goal {
            let path = tree.path(node_index);
            log::trace!("B&B({start}->{goal}): found {path} at g={}", tree[node_index].g());
            paths.push(path);
            continue;
        }

        visited.insert(current);
        let g = tree[node_index].g();
        for &neighbour in graph.neighbours(current) {
            if visited.contains(&neighbour) {
                continue;
            }
            let c = weights.cost_or_max(current, neighbour);
            if g.plus(c) > oracle {
                continue;
            }
            let child = tree.push_child(node_index, neighbour, c, heuristics.get_or_max(neighbour));
            open.push(&tree, child);
        }
    }

    log::debug!(
        "B&B({start}->{goal}, {oracle}): {} paths, {} nodes",
        paths.len(),
        tree.len()
    );
    paths
}

/// Branch and bound with an extended list and dead horses.
///
/// Expands cheapest-first, each node at most once (the extended list).
/// Successors that are dead horses, nodes with at most one live neighbour
/// left, are never pushed. After each expansion the expanded node and its
/// ancestors are checked again, so a branch that only led into dead ends
/// dies as a whole and is never offered as a successor again.
///
/// Returns the first goal popped. With positive edge costs that's a cheapest
/// path.
#[must_use]
pub fn branch_and_bound_dead_horse<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
) -> Path {
    branch_and_bound_dead_horse_with_stats(graph, start, goal, heuristics, weights).0
}

/// `branch_and_bound_dead_horse`, also reporting the work it did.
pub fn branch_and_bound_dead_horse_with_stats<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
) -> (Path, SearchStats) {
    let mut tree = SearchTree::<C>::new();
    let mut open = OpenList::<CostRank<C>>::new();
    let mut extended = FxHashSet::<NodeId>::default();
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

        if dead_horses.contains(current) || !extended.insert(current) {
            continue;
        }

        expanded += 1;
        for &neighbour in graph.neighbours(current) {
            if extended.contains(&neighbour) || dead_horses.check(graph, neighbour) {
                continue;
            }
            let child = tree.push_child(
                node_index,
                neighbour,
                weights.cost_or_max(current, neighbour),
                heuristics.get_or_max(neighbour),
            );
            open.push(&tree, child);
        }
        dead_horses.propagate(graph, &tree, node_index);
    }

    let stats = SearchStats {
        expanded,
        generated: open.pushed(),
        dead_horses: dead_horses.len(),
    };
    log::debug!("B&B/DeadHorse({start}->{goal}): {path}, {stats:?}");
    (path, stats)
}

/// Branch and bound ordered by `g + h`.
///
/// A*-like ordering without dead horses. Closed nodes aren't pushed again,
/// successors costing more than `oracle` (cost so far only) are dropped, and
/// the first goal popped is returned.
#[must_use]
pub fn branch_and_bound_with_heuristics<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
    oracle: C,
) -> Path {
    let mut tree = SearchTree::<C>::new();
    let mut open = OpenList::<AStarRank<C>>::new();
    let mut visited = FxHashSet::<NodeId>::default();

    let root = tree.push_root(start, heuristics.get_or(start, C::zero()));
    open.push(&tree, root);

    while let Some(node_index) = open.pop() {
        let current = tree[node_index].node();
        if current == goal {
            let path = tree.path(node_index);
            log::debug!(
                "B&B/Heuristic({start}->{goal}, {oracle}): {path}, {} nodes",
                tree.len()
            );
            return path;
        }

        visited.insert(current);
        let g = tree[node_index].g();
        for &neighbour in graph.neighbours(current) {
            if visited.contains(&neighbour) {
                continue;
            }
            let c = weights.cost_or_max(current, neighbour);
            if g.plus(c) > oracle {
                continue;
            }
            let child = tree.push_child(node_index, neighbour, c, heuristics.get_or_max(neighbour));
            open.push(&tree, child);
        }
    }

    log::debug!("B&B/Heuristic({start}->{goal}, {oracle}): exhausted");
    Path::empty()
}
