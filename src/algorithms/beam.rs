use std::num::NonZeroUsize;

use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::error::Result;
use crate::error::SearchError;
use crate::frontier::HeuristicRank;
use crate::frontier::OpenList;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;
use crate::search::SearchTree;
use crate::weights::EdgeWeights;
use crate::weights::Heuristics;

/// Nodes expanded per iteration by `beam_search`.
pub const DEFAULT_BEAM_WIDTH: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Beam search with the default width of 3.
///
/// See `beam_search_with_width`.
#[must_use]
pub fn beam_search<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
) -> Option<Path> {
    beam(graph, start, goal, heuristics, weights, DEFAULT_BEAM_WIDTH)
}

/// Beam search.
///
/// Each iteration pops the `width` best nodes by heuristic alone and expands
/// them in order, returning as soon as one of them is the goal. Successors go
/// back into the one global queue instead of a per-level beam, so nodes that
/// lost a previous round compete again with newer ones. The beam is a global
/// approximation, not a strict per-level cut.
///
/// Missing heuristics rank last (the start node's defaults to zero). Returns
/// `None` once the queue runs dry.
pub fn beam_search_with_width<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
    width: usize,
) -> Result<Option<Path>> {
    let width = NonZeroUsize::new(width).ok_or(SearchError::InvalidBeamWidth)?;
    Ok(beam(graph, start, goal, heuristics, weights, width))
}

fn beam<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
    weights: &EdgeWeights<C>,
    width: NonZeroUsize,
) -> Option<Path> {
    let mut tree = SearchTree::<C>::new();
    let mut open = OpenList::<HeuristicRank<C>>::new();
    let mut explored = FxHashSet::<NodeId>::default();

    let root = tree.push_root(start, heuristics.get_or(start, C::zero()));
    open.push(&tree, root);

    let mut level = 0usize;
    while !open.is_empty() {
        for node_index in open.pop_many(width.get()) {
            let current = tree[node_index].node();
            if current == goal {
                let path = tree.path(node_index);
                log::debug!(
                    "Beam({start}->{goal}, w={width}): {path} at level {level}, {} nodes",
                    tree.len()
                );
                return Some(path);
            }

            for &neighbour in graph.neighbours(current) {
                if explored.contains(&neighbour) {
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
            explored.insert(current);
        }
        level += 1;
    }

    log::debug!("Beam({start}->{goal}, w={width}): exhausted after {level} levels");
    None
}
