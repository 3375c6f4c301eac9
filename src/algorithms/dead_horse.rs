//! Dead horses: nodes no simple path between the endpoints can go through.
//!
//! A node other than the start or the goal is a dead horse once at most one
//! of its distinct neighbours is still alive. A simple path passing through
//! it would have to come in and leave through two different live
//! neighbours, so there's no such path. Marking one can starve a neighbour,
//! which is why marks propagate up the search tree.

use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;

#[derive(Debug)]
pub(crate) struct DeadHorses {
    start: NodeId,
    goal: NodeId,
    dead: FxHashSet<NodeId>,
}

impl DeadHorses {
    pub(crate) fn new(start: NodeId, goal: NodeId) -> Self {
        Self {
            start,
            goal,
            dead: FxHashSet::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn contains(&self, node: NodeId) -> bool {
        self.dead.contains(&node)
    }

    pub(crate) fn len(&self) -> usize {
        self.dead.len()
    }

    /// Whether `node` has at most one distinct live neighbour.
    fn is_dead_end<C: Cost>(&self, graph: &Graph<C>, node: NodeId) -> bool {
        if node == self.start || node == self.goal {
            return false;
        }
        let mut live = None;
        for &n in graph.neighbours(node) {
            if n == node || self.contains(n) {
                continue;
            }
            match live {
                None => live = Some(n),
                Some(l) if l != n => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Marks `node` if it's a dead end. Returns whether it's dead now.
    pub(crate) fn check<C: Cost>(&mut self, graph: &Graph<C>, node: NodeId) -> bool {
        if self.contains(node) {
            return true;
        }
        if self.is_dead_end(graph, node) {
            log::trace!("DeadHorse: {node}");
            self.dead.insert(node);
            return true;
        }
        false
    }

    /// Checks `node_index` and its ancestors, stopping at the first live one.
    ///
    /// Returns how many nodes were newly marked.
    pub(crate) fn propagate<C: Cost>(
        &mut self,
        graph: &Graph<C>,
        tree: &SearchTree<C>,
        node_index: SearchTreeIndex,
    ) -> usize {
        let before = self.len();
        for node in tree.ancestry(node_index) {
            if !self.check(graph, node) {
                break;
            }
        }
        self.len() - before
    }
}
