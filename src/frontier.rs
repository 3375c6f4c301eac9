//! Priority-ordered open lists and the ranks that order them.
//!
//! Entries with equal rank come out in the order they went in, which makes
//! every search deterministic for a given graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::cost::Cost;
use crate::search::SearchTree;
use crate::search::SearchTreeIndex;
use crate::search::SearchTreeNode;

/// How an open list ranks search nodes. Lower is better.
pub trait Rank<C>: Copy + Debug + Ord
where
    C: Cost,
{
    fn of(node: &SearchTreeNode<C>) -> Self;
}

/// The ranking value for branch and bound
///
/// We prefer better g-values.
///
/// ```
/// use graph_search::frontier::CostRank;
///
/// assert!(CostRank::new(1u32) < CostRank::new(2u32));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CostRank<C: Cost> {
    g: C,
}
impl<C: Cost> CostRank<C> {
    pub fn new(g: C) -> Self {
        Self { g }
    }
}
impl<C: Cost> Rank<C> for CostRank<C> {
    #[inline(always)]
    fn of(node: &SearchTreeNode<C>) -> Self {
        Self::new(node.g())
    }
}

/// The ranking value for beam search, which ignores the cost so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeuristicRank<C: Cost> {
    h: C,
}
impl<C: Cost> HeuristicRank<C> {
    pub fn new(h: C) -> Self {
        Self { h }
    }
}
impl<C: Cost> Rank<C> for HeuristicRank<C> {
    #[inline(always)]
    fn of(node: &SearchTreeNode<C>) -> Self {
        Self::new(node.h())
    }
}

/// The ranking tuple for A*
///
/// We prefer better f-values, and tie break for lower h.
///
/// ```
/// use graph_search::frontier::AStarRank;
///
/// // Same f, lower h wins.
/// assert!(AStarRank::new(2u32, 0u32) < AStarRank::new(0u32, 2u32));
/// // Sentinel heuristics saturate instead of wrapping.
/// assert!(AStarRank::new(1u32, 3u32) < AStarRank::new(1u32, u32::MAX));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AStarRank<C: Cost> {
    f: C,
    h: C,
}
impl<C: Cost> AStarRank<C> {
    pub fn new(g: C, h: C) -> Self {
        Self { f: g.plus(h), h }
    }
    pub fn f(&self) -> C {
        self.f
    }
}
impl<C: Cost> Rank<C> for AStarRank<C> {
    #[inline(always)]
    fn of(node: &SearchTreeNode<C>) -> Self {
        Self::new(node.g(), node.h())
    }
}

/// Heap entry. Ranking only looks at `(rank, sequence)`.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
struct OpenEntry<R> {
    rank: R,
    sequence: u64,
    node_index: SearchTreeIndex,
}

impl<R: Ord> PartialEq for OpenEntry<R> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        (&self.rank, self.sequence) == (&other.rank, other.sequence)
    }
}
impl<R: Ord> Eq for OpenEntry<R> {}

impl<R: Ord> PartialOrd for OpenEntry<R> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<R: Ord> Ord for OpenEntry<R> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue of search tree nodes.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct OpenList<R>
where
    R: Ord,
{
    heap: BinaryHeap<Reverse<OpenEntry<R>>>,
    pushed: u64,
}

impl<R> OpenList<R>
where
    R: Ord + Copy + Debug,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Queues `node_index` ranked by `R`.
    pub fn push<C>(&mut self, tree: &SearchTree<C>, node_index: SearchTreeIndex)
    where
        C: Cost,
        R: Rank<C>,
    {
        let rank = R::of(&tree[node_index]);
        self.heap.push(Reverse(OpenEntry {
            rank,
            sequence: self.pushed,
            node_index,
        }));
        self.pushed += 1;
    }

    #[must_use]
    pub fn pop(&mut self) -> Option<SearchTreeIndex> {
        self.heap.pop().map(|Reverse(e)| e.node_index)
    }

    /// Pops up to `n` nodes, best first.
    #[must_use]
    pub fn pop_many(&mut self, n: usize) -> Vec<SearchTreeIndex> {
        let mut popped = Vec::with_capacity(n);
        while popped.len() < n {
            match self.pop() {
                Some(i) => popped.push(i),
                None => break,
            }
        }
        popped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total pushes over the lifetime of this list.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}

impl<R> Default for OpenList<R>
where
    R: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking() {
        let c0 = 0u32;
        let c1 = 1u32;
        let c2 = 2u32;

        let g = c2;
        let h_low = c0;
        let h_high = c1;
        assert!(AStarRank::new(g, h_low) < AStarRank::new(g, h_high));
        assert!(AStarRank::new(g, h_high) == AStarRank::new(g, h_high));
        assert!(AStarRank::new(g, h_high) > AStarRank::new(g, h_low));

        // Same f-value, needs tie-breaking on h
        let low = AStarRank::new(c2, c0);
        let high = AStarRank::new(c0, c2);
        assert!(low < high);
        assert!(low.f == high.f);
        assert!(low.h < high.h);

        assert!(CostRank::new(c0) < CostRank::new(c1));
        assert!(HeuristicRank::new(c2) > HeuristicRank::new(c1));
    }

    #[test]
    fn pops_best_first() {
        let mut tree = SearchTree::<u32>::new();
        let root = tree.push_root(0, 9);
        let a = tree.push_child(root, 1, 5, 0);
        let b = tree.push_child(root, 2, 1, 0);

        let mut open = OpenList::<CostRank<u32>>::new();
        open.push(&tree, a);
        open.push(&tree, b);
        open.push(&tree, root);

        assert_eq!(open.pop(), Some(root));
        assert_eq!(open.pop(), Some(b));
        assert_eq!(open.pop(), Some(a));
        assert_eq!(open.pop(), None);
        assert_eq!(open.pushed(), 3);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut tree = SearchTree::<u32>::new();
        let root = tree.push_root(0, 0);
        let children: Vec<_> = (1..=4).map(|n| tree.push_child(root, n, 1, 3)).collect();

        let mut open = OpenList::<HeuristicRank<u32>>::new();
        for &c in &children {
            open.push(&tree, c);
        }

        assert_eq!(open.pop_many(3), children[..3].to_vec());
        assert_eq!(open.pop_many(3), children[3..].to_vec());
        assert!(open.pop_many(3).is_empty());
    }
}
