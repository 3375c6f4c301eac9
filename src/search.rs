//! The search tree shared by the frontier-based algorithms.
//!
//! Nodes only ever get appended, and refer to their parent by index, so a
//! path is rebuilt by walking indices back to the root.

use std::fmt::Debug;

use nonmax::NonMaxUsize;

use crate::cost::Cost;
use crate::graph::NodeId;
use crate::path::Path;

/// A reference to a `SearchTreeNode<C>` within its `SearchTree<C>`.
///
/// `NonMaxUsize` keeps `Option<SearchTreeIndex>` as wide as a `usize`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTreeIndex {
    index: NonMaxUsize,
}

impl SearchTreeIndex {
    #[inline(always)]
    fn new(index: usize) -> Self {
        Self {
            index: NonMaxUsize::new(index).expect("Search tree is out of indices"),
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn get(&self) -> usize {
        self.index.get()
    }
}

/// A frontier entry: the node it reached, how, and what it's estimated to
/// cost.
#[derive(Debug)]
#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct SearchTreeNode<C>
where
    C: Cost,
{
    pub(crate) parent: Option<SearchTreeIndex>,
    pub(crate) node: NodeId,
    /// Cost so far.
    pub(crate) g: C,
    /// Heuristic estimate.
    pub(crate) h: C,
}

impl<C> SearchTreeNode<C>
where
    C: Cost,
{
    pub fn new(node: NodeId, parent: Option<SearchTreeIndex>, g: C, h: C) -> Self {
        Self { parent, node, g, h }
    }

    #[inline(always)]
    pub fn node(&self) -> NodeId {
        self.node
    }
    #[inline(always)]
    pub fn g(&self) -> C {
        self.g
    }
    #[inline(always)]
    pub fn h(&self) -> C {
        self.h
    }
    #[inline(always)]
    pub fn parent(&self) -> Option<SearchTreeIndex> {
        self.parent
    }
}

#[cfg_attr(feature = "inspect", derive(Clone))]
pub struct SearchTree<C>
where
    C: Cost,
{
    nodes: Vec<SearchTreeNode<C>>,
}

impl<C> SearchTree<C>
where
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    #[inline(always)]
    pub fn push(&mut self, node: SearchTreeNode<C>) -> SearchTreeIndex {
        let index = SearchTreeIndex::new(self.nodes.len());
        self.nodes.push(node);
        index
    }

    /// Adds a root node.
    #[inline(always)]
    pub fn push_root(&mut self, node: NodeId, h: C) -> SearchTreeIndex {
        self.push(SearchTreeNode::new(node, None, C::zero(), h))
    }

    /// Adds a node reached from `parent` through an edge costing `c`.
    #[inline(always)]
    pub fn push_child(&mut self, parent: SearchTreeIndex, node: NodeId, c: C, h: C) -> SearchTreeIndex {
        let g = self[parent].g.plus(c);
        self.push(SearchTreeNode::new(node, Some(parent), g, h))
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes from `node_index` back to its root.
    pub fn ancestry(&self, node_index: SearchTreeIndex) -> Ancestry<'_, C> {
        Ancestry {
            tree: self,
            next: Some(node_index),
        }
    }

    #[must_use]
    pub fn path(&self, node_index: SearchTreeIndex) -> Path {
        let mut path = Path::empty();
        for n in self.ancestry(node_index) {
            path.push(n);
        }
        path.reverse();
        path
    }
}

/// Walks parent links, yielding the node each search node reached.
pub struct Ancestry<'t, C>
where
    C: Cost,
{
    tree: &'t SearchTree<C>,
    next: Option<SearchTreeIndex>,
}

impl<C> Iterator for Ancestry<'_, C>
where
    C: Cost,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next?;
        let n = &self.tree[i];
        debug_assert!(n.parent.is_none_or(|p| p.get() < i.get()));
        self.next = n.parent;
        Some(n.node)
    }
}

impl<C> Default for SearchTree<C>
where
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::ops::Index<SearchTreeIndex> for SearchTree<C>
where
    C: Cost,
{
    type Output = SearchTreeNode<C>;

    #[inline(always)]
    fn index(&self, index: SearchTreeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl<C> std::fmt::Debug for SearchTree<C>
where
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_reconstruction() {
        let mut tree = SearchTree::<u32>::new();
        let root = tree.push_root(0, 5);
        let a = tree.push_child(root, 1, 2, 3);
        let b = tree.push_child(a, 2, 4, 0);
        let _sibling = tree.push_child(root, 3, 1, 1);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree[b].g(), 6);
        assert_eq!(tree.path(b).nodes(), &[0, 1, 2]);
        assert_eq!(tree.path(root).nodes(), &[0]);
        assert_eq!(tree.ancestry(b).collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn saturating_g() {
        let mut tree = SearchTree::<u32>::new();
        let root = tree.push_root(0, 0);
        let a = tree.push_child(root, 1, u32::MAX, 0);
        let b = tree.push_child(a, 2, 1, 0);

        assert_eq!(tree[b].g(), u32::MAX);
    }

    #[test]
    fn index_fits_in_option() {
        assert_eq!(
            std::mem::size_of::<Option<SearchTreeIndex>>(),
            std::mem::size_of::<usize>()
        );
    }
}
