//! Lookup tables the informed searches consult: edge costs and heuristics.
//!
//! Both answer missing entries with `None`, and offer a `*_or_max` variant
//! returning the `Cost` sentinel for callers that want a missing edge to be
//! maximally expensive instead of forbidden.

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::error::Result;
use crate::error::SearchError;
use crate::graph::NodeId;

/// Cost of traversing an edge in a given direction.
///
/// Keys are directional: `0->1` and `1->0` are independent entries. Use
/// `insert_symmetric` for undirected edges.
#[derive(Clone, Debug)]
pub struct EdgeWeights<C = u32>
where
    C: Cost,
{
    weights: FxHashMap<(NodeId, NodeId), C>,
}

impl<C> EdgeWeights<C>
where
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: FxHashMap::default(),
        }
    }

    /// Sets the cost of going from `src` to `dest`.
    ///
    /// Costs must be positive.
    pub fn insert(&mut self, src: NodeId, dest: NodeId, weight: C) -> Result<()> {
        if weight.is_zero() {
            return Err(SearchError::NonPositiveWeight { src, dest });
        }
        self.weights.insert((src, dest), weight);
        Ok(())
    }

    /// Sets the same cost on both directions of `src`-`dest`.
    pub fn insert_symmetric(&mut self, src: NodeId, dest: NodeId, weight: C) -> Result<()> {
        self.insert(src, dest, weight)?;
        self.insert(dest, src, weight)
    }

    #[inline(always)]
    #[must_use]
    pub fn get(&self, src: NodeId, dest: NodeId) -> Option<C> {
        self.weights.get(&(src, dest)).copied()
    }

    /// The cost of `src->dest`, or the sentinel for unknown edges.
    ///
    /// ```
    /// use graph_search::weights::EdgeWeights;
    ///
    /// let mut w = EdgeWeights::<u32>::new();
    /// w.insert(0, 1, 5).unwrap();
    /// assert_eq!(w.cost_or_max(0, 1), 5);
    /// assert_eq!(w.cost_or_max(1, 0), u32::MAX);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn cost_or_max(&self, src: NodeId, dest: NodeId) -> C {
        self.get(src, dest).unwrap_or_else(C::sentinel)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, C)> + '_ {
        self.weights.iter().map(|(&(s, d), &c)| (s, d, c))
    }
}

impl<C> Default for EdgeWeights<C>
where
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

/// Per-node estimate of the remaining cost to the goal.
#[derive(Clone, Debug)]
pub struct Heuristics<C = u32>
where
    C: Cost,
{
    values: FxHashMap<NodeId, C>,
}

impl<C> Heuristics<C>
where
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, node: NodeId, h: C) {
        self.values.insert(node, h);
    }

    #[inline(always)]
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<C> {
        self.values.get(&node).copied()
    }

    #[inline(always)]
    #[must_use]
    pub fn get_or(&self, node: NodeId, default: C) -> C {
        self.get(node).unwrap_or(default)
    }

    #[inline(always)]
    #[must_use]
    pub fn get_or_max(&self, node: NodeId) -> C {
        self.get(node).unwrap_or_else(C::sentinel)
    }

    /// Like `get`, but a missing value is an error.
    pub fn require(&self, node: NodeId) -> Result<C> {
        self.get(node).ok_or(SearchError::MissingHeuristic(node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<C> Default for Heuristics<C>
where
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FromIterator<(NodeId, C)> for Heuristics<C>
where
    C: Cost,
{
    fn from_iter<I: IntoIterator<Item = (NodeId, C)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_directional() {
        let mut w = EdgeWeights::<u32>::new();
        w.insert(0, 1, 3).unwrap();

        assert_eq!(w.get(0, 1), Some(3));
        assert_eq!(w.get(1, 0), None);
        assert_eq!(w.cost_or_max(1, 0), u32::MAX);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let mut w = EdgeWeights::<u32>::new();
        assert_eq!(
            w.insert(2, 3, 0),
            Err(SearchError::NonPositiveWeight { src: 2, dest: 3 })
        );
        assert!(w.is_empty());
    }

    #[test]
    fn symmetric_insert_validates_first() {
        let mut w = EdgeWeights::<u32>::new();
        assert!(w.insert_symmetric(0, 1, 0).is_err());
        assert!(w.is_empty());

        w.insert_symmetric(0, 1, 2).unwrap();
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn heuristic_lookups() {
        let h: Heuristics<u32> = [(0, 4), (1, 0)].into_iter().collect();

        assert_eq!(h.get(0), Some(4));
        assert_eq!(h.get_or(9, 0), 0);
        assert_eq!(h.get_or_max(9), u32::MAX);
        assert_eq!(h.require(1), Ok(0));
        assert_eq!(h.require(9), Err(SearchError::MissingHeuristic(9)));
    }
}
