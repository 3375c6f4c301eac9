//! The undirected graph every search runs on.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cost::Cost;
use crate::error::Result;
use crate::weights::EdgeWeights;
use crate::weights::Heuristics;

/// Identifies a node. Nodes exist once an edge touches them.
pub type NodeId = u32;

/// Neighbour list of a single node, in insertion order.
///
/// Most hand-built graphs have a handful of neighbours per node, so these
/// stay inline.
pub type Neighbours = SmallVec<[NodeId; 4]>;

/// An undirected graph with per-node heuristic estimates.
///
/// Every `add_edge(a, b)` records `b` as a neighbour of `a` and `a` as a
/// neighbour of `b`, so adjacency is always symmetric. Neighbour order is the
/// insertion order, and searches that iterate neighbours inherit it. There's
/// no removal, the graph only grows.
#[derive(Clone, Debug)]
pub struct Graph<C = u32>
where
    C: Cost,
{
    adjacency: FxHashMap<NodeId, Neighbours>,
    heuristics: Heuristics<C>,
}

impl<C> Graph<C>
where
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            heuristics: Heuristics::new(),
        }
    }

    /// Builds a graph from a list of undirected edges.
    ///
    /// ```
    /// use graph_search::graph::Graph;
    ///
    /// let g = Graph::<u32>::from_edges([(0, 1), (1, 2)]);
    /// assert_eq!(g.neighbours(1), &[0, 2]);
    /// assert!(g.neighbours(7).is_empty());
    /// ```
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut g = Self::new();
        for (src, dest) in edges {
            g.add_edge(src, dest);
        }
        g
    }

    /// Adds the undirected edge `src`-`dest`.
    ///
    /// Inserting the same edge twice duplicates it in both neighbour lists.
    pub fn add_edge(&mut self, src: NodeId, dest: NodeId) {
        self.adjacency.entry(src).or_default().push(dest);
        self.adjacency.entry(dest).or_default().push(src);

        self.verify_symmetry();
    }

    /// Adds the undirected edge `src`-`dest` with the same cost both ways.
    pub fn add_weighted_edge(
        &mut self,
        src: NodeId,
        dest: NodeId,
        weight: C,
        weights: &mut EdgeWeights<C>,
    ) -> Result<()> {
        weights.insert_symmetric(src, dest, weight)?;
        self.add_edge(src, dest);
        Ok(())
    }

    /// The neighbours of `node`. Unknown nodes have none.
    #[inline(always)]
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        match self.adjacency.get(&node) {
            Some(ns) => ns.as_slice(),
            None => &[],
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Whether `dest` is in the neighbour list of `src`.
    #[must_use]
    pub fn has_edge(&self, src: NodeId, dest: NodeId) -> bool {
        self.neighbours(src).contains(&dest)
    }

    /// All known nodes, sorted.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let endpoints: usize = self.adjacency.values().map(|ns| ns.len()).sum();
        endpoints / 2
    }

    pub fn set_heuristic(&mut self, node: NodeId, h: C) {
        self.heuristics.insert(node, h);
    }

    #[must_use]
    pub fn heuristic(&self, node: NodeId) -> Option<C> {
        self.heuristics.get(node)
    }

    /// The heuristic of `node`, or the sentinel when it was never set.
    #[must_use]
    pub fn heuristic_or_max(&self, node: NodeId) -> C {
        self.heuristics.get_or_max(node)
    }

    #[must_use]
    pub fn heuristics(&self) -> &Heuristics<C> {
        &self.heuristics
    }

    /// Checks that every neighbour relation has its mirror.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .all(|(&a, ns)| ns.iter().all(|&b| self.neighbours(b).contains(&a)))
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_symmetry(&self) {}
    #[inline(always)]
    #[cfg(feature = "verify")]
    fn verify_symmetry(&self) {
        debug_assert!(self.is_symmetric(), "Adjacency lost its symmetry: {self:?}");
    }
}

impl<C> Default for Graph<C>
where
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Display for Graph<C>
where
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "Graph({} nodes, {} edges):",
            self.node_count(),
            self.edge_count()
        )?;
        for node in self.nodes() {
            write!(f, "  {node}:")?;
            for n in self.neighbours(node) {
                write!(f, " {n}")?;
            }
            if let Some(h) = self.heuristic(node) {
                write!(f, " (h={h})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_undirected() {
        let mut g = Graph::<u32>::new();
        g.add_edge(0, 1);
        g.add_edge(1, 2);

        assert_eq!(g.neighbours(0), &[1]);
        assert_eq!(g.neighbours(1), &[0, 2]);
        assert_eq!(g.neighbours(2), &[1]);
        assert!(g.has_edge(2, 1));
        assert!(!g.has_edge(0, 2));
        assert!(g.is_symmetric());
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.nodes(), vec![0, 1, 2]);
    }

    #[test]
    fn unknown_nodes_have_no_neighbours() {
        let g = Graph::<u32>::from_edges([(0, 1)]);
        assert!(g.neighbours(42).is_empty());
        assert!(!g.contains(42));
    }

    #[test]
    fn neighbour_order_is_insertion_order() {
        let g = Graph::<u32>::from_edges([(0, 3), (0, 1), (0, 2)]);
        assert_eq!(g.neighbours(0), &[3, 1, 2]);
    }

    #[test]
    fn missing_heuristic_is_sentinel() {
        let mut g = Graph::<u32>::from_edges([(0, 1)]);
        g.set_heuristic(0, 7);

        assert_eq!(g.heuristic(0), Some(7));
        assert_eq!(g.heuristic(1), None);
        assert_eq!(g.heuristic_or_max(1), u32::MAX);
    }

    #[test]
    fn weighted_edges_are_symmetric() {
        let mut g = Graph::<u32>::new();
        let mut w = EdgeWeights::<u32>::new();
        g.add_weighted_edge(0, 1, 4, &mut w).unwrap();

        assert_eq!(w.get(0, 1), Some(4));
        assert_eq!(w.get(1, 0), Some(4));
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn rejected_weight_leaves_graph_untouched() {
        let mut g = Graph::<u32>::new();
        let mut w = EdgeWeights::<u32>::new();

        assert!(g.add_weighted_edge(0, 1, 0, &mut w).is_err());
        assert_eq!(g.node_count(), 0);
        assert!(w.is_empty());
    }
}
