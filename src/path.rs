use crate::cost::Cost;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::weights::EdgeWeights;

/// Nodes shown by `Display` before eliding the middle of long paths.
const MAX_ELEMENTS_DISPLAYED: usize = 20;

/// An ordered sequence of nodes from a start to a goal, both inclusive.
///
/// The empty path means "no path found".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    #[inline(always)]
    #[must_use]
    pub fn empty() -> Self {
        Self { nodes: vec![] }
    }

    #[inline(always)]
    #[must_use]
    pub fn new_from_start(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    #[inline(always)]
    pub fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Reverses the Path.
    ///
    /// Useful when naturally reconstructing paths from the goal.
    #[inline(always)]
    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    #[inline(always)]
    #[must_use]
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    #[inline(always)]
    #[must_use]
    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of nodes, including both ends.
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

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[inline(always)]
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Sum of the directional edge costs along the path.
    ///
    /// Unknown edges count as the sentinel, which saturates the total.
    ///
    /// ```
    /// use graph_search::path::Path;
    /// use graph_search::weights::EdgeWeights;
    ///
    /// let mut w = EdgeWeights::<u32>::new();
    /// w.insert(0, 1, 2).unwrap();
    /// w.insert(1, 2, 3).unwrap();
    /// assert_eq!(Path::from(vec![0, 1, 2]).cost(&w), 5);
    /// assert_eq!(Path::from(vec![2, 1]).cost(&w), u32::MAX);
    /// ```
    #[must_use]
    pub fn cost<C: Cost>(&self, weights: &EdgeWeights<C>) -> C {
        self.nodes
            .windows(2)
            .fold(C::zero(), |acc, e| acc.plus(weights.cost_or_max(e[0], e[1])))
    }

    /// No node shows up twice.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let mut seen = rustc_hash::FxHashSet::default();
        self.nodes.iter().all(|n| seen.insert(*n))
    }

    /// Runs sanity checks against the graph this path came from.
    ///
    /// Starts at `start`, ends at `goal`, and every hop is an edge.
    #[must_use]
    pub fn is_valid_in<C: Cost>(&self, graph: &Graph<C>, start: NodeId, goal: NodeId) -> bool {
        self.start() == Some(start)
            && self.end() == Some(goal)
            && self.nodes.windows(2).all(|e| graph.has_edge(e[0], e[1]))
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.nodes.len() > MAX_ELEMENTS_DISPLAYED {
            let head = &self.nodes[..MAX_ELEMENTS_DISPLAYED - 1];
            write!(f, "Path(")?;
            for n in head {
                write!(f, "{n} -> ")?;
            }
            // Last node is always shown.
            return write!(f, "... -> {})", self.nodes[self.nodes.len() - 1]);
        }

        write!(f, "Path(")?;
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends() {
        let p = Path::from(vec![3, 1, 4]);
        assert_eq!(p.start(), Some(3));
        assert_eq!(p.end(), Some(4));
        assert_eq!(p.len(), 3);
        assert_eq!(p.edge_count(), 2);

        let e = Path::empty();
        assert!(e.is_empty());
        assert_eq!(e.start(), None);
        assert_eq!(e.edge_count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Path::from(vec![0, 1, 2]).to_string(), "Path(0 -> 1 -> 2)");
        assert_eq!(Path::empty().to_string(), "Path()");

        let long = Path::from((0..30).collect::<Vec<_>>());
        assert!(long.to_string().ends_with("... -> 29)"));
    }

    #[test]
    fn simple_paths() {
        assert!(Path::from(vec![0, 1, 2]).is_simple());
        assert!(!Path::from(vec![0, 1, 0]).is_simple());
    }

    #[test]
    fn validity() {
        let g = Graph::<u32>::from_edges([(0, 1), (1, 2)]);

        assert!(Path::from(vec![0, 1, 2]).is_valid_in(&g, 0, 2));
        assert!(!Path::from(vec![0, 2]).is_valid_in(&g, 0, 2));
        assert!(!Path::from(vec![0, 1]).is_valid_in(&g, 0, 2));
        assert!(!Path::empty().is_valid_in(&g, 0, 2));
    }
}
