//! Exhaustive enumeration of simple paths.
//!
//! "British Museum" search lists every path that never revisits a node, in
//! the order a recursive walk over the neighbour lists would find them. The
//! oracle search is the same walk, cut off wherever the accumulated cost goes
//! over a bound.
//!
//! The walk is exponential in the worst case. It's meant for small graphs.

use crate::cost::Cost;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;
use crate::weights::EdgeWeights;

/// A partial path and what it cost to get there.
#[derive(Debug)]
struct Branch<C> {
    path: Path,
    cost: C,
}

/// Lazily enumerates simple paths from a start to a goal.
///
/// Every branch owns its partial path, which doubles as the set of nodes it
/// can't revisit. Branches are stacked so that the first neighbour is
/// explored first, matching a recursive walk.
///
/// ```
/// use graph_search::algorithms::SimplePaths;
/// use graph_search::graph::Graph;
///
/// let g = Graph::<u32>::from_edges([(0, 1), (1, 2), (0, 2)]);
/// let paths: Vec<Vec<u32>> = SimplePaths::new(&g, 0, 2)
///     .map(|p| p.into_nodes())
///     .collect();
/// assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 2]]);
/// ```
#[derive(Debug)]
pub struct SimplePaths<'g, C>
where
    C: Cost,
{
    graph: &'g Graph<C>,
    goal: NodeId,
    /// Edge costs and the largest total cost allowed.
    bound: Option<(&'g EdgeWeights<C>, C)>,
    stack: Vec<Branch<C>>,
}

impl<'g, C> SimplePaths<'g, C>
where
    C: Cost,
{
    #[must_use]
    pub fn new(graph: &'g Graph<C>, start: NodeId, goal: NodeId) -> Self {
        Self {
            graph,
            goal,
            bound: None,
            stack: vec![Branch {
                path: Path::new_from_start(start),
                cost: C::zero(),
            }],
        }
    }

    /// Only yields paths whose cost stays within `oracle`.
    ///
    /// Branches are dropped as soon as they go over it.
    #[must_use]
    pub fn bounded(
        graph: &'g Graph<C>,
        start: NodeId,
        goal: NodeId,
        weights: &'g EdgeWeights<C>,
        oracle: C,
    ) -> Self {
        Self {
            bound: Some((weights, oracle)),
            ..Self::new(graph, start, goal)
        }
    }
}

impl<C> Iterator for SimplePaths<'_, C>
where
    C: Cost,
{
    type Item = Path;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(branch) = self.stack.pop() {
            let Some(current) = branch.path.end() else {
                continue;
            };
            if current == self.goal {
                return Some(branch.path);
            }

            // Reversed, so the first neighbour ends up on top.
            for &neighbour in self.graph.neighbours(current).iter().rev() {
                if branch.path.contains(neighbour) {
                    continue;
                }
                let cost = match self.bound {
                    None => branch.cost,
                    Some((weights, oracle)) => {
                        let cost = branch.cost.plus(weights.cost_or_max(current, neighbour));
                        if cost > oracle {
                            log::trace!("Pruned {current}->{neighbour} at cost {cost} > {oracle}");
                            continue;
                        }
                        cost
                    }
                };
                let mut path = branch.path.clone();
                path.push(neighbour);
                self.stack.push(Branch { path, cost });
            }
        }
        None
    }
}

/// British Museum search: the first simple path found.
///
/// The order depends on the neighbour lists, which makes the result
/// reproducible for a given graph.
#[must_use]
pub fn british_museum<C: Cost>(graph: &Graph<C>, start: NodeId, goal: NodeId) -> Path {
    let path = SimplePaths::new(graph, start, goal)
        .next()
        .unwrap_or_default();
    log::debug!("BritishMuseum({start}->{goal}): {path}");
    path
}

/// Every simple path from `start` to `goal`, in discovery order.
#[must_use]
pub fn british_museum_all<C: Cost>(graph: &Graph<C>, start: NodeId, goal: NodeId) -> Vec<Path> {
    let paths: Vec<Path> = SimplePaths::new(graph, start, goal).collect();
    log::debug!("BritishMuseum({start}->{goal}): {} paths", paths.len());
    paths
}

/// Oracle search: every simple path costing at most `oracle`.
///
/// Missing edge weights count as the `Cost` sentinel, so those hops only fit
/// under a sentinel oracle.
#[must_use]
pub fn oracle_search<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    weights: &EdgeWeights<C>,
    oracle: C,
) -> Vec<Path> {
    let paths: Vec<Path> = SimplePaths::bounded(graph, start, goal, weights, oracle).collect();
    log::debug!(
        "Oracle({start}->{goal}, {oracle}): {} paths",
        paths.len()
    );
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///   1 --- 3
    ///  / \   /
    /// 0   \ /
    ///  \   2
    ///   \-/
    /// ```
    fn sample() -> (Graph<u32>, EdgeWeights<u32>) {
        let mut g = Graph::new();
        let mut w = EdgeWeights::new();
        g.add_weighted_edge(0, 1, 1, &mut w).unwrap();
        g.add_weighted_edge(0, 2, 4, &mut w).unwrap();
        g.add_weighted_edge(1, 2, 2, &mut w).unwrap();
        g.add_weighted_edge(1, 3, 6, &mut w).unwrap();
        g.add_weighted_edge(2, 3, 1, &mut w).unwrap();
        (g, w)
    }

    fn nodes(paths: &[Path]) -> Vec<Vec<NodeId>> {
        paths.iter().map(|p| p.nodes().to_vec()).collect()
    }

    #[test]
    fn all_paths_in_recursive_order() {
        let (g, _) = sample();
        let paths = british_museum_all(&g, 0, 3);
        assert_eq!(
            nodes(&paths),
            vec![
                vec![0, 1, 2, 3],
                vec![0, 1, 3],
                vec![0, 2, 1, 3],
                vec![0, 2, 3],
            ]
        );
        assert!(paths.iter().all(Path::is_simple));
        assert!(paths.iter().all(|p| p.is_valid_in(&g, 0, 3)));
    }

    #[test]
    fn first_path() {
        let (g, _) = sample();
        assert_eq!(british_museum(&g, 0, 3).nodes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn no_path() {
        let g = Graph::<u32>::from_edges([(0, 1), (2, 3)]);
        assert!(british_museum(&g, 0, 3).is_empty());
        assert!(british_museum_all(&g, 0, 3).is_empty());
    }

    #[test]
    fn start_is_goal() {
        let (g, w) = sample();
        assert_eq!(british_museum(&g, 2, 2).nodes(), &[2]);
        assert_eq!(nodes(&oracle_search(&g, 2, 2, &w, 0)), vec![vec![2]]);
    }

    #[test]
    fn oracle_bounds_cost() {
        let (g, w) = sample();

        // Costs: 0-1-2-3 = 4, 0-1-3 = 7, 0-2-1-3 = 12, 0-2-3 = 5
        assert_eq!(
            nodes(&oracle_search(&g, 0, 3, &w, 5)),
            vec![vec![0, 1, 2, 3], vec![0, 2, 3]]
        );
        assert_eq!(nodes(&oracle_search(&g, 0, 3, &w, 4)), vec![vec![0, 1, 2, 3]]);
        assert!(oracle_search(&g, 0, 3, &w, 3).is_empty());
        assert_eq!(oracle_search(&g, 0, 3, &w, 12).len(), 4);
    }

    #[test]
    fn oracle_missing_weights_are_penalised() {
        let (mut g, w) = sample();
        // Unweighted shortcut.
        g.add_edge(0, 3);

        assert_eq!(oracle_search(&g, 0, 3, &w, 100).len(), 4);
        assert_eq!(oracle_search(&g, 0, 3, &w, u32::MAX).len(), 5);
    }

    #[test]
    fn lazy_enumeration() {
        let (g, _) = sample();
        let mut paths = SimplePaths::new(&g, 0, 3);
        assert_eq!(paths.next().map(Path::into_nodes), Some(vec![0, 1, 2, 3]));
        assert_eq!(paths.next().map(Path::into_nodes), Some(vec![0, 1, 3]));
    }
}
