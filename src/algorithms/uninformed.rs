//! Breadth-first and depth-first traversal.
//!
//! Both stop the moment the goal leaves the frontier and rebuild the path
//! from a parent map.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;

/// Breadth-first search.
///
/// On an unweighted graph the path has the fewest possible edges. Returns an
/// empty path when `goal` can't be reached.
///
/// ```
/// use graph_search::algorithms::bfs;
/// use graph_search::graph::Graph;
///
/// let g = Graph::<u32>::from_edges([(0, 1), (1, 2)]);
/// assert_eq!(bfs(&g, 0, 2).nodes(), &[0, 1, 2]);
/// assert!(bfs(&g, 0, 3).is_empty());
/// ```
#[must_use]
pub fn bfs<C: Cost>(graph: &Graph<C>, start: NodeId, goal: NodeId) -> Path {
    let mut queue = VecDeque::from([start]);
    let mut visited = FxHashSet::from_iter([start]);
    let mut parents = FxHashMap::<NodeId, NodeId>::default();
    let mut expanded = 0usize;

    while let Some(node) = queue.pop_front() {
        if node == goal {
            let path = build_path(&parents, start, goal);
            log::debug!("BFS({start}->{goal}): {path} after {expanded} expansions");
            return path;
        }

        expanded += 1;
        for &neighbour in graph.neighbours(node) {
            if visited.insert(neighbour) {
                parents.insert(neighbour, node);
                queue.push_back(neighbour);
            }
        }
    }

    log::debug!("BFS({start}->{goal}): exhausted after {expanded} expansions");
    Path::empty()
}

/// Depth-first search.
///
/// Neighbours are pushed in list order, so the last neighbour is explored
/// first. No shortest-path guarantee.
#[must_use]
pub fn dfs<C: Cost>(graph: &Graph<C>, start: NodeId, goal: NodeId) -> Path {
    let mut stack = vec![start];
    let mut visited = FxHashSet::<NodeId>::default();
    // The latest pusher wins. A node's parent can't change once it's visited.
    let mut parents = FxHashMap::<NodeId, NodeId>::default();
    let mut expanded = 0usize;

    while let Some(node) = stack.pop() {
        if node == goal {
            let path = build_path(&parents, start, goal);
            log::debug!("DFS({start}->{goal}): {path} after {expanded} expansions");
            return path;
        }

        if !visited.insert(node) {
            continue;
        }
        expanded += 1;
        for &neighbour in graph.neighbours(node) {
            if !visited.contains(&neighbour) {
                stack.push(neighbour);
                parents.insert(neighbour, node);
            }
        }
    }

    log::debug!("DFS({start}->{goal}): exhausted after {expanded} expansions");
    Path::empty()
}

/// Walks parent links from `goal` back to `start`.
fn build_path(parents: &FxHashMap<NodeId, NodeId>, start: NodeId, goal: NodeId) -> Path {
    let mut path = Path::new_from_start(goal);
    let mut at = goal;
    while at != start {
        match parents.get(&at) {
            Some(&parent) => {
                path.push(parent);
                at = parent;
            }
            None => {
                debug_assert!(false, "Broken parent chain at {at} ({start}->{goal})");
                return Path::empty();
            }
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<u32> {
        //   1
        //  / \
        // 0   3 - 4
        //  \ /
        //   2
        Graph::from_edges([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)])
    }

    #[test]
    fn bfs_line() {
        let g = Graph::<u32>::from_edges([(0, 1), (1, 2)]);
        assert_eq!(bfs(&g, 0, 2).nodes(), &[0, 1, 2]);
        assert_eq!(bfs(&g, 2, 0).nodes(), &[2, 1, 0]);
    }

    #[test]
    fn bfs_unknown_goal() {
        let g = Graph::<u32>::from_edges([(0, 1), (1, 2)]);
        assert!(bfs(&g, 0, 3).is_empty());
    }

    #[test]
    fn bfs_disconnected() {
        let g = Graph::<u32>::from_edges([(0, 1), (2, 3)]);
        assert!(bfs(&g, 0, 3).is_empty());
        assert!(dfs(&g, 0, 3).is_empty());
    }

    #[test]
    fn start_is_goal() {
        let g = diamond();
        assert_eq!(bfs(&g, 3, 3).nodes(), &[3]);
        assert_eq!(dfs(&g, 3, 3).nodes(), &[3]);
    }

    #[test]
    fn bfs_prefers_first_listed_neighbour() {
        let g = diamond();
        assert_eq!(bfs(&g, 0, 4).nodes(), &[0, 1, 3, 4]);
    }

    #[test]
    fn bfs_fewest_edges() {
        // 0-1-2-3-4 and a shortcut 0-5-4
        let g = Graph::<u32>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)]);
        assert_eq!(bfs(&g, 0, 4).nodes(), &[0, 5, 4]);
    }

    #[test]
    fn dfs_explores_last_neighbour_first() {
        let g = diamond();
        assert_eq!(dfs(&g, 0, 4).nodes(), &[0, 2, 3, 4]);
    }

    #[test]
    fn dfs_long_way_round() {
        // A ring where the goal is the first neighbour, DFS walks the other way.
        let g = Graph::<u32>::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let path = dfs(&g, 0, 1);
        assert_eq!(path.nodes(), &[0, 3, 2, 1]);
        assert!(path.is_valid_in(&g, 0, 1));
    }
}
