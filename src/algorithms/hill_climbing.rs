use rustc_hash::FxHashSet;

use crate::cost::Cost;
use crate::error::Result;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;
use crate::weights::Heuristics;

/// Greedy hill climbing.
///
/// Moves to the unvisited neighbour with the lowest heuristic (ties keep
/// neighbour-list order) until it reaches `goal`. There's no backtracking:
/// when every neighbour of the current node was already visited the climb is
/// stuck and returns an empty path, even if the goal is reachable.
///
/// Every neighbour of a node the climb stands on must have a heuristic,
/// otherwise this fails with `SearchError::MissingHeuristic`.
pub fn hill_climbing<C: Cost>(
    graph: &Graph<C>,
    start: NodeId,
    goal: NodeId,
    heuristics: &Heuristics<C>,
) -> Result<Path> {
    let mut path = Path::new_from_start(start);
    let mut visited = FxHashSet::<NodeId>::default();
    let mut current = start;

    while current != goal {
        visited.insert(current);

        let mut ranked = graph
            .neighbours(current)
            .iter()
            .map(|&n| heuristics.require(n).map(|h| (h, n)))
            .collect::<Result<Vec<(C, NodeId)>>>()?;
        // Stable, equal heuristics keep their neighbour order.
        ranked.sort_by_key(|&(h, _)| h);

        match ranked.into_iter().find(|(_, n)| !visited.contains(n)) {
            Some((h, next)) => {
                log::trace!("HillClimbing: {current} -> {next} (h={h})");
                path.push(next);
                current = next;
            }
            None => {
                log::debug!("HillClimbing({start}->{goal}): stuck at {current} after {path}");
                return Ok(Path::empty());
            }
        }
    }

    log::debug!("HillClimbing({start}->{goal}): {path}");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    #[test]
    fn follows_the_gradient() {
        // 0 - 1 - 3
        //  \     /
        //   2 --/
        let g = Graph::<u32>::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
        let h: Heuristics<u32> = [(0, 3), (1, 2), (2, 1), (3, 0)].into_iter().collect();

        let path = hill_climbing(&g, 0, 3, &h).unwrap();
        assert_eq!(path.nodes(), &[0, 2, 3]);
    }

    #[test]
    fn ties_keep_neighbour_order() {
        let g = Graph::<u32>::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
        let h: Heuristics<u32> = [(0, 3), (1, 1), (2, 1), (3, 0)].into_iter().collect();

        assert_eq!(hill_climbing(&g, 0, 3, &h).unwrap().nodes(), &[0, 1, 3]);
    }

    #[test]
    fn moves_to_worse_unvisited_neighbour() {
        // 0 - 1 - 2 - 3 (goal), 1's only unvisited neighbour is 2, which
        // looks worse than the visited 0.
        let g = Graph::<u32>::from_edges([(0, 1), (1, 2), (2, 3)]);
        let h: Heuristics<u32> = [(0, 1), (1, 5), (2, 9), (3, 0)].into_iter().collect();

        assert_eq!(hill_climbing(&g, 0, 3, &h).unwrap().nodes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn gets_stuck_in_a_dead_end() {
        //       3 (dead end, looks great)
        //       |
        // 0 --- 1 --- 2 --- 4 (goal)
        let g = Graph::<u32>::from_edges([(0, 1), (1, 3), (1, 2), (2, 4)]);
        let h: Heuristics<u32> = [(0, 9), (1, 5), (2, 4), (3, 1), (4, 0)]
            .into_iter()
            .collect();

        // The path exists...
        assert!(!crate::algorithms::bfs(&g, 0, 4).is_empty());
        // ...but the climb walks into 3 and can't back out.
        assert!(hill_climbing(&g, 0, 4, &h).unwrap().is_empty());
    }

    #[test]
    fn missing_heuristic_is_an_error() {
        let g = Graph::<u32>::from_edges([(0, 1), (0, 2)]);
        let h: Heuristics<u32> = [(0, 1), (1, 0)].into_iter().collect();

        assert_eq!(
            hill_climbing(&g, 0, 1, &h),
            Err(SearchError::MissingHeuristic(2))
        );
    }

    #[test]
    fn start_is_goal() {
        let g = Graph::<u32>::from_edges([(0, 1)]);
        let h = Heuristics::<u32>::new();
        assert_eq!(hill_climbing(&g, 1, 1, &h).unwrap().nodes(), &[1]);
    }
}
