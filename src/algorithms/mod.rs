//! Implementation of search algorithms.
//!
//! Every algorithm is a free function over a `Graph`, so a presentation
//! layer can call any of them directly. `run` dispatches by `Algorithm` for
//! callers that pick the strategy at runtime.

pub mod astar;
pub mod beam;
pub mod branch_and_bound;
mod dead_horse;
pub mod enumeration;
pub mod hill_climbing;
pub mod uninformed;

pub use astar::astar;
pub use astar::astar_with_stats;
pub use beam::DEFAULT_BEAM_WIDTH;
pub use beam::beam_search;
pub use beam::beam_search_with_width;
pub use branch_and_bound::branch_and_bound;
pub use branch_and_bound::branch_and_bound_dead_horse;
pub use branch_and_bound::branch_and_bound_dead_horse_with_stats;
pub use branch_and_bound::branch_and_bound_with_heuristics;
pub use enumeration::SimplePaths;
pub use enumeration::british_museum;
pub use enumeration::british_museum_all;
pub use enumeration::oracle_search;
pub use hill_climbing::hill_climbing;
pub use uninformed::bfs;
pub use uninformed::dfs;

use derive_more::Display;

use crate::cost::Cost;
use crate::error::Result;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::Path;
use crate::weights::EdgeWeights;
use crate::weights::Heuristics;

/// The available search strategies.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    #[display("BFS")]
    Bfs,
    #[display("DFS")]
    Dfs,
    #[display("British Museum")]
    BritishMuseum,
    #[display("Hill Climbing")]
    HillClimbing,
    #[display("Beam")]
    Beam,
    #[display("Oracle")]
    Oracle,
    #[display("Branch and Bound")]
    BranchAndBound,
    #[display("Branch and Bound (dead horse)")]
    BranchAndBoundDeadHorse,
    #[display("Branch and Bound (heuristic)")]
    BranchAndBoundHeuristic,
    #[display("A*")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::BritishMuseum,
        Algorithm::HillClimbing,
        Algorithm::Beam,
        Algorithm::Oracle,
        Algorithm::BranchAndBound,
        Algorithm::BranchAndBoundDeadHorse,
        Algorithm::BranchAndBoundHeuristic,
        Algorithm::AStar,
    ];

    /// Whether the algorithm reports every path it finds instead of one.
    #[must_use]
    pub fn enumerates(&self) -> bool {
        matches!(self, Algorithm::Oracle | Algorithm::BranchAndBound)
    }
}

/// Work done by a single search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Entries pushed into the open list, the start included.
    pub generated: u64,
    /// Nodes found to lie on no simple path between start and goal.
    pub dead_horses: usize,
}

/// What a search handed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A single path, empty when none was found.
    Single(Path),
    /// Every path found, possibly none.
    Many(Vec<Path>),
}

impl Outcome {
    #[must_use]
    pub fn found(&self) -> bool {
        match self {
            Outcome::Single(p) => !p.is_empty(),
            Outcome::Many(ps) => !ps.is_empty(),
        }
    }

    /// All paths, a `Single` empty path counting as none.
    #[must_use]
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Outcome::Single(p) if p.is_empty() => vec![],
            Outcome::Single(p) => vec![p],
            Outcome::Many(ps) => ps.iter().collect(),
        }
    }
}

/// Everything a search may consult besides its endpoints.
#[derive(Clone, Copy, Debug)]
pub struct SearchInputs<'a, C>
where
    C: Cost,
{
    pub graph: &'a Graph<C>,
    pub heuristics: &'a Heuristics<C>,
    pub weights: &'a EdgeWeights<C>,
    /// Largest acceptable cost. `None` leaves the searches unbounded.
    pub oracle: Option<C>,
}

impl<'a, C> SearchInputs<'a, C>
where
    C: Cost,
{
    /// Uses the graph's own heuristics.
    #[must_use]
    pub fn new(graph: &'a Graph<C>, weights: &'a EdgeWeights<C>) -> Self {
        Self {
            graph,
            heuristics: graph.heuristics(),
            weights,
            oracle: None,
        }
    }

    #[must_use]
    pub fn with_heuristics(self, heuristics: &'a Heuristics<C>) -> Self {
        Self { heuristics, ..self }
    }

    #[must_use]
    pub fn with_oracle(self, oracle: C) -> Self {
        Self {
            oracle: Some(oracle),
            ..self
        }
    }

    fn oracle_or_max(&self) -> C {
        self.oracle.unwrap_or_else(C::sentinel)
    }
}

/// Runs `algorithm` from `start` to `goal`.
///
/// Only malformed input is an error, see each algorithm. Beam search's
/// `None` is reported as an empty `Single` path.
pub fn run<C: Cost>(
    algorithm: Algorithm,
    inputs: &SearchInputs<'_, C>,
    start: NodeId,
    goal: NodeId,
) -> Result<Outcome> {
    let SearchInputs {
        graph,
        heuristics,
        weights,
        ..
    } = *inputs;
    let oracle = inputs.oracle_or_max();

    let outcome = match algorithm {
        Algorithm::Bfs => Outcome::Single(bfs(graph, start, goal)),
        Algorithm::Dfs => Outcome::Single(dfs(graph, start, goal)),
        Algorithm::BritishMuseum => Outcome::Single(british_museum(graph, start, goal)),
        Algorithm::HillClimbing => Outcome::Single(hill_climbing(graph, start, goal, heuristics)?),
        Algorithm::Beam => Outcome::Single(
            beam_search(graph, start, goal, heuristics, weights).unwrap_or_default(),
        ),
        Algorithm::Oracle => Outcome::Many(oracle_search(graph, start, goal, weights, oracle)),
        Algorithm::BranchAndBound => Outcome::Many(branch_and_bound(
            graph, start, goal, heuristics, weights, oracle,
        )),
        Algorithm::BranchAndBoundDeadHorse => Outcome::Single(branch_and_bound_dead_horse(
            graph, start, goal, heuristics, weights,
        )),
        Algorithm::BranchAndBoundHeuristic => Outcome::Single(branch_and_bound_with_heuristics(
            graph, start, goal, heuristics, weights, oracle,
        )),
        Algorithm::AStar => Outcome::Single(astar(graph, start, goal, heuristics, weights, oracle)),
    };

    #[cfg(feature = "verify")]
    for p in outcome.paths() {
        debug_assert!(p.is_valid_in(graph, start, goal), "{algorithm} returned {p}");
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Graph<u32>, EdgeWeights<u32>) {
        let mut g = Graph::new();
        let mut w = EdgeWeights::new();
        g.add_weighted_edge(0, 1, 1, &mut w).unwrap();
        g.add_weighted_edge(1, 2, 1, &mut w).unwrap();
        g.add_weighted_edge(0, 2, 3, &mut w).unwrap();
        for (n, h) in [(0, 2), (1, 1), (2, 0)] {
            g.set_heuristic(n, h);
        }
        (g, w)
    }

    #[test]
    fn every_algorithm_reaches_the_goal() {
        let (g, w) = sample();
        let inputs = SearchInputs::new(&g, &w);

        for algorithm in Algorithm::ALL {
            let outcome = run(algorithm, &inputs, 0, 2).unwrap();
            assert!(outcome.found(), "{algorithm}");
            assert_eq!(
                matches!(outcome, Outcome::Many(_)),
                algorithm.enumerates(),
                "{algorithm}"
            );
            for p in outcome.paths() {
                assert!(p.is_valid_in(&g, 0, 2), "{algorithm}: {p}");
            }
        }
    }

    #[test]
    fn oracle_is_forwarded() {
        let (g, w) = sample();
        let inputs = SearchInputs::new(&g, &w).with_oracle(1);

        assert_eq!(
            run(Algorithm::Oracle, &inputs, 0, 2).unwrap(),
            Outcome::Many(vec![])
        );
        assert!(!run(Algorithm::AStar, &inputs, 0, 2).unwrap().found());
        // BFS doesn't care.
        assert!(run(Algorithm::Bfs, &inputs, 0, 2).unwrap().found());
    }

    #[test]
    fn errors_are_forwarded() {
        let (g, w) = sample();
        let empty = Heuristics::<u32>::new();
        let inputs = SearchInputs::new(&g, &w).with_heuristics(&empty);

        assert!(run(Algorithm::HillClimbing, &inputs, 0, 2).is_err());
    }

    #[test]
    fn not_found_is_empty() {
        let (g, w) = sample();
        let inputs = SearchInputs::new(&g, &w);

        let outcome = run(Algorithm::Beam, &inputs, 0, 7).unwrap();
        assert_eq!(outcome, Outcome::Single(Path::empty()));
        assert!(outcome.paths().is_empty());
    }
}
