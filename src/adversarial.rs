//! Minimax with alpha-beta pruning over an implicit binary game tree.
//!
//! The tree is never materialised: a node is a `(depth, index)` pair, its
//! children are `index * 2` and `index * 2 + 1` one level down, and the
//! leaves at the bottom level index straight into the value array. The root
//! is a maximizer and players alternate every level.

use std::fmt::Debug;

use num_traits::Bounded;

use crate::error::Result;
use crate::error::SearchError;

/// Whose turn it is at a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    #[inline(always)]
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }
}

/// The result of an alpha-beta run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Evaluation<V> {
    /// The game value at the root.
    pub value: V,
    /// Leaves actually looked at.
    pub leaves_evaluated: usize,
    /// Times a node skipped its remaining children.
    pub cutoffs: usize,
}

/// A complete binary game tree given by its leaf values, left to right.
#[derive(Clone, Debug)]
pub struct GameTree<V> {
    leaves: Vec<V>,
    depth: u32,
}

impl<V> GameTree<V>
where
    V: Copy + Debug + Ord + Bounded,
{
    /// Checks the leaf count is a power of two.
    ///
    /// ```
    /// use graph_search::adversarial::GameTree;
    /// use graph_search::error::SearchError;
    ///
    /// assert_eq!(GameTree::new(vec![1, 2, 3, 4]).unwrap().depth(), 2);
    /// assert_eq!(
    ///     GameTree::new(vec![1, 2, 3]).unwrap_err(),
    ///     SearchError::InvalidLeafCount(3)
    /// );
    /// ```
    pub fn new(leaves: Vec<V>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(SearchError::EmptyGameTree);
        }
        if !leaves.len().is_power_of_two() {
            return Err(SearchError::InvalidLeafCount(leaves.len()));
        }
        let depth = leaves.len().trailing_zeros();
        Ok(Self { leaves, depth })
    }

    /// Levels below the root. A single leaf is a tree of depth 0.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn leaves(&self) -> &[V] {
        &self.leaves
    }

    /// The root value, pruning subtrees that can't change it.
    #[must_use]
    pub fn alpha_beta(&self) -> Evaluation<V> {
        let mut evaluation = Evaluation {
            value: V::min_value(),
            leaves_evaluated: 0,
            cutoffs: 0,
        };
        evaluation.value = self.alpha_beta_at(
            0,
            0,
            Player::Max,
            V::min_value(),
            V::max_value(),
            &mut evaluation,
        );
        log::debug!(
            "AlphaBeta(depth={}): {:?}, {}/{} leaves, {} cutoffs",
            self.depth,
            evaluation.value,
            evaluation.leaves_evaluated,
            self.leaves.len(),
            evaluation.cutoffs
        );
        evaluation
    }

    fn alpha_beta_at(
        &self,
        depth: u32,
        index: usize,
        player: Player,
        mut alpha: V,
        mut beta: V,
        evaluation: &mut Evaluation<V>,
    ) -> V {
        if depth == self.depth {
            let value = self.leaves[index];
            log::trace!("Leaf {index} at depth {depth}: {value:?}");
            evaluation.leaves_evaluated += 1;
            return value;
        }

        let mut best = match player {
            Player::Max => V::min_value(),
            Player::Min => V::max_value(),
        };
        for child in [index * 2, index * 2 + 1] {
            let value =
                self.alpha_beta_at(depth + 1, child, player.opponent(), alpha, beta, evaluation);
            match player {
                Player::Max => {
                    best = best.max(value);
                    alpha = alpha.max(best);
                }
                Player::Min => {
                    best = best.min(value);
                    beta = beta.min(best);
                }
            }
            if beta <= alpha {
                log::trace!("{player:?} at depth {depth} prunes, beta {beta:?} <= alpha {alpha:?}");
                evaluation.cutoffs += 1;
                break;
            }
        }
        log::trace!("{player:?} at depth {depth} picks {best:?}");
        best
    }

    /// The root value by plain minimax, looking at every leaf.
    #[must_use]
    pub fn minimax(&self) -> V {
        self.minimax_at(0, 0, Player::Max)
    }

    fn minimax_at(&self, depth: u32, index: usize, player: Player) -> V {
        if depth == self.depth {
            return self.leaves[index];
        }
        let left = self.minimax_at(depth + 1, index * 2, player.opponent());
        let right = self.minimax_at(depth + 1, index * 2 + 1, player.opponent());
        match player {
            Player::Max => left.max(right),
            Player::Min => left.min(right),
        }
    }
}

/// The alpha-beta value of the game tree with these leaves.
///
/// ```
/// use graph_search::adversarial::alpha_beta;
///
/// assert_eq!(alpha_beta(&[3, 5, 6, 9, 1, 2, 0, -1]), Ok(5));
/// ```
pub fn alpha_beta<V>(leaves: &[V]) -> Result<V>
where
    V: Copy + Debug + Ord + Bounded,
{
    Ok(GameTree::new(leaves.to_vec())?.alpha_beta().value)
}
