use crate::board::{Board, Coord};
use crate::{DRAW_SCORE, Outcome, Score, Side};

/// Represents a single position in a recorded minimax tree.
///
/// Each node stores the position, the move that led to it, and the value the search assigned
/// to it once all of its continuations were explored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The position this node represents.
    pub board: Board,
    /// The move that led to this position from its parent. `None` for the root node.
    pub prev_move: Option<Coord>,
    /// The side to place the next mark in this position.
    pub side_to_move: Side,
    /// The evaluated state of the position.
    pub outcome: Outcome,
    /// The depth of the node in the tree; the root is at 0.
    pub depth: u8,
    /// Minimax value of the position, from the computer's point of view.
    pub score: Score,
    /// The move the search picked here. `None` for terminal positions.
    pub best_move: Option<Coord>,
}

impl SearchNode {
    /// Creates an unscored node; `score` and `best_move` are filled in once its subtree is done.
    pub fn new(
        board: Board,
        outcome: Outcome,
        side_to_move: Side,
        prev_move: Option<Coord>,
        depth: u8,
    ) -> Self {
        SearchNode {
            board,
            prev_move,
            side_to_move,
            outcome,
            depth,
            score: DRAW_SCORE,
            best_move: None,
        }
    }

    /// Returns `true` if the game is over in this position.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}
