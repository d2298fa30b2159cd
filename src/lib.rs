//! Tic-tac-toe against a computer opponent that plays by exhaustive minimax.
//!
//! The library is split into a pure core and a thin session layer. The core is three functions
//! over plain board values: [`Board::with_move`] places a mark, [`evaluate`] decides whether the
//! game is won, drawn or still going, and [`search`] returns the game-theoretic value of a
//! position together with the best move for the side to move. None of them keep state between
//! calls. [`game::Game`] wraps them with the turn tracking a front-end needs.
//!
//! # Example
//!
//! ```rust
//! use noughts::{Board, Mark, Outcome, Side, evaluate, search};
//!
//! // The human opens in a corner
//! let board = Board::empty().with_move(0, 0, Mark::Player)?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! // Ask the engine for the computer's reply
//! let result = search(&board, Side::Ai);
//! let reply = result.chosen.expect("an open position always has a move");
//! let board = board.with_move(reply.row, reply.col, Mark::Ai)?;
//!
//! // Perfect play from here is a draw
//! assert_eq!(result.score, 0);
//! println!("{board}");
//! # Ok::<(), noughts::Error>(())
//! ```

/// Contains the `Board` value type and its coordinate helpers.
pub mod board;
/// Contains the crate error type.
pub mod error;
/// Contains the console-friendly game session built on top of the core functions.
pub mod game;
/// The search engine: exhaustive minimax over board values.
pub mod minimax;
/// Terminal-state detection.
pub mod outcome;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Contains the `SearchNode` struct, which represents a position in a recorded search tree.
pub mod search_node;

pub use board::{Board, Coord};
pub use error::{Error, MoveRejection, Result};
pub use minimax::{MinimaxSearch, SearchReport, SearchResult, principal_variation, search};
pub use outcome::evaluate;

use std::fmt;

/// Minimax value of a position, always from the computer's point of view.
pub type Score = i8;

/// Score of a position the computer has won.
pub const AI_WIN_SCORE: Score = 1;
/// Score of a drawn position.
pub const DRAW_SCORE: Score = 0;
/// Score of a position the human has won.
pub const PLAYER_WIN_SCORE: Score = -1;

/// The content of a single cell.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Mark {
    /// Placed by the human.
    Player,
    /// Placed by the computer.
    Ai,
    /// Nobody has played here yet.
    #[default]
    Blank,
}

impl Mark {
    /// Character used by the text form of a board.
    pub fn to_char(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Ai => 'O',
            Mark::Blank => '.',
        }
    }

    /// Parses a single cell character, accepting either case and a few blank spellings.
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' => Some(Mark::Ai),
            '.' | '_' | '-' => Some(Mark::Blank),
            _ => None,
        }
    }

    /// The side that owns this mark, `None` for a blank cell.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Player => Some(Side::Player),
            Mark::Ai => Some(Side::Ai),
            Mark::Blank => None,
        }
    }
}

/// One of the two participants, used for "whose turn is it" and "who won".
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Side {
    /// The human.
    Player,
    /// The computer.
    Ai,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The mark this side places on the board.
    pub fn mark(self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Ai => Mark::Ai,
        }
    }

    /// Returns `true` if `candidate` is strictly better than `best` for this side.
    ///
    /// The computer maximises and the human minimises. Equal scores never win, so the first
    /// candidate reaching a score keeps it.
    pub fn prefers(self, candidate: Score, best: Score) -> bool {
        match self {
            Side::Ai => candidate > best,
            Side::Player => candidate < best,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Ai => f.write_str("ai"),
        }
    }
}

/// Represents the possible states of a game.
///
/// Computed on demand by [`evaluate`] and never stored inside a board.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Outcome {
    /// There is no winner and at least one blank cell remains.
    InProgress,
    /// The given side has three in a row.
    Win(Side),
    /// The board is full and nobody has three in a row.
    Draw,
}

impl Outcome {
    /// Returns `true` for anything but `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The minimax score of a finished game, `None` while it is still in progress.
    pub fn score(self) -> Option<Score> {
        match self {
            Outcome::Win(Side::Ai) => Some(AI_WIN_SCORE),
            Outcome::Win(Side::Player) => Some(PLAYER_WIN_SCORE),
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::InProgress => None,
        }
    }

    /// Message shown to the human at the end of the game.
    pub fn verdict(self) -> Option<&'static str> {
        match self {
            Outcome::Win(Side::Player) => Some("You win!"),
            Outcome::Win(Side::Ai) => Some("You lose!"),
            Outcome::Draw => Some("Tie game, try again."),
            Outcome::InProgress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AI_WIN_SCORE, DRAW_SCORE, Mark, Outcome, PLAYER_WIN_SCORE, Side};

    #[test]
    fn sides_alternate() {
        assert_eq!(Side::Ai.opponent(), Side::Player);
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.mark(), Mark::Ai);
        assert_eq!(Mark::Player.side(), Some(Side::Player));
        assert_eq!(Mark::Blank.side(), None);
    }

    #[test]
    fn preference_is_strict() {
        assert!(Side::Ai.prefers(1, 0));
        assert!(!Side::Ai.prefers(0, 0));
        assert!(Side::Player.prefers(-1, 0));
        assert!(!Side::Player.prefers(-1, -1));
    }

    #[test]
    fn outcome_scores_and_verdicts() {
        assert_eq!(Outcome::Win(Side::Ai).score(), Some(AI_WIN_SCORE));
        assert_eq!(Outcome::Win(Side::Player).score(), Some(PLAYER_WIN_SCORE));
        assert_eq!(Outcome::Draw.score(), Some(DRAW_SCORE));
        assert_eq!(Outcome::InProgress.score(), None);

        assert_eq!(Outcome::Win(Side::Ai).verdict(), Some("You lose!"));
        assert_eq!(Outcome::Draw.verdict(), Some("Tie game, try again."));
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn mark_chars_round_trip() {
        for mark in [Mark::Player, Mark::Ai, Mark::Blank] {
            assert_eq!(Mark::from_char(mark.to_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('?'), None);
    }
}
