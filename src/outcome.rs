//! Terminal-state detection.

use crate::board::{Board, Coord};
use crate::{Mark, Outcome, Side};

/// The eight lines that win the game: rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[Coord; 3]; 8] = [
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Returns the state of the game on `board`.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete one decides the winner.
/// Without a winner a full board is a draw and anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    for line in &WINNING_LINES {
        if let Some(side) = line_owner(board, line) {
            return Outcome::Win(side);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

fn line_owner(board: &Board, line: &[Coord; 3]) -> Option<Side> {
    let first = board.at(line[0]);
    if first == Mark::Blank {
        return None;
    }
    line[1..]
        .iter()
        .all(|coord| board.at(*coord) == first)
        .then_some(first)
        .and_then(Mark::side)
}
