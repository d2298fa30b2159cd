//! A game session between the human and the computer.
//!
//! The core functions are stateless; `Game` carries the bits a front-end needs between clicks:
//! the current board, whose turn it is and whether play is still going.

use crate::board::{Board, Coord, SIZE};
use crate::error::{Error, Result};
use crate::minimax::search;
use crate::outcome::evaluate;
use crate::random::RandomGenerator;
use crate::{Outcome, Side};
use tracing::{debug, info};

/// How many extra cells the thinking animation flashes before the computer moves.
pub const DEFAULT_THINKING_BLINKS: u32 = 10;
/// Pause between two thinking highlights, in milliseconds.
pub const THINKING_DELAY_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Side,
    active: bool,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Starts a game on an empty board with the human to move.
    pub fn new() -> Self {
        Game::with_board(Board::empty(), Side::Player)
    }

    /// Resumes a game from an arbitrary position.
    pub fn with_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            active: !evaluate(&board).is_terminal(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Places the human's mark at `(row, col)`.
    ///
    /// On success the turn passes to the computer unless the move ended the game.
    pub fn play_player(&mut self, row: usize, col: usize) -> Result<Outcome> {
        self.ensure_turn(Side::Player)?;
        self.board = self.board.with_move(row, col, Side::Player.mark())?;
        debug!(cell = %Coord::new(row, col), "player moved");
        Ok(self.finish_ply())
    }

    /// Lets the computer choose and play its move. Returns the cell it played.
    pub fn play_ai(&mut self) -> Result<Option<Coord>> {
        self.ensure_turn(Side::Ai)?;
        let result = search(&self.board, Side::Ai);
        if let Some(coord) = result.chosen {
            self.board = self.board.with_move(coord.row, coord.col, Side::Ai.mark())?;
            debug!(cell = %coord, score = result.score, "ai moved");
        }
        self.finish_ply();
        Ok(result.chosen)
    }

    fn ensure_turn(&self, side: Side) -> Result<()> {
        if !self.active {
            return Err(Error::GameOver);
        }
        if self.turn != side {
            return Err(Error::NotYourTurn);
        }
        Ok(())
    }

    fn finish_ply(&mut self) -> Outcome {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            self.active = false;
            info!(?outcome, "game over");
        } else {
            self.turn = self.turn.opponent();
        }
        outcome
    }
}

/// Random cells to flash while the computer "thinks": `blinks + 1` of them.
///
/// Purely cosmetic. The computer's move does not depend on them.
pub fn thinking_highlights<R: RandomGenerator>(rng: &mut R, blinks: u32) -> Vec<Coord> {
    (0..=blinks)
        .map(|_| {
            let row = rng.next_below(SIZE);
            let col = rng.next_below(SIZE);
            Coord::new(row, col)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Coord};
    use crate::error::{Error, MoveRejection};
    use crate::game::{DEFAULT_THINKING_BLINKS, Game, thinking_highlights};
    use crate::random::{CustomNumberGenerator, RandomGenerator};
    use crate::{Outcome, Side};

    #[test]
    fn new_game_waits_for_player() {
        let game = Game::new();

        assert!(game.is_active());
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(*game.board(), Board::empty());
    }

    #[test]
    fn turns_alternate() {
        // arrange
        let mut game = Game::new();

        // act
        let after_player = game.play_player(1, 1).unwrap();
        let early = game.play_player(0, 0);
        let reply = game.play_ai().unwrap();

        // assert
        assert_eq!(after_player, Outcome::InProgress);
        assert_eq!(early, Err(Error::NotYourTurn));
        let reply = reply.unwrap();
        assert_ne!(reply, Coord::new(1, 1));
        assert_eq!(game.turn(), Side::Player);
        assert_eq!(game.board().empty_cells().len(), 7);
        assert_eq!(game.play_ai(), Err(Error::NotYourTurn));
    }

    #[test]
    fn occupied_cell_keeps_the_turn() {
        let mut game = Game::new();
        game.play_player(0, 0).unwrap();
        game.play_ai().unwrap();

        let err = game.play_player(0, 0).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidMove {
                row: 0,
                col: 0,
                reason: MoveRejection::Occupied,
            }
        );
        assert_eq!(game.turn(), Side::Player);
        assert!(game.is_active());
    }

    #[test]
    fn player_win_ends_the_game() {
        let mut game = Game::with_board("XX./OO./...".parse().unwrap(), Side::Player);

        let outcome = game.play_player(0, 2).unwrap();

        assert_eq!(outcome, Outcome::Win(Side::Player));
        assert_eq!(outcome.verdict(), Some("You win!"));
        assert!(!game.is_active());
        assert_eq!(game.play_ai(), Err(Error::GameOver));
    }

    #[test]
    fn ai_takes_the_win() {
        let mut game = Game::with_board("OO./XX./X..".parse().unwrap(), Side::Ai);

        let played = game.play_ai().unwrap();

        assert_eq!(played, Some(Coord::new(0, 2)));
        assert_eq!(game.outcome(), Outcome::Win(Side::Ai));
        assert_eq!(game.outcome().verdict(), Some("You lose!"));
        assert_eq!(game.play_player(2, 2), Err(Error::GameOver));
    }

    #[test]
    fn finished_position_starts_inactive() {
        let game = Game::with_board("XOX/XOO/OXX".parse().unwrap(), Side::Player);

        assert!(!game.is_active());
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn random_opponent_never_beats_the_computer() {
        for seed in 0..8 {
            // arrange
            let mut rng = CustomNumberGenerator::new(seed);
            let mut game = Game::new();

            // act
            while game.is_active() {
                match game.turn() {
                    Side::Player => {
                        let cells = game.board().empty_cells();
                        let cell = *rng.pick(&cells).unwrap();
                        game.play_player(cell.row, cell.col).unwrap();
                    }
                    Side::Ai => {
                        game.play_ai().unwrap();
                    }
                }
            }

            // assert
            assert_ne!(game.outcome(), Outcome::Win(Side::Player), "seed {seed}");
            assert!(game.outcome().verdict().is_some());
        }
    }

    #[test]
    fn highlights_are_reproducible() {
        let mut rng = CustomNumberGenerator::default();

        let cells = thinking_highlights(&mut rng, 2);

        assert_eq!(
            cells,
            vec![Coord::new(1, 1), Coord::new(0, 1), Coord::new(0, 1)]
        );
    }

    #[test]
    fn default_blinks_flash_eleven_cells() {
        let mut rng = CustomNumberGenerator::new(7);

        let cells = thinking_highlights(&mut rng, DEFAULT_THINKING_BLINKS);

        assert_eq!(cells.len(), 11);
        assert!(cells.iter().all(|c| c.row < 3 && c.col < 3));
    }
}
