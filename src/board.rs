use crate::Mark;
use crate::error::{Error, MoveRejection, Result};
use std::fmt;
use std::str::FromStr;

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A cell address. Both `row` and `col` are in `0..3` for any coordinate produced by the crate.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then_some(self.row * SIZE + self.col)
    }

    fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A snapshot of the 3x3 grid.
///
/// The cells are stored in a 9-element array in row-major order. The type is `Copy`, so every
/// copy is an independent grid and nothing done to a copy is visible through the original.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    /// Creates a board with every cell blank.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board from rows of marks.
    pub fn from_cells(rows: [[Mark; SIZE]; SIZE]) -> Self {
        let mut cells = [Mark::Blank; CELLS];
        for (r, row) in rows.iter().enumerate() {
            cells[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Returns the mark at `(row, col)`, or `None` if the coordinate is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        Coord::new(row, col).index().map(|i| self.cells[i])
    }

    pub(crate) fn at(&self, coord: Coord) -> Mark {
        match coord.index() {
            Some(i) => self.cells[i],
            None => Mark::Blank,
        }
    }

    /// Returns every blank coordinate, scanning rows 0..3 and within each row columns 0..3.
    ///
    /// The search relies on this order for its tie-breaking, so it must stay fixed.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Blank)
            .map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    /// Returns `true` if no cell is blank.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| *mark != Mark::Blank)
    }

    /// Returns a copy of this board with `mark` placed at `(row, col)`.
    ///
    /// Fails with [`Error::InvalidMove`] if the coordinate is off the board or the cell is
    /// not blank. `self` is left untouched either way.
    pub fn with_move(&self, row: usize, col: usize, mark: Mark) -> Result<Board> {
        let index = Coord::new(row, col).index().ok_or(Error::InvalidMove {
            row,
            col,
            reason: MoveRejection::OutOfRange,
        })?;
        if self.cells[index] != Mark::Blank {
            return Err(Error::InvalidMove {
                row,
                col,
                reason: MoveRejection::Occupied,
            });
        }
        Ok(self.placed(index, mark))
    }

    /// Places a mark on a cell already known to be blank. Used by the search, which only ever
    /// draws coordinates from `empty_cells`.
    pub(crate) fn with_move_unchecked(&self, coord: Coord, mark: Mark) -> Board {
        match coord.index() {
            Some(index) => self.placed(index, mark),
            None => *self,
        }
    }

    fn placed(&self, index: usize, mark: Mark) -> Board {
        let mut copy = *self;
        copy.cells[index] = mark;
        copy
    }

    /// Counts the player and computer marks, in that order.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(player, ai), mark| match mark {
                Mark::Player => (player + 1, ai),
                Mark::Ai => (player, ai + 1),
                Mark::Blank => (player, ai),
            })
    }

    /// Returns `true` if the mark counts are consistent with alternating play and the human
    /// moving first: the player has the same number of marks as the computer or one more.
    pub fn is_valid(&self) -> bool {
        let (player, ai) = self.mark_counts();
        player == ai || player == ai + 1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(SIZE).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{}", mark.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine cell characters, ignoring whitespace and `/` row separators,
    /// e.g. `"XX./.O./..."`.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Mark::Blank; CELLS];
        let mut count = 0;
        for (position, c) in s.chars().filter(|c| !c.is_whitespace() && *c != '/').enumerate() {
            if position >= CELLS {
                return Err(Error::InvalidBoard {
                    message: format!("expected {CELLS} cells in '{s}', found more"),
                });
            }
            cells[position] = Mark::from_char(c).ok_or_else(|| Error::InvalidBoard {
                message: format!("invalid character '{c}' at position {position} in '{s}'"),
            })?;
            count += 1;
        }
        if count != CELLS {
            return Err(Error::InvalidBoard {
                message: format!("expected {CELLS} cells in '{s}', got {count}"),
            });
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Coord};
    use crate::error::{Error, MoveRejection};
    use crate::Mark;

    #[test]
    fn empty_board_lists_all_cells_in_row_major_order() {
        let cells = Board::empty().empty_cells();

        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[1], Coord::new(0, 1));
        assert_eq!(cells[3], Coord::new(1, 0));
        assert_eq!(cells[8], Coord::new(2, 2));
    }

    #[test]
    fn empty_cells_skips_marked_cells() {
        let board: Board = "X.O/.X./O..".parse().unwrap();

        assert_eq!(
            board.empty_cells(),
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        // arrange
        let original = Board::empty();

        // act
        let moved = original.with_move(1, 2, Mark::Ai).unwrap();

        // assert
        assert_eq!(moved.get(1, 2), Some(Mark::Ai));
        assert_eq!(original.get(1, 2), Some(Mark::Blank));
        assert_eq!(moved.empty_cells().len(), 8);
        assert_eq!(original.empty_cells().len(), 9);
    }

    #[test]
    fn with_move_rejects_occupied_cell() {
        let board = Board::empty().with_move(0, 0, Mark::Player).unwrap();

        let err = board.with_move(0, 0, Mark::Ai).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidMove {
                row: 0,
                col: 0,
                reason: MoveRejection::Occupied,
            }
        );
        assert_eq!(board.get(0, 0), Some(Mark::Player));
    }

    #[test]
    fn with_move_rejects_out_of_range() {
        let board = Board::empty();

        for (row, col) in [(3, 0), (0, 3), (7, 9)] {
            assert_eq!(
                board.with_move(row, col, Mark::Player),
                Err(Error::InvalidMove {
                    row,
                    col,
                    reason: MoveRejection::OutOfRange,
                })
            );
        }
        assert_eq!(board.get(3, 0), None);
    }

    #[test]
    fn parses_and_displays() {
        let board: Board = "xx.\n.o.\n...".parse().unwrap();

        assert_eq!(board.get(0, 0), Some(Mark::Player));
        assert_eq!(board.get(1, 1), Some(Mark::Ai));
        assert_eq!(board.to_string(), "XX.\n.O.\n...");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            "XX./.O".parse::<Board>(),
            Err(Error::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XX./.O./..../".parse::<Board>(),
            Err(Error::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XX./.Q./...".parse::<Board>(),
            Err(Error::InvalidBoard { .. })
        ));
    }

    #[test]
    fn validity_follows_alternating_play() {
        let rows = [
            [Mark::Player, Mark::Player, Mark::Blank],
            [Mark::Blank, Mark::Ai, Mark::Blank],
            [Mark::Blank, Mark::Blank, Mark::Blank],
        ];
        let board = Board::from_cells(rows);

        assert_eq!(board.mark_counts(), (2, 1));
        assert!(board.is_valid());
        assert!(Board::empty().is_valid());
        assert!(!"XX./.../...".parse::<Board>().unwrap().is_valid());
        assert!(!"O../.../...".parse::<Board>().unwrap().is_valid());
    }
}
