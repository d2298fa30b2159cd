use crate::board::{Board, Coord};
use crate::outcome::evaluate;
use crate::search_node::SearchNode;
use crate::{DRAW_SCORE, Outcome, Score, Side};
use ego_tree::{NodeId, Tree};
use tracing::{debug, trace, warn};

/// The value of a position and the move that achieves it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SearchResult {
    /// `+1` if the computer wins with best play, `-1` if the human does, `0` for a draw.
    pub score: Score,
    /// Best move for the side to move. `None` only for terminal positions.
    pub chosen: Option<Coord>,
}

impl SearchResult {
    fn terminal(score: Score) -> Self {
        Self {
            score,
            chosen: None,
        }
    }
}

/// Searches `board` to the end of the game and returns its minimax value with the best move
/// for `side_to_move`.
///
/// The computer maximises the score and the human minimises it. Candidates are tried in
/// [`Board::empty_cells`] order and a later candidate only replaces the current best if it is
/// strictly better, so among equally good moves the first one in scan order is returned.
/// The function is pure: the same board and side always give the same result.
pub fn search(board: &Board, side_to_move: Side) -> SearchResult {
    MinimaxSearch::builder(*board)
        .with_side_to_move(side_to_move)
        .build()
        .run()
        .result
}

/// Plays [`search`]'s choice for both sides in turn until the game ends and returns the moves.
pub fn principal_variation(board: &Board, side_to_move: Side) -> Vec<Coord> {
    let mut line = Vec::new();
    let mut board = *board;
    let mut side = side_to_move;
    while let Some(coord) = search(&board, side).chosen {
        board = board.with_move_unchecked(coord, side.mark());
        line.push(coord);
        side = side.opponent();
    }
    line
}

/// A configured minimax search over a single position.
///
/// Runs the same algorithm as [`search`]; in addition it can keep every explored position in
/// a tree for inspection.
pub struct MinimaxSearch {
    board: Board,
    side_to_move: Side,
    record_tree: bool,
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder {
    board: Board,
    side_to_move: Side,
    record_tree: bool,
}

impl MinimaxSearchBuilder {
    /// Creates a new builder for the given position, with the computer to move.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            side_to_move: Side::Ai,
            record_tree: false,
        }
    }

    /// Sets which side places the next mark.
    pub fn with_side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Enables or disables recording of the explored tree.
    pub fn with_tree_recording(mut self, record: bool) -> Self {
        self.record_tree = record;
        self
    }

    /// Builds the `MinimaxSearch` instance with the configured parameters.
    pub fn build(self) -> MinimaxSearch {
        MinimaxSearch::new(self.board, self.side_to_move, self.record_tree)
    }
}

impl MinimaxSearch {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder(board: Board) -> MinimaxSearchBuilder {
        MinimaxSearchBuilder::new(board)
    }

    /// Creates a new `MinimaxSearch` instance.
    ///
    /// It is recommended to use the builder pattern via `MinimaxSearch::builder()` instead.
    pub fn new(board: Board, side_to_move: Side, record_tree: bool) -> Self {
        Self {
            board,
            side_to_move,
            record_tree,
        }
    }

    /// The position being searched.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move in the searched position.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Explores the full game tree below the position.
    pub fn run(&self) -> SearchReport {
        let mut walker = Walker {
            record: self.record_tree,
            positions_visited: 0,
            tree: None,
        };
        let result = walker.explore(&self.board, self.side_to_move, None, None, 0);
        debug!(
            side = %self.side_to_move,
            score = result.score,
            chosen = ?result.chosen,
            positions = walker.positions_visited,
            "minimax search finished"
        );

        SearchReport {
            result,
            positions_visited: walker.positions_visited,
            tree: walker.tree,
        }
    }
}

/// Everything a `MinimaxSearch` run produced.
#[derive(Debug)]
pub struct SearchReport {
    /// The value and best move of the searched position.
    pub result: SearchResult,
    /// Number of positions evaluated, the root included.
    pub positions_visited: u64,
    /// The explored tree, present only when recording was enabled.
    pub tree: Option<Tree<SearchNode>>,
}

impl SearchReport {
    /// Returns the score of every move available at the root, in scan order.
    ///
    /// Empty when the tree was not recorded or the root is terminal.
    pub fn candidate_scores(&self) -> Vec<(Coord, Score)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        tree.root()
            .children()
            .filter_map(|child| {
                let node = child.value();
                node.prev_move.map(|coord| (coord, node.score))
            })
            .collect()
    }
}

/// Depth-first walker shared by [`search`] and [`MinimaxSearch`].
struct Walker {
    record: bool,
    positions_visited: u64,
    tree: Option<Tree<SearchNode>>,
}

impl Walker {
    fn explore(
        &mut self,
        board: &Board,
        side: Side,
        prev_move: Option<Coord>,
        parent: Option<NodeId>,
        depth: u8,
    ) -> SearchResult {
        self.positions_visited += 1;
        let outcome = evaluate(board);
        let node = self.open(board, outcome, side, prev_move, parent, depth);

        let result = match outcome.score() {
            Some(score) => SearchResult::terminal(score),
            None => self.expand(board, side, node, depth),
        };

        self.close(node, result);
        result
    }

    fn expand(
        &mut self,
        board: &Board,
        side: Side,
        node: Option<NodeId>,
        depth: u8,
    ) -> SearchResult {
        let mut best: Option<(Score, Coord)> = None;

        for coord in board.empty_cells() {
            let candidate = board.with_move_unchecked(coord, side.mark());
            let score = self
                .explore(&candidate, side.opponent(), Some(coord), node, depth + 1)
                .score;
            if depth == 0 {
                trace!(%side, candidate = %coord, score, "root candidate scored");
            }

            let improves = match best {
                None => true,
                Some((best_score, _)) => side.prefers(score, best_score),
            };
            if improves {
                best = Some((score, coord));
            }
        }

        match best {
            Some((score, coord)) => SearchResult {
                score,
                chosen: Some(coord),
            },
            None => {
                warn!(%board, "unfinished position without empty cells, scoring it as a draw");
                SearchResult::terminal(DRAW_SCORE)
            }
        }
    }

    /// Adds a node for the current position when recording; returns its id.
    fn open(
        &mut self,
        board: &Board,
        outcome: Outcome,
        side: Side,
        prev_move: Option<Coord>,
        parent: Option<NodeId>,
        depth: u8,
    ) -> Option<NodeId> {
        if !self.record {
            return None;
        }

        let value = SearchNode::new(*board, outcome, side, prev_move, depth);
        if self.tree.is_none() {
            let tree = Tree::new(value);
            let root = tree.root().id();
            self.tree = Some(tree);
            return Some(root);
        }

        let tree = self.tree.as_mut()?;
        let mut parent = tree.get_mut(parent?)?;
        Some(parent.append(value).id())
    }

    fn close(&mut self, node: Option<NodeId>, result: SearchResult) {
        let (Some(tree), Some(id)) = (self.tree.as_mut(), node) else {
            return;
        };
        if let Some(mut recorded) = tree.get_mut(id) {
            let value = recorded.value();
            value.score = result.score;
            value.best_move = result.chosen;
        }
    }
}
