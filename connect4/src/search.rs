//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Player two maximises, player one minimises; which side a node belongs to
//! is read from the board's current player. Nodes mutate the live board with
//! drop/undo and hand the turn over around each recursive call, so every
//! explored branch leaves the board exactly as it found it.
//!
//! Horizon positions are scored for the side that started the search, so
//! an opponent three with a gap always costs that side double.
use tracing::{debug, trace};

use crate::board::{Board, Player};
use crate::eval::evaluate_for;
use crate::GameError;

pub const DEFAULT_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 12;

/// Value of a won position; also the initial alpha-beta window.
pub const WIN_SCORE: i32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub column: usize,
    pub value: i32,
    pub nodes: u64,
}

/// The automated opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputerPlayer {
    depth: u8,
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl ComputerPlayer {
    pub fn new(depth: u8) -> Result<Self, GameError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(GameError::DepthOutOfRange(depth));
        }
        Ok(Self { depth })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn best_move(&self, board: &mut Board) -> Result<usize, GameError> {
        self.search(board).map(|report| report.column)
    }

    /// Searches for the player to move and reports the chosen column and its
    /// minimax value.
    pub fn search(&self, board: &mut Board) -> Result<SearchReport, GameError> {
        if board.free_spaces() == 0 {
            return Err(GameError::NoMoves);
        }
        if board.has_line(Player::One) || board.has_line(Player::Two) {
            return Err(GameError::GameOver);
        }
        let mut search = Search::new(board.current_player());
        let value = search.minimax(board, self.depth as usize, -WIN_SCORE, WIN_SCORE, true);
        let column = search.best_column.ok_or(GameError::NoMoves)?;
        debug!(
            player = ?board.current_player(),
            column,
            value,
            nodes = search.nodes,
            depth = self.depth,
            "search finished"
        );
        Ok(SearchReport {
            column,
            value,
            nodes: search.nodes,
        })
    }
}

#[derive(Debug)]
struct Search {
    /// Side the search plays for; owns the horizon weighting.
    own: Player,
    nodes: u64,
    best_column: Option<usize>,
}

impl Search {
    fn new(own: Player) -> Self {
        Self {
            own,
            nodes: 0,
            best_column: None,
        }
    }

    fn terminal_value(&self, board: &Board, depth: usize) -> Option<i32> {
        if board.has_line(Player::Two) {
            Some(WIN_SCORE)
        } else if board.has_line(Player::One) {
            Some(-WIN_SCORE)
        } else if board.free_spaces() == 0 {
            Some(0)
        } else if depth == 0 {
            Some(evaluate_for(board, self.own))
        } else {
            None
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        root: bool,
    ) -> i32 {
        self.nodes += 1;
        if let Some(value) = self.terminal_value(board, depth) {
            return value;
        }

        let maximizing = board.current_player() == Player::Two;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for column in 0..board.width() {
            if !board.drop(column) {
                continue;
            }
            board.swap_player();
            let value = self.minimax(board, depth - 1, alpha, beta, false);
            board.swap_player();
            board.undo(column);
            trace!(depth, column, value, "child searched");

            let improved = if maximizing {
                value > best
            } else {
                value < best
            };
            if !improved {
                continue;
            }
            best = value;
            if root {
                self.best_column = Some(column);
            }
            if maximizing {
                if value >= beta {
                    return value;
                }
                alpha = alpha.max(value);
            } else {
                if value <= alpha {
                    return value;
                }
                beta = beta.min(value);
            }
        }
        best
    }
}
