//! Win detection after a real move.
//!
//! The column range is split in half recursively and both halves are scanned
//! with `rayon::join`. Each half reports a [`ScanOutcome`]; the winner travels
//! back up the join tree inside the outcome, so no task writes to the board.
//! Only the player who just moved (the "other" player once the turn has been
//! handed over) can have completed a line.
use tracing::debug;

use crate::board::{line_owner, Board, Player, DIRECTIONS};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    InProgress,
    Draw,
    Won(Player),
}

impl ScanOutcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, ScanOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            ScanOutcome::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Logical OR of two halves. A win beats a draw; between two wins the
    /// left one is kept.
    pub fn merge(self, other: ScanOutcome) -> ScanOutcome {
        match (self, other) {
            (won @ ScanOutcome::Won(_), _) | (_, won @ ScanOutcome::Won(_)) => won,
            (ScanOutcome::Draw, _) | (_, ScanOutcome::Draw) => ScanOutcome::Draw,
            _ => ScanOutcome::InProgress,
        }
    }
}

/// Base case: every window anchored in `column`, in every direction.
pub fn scan_column(board: &Board, column: usize) -> ScanOutcome {
    if board.free_spaces() == 0 {
        return ScanOutcome::Draw;
    }
    let mover = board.other_player();
    for row in 0..board.height() {
        for &direction in DIRECTIONS.iter() {
            let owner = board
                .window(row, column, direction)
                .and_then(|window| line_owner(&window));
            if owner == Some(mover) {
                return ScanOutcome::Won(mover);
            }
        }
    }
    ScanOutcome::InProgress
}

/// Scans the closed range `start..=end`, forking at the midpoint.
pub fn scan_columns(board: &Board, start: usize, end: usize) -> ScanOutcome {
    debug_assert!(start <= end && end < board.width());
    if start == end {
        return scan_column(board, start);
    }
    let middle = (start + end) / 2;
    let (left, right) = rayon::join(
        || scan_columns(board, start, middle),
        || scan_columns(board, middle + 1, end),
    );
    left.merge(right)
}

/// Scans every column and records the winner on the board.
pub fn scan_board(board: &mut Board) -> ScanOutcome {
    let outcome = scan_columns(board, 0, board.width() - 1);
    if let ScanOutcome::Won(player) = outcome {
        board.set_winner(player);
    }
    debug!(?outcome, free_spaces = board.free_spaces(), "win scan");
    outcome
}

/// True once the game has ended, either by a line of four or a full board.
pub fn check_finished(board: &mut Board) -> bool {
    scan_board(board).is_finished()
}
