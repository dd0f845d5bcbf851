//! Connect 4 engine: a gravity-drop board, a fork/join win scanner, a
//! window-scoring heuristic and a fixed-depth alpha-beta search that plays
//! for the computer opponent.
//!
//! A [`GameSession`] owns one game. Real moves go through
//! [`GameSession::play`], which validates the column, drops the token, hands
//! the turn over and runs the win scan. The search works directly on the
//! [`Board`] with drop/undo and always leaves it as it found it.
use thiserror::Error;

pub mod board;
pub mod config;
pub mod eval;
pub mod game;
pub mod scan;
pub mod search;

pub use board::{Board, Cell, Direction, Player, DIRECTIONS};
pub use config::GameConfig;
pub use eval::evaluate;
pub use game::{GameSession, GameStatus, MoveOutcome};
pub use scan::{check_finished, scan_board, scan_columns, ScanOutcome};
pub use search::{ComputerPlayer, SearchReport};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid position at row {row}, column {column}: {reason}")]
    ParsePosition {
        row: usize,
        column: usize,
        reason: String,
    },
    #[error("board dimensions {width}x{height} are out of range (4-16)")]
    InvalidDimensions { width: usize, height: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds { column: usize },
    #[error("no legal moves remain")]
    NoMoves,
    #[error("depth {0} is out of range (1-12)")]
    DepthOutOfRange(u8),
    #[error("the game is already over")]
    GameOver,
    #[error("it is not the computer's turn")]
    NotComputerTurn,
    #[error("it is the computer's turn")]
    ComputerTurn,
    #[error("invalid configuration: {0}")]
    Config(String),
}
