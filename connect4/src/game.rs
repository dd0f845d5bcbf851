//! One game from first drop to win or draw.
use tracing::{debug, info};

use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::scan::{scan_board, ScanOutcome};
use crate::search::ComputerPlayer;
use crate::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl From<ScanOutcome> for GameStatus {
    fn from(outcome: ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::InProgress => GameStatus::InProgress,
            ScanOutcome::Draw => GameStatus::Draw,
            ScanOutcome::Won(player) => GameStatus::Won(player),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub column: usize,
    pub status: GameStatus,
}

/// Owns the board and, against the computer, the engine playing player two.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    computer: Option<ComputerPlayer>,
    status: GameStatus,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = config.board()?;
        let computer = if config.vs_computer {
            Some(ComputerPlayer::new(config.search_depth)?)
        } else {
            None
        };
        Ok(Self {
            board,
            computer,
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.board.is_vs_computer() && self.board.current_player() == Player::Two
    }

    /// Plays `column` (0-based) for the human player to move, hands the turn
    /// over and runs the win scan.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(GameError::ComputerTurn);
        }
        self.apply(column)
    }

    fn apply(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if column >= self.board.width() {
            return Err(GameError::ColumnOutOfBounds { column });
        }
        let player = self.board.current_player();
        if !self.board.drop(column) {
            return Err(GameError::ColumnFull { column });
        }
        self.board.swap_player();
        self.status = scan_board(&mut self.board).into();
        debug!(?player, column, status = ?self.status, "move played");
        if self.is_over() {
            info!(status = ?self.status, "game over");
        }
        Ok(MoveOutcome {
            player,
            column,
            status: self.status,
        })
    }

    pub fn computer_move(&mut self) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }
        let column = match &self.computer {
            Some(computer) => computer.best_move(&mut self.board)?,
            None => return Err(GameError::NotComputerTurn),
        };
        self.apply(column)
    }
}
