//! Board state: the grid, whose turn it is, the free-space counter and the
//! winner. Row 0 is the top row, so tokens fall towards `height - 1`.
use serde::{Deserialize, Serialize};

use crate::GameError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 16;

/// Number of cells in a winning line.
pub const LINE: usize = 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A single step on the grid. `vertical` grows downwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Direction {
    pub horizontal: isize,
    pub vertical: isize,
}

impl Direction {
    pub const RIGHT: Direction = Direction::new(1, 0);
    pub const DOWN: Direction = Direction::new(0, 1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);
    pub const UP_RIGHT: Direction = Direction::new(1, -1);

    pub const fn new(horizontal: isize, vertical: isize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Every axis a line of four can lie on.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::RIGHT,
    Direction::DOWN,
    Direction::DOWN_RIGHT,
    Direction::UP_RIGHT,
];

/// `None` is an empty cell.
pub type Cell = Option<Player>;

/// Four consecutive cells along one direction.
pub type Window = [Cell; LINE];

/// Owner of a window if all four cells hold the same player's tokens.
pub fn line_owner(window: &Window) -> Option<Player> {
    let first = window[0]?;
    window
        .iter()
        .all(|&cell| cell == Some(first))
        .then_some(first)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    current: Player,
    free_spaces: usize,
    winner: Option<Player>,
    vs_computer: bool,
}

impl Board {
    pub fn new(
        width: usize,
        height: usize,
        vs_computer: bool,
        starting: Player,
    ) -> Result<Self, GameError> {
        let allowed = MIN_DIMENSION..=MAX_DIMENSION;
        if !allowed.contains(&width) || !allowed.contains(&height) {
            return Err(GameError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height, vs_computer, starting))
    }

    /// The classic 7 wide by 6 tall board.
    pub fn standard(vs_computer: bool, starting: Player) -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT, vs_computer, starting)
    }

    fn empty(width: usize, height: usize, vs_computer: bool, starting: Player) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            current: starting,
            free_spaces: width * height,
            winner: None,
            vs_computer,
        }
    }

    /// Builds a position from rows written top to bottom, using `.` for empty
    /// cells and `1`/`X` or `2`/`O` for tokens. Tokens must rest on the
    /// bottom or on another token.
    pub fn from_rows(rows: &[&str], vs_computer: bool, to_move: Player) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut board = Self::new(width, height, vs_computer, to_move)?;
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != width {
                return Err(GameError::ParsePosition {
                    row,
                    column: chars.len().min(width),
                    reason: format!("expected {width} cells, found {}", chars.len()),
                });
            }
            for (column, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '.' => None,
                    '1' | 'X' | 'x' => Some(Player::One),
                    '2' | 'O' | 'o' => Some(Player::Two),
                    _ => {
                        return Err(GameError::ParsePosition {
                            row,
                            column,
                            reason: format!("unexpected cell {ch}"),
                        })
                    }
                };
                board.set(row, column, cell);
            }
        }
        for row in 0..height - 1 {
            for column in 0..width {
                if board.get(row, column).is_some() && board.get(row + 1, column).is_none() {
                    return Err(GameError::ParsePosition {
                        row,
                        column,
                        reason: "token is floating above an empty cell".to_string(),
                    });
                }
            }
        }
        board.free_spaces = board.cells.iter().filter(|cell| cell.is_none()).count();
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.width + column]
    }

    fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row * self.width + column] = cell;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_vs_computer(&self) -> bool {
        self.vs_computer
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn other_player(&self) -> Player {
        self.current.opponent()
    }

    pub fn free_spaces(&self) -> usize {
        self.free_spaces
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub(crate) fn set_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.get(0, column).is_some()
    }

    pub fn swap_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Drops a token for the player to move. Returns false, leaving the board
    /// untouched, if the column is full. The turn is not advanced.
    pub fn drop(&mut self, column: usize) -> bool {
        self.force_drop(self.current, column)
    }

    /// Drops a token for `player` regardless of whose turn it is.
    pub fn force_drop(&mut self, player: Player, column: usize) -> bool {
        if self.is_column_full(column) {
            return false;
        }
        // the top cell is empty, so row 0 is the last candidate
        let row = (1..self.height)
            .rev()
            .find(|&row| self.get(row, column).is_none())
            .unwrap_or(0);
        self.set(row, column, Some(player));
        self.free_spaces -= 1;
        true
    }

    /// Removes the topmost token of `column`; does nothing on an empty column.
    pub fn undo(&mut self, column: usize) {
        let Some(row) = (0..self.height).find(|&row| self.get(row, column).is_some()) else {
            return;
        };
        self.set(row, column, None);
        self.free_spaces += 1;
    }

    fn in_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.height && (column as usize) < self.width
    }

    /// The four cells starting at (`row`, `column`) stepping by `direction`,
    /// or `None` if the run leaves the board.
    pub fn window(&self, row: usize, column: usize, direction: Direction) -> Option<Window> {
        let mut cells = [None; LINE];
        let (mut r, mut c) = (row as isize, column as isize);
        for cell in cells.iter_mut() {
            if !self.in_bounds(r, c) {
                return None;
            }
            *cell = self.get(r as usize, c as usize);
            r += direction.vertical;
            c += direction.horizontal;
        }
        Some(cells)
    }

    /// Whole-board check for a line of four owned by `player`.
    pub fn has_line(&self, player: Player) -> bool {
        (0..self.height).any(|row| {
            (0..self.width).any(|column| {
                DIRECTIONS.iter().any(|&direction| {
                    self.window(row, column, direction)
                        .and_then(|window| line_owner(&window))
                        == Some(player)
                })
            })
        })
    }
}
