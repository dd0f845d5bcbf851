//! Static evaluation used at the search horizon.
//!
//! Every 4-cell window that fits on the board is scored from the point of
//! view of one "own" player (the player to move, or the side a search plays
//! for), then the total is oriented so that positive values favour player
//! two (the maximising side of the search).
use crate::board::{Board, Direction, Player, Window, LINE};

const FOUR: i32 = 100;
const OWN_THREE: i32 = 16;
/// An opponent three with a gap counts double: blocking comes first.
const OPPONENT_THREE: i32 = 32;
const TWO: i32 = 8;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct WindowCounts {
    empty: usize,
    own: usize,
    opponent: usize,
}

fn count(window: &Window, own: Player) -> WindowCounts {
    let mut counts = WindowCounts::default();
    for cell in window {
        match cell {
            None => counts.empty += 1,
            Some(player) if *player == own => counts.own += 1,
            Some(_) => counts.opponent += 1,
        }
    }
    counts
}

fn score_window(counts: WindowCounts) -> i32 {
    match (counts.own, counts.opponent, counts.empty) {
        (LINE, _, _) => FOUR,
        (3, _, 1) => OWN_THREE,
        (2, _, 2) => TWO,
        (_, LINE, _) => -FOUR,
        (_, 3, 1) => -OPPONENT_THREE,
        (_, 2, 2) => -TWO,
        _ => 0,
    }
}

/// Anchors of every window on the board, grouped by direction.
fn windows(board: &Board) -> impl Iterator<Item = (usize, usize, Direction)> + '_ {
    let (width, height) = (board.width(), board.height());
    let horizontal = (0..height)
        .flat_map(move |row| (0..width - 3).map(move |column| (row, column, Direction::RIGHT)));
    let vertical = (0..height - 3)
        .flat_map(move |row| (0..width).map(move |column| (row, column, Direction::DOWN)));
    let falling = (0..height - 3).flat_map(move |row| {
        (0..width - 3).map(move |column| (row, column, Direction::DOWN_RIGHT))
    });
    let rising = (3..height).rev().flat_map(move |row| {
        (0..width - 3).map(move |column| (row, column, Direction::UP_RIGHT))
    });
    horizontal.chain(vertical).chain(falling).chain(rising)
}

/// Sum of all window scores relative to `own`.
pub fn score_for(board: &Board, own: Player) -> i32 {
    windows(board)
        .filter_map(|(row, column, direction)| board.window(row, column, direction))
        .map(|window| score_window(count(&window, own)))
        .sum()
}

/// Sum of all window scores relative to the player to move.
pub fn score_for_current(board: &Board) -> i32 {
    score_for(board, board.current_player())
}

/// Position score with `own` taking the 16/32 weighting, oriented so that
/// positive favours player two.
pub fn evaluate_for(board: &Board, own: Player) -> i32 {
    let score = score_for(board, own);
    match own {
        Player::Two => score,
        Player::One => -score,
    }
}

/// Position score from the point of view of the player to move; positive
/// favours player two, negative player one.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_for(board, board.current_player())
}
