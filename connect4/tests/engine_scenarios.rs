use connect4::{
    check_finished, evaluate, scan_columns, Board, ComputerPlayer, GameConfig, GameSession,
    GameStatus, Player, ScanOutcome,
};

const EMPTY: &str = ".......";

fn empty_cells(board: &Board) -> usize {
    board
        .rows()
        .flat_map(|row| row.iter())
        .filter(|cell| cell.is_none())
        .count()
}

#[test]
fn bottom_row_gap_filled_by_player_one_wins() {
    let mut board = Board::from_rows(
        &[EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "111...."],
        false,
        Player::One,
    )
    .unwrap();
    assert!(board.drop(3));
    board.swap_player();

    let halves = scan_columns(&board, 0, 3).merge(scan_columns(&board, 4, 6));
    let lopsided = scan_columns(&board, 0, 0).merge(scan_columns(&board, 1, 6));
    assert_eq!(halves, ScanOutcome::Won(Player::One));
    assert_eq!(lopsided, halves);

    assert!(check_finished(&mut board));
    assert_eq!(board.winner(), Some(Player::One));
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut board = Board::from_rows(
        &[
            "1122112", "1122112", "2211221", "1122112", "2211221", "2211221",
        ],
        true,
        Player::Two,
    )
    .unwrap();
    assert_eq!(board.free_spaces(), 0);
    assert!(check_finished(&mut board));
    assert_eq!(board.winner(), None);
}

#[test]
fn computer_on_empty_board_leaves_it_untouched() {
    let mut board = Board::standard(true, Player::Two);
    let before = board.clone();
    let column = ComputerPlayer::default().best_move(&mut board).unwrap();
    assert!(column <= 6);
    assert_eq!(board, before);
    assert_eq!(board.free_spaces(), empty_cells(&board));
    assert_eq!(evaluate(&board), 0);
}

#[test]
fn computer_wins_or_blocks_on_the_bottom_row() {
    let computer = ComputerPlayer::default();

    let mut winning = Board::from_rows(&[EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "1.222.1"], true, Player::Two)
        .unwrap();
    let report = computer.search(&mut winning).unwrap();
    assert_eq!(report.column, 1);
    assert_eq!(report.value, 1000);

    let mut defending =
        Board::from_rows(&[EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "...111."], true, Player::Two)
            .unwrap();
    let column = computer.best_move(&mut defending).unwrap();
    assert!(column == 2 || column == 6);
}

#[test]
fn session_reports_result_of_real_moves() {
    let mut game = GameSession::new(&GameConfig::default()).unwrap();
    for column in [3, 3, 4, 4, 5, 5] {
        game.play(column).unwrap();
    }
    let outcome = game.play(6).unwrap();
    assert_eq!(outcome.status, GameStatus::Won(Player::One));
    assert_eq!(game.board().free_spaces(), empty_cells(game.board()));
}

#[test]
fn computer_blocks_a_winning_threat_before_extending_its_own() {
    // player one completes the bottom row at column 3 unless it is blocked
    let mut board = Board::from_rows(
        &[EMPTY, EMPTY, EMPTY, ".1..2..", "22..21.", "12..111"],
        true,
        Player::Two,
    )
    .unwrap();
    let before = board.clone();
    assert_eq!(ComputerPlayer::default().best_move(&mut board).unwrap(), 3);
    assert_eq!(board, before);

    assert!(board.drop(3));
    board.swap_player();
    assert!(!check_finished(&mut board));
}
