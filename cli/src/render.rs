use std::io::{self, Write};

use connect4::{Board, Cell, Player};

fn symbol(cell: Cell) -> char {
    match cell {
        None => '.',
        Some(Player::One) => 'X',
        Some(Player::Two) => 'O',
    }
}

/// Board with 1-based column numbers on top, framed by dashes.
pub fn render(board: &Board) -> String {
    let border = "-".repeat(board.width() * 4 + 1);
    let mut output = String::new();
    output.push_str(&border);
    output.push('\n');

    output.push('|');
    for column in 1..=board.width() {
        output.push_str(&format!(" {column:<2}|"));
    }
    output.push('\n');
    output.push_str(&border);
    output.push('\n');

    for row in board.rows() {
        output.push('|');
        for &cell in row {
            output.push(' ');
            output.push(symbol(cell));
            output.push_str(" |");
        }
        output.push('\n');
    }
    output.push_str(&border);
    output
}

pub fn show_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "{}", render(board))
}

pub fn show_mode_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Choose mode:")?;
    writeln!(out, "    1 - player vs player")?;
    writeln!(out, "    2 - player vs computer")
}
