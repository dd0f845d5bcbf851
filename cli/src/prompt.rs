//! Line-based prompts. Each reader loops until it gets a valid answer and
//! returns `None` once input is exhausted.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use connect4::Player;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;
    read_line(input)
}

pub fn read_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Mode>> {
    loop {
        let Some(answer) = ask(input, out, "Choose a mode: ")? else {
            return Ok(None);
        };
        match answer.parse::<u32>() {
            Ok(1) => return Ok(Some(Mode::PlayerVsPlayer)),
            Ok(2) => return Ok(Some(Mode::PlayerVsComputer)),
            Ok(_) => writeln!(out, "The mode you have selected does not exist. Try again.")?,
            Err(_) => writeln!(out, "The input you entered is not a number. Try again.")?,
        }
    }
}

/// Asks for a 1-based column and returns it 0-based.
pub fn read_column<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    player: Player,
    width: usize,
) -> Result<Option<usize>> {
    loop {
        writeln!(out, "Player {}", player.number())?;
        let Some(answer) = ask(input, out, "Enter column: ")? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(column) if (1..=width).contains(&column) => return Ok(Some(column - 1)),
            Ok(_) => writeln!(out, "The column you have selected does not exist. Try again.")?,
            Err(_) => writeln!(out, "The input you entered is not a number. Try again.")?,
        }
    }
}

pub fn read_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<bool>> {
    loop {
        let Some(answer) = ask(input, out, "Do you want to play again? Y/N\n")? else {
            return Ok(None);
        };
        match answer.to_uppercase().as_str() {
            "Y" => return Ok(Some(true)),
            "N" => return Ok(Some(false)),
            _ => writeln!(out, "Invalid response. Try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn mode_retries_until_valid() {
        let mut input = Cursor::new("abc\n3\n2\n");
        let mut out = Vec::new();
        let mode = read_mode(&mut input, &mut out).unwrap();
        assert_eq!(mode, Some(Mode::PlayerVsComputer));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("The input you entered is not a number. Try again."));
        assert!(text.contains("The mode you have selected does not exist. Try again."));
    }

    #[test]
    fn column_is_converted_to_zero_based() {
        let mut input = Cursor::new("0\n8\n 7 \n");
        let mut out = Vec::new();
        let column = read_column(&mut input, &mut out, Player::Two, 7).unwrap();
        assert_eq!(column, Some(6));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Player 2").count(), 3);
        assert_eq!(
            text.matches("The column you have selected does not exist.").count(),
            2
        );
    }

    #[test]
    fn play_again_accepts_either_case() {
        let mut out = Vec::new();
        assert_eq!(
            read_play_again(&mut Cursor::new("maybe\ny\n"), &mut out).unwrap(),
            Some(true)
        );
        assert_eq!(
            read_play_again(&mut Cursor::new("N\n"), &mut out).unwrap(),
            Some(false)
        );
    }

    #[test]
    fn exhausted_input_returns_none() {
        let mut out = Vec::new();
        assert_eq!(read_mode(&mut Cursor::new(""), &mut out).unwrap(), None);
        assert_eq!(
            read_column(&mut Cursor::new("x\n"), &mut out, Player::One, 7).unwrap(),
            None
        );
    }
}
