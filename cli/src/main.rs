use std::io::{self, BufRead, Write};

use anyhow::Result;
use connect4::{GameConfig, GameError, GameSession, GameStatus};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod prompt;
mod render;
mod settings;

use prompt::Mode;

fn main() -> Result<()> {
    init_tracing();
    let path = settings::config_path(std::env::args().nth(1));
    let config = settings::load(path.as_deref())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run(&config, &mut input, &mut out)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Menu loop: one game per iteration until the player declines a rematch or
/// input runs out.
fn run<R: BufRead, W: Write>(config: &GameConfig, input: &mut R, out: &mut W) -> Result<()> {
    loop {
        render::show_mode_menu(out)?;
        let Some(mode) = prompt::read_mode(input, out)? else {
            return Ok(());
        };
        let config = config.clone().with_computer(mode == Mode::PlayerVsComputer);
        let mut game = GameSession::new(&config)?;
        info!(?mode, "new game");

        if !play(&mut game, input, out)? {
            return Ok(());
        }

        render::show_board(out, game.board())?;
        match game.status() {
            GameStatus::Won(player) => writeln!(out, "The winner is Player {}!", player.number())?,
            GameStatus::Draw => writeln!(out, "It is a draw!")?,
            GameStatus::InProgress => {}
        }

        if prompt::read_play_again(input, out)? != Some(true) {
            return Ok(());
        }
    }
}

/// Plays until the game ends. Returns false if input ran out first.
fn play<R: BufRead, W: Write>(game: &mut GameSession, input: &mut R, out: &mut W) -> Result<bool> {
    while !game.is_over() {
        if game.is_computer_turn() {
            let outcome = game.computer_move()?;
            writeln!(out, "Computer plays column {}", outcome.column + 1)?;
            continue;
        }

        render::show_board(out, game.board())?;
        let player = game.current_player();
        let Some(column) = prompt::read_column(input, out, player, game.board().width())? else {
            return Ok(false);
        };
        match game.play(column) {
            Ok(_) => {}
            Err(GameError::ColumnFull { .. }) => writeln!(out, "Column is full. Try again.")?,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(true)
}
