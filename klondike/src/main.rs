mod effects;
mod input;
mod logger;
mod screen;

use std::env;
use std::io;
use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use klondike_core::{Config, Game, State};
use log::{info, LevelFilter};
use rand::Rng;
use ratatui::prelude::*;

use input::{table_area, table_size, TerminalInput};
use screen::Screen;

const SEED_VAR: &str = "KLONDIKE_SEED";
const LOG_VAR: &str = "KLONDIKE_LOG";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Some(path) = env::var_os(LOG_VAR) {
        logger::init(&PathBuf::from(path), LevelFilter::Debug)?;
    }
    let seed = seed()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Deal seed from the environment, or a random one.
fn seed() -> color_eyre::Result<u64> {
    match env::var(SEED_VAR) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, value)),
        Err(env::VarError::NotPresent) => Ok(rand::thread_rng().gen()),
        Err(err) => Err(err).wrap_err_with(|| format!("cannot read {}", SEED_VAR)),
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, seed: u64) -> color_eyre::Result<()> {
    let (width, height) = terminal::size()?;
    info!("starting with seed {} on a {}x{} terminal", seed, width, height);

    let mut game = Game::new(Config::terminal(), State::new_game(seed));
    game.resize(table_size(table_area(width, height)));

    let mut input = TerminalInput::new(width, height);
    let mut screen = Screen::new(terminal);
    game.drive(&mut input, &mut screen)?;
    input.finish()?;
    Ok(())
}
