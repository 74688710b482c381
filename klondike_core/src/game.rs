use std::convert::Infallible;
use std::mem;

use log::{debug, info};

use crate::command::Command;
use crate::config::Config;
use crate::geometry::{Point, Size};
use crate::pile::PileId;
use crate::pipeline;
use crate::state::State;

/// Draws a snapshot after every tick.
///
/// `previous` is the snapshot the tick started from; piles that were not
/// touched share their `Arc` between the two.
pub trait Renderer {
    type Error;

    fn render(&mut self, state: &State, previous: &State) -> Result<(), Self::Error>;
}

impl<F> Renderer for F
where
    F: FnMut(&State, &State),
{
    type Error = Infallible;

    fn render(&mut self, state: &State, previous: &State) -> Result<(), Self::Error> {
        self(state, previous);
        Ok(())
    }
}

/// Decides when the next tick happens.
///
/// Called once before every tick. Input gathered while waiting is queued
/// through `events`; returning `false` ends the loop.
pub trait TickSource {
    fn request_next_tick(&mut self, events: &mut Events<'_>) -> bool;
}

/// The part of a running game a tick source may touch.
pub struct Events<'a> {
    game: &'a mut Game,
}

impl Events<'_> {
    pub fn push(&mut self, command: Command) {
        self.game.new_event(command);
    }

    pub fn state(&self) -> &State {
        self.game.state()
    }

    pub fn config(&self) -> &Config {
        self.game.config()
    }
}

/// Owns the current snapshot and advances it one tick at a time.
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    state: State,
    previous: State,
}

impl Game {
    pub fn new(config: Config, state: State) -> Self {
        Self {
            config,
            previous: state.clone(),
            state,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn previous(&self) -> &State {
        &self.previous
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Queues `command` for the next tick.
    pub fn new_event(&mut self, command: Command) {
        self.previous = self.state.clone();
        self.state.event_queue.push(command);
    }

    /// Marks the game as running. Returns `false` if it already was.
    pub fn run(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        info!("game started");
        self.state.running = true;
        true
    }

    pub fn stop(&mut self) {
        if self.state.running {
            info!("game stopped");
            self.state.running = false;
        }
    }

    /// Runs one pipeline step and hands the result to `renderer`.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        let next = pipeline::next_step(&self.config, self.state.clone());
        self.previous = mem::replace(&mut self.state, next);
        renderer.render(&self.state, &self.previous)
    }

    /// Ticks for as long as `ticks` asks for more, then stops.
    ///
    /// Does nothing if the game is already running.
    pub fn drive<T, R>(&mut self, ticks: &mut T, renderer: &mut R) -> Result<(), R::Error>
    where
        T: TickSource,
        R: Renderer,
    {
        if !self.run() {
            debug!("drive called on a running game");
            return Ok(());
        }
        let result = loop {
            if !ticks.request_next_tick(&mut Events { game: &mut *self }) {
                break Ok(());
            }
            if let Err(err) = self.tick(renderer) {
                break Err(err);
            }
        };
        self.stop();
        result
    }

    pub fn next_card(&mut self) {
        self.new_event(Command::NextCard);
    }

    pub fn pick_up_cards(&mut self, point: Point, pile: PileId, count: usize) {
        self.new_event(Command::PickUp { point, pile, count });
    }

    pub fn move_card(&mut self, point: Point) {
        self.new_event(Command::Move { point });
    }

    pub fn set_card(&mut self) {
        self.new_event(Command::Set);
    }

    pub fn cancel(&mut self) {
        self.new_event(Command::Cancel);
    }

    pub fn resize(&mut self, body: Size) {
        self.new_event(Command::Resize(body));
    }

    pub fn deal(&mut self, seed: u64) {
        self.new_event(Command::Deal { seed });
    }
}
