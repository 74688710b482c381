use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use klondike_core::layout::{pointer_target, PointerTarget};
use klondike_core::{Command, Events, Size, State, TickSource};
use klondike_widgets::cell_point;
use log::{debug, error};
use rand::Rng;
use ratatui::layout::Rect;

/// Rows below the table kept for the status line
pub const FOOTER_HEIGHT: u16 = 1;

/// What one terminal event asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Command(Command),
    Quit,
    Ignore,
}

/// Table area for a terminal of `width` x `height` cells.
pub fn table_area(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height.saturating_sub(FOOTER_HEIGHT))
}

pub fn table_size(area: Rect) -> Size {
    Size::new(f64::from(area.width), f64::from(area.height))
}

/// Waits out one frame per tick, queueing whatever the terminal reported.
pub struct TerminalInput {
    frame: Duration,
    table: Rect,
    error: Option<io::Error>,
}

impl TerminalInput {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            frame: Duration::from_millis(16),
            table: table_area(width, height),
            error: None,
        }
    }

    /// The error that stopped the loop, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn translate(&mut self, event: Event, state: &State) -> Input {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.key(key),
            Event::Mouse(mouse) => self.mouse(mouse, state),
            Event::Resize(width, height) => {
                self.table = table_area(width, height);
                Input::Command(Command::Resize(table_size(self.table)))
            }
            _ => Input::Ignore,
        }
    }

    fn key(&self, key: KeyEvent) -> Input {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
            KeyCode::Char('q') => Input::Quit,
            KeyCode::Char(' ') | KeyCode::Char('d') => Input::Command(Command::NextCard),
            KeyCode::Esc => Input::Command(Command::Cancel),
            KeyCode::Char('n') => Input::Command(Command::Deal {
                seed: rand::thread_rng().gen(),
            }),
            _ => Input::Ignore,
        }
    }

    fn mouse(&self, mouse: MouseEvent, state: &State) -> Input {
        let point = cell_point(self.table, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match pointer_target(state, point) {
                Some(PointerTarget::Draw) => Input::Command(Command::NextCard),
                Some(PointerTarget::PickUp { pile, count }) => {
                    Input::Command(Command::PickUp { point, pile, count })
                }
                None => Input::Ignore,
            },
            MouseEventKind::Drag(MouseButton::Left) => Input::Command(Command::Move { point }),
            MouseEventKind::Up(MouseButton::Left) => Input::Command(Command::Set),
            _ => Input::Ignore,
        }
    }

    fn pump(&mut self, events: &mut Events<'_>) -> io::Result<bool> {
        let deadline = Instant::now() + self.frame;
        let mut timeout = self.frame;
        while event::poll(timeout)? {
            match self.translate(event::read()?, events.state()) {
                Input::Command(command) => events.push(command),
                Input::Quit => {
                    debug!("quit requested");
                    return Ok(false);
                }
                Input::Ignore => {}
            }
            timeout = deadline.saturating_duration_since(Instant::now());
        }
        Ok(true)
    }
}

impl TickSource for TerminalInput {
    fn request_next_tick(&mut self, events: &mut Events<'_>) -> bool {
        match self.pump(events) {
            Ok(keep_going) => keep_going,
            Err(err) => {
                error!("reading terminal events failed: {}", err);
                self.error = Some(err);
                false
            }
        }
    }
}
