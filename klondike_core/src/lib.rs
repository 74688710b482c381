pub mod card;
pub mod command;
pub mod config;
pub mod deck;
pub mod game;
pub mod geometry;
pub mod hand;
pub mod layout;
pub mod pile;
pub mod pipeline;
pub mod rules;
pub mod state;

pub use card::*;
pub use command::Command;
pub use config::{Config, Ratio};
pub use deck::{Deal, Deck};
pub use game::{Events, Game, Renderer, TickSource};
pub use geometry::{Bounds, Point, Rectangle, Size};
pub use hand::Hand;
pub use layout::PointerTarget;
pub use pile::{Pile, PileId, PileKind};
pub use rules::EligibleSlot;
pub use state::State;
