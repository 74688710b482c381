//! One engine step: queued commands first, then layout, then rules.

use std::mem;

use log::trace;

use crate::config::Config;
use crate::layout;
use crate::rules;
use crate::state::State;

/// Carries a snapshot through the stages of a step.
///
/// Every stage sees its own input and the input of the stage before it, so a
/// stage can tell whether the field it derives from was just changed.
#[derive(Debug, Clone)]
pub struct Transition {
    pub current: State,
    pub previous: State,
}

impl Transition {
    pub fn new(state: State) -> Self {
        Self {
            previous: state.clone(),
            current: state,
        }
    }

    pub fn map<F>(self, stage: F) -> Self
    where
        F: FnOnce(State, &State) -> State,
    {
        let next = stage(self.current.clone(), &self.previous);
        Self {
            previous: self.current,
            current: next,
        }
    }

    pub fn into_state(self) -> State {
        self.current
    }
}

/// Applies every queued command in the order it was queued and empties the
/// queue.
pub fn process_events(mut state: State, _previous: &State) -> State {
    if state.event_queue.is_empty() {
        return state;
    }
    let events = mem::take(&mut state.event_queue);
    trace!("processing {} event(s)", events.len());
    events
        .into_iter()
        .fold(state, |state, command| command.apply(state))
}

pub fn next_step(config: &Config, state: State) -> State {
    Transition::new(state)
        .map(process_events)
        .map(|state, previous| layout::container_size(config, state, previous))
        .map(|state, previous| layout::card_size(config, state, previous))
        .map(|state, previous| layout::card_slots_positions(config, state, previous))
        .map(rules::flip_slot_cards)
        .map(rules::eligible_slots)
        .map(rules::target_slot)
        .into_state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::geometry::{Point, Size};
    use crate::pile::PileId;

    fn queued(state: State, commands: &[Command]) -> State {
        let mut state = state;
        state.event_queue.extend_from_slice(commands);
        state
    }

    #[test]
    fn test_map_shifts_current_into_previous() {
        let state = State::new();
        let transition = Transition::new(state.clone()).map(|state, previous| {
            assert_eq!(&state, previous);
            State { seed: 9, ..state }
        });
        assert_eq!(transition.previous, state);
        assert_eq!(transition.current.seed, 9);
    }

    #[test]
    fn test_events_run_in_queue_order() {
        let state = queued(
            State::new(),
            &[Command::Resize(Size::new(1.0, 1.0)), Command::Resize(Size::new(2.0, 2.0))],
        );
        let state = process_events(state.clone(), &state);
        assert!(state.event_queue.is_empty());
        assert_eq!(state.body, Size::new(2.0, 2.0));
    }

    #[test]
    fn test_draw_order_is_preserved() {
        let state = queued(State::new(), &[Command::NextCard, Command::NextCard]);
        let top_two: Vec<_> = state.pile(PileId::Source).cards[50..]
            .iter()
            .rev()
            .map(|card| card.id())
            .collect();
        let state = next_step(&Config::default(), state);
        let waste: Vec<_> = state.pile(PileId::Waste).cards.iter().map(|c| c.id()).collect();
        assert_eq!(waste, top_two);
    }

    #[test]
    fn test_resize_lays_out_the_table() {
        let config = Config::default();
        let state = queued(State::new_game(1), &[Command::Resize(Size::new(1000.0, 1111.0))]);
        let state = next_step(&config, state);
        assert_eq!(state.container.origin, Point::new(40.0, 40.0));
        assert_eq!(state.card_size, Size::new(124.0, 173.0));
        assert_eq!(state.pile(PileId::Source).origin, Point::new(40.0, 40.0));
    }

    #[test]
    fn test_idle_step_changes_nothing() {
        let config = Config::default();
        let state = queued(State::new_game(1), &[Command::Resize(Size::new(1000.0, 1111.0))]);
        let once = next_step(&config, state);
        let twice = next_step(&config, once.clone());
        assert_eq!(once, twice);
        assert!(once.renders_same(&twice));
    }

    #[test]
    fn test_drag_onto_legal_pile_lands() {
        let config = Config::default();
        let state = queued(State::new(), &[Command::Resize(Size::new(1000.0, 1111.0))]);
        let state = next_step(&config, state);
        // The unshuffled source has the King of Diamonds on top.
        let state = queued(state, &[Command::NextCard]);
        let state = next_step(&config, state);
        let waste = state.pile(PileId::Waste).origin;
        let packing = state.pile(PileId::Packing1).origin;
        let grab = waste.offset(5.0, 5.0);
        let state = queued(
            state,
            &[
                Command::PickUp { point: grab, pile: PileId::Waste, count: 1 },
                Command::Move { point: grab + (packing - waste) },
            ],
        );
        let state = next_step(&config, state);
        assert_eq!(state.hand.as_ref().unwrap().hovering_slot, Some(PileId::Packing1));

        let state = next_step(&config, queued(state, &[Command::Set]));
        assert!(state.hand.is_none());
        assert_eq!(state.pile(PileId::Packing1).len(), 1);
        assert!(state.eligible_slots.is_empty());
        assert!(state.is_full_deck());
    }
}
