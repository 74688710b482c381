use log::{debug, info};

use crate::deck::Deck;
use crate::geometry::{Point, Size};
use crate::hand::{place_cards_on, return_cards, Hand};
use crate::pile::{PileId, PileKind};
use crate::state::State;

/// Everything the front end can ask of the engine.
///
/// Commands are queued and only take effect on the next tick, in the order
/// they were queued. A command whose precondition fails leaves the state
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Draw from the source pile, or recycle the waste when the source is empty.
    NextCard,
    /// Lift the top `count` cards of `pile`, the pointer being at `point`.
    PickUp {
        point: Point,
        pile: PileId,
        count: usize,
    },
    /// Drag the held cards along with the pointer.
    Move { point: Point },
    /// Drop the held cards on the hovering slot, or send them back.
    Set,
    /// Send the held cards back where they came from.
    Cancel,
    Resize(Size),
    Deal { seed: u64 },
}

impl Command {
    pub fn apply(self, state: State) -> State {
        match self {
            Command::NextCard => next_card(state),
            Command::PickUp { point, pile, count } => pick_up_cards(state, point, pile, count),
            Command::Move { point } => move_card(state, point),
            Command::Set => set_card(state),
            Command::Cancel => return_cards(state),
            Command::Resize(body) => resize(state, body),
            Command::Deal { seed } => deal(state, seed),
        }
    }
}

pub fn next_card(state: State) -> State {
    if state.hand.is_some() {
        return state;
    }
    let source = state.pile(PileId::Source);
    let waste = state.pile(PileId::Waste);
    match source.take_top(1) {
        Some((rest, drawn)) => {
            debug!("drew {}", drawn[0]);
            let waste = waste.with_cards_pushed(&drawn, 0.0);
            state
                .with_pile(PileId::Source, rest)
                .with_pile(PileId::Waste, waste)
        }
        None if waste.is_empty() => state,
        None => {
            debug!("recycling {} card(s) from waste", waste.len());
            let recycled = waste.cards.iter().rev().copied().collect();
            let source = source.with_cards(recycled, 0.0);
            let waste = waste.with_cards(Vec::new(), 0.0);
            state
                .with_pile(PileId::Source, source)
                .with_pile(PileId::Waste, waste)
        }
    }
}

pub fn pick_up_cards(state: State, point: Point, id: PileId, count: usize) -> State {
    if state.hand.is_some() {
        return state;
    }
    let count = match id.kind() {
        PileKind::Source => return state,
        PileKind::Waste | PileKind::Target => 1,
        PileKind::Packing => count,
    };
    let Some((rest, cards)) = state.pile(id).take_top(count) else {
        return state;
    };
    if cards.iter().any(|card| !card.is_face_up()) {
        return state;
    }
    debug!("picked up {} card(s) from {}", cards.len(), id);
    let hand = Hand::new(point, cards, id);
    state.with_pile(id, rest).with_hand(Some(hand))
}

pub fn move_card(state: State, point: Point) -> State {
    match &state.hand {
        Some(hand) => {
            let hand = hand.moved_to(point, state.card_offset_size);
            state.with_hand(Some(hand))
        }
        None => state,
    }
}

pub fn set_card(state: State) -> State {
    match state.hand.as_ref().and_then(Hand::add_card_to_slot) {
        Some(pile) => place_cards_on(state, pile),
        None => return_cards(state),
    }
}

pub fn resize(state: State, body: Size) -> State {
    State { body, ..state }
}

pub fn deal(state: State, seed: u64) -> State {
    info!("dealing a new game with seed {}", seed);
    state.dealt(seed, Deck::shuffled(seed).deal())
}
