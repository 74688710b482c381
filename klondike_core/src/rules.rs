//! Solitaire legality and drop-target selection.
//!
//! All three stages work on the snapshot that layout produced for this tick.
//! `flip_slot_cards` only runs with an empty hand, the other two only while
//! cards are held.

use log::trace;

use crate::card::{Card, Rank};
use crate::geometry::Rectangle;
use crate::hand::{place_cards_on, Hand};
use crate::pile::{Pile, PileId, PileKind};
use crate::state::State;

/// A legal drop candidate for the held cards in the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibleSlot {
    pub pile: PileId,
    pub overlapping_area: f64,
}

impl EligibleSlot {
    pub fn add_card(&self, state: State) -> State {
        place_cards_on(state, self.pile)
    }
}

/// Target piles build up by suit from the Ace, one card at a time.
pub fn target_accepts(top: Option<&Card>, held: &[Card]) -> bool {
    let [card] = held else {
        return false;
    };
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.number() + 1 == card.number(),
    }
}

/// Packing piles build down in alternating colors, starting from a King.
pub fn packing_accepts(top: Option<&Card>, held: &[Card]) -> bool {
    let Some(card) = held.first() else {
        return false;
    };
    match top {
        None => card.rank == Rank::King,
        Some(top) => top.color() != card.color() && top.number() == card.number() + 1,
    }
}

pub fn accepts(id: PileId, pile: &Pile, held: &[Card]) -> bool {
    match id.kind() {
        PileKind::Target => target_accepts(pile.top(), held),
        PileKind::Packing => packing_accepts(pile.top(), held),
        PileKind::Source | PileKind::Waste => false,
    }
}

/// Area a dropped card is matched against. Packing piles cover their fanned
/// cards too.
pub fn drop_area(state: &State, id: PileId) -> Rectangle {
    let pile = state.pile(id);
    let rect = pile.rectangle();
    if id.is_packing() {
        rect.extended(pile.len() as f64 * state.card_offset_size)
    } else {
        rect
    }
}

/// Turns up the top card of every packing pile once nothing is held.
pub fn flip_slot_cards(state: State, _previous: &State) -> State {
    if state.hand.is_some() {
        return state;
    }
    PileId::PACKING.iter().fold(state, |state, &id| {
        let pile = state.pile(id);
        match pile.top() {
            Some(top) if !top.is_face_up() => {
                let mut flipped = pile.clone();
                if let Some(card) = flipped.cards.last_mut() {
                    *card = card.face_up();
                }
                trace!("flipping top card of {}", id);
                state.with_pile(id, flipped)
            }
            _ => state,
        }
    })
}

/// Recomputes the legal drop candidates for the held cards.
pub fn eligible_slots(state: State, _previous: &State) -> State {
    let Some(hand) = state.hand.as_ref() else {
        if state.eligible_slots.is_empty() {
            return state;
        }
        return State {
            eligible_slots: Vec::new(),
            ..state
        };
    };
    let slots = match hand.rectangle(state.card_size) {
        Some(held) => PileId::PLACEABLE
            .iter()
            .filter(|&&id| accepts(id, state.pile(id), &hand.cards))
            .map(|&id| EligibleSlot {
                pile: id,
                overlapping_area: held.overlapping_area(&drop_area(&state, id)),
            })
            .collect(),
        None => Vec::new(),
    };
    State {
        eligible_slots: slots,
        ..state
    }
}

/// Points the hand at the candidate with the largest overlap. Ties go to the
/// candidate found first; no overlap at all clears the target.
pub fn target_slot(state: State, _previous: &State) -> State {
    let Some(hand) = state.hand.as_ref() else {
        return state;
    };
    let best = state
        .eligible_slots
        .iter()
        .fold(None::<&EligibleSlot>, |best, slot| match best {
            Some(b) if b.overlapping_area >= slot.overlapping_area => Some(b),
            _ => Some(slot),
        })
        .filter(|slot| slot.overlapping_area > 0.0)
        .map(|slot| slot.pile);
    if hand.hovering_slot == best {
        return state;
    }
    trace!("hovering slot is now {:?}", best);
    let hand = Hand {
        hovering_slot: best,
        ..hand.clone()
    };
    state.with_hand(Some(hand))
}
