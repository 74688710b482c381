use log::debug;

use crate::card::Card;
use crate::geometry::{Point, Rectangle, Size};
use crate::pile::PileId;
use crate::state::State;

/// Cards being dragged by the pointer.
///
/// The hand always remembers the pile it was lifted from, so the cards can be
/// put back no matter how the drag ends. `hovering_slot` is the pile the cards
/// would land on if dropped now.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Pointer position at the last pick-up or move
    pub start: Point,
    pub cards: Vec<Card>,
    pub origin: PileId,
    pub hovering_slot: Option<PileId>,
}

impl Hand {
    pub fn new(start: Point, cards: Vec<Card>, origin: PileId) -> Self {
        Self {
            start,
            cards,
            origin,
            hovering_slot: None,
        }
    }

    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Pile the cards get added to on drop, if any.
    pub fn add_card_to_slot(&self) -> Option<PileId> {
        self.hovering_slot
    }

    /// Follows the pointer to `point`: the first card moves by the pointer
    /// delta and the rest fan out below it.
    pub fn moved_to(&self, point: Point, offset: f64) -> Hand {
        let delta = point - self.start;
        let base = self
            .first_card()
            .map_or(point, |first| first.position + delta);
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| card.at(base.offset(0.0, i as f64 * offset)))
            .collect();
        Hand {
            start: point,
            cards,
            ..self.clone()
        }
    }

    /// Face of the first held card, which is what gets matched against piles.
    pub fn rectangle(&self, card_size: Size) -> Option<Rectangle> {
        self.first_card()
            .map(|card| Rectangle::new(card.position, card_size))
    }
}

/// Puts the held cards back on the pile they came from and clears the hand.
pub fn return_cards(state: State) -> State {
    match state.hand.clone() {
        Some(hand) => {
            debug!("returning {} card(s) to {}", hand.cards.len(), hand.origin);
            push_cards(state, hand.origin, &hand.cards)
        }
        None => state,
    }
}

/// Appends the held cards to `pile` and clears the hand.
pub fn place_cards_on(state: State, pile: PileId) -> State {
    match state.hand.clone() {
        Some(hand) => {
            debug!("dropping {} card(s) on {}", hand.cards.len(), pile);
            push_cards(state, pile, &hand.cards)
        }
        None => state,
    }
}

fn push_cards(state: State, id: PileId, cards: &[Card]) -> State {
    let pile = state.pile(id).with_cards_pushed(cards, state.fan_offset(id));
    state.with_pile(id, pile).with_hand(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn held(x: f64, y: f64, ranks: &[Rank]) -> Hand {
        let cards = ranks
            .iter()
            .map(|&r| Card::new(r, Suit::Spades).at(Point::new(x, y)))
            .collect();
        Hand::new(Point::new(10.0, 11.0), cards, PileId::Waste)
    }

    #[test]
    fn test_move_applies_pointer_delta() {
        let hand = held(100.0, 111.0, &[Rank::Ace]);
        let moved = hand.moved_to(Point::new(1000.0, 1111.0), 0.0);
        assert_eq!(moved.start, Point::new(1000.0, 1111.0));
        assert_eq!(moved.cards[0].position, Point::new(1090.0, 1211.0));
    }

    #[test]
    fn test_move_fans_the_stack() {
        let hand = held(100.0, 111.0, &[Rank::Ace, Rank::Two]);
        let moved = hand.moved_to(Point::new(1000.0, 1111.0), 3.0);
        assert_eq!(moved.cards[0].position, Point::new(1090.0, 1211.0));
        assert_eq!(moved.cards[1].position, Point::new(1090.0, 1214.0));
    }

    #[test]
    fn test_moves_are_incremental() {
        let hand = held(0.0, 0.0, &[Rank::Ace]);
        let moved = hand
            .moved_to(Point::new(15.0, 11.0), 0.0)
            .moved_to(Point::new(20.0, 21.0), 0.0);
        assert_eq!(moved.cards[0].position, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_add_card_to_slot_follows_hovering_slot() {
        let mut hand = held(0.0, 0.0, &[Rank::Ace]);
        assert_eq!(hand.add_card_to_slot(), None);
        hand.hovering_slot = Some(PileId::Target2);
        assert_eq!(hand.add_card_to_slot(), Some(PileId::Target2));
    }

    #[test]
    fn test_return_without_hand_is_noop() {
        let state = State::new();
        assert_eq!(return_cards(state.clone()), state);
        assert_eq!(place_cards_on(state.clone(), PileId::Target1), state);
    }
}
