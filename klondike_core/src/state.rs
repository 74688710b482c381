use std::collections::HashSet;
use std::sync::Arc;

use crate::command::Command;
use crate::deck::{Deal, Deck};
use crate::geometry::{Bounds, Size};
use crate::hand::Hand;
use crate::pile::{Pile, PileId, PILE_COUNT};
use crate::rules::EligibleSlot;

/// One immutable snapshot of the whole game.
///
/// Piles sit behind `Arc` so cloning a snapshot is cheap and a renderer can
/// tell an untouched pile apart with `Arc::ptr_eq`.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub running: bool,
    pub event_queue: Vec<Command>,
    /// Viewport size as last reported by the front end
    pub body: Size,
    pub container: Bounds,
    pub card_size: Size,
    /// Vertical stagger of fanned packing cards
    pub card_offset_size: f64,
    pub hand: Option<Hand>,
    pub eligible_slots: Vec<EligibleSlot>,
    /// Seed of the current deal
    pub seed: u64,
    pub(crate) piles: [Arc<Pile>; PILE_COUNT],
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Unshuffled deck in the source pile, everything else empty.
    pub fn new() -> Self {
        let mut piles: [Arc<Pile>; PILE_COUNT] = Default::default();
        piles[PileId::Source.index()] = Arc::new(Pile::new(Deck::standard().cards().to_vec()));
        Self {
            running: false,
            event_queue: Vec::new(),
            body: Size::ZERO,
            container: Bounds::default(),
            card_size: Size::ZERO,
            card_offset_size: 0.0,
            hand: None,
            eligible_slots: Vec::new(),
            seed: 0,
            piles,
        }
    }

    /// Fresh Klondike layout shuffled from `seed`.
    pub fn new_game(seed: u64) -> Self {
        Self::new().dealt(seed, Deck::shuffled(seed).deal())
    }

    /// Replaces every pile with `deal`, keeping the current layout.
    pub(crate) fn dealt(mut self, seed: u64, deal: Deal) -> Self {
        let Deal { packing, source } = deal;
        self.hand = None;
        self.eligible_slots.clear();
        self.seed = seed;
        let mut state = self;
        for id in PileId::ALL {
            let fan = state.fan_offset(id);
            let cards = match id {
                PileId::Source => source.clone(),
                id if id.is_packing() => packing[id.index() - PileId::Packing1.index()].clone(),
                _ => Vec::new(),
            };
            let pile = state.pile(id).with_cards(cards, fan);
            state = state.with_pile(id, pile);
        }
        state
    }

    pub fn pile(&self, id: PileId) -> &Pile {
        &self.piles[id.index()]
    }

    /// Shared handle of a pile, for identity comparisons between snapshots.
    pub fn pile_arc(&self, id: PileId) -> &Arc<Pile> {
        &self.piles[id.index()]
    }

    pub fn with_pile(mut self, id: PileId, pile: Pile) -> Self {
        self.piles[id.index()] = Arc::new(pile);
        self
    }

    pub fn with_hand(self, hand: Option<Hand>) -> Self {
        Self { hand, ..self }
    }

    /// Vertical stagger between consecutive cards of pile `id`.
    pub fn fan_offset(&self, id: PileId) -> f64 {
        if id.is_packing() {
            self.card_offset_size
        } else {
            0.0
        }
    }

    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> + '_ {
        PileId::ALL.into_iter().map(move |id| (id, self.pile(id)))
    }

    /// Cards on the table plus cards in hand.
    pub fn card_count(&self) -> usize {
        let held = self.hand.as_ref().map_or(0, |hand| hand.cards.len());
        self.piles().map(|(_, pile)| pile.len()).sum::<usize>() + held
    }

    /// True when the table and hand hold exactly one standard deck.
    pub fn is_full_deck(&self) -> bool {
        let held = self.hand.iter().flat_map(|hand| hand.cards.iter());
        let ids: HashSet<_> = self
            .piles()
            .flat_map(|(_, pile)| pile.cards.iter())
            .chain(held)
            .map(|card| card.id())
            .collect();
        ids.len() == 52 && self.card_count() == 52
    }

    /// True when nothing a renderer draws differs from `other`.
    pub fn renders_same(&self, other: &State) -> bool {
        self.container == other.container
            && self.card_size == other.card_size
            && self.hand == other.hand
            && PileId::ALL
                .iter()
                .all(|&id| Arc::ptr_eq(self.pile_arc(id), other.pile_arc(id)))
    }
}
