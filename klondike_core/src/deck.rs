use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Card, Rank, Suit};
use crate::pile::PACKING_PILES;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

/// The cards of a fresh Klondike layout, bottom to top in every pile.
#[derive(Debug, Clone)]
pub struct Deal {
    pub packing: [Vec<Card>; PACKING_PILES],
    pub source: Vec<Card>,
}

impl Deck {
    /// Create a standard 52-card deck, face up, suit by suit
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Standard deck shuffled by a generator seeded with `seed`
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Self::standard();
        deck.shuffle(&mut rng);
        deck
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw n cards from the top. Returns fewer if deck runs low.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        let mut drawn = self.cards.split_off(at);
        drawn.reverse();
        drawn
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Klondike deal: packing pile `i` gets `i + 1` cards face down with the
    /// top one turned up, the rest stays in the source pile.
    pub fn deal(mut self) -> Deal {
        let packing = std::array::from_fn(|i| {
            let mut pile: Vec<Card> = self
                .draw(i + 1)
                .into_iter()
                .map(Card::face_down)
                .collect();
            if let Some(top) = pile.last_mut() {
                *top = top.face_up();
            }
            pile
        });
        Deal {
            packing,
            source: self.cards,
        }
    }
}
