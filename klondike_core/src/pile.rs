use std::fmt;

use crate::card::Card;
use crate::geometry::{Bounds, Point, Rectangle, Size};

pub const PACKING_PILES: usize = 7;
pub const TARGET_PILES: usize = 4;
pub const PILE_COUNT: usize = 2 + TARGET_PILES + PACKING_PILES;

/// Addresses one of the 13 piles on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Source,
    Waste,
    Target1,
    Target2,
    Target3,
    Target4,
    Packing1,
    Packing2,
    Packing3,
    Packing4,
    Packing5,
    Packing6,
    Packing7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileKind {
    Source,
    Waste,
    Target,
    Packing,
}

impl PileId {
    pub const ALL: [PileId; PILE_COUNT] = [
        PileId::Source,
        PileId::Waste,
        PileId::Target1,
        PileId::Target2,
        PileId::Target3,
        PileId::Target4,
        PileId::Packing1,
        PileId::Packing2,
        PileId::Packing3,
        PileId::Packing4,
        PileId::Packing5,
        PileId::Packing6,
        PileId::Packing7,
    ];

    pub const TARGETS: [PileId; TARGET_PILES] = [
        PileId::Target1,
        PileId::Target2,
        PileId::Target3,
        PileId::Target4,
    ];

    pub const PACKING: [PileId; PACKING_PILES] = [
        PileId::Packing1,
        PileId::Packing2,
        PileId::Packing3,
        PileId::Packing4,
        PileId::Packing5,
        PileId::Packing6,
        PileId::Packing7,
    ];

    /// Every pile a held card may be dropped on, in tie-break order.
    pub const PLACEABLE: [PileId; TARGET_PILES + PACKING_PILES] = [
        PileId::Target1,
        PileId::Target2,
        PileId::Target3,
        PileId::Target4,
        PileId::Packing1,
        PileId::Packing2,
        PileId::Packing3,
        PileId::Packing4,
        PileId::Packing5,
        PileId::Packing6,
        PileId::Packing7,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> PileKind {
        match self {
            PileId::Source => PileKind::Source,
            PileId::Waste => PileKind::Waste,
            PileId::Target1 | PileId::Target2 | PileId::Target3 | PileId::Target4 => {
                PileKind::Target
            }
            _ => PileKind::Packing,
        }
    }

    pub fn is_packing(self) -> bool {
        self.kind() == PileKind::Packing
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PileKind::Source => write!(f, "source"),
            PileKind::Waste => write!(f, "waste"),
            PileKind::Target => write!(f, "target {}", self.index() - PileId::Target1.index() + 1),
            PileKind::Packing => write!(f, "packing {}", self.index() - PileId::Packing1.index() + 1),
        }
    }
}

/// A card slot: where the pile sits and what it holds, bottom card first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pile {
    pub origin: Point,
    pub size: Size,
    pub cards: Vec<Card>,
}

impl Pile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.origin, self.size)
    }

    pub fn rectangle(&self) -> Rectangle {
        self.bounds().rectangle()
    }

    /// Where the card at `index` belongs, `fan` being the vertical stagger
    /// between consecutive cards (zero for piles that stack flat).
    pub fn card_position(&self, index: usize, fan: f64) -> Point {
        self.origin.offset(0.0, index as f64 * fan)
    }

    /// Splits off the top `count` cards. `None` when the pile is too short or
    /// `count` is zero.
    pub fn take_top(&self, count: usize) -> Option<(Pile, Vec<Card>)> {
        if count == 0 || count > self.len() {
            return None;
        }
        let at = self.len() - count;
        let rest = Pile {
            cards: self.cards[..at].to_vec(),
            ..*self
        };
        Some((rest, self.cards[at..].to_vec()))
    }

    /// Appends `cards` in order, each positioned by the pile's layout rule.
    pub fn with_cards_pushed(&self, cards: &[Card], fan: f64) -> Pile {
        let base = self.len();
        let mut pile = self.clone();
        pile.cards.extend(
            cards
                .iter()
                .enumerate()
                .map(|(i, card)| card.at(self.card_position(base + i, fan))),
        );
        pile
    }

    pub fn with_cards(&self, cards: Vec<Card>, fan: f64) -> Pile {
        Pile {
            cards,
            ..*self
        }
        .repositioned(fan)
    }

    pub fn with_bounds(&self, bounds: Bounds, fan: f64) -> Pile {
        Pile {
            origin: bounds.origin,
            size: bounds.size,
            cards: self.cards.clone(),
        }
        .repositioned(fan)
    }

    /// Moves every card to the position its index dictates.
    pub fn repositioned(mut self, fan: f64) -> Pile {
        let origin = self.origin;
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.position = origin.offset(0.0, i as f64 * fan);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn pile_at(x: f64, y: f64, ranks: &[Rank]) -> Pile {
        let pile = Pile {
            origin: Point::new(x, y),
            size: Size::new(10.0, 14.0),
            cards: ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect(),
        };
        pile.repositioned(3.0)
    }

    #[test]
    fn test_ids_index_their_slots() {
        for (i, id) in PileId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
        assert_eq!(PileId::PLACEABLE.len(), 11);
        assert!(PileId::PACKING.iter().all(|id| id.is_packing()));
        assert!(PileId::TARGETS.iter().all(|id| id.kind() == PileKind::Target));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PileId::Target3.to_string(), "target 3");
        assert_eq!(PileId::Packing7.to_string(), "packing 7");
        assert_eq!(PileId::Waste.to_string(), "waste");
    }

    #[test]
    fn test_take_top_keeps_sub_stack_order() {
        let pile = pile_at(0.0, 0.0, &[Rank::Ace, Rank::Two, Rank::Three]);
        let (rest, taken) = pile.take_top(2).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(taken[0].rank, Rank::Two);
        assert_eq!(taken[1].rank, Rank::Three);
    }

    #[test]
    fn test_take_top_is_total() {
        let pile = pile_at(0.0, 0.0, &[Rank::Ace]);
        assert!(pile.take_top(0).is_none());
        assert!(pile.take_top(2).is_none());
        assert!(Pile::default().take_top(1).is_none());
    }

    #[test]
    fn test_pushed_cards_follow_the_fan() {
        let pile = pile_at(5.0, 20.0, &[Rank::King]);
        let card = Card::new(Rank::Queen, Suit::Hearts).at(Point::new(99.0, 99.0));
        let pile = pile.with_cards_pushed(&[card], 3.0);
        assert_eq!(pile.cards[1].position, Point::new(5.0, 23.0));
    }

    #[test]
    fn test_take_then_push_restores_pile() {
        let pile = pile_at(5.0, 20.0, &[Rank::King, Rank::Queen, Rank::Jack]);
        let (rest, taken) = pile.take_top(2).unwrap();
        assert_eq!(rest.with_cards_pushed(&taken, 3.0), pile);
    }
}
