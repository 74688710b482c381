use std::fmt;

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '\u{2660}',   // ♠
            Suit::Clubs => '\u{2663}',    // ♣
            Suit::Hearts => '\u{2665}',   // ♥
            Suit::Diamonds => '\u{2666}', // ♦
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Card number, Ace = 1 through King = 13
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(number: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Up,
    Down,
}

/// A card on the table. The position is denormalized from the pile that holds
/// it and gets rewritten whenever the card changes pile or index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub orientation: Orientation,
    pub suit: Suit,
    pub rank: Rank,
    pub position: Point,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            orientation: Orientation::Up,
            suit,
            rank,
            position: Point::ORIGIN,
        }
    }

    pub fn face_down(self) -> Self {
        Self {
            orientation: Orientation::Down,
            ..self
        }
    }

    pub fn face_up(self) -> Self {
        Self {
            orientation: Orientation::Up,
            ..self
        }
    }

    pub fn at(self, position: Point) -> Self {
        Self { position, ..self }
    }

    pub fn is_face_up(&self) -> bool {
        self.orientation == Orientation::Up
    }

    pub fn number(&self) -> u8 {
        self.rank.number()
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Identity of the card within the deck, independent of position and orientation.
    pub fn id(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
