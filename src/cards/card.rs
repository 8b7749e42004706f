/// A playing card. Rank and Suit are fixed at construction;
/// only the face orientation ever changes.
///
/// Equality compares identity and orientation together. Use
/// [`Card::same`] to compare identity alone.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    up: bool,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn color(&self) -> Color {
        self.suit.color()
    }
    pub fn is_up(&self) -> bool {
        self.up
    }
    pub fn is_down(&self) -> bool {
        !self.up
    }
    pub fn is_red(&self) -> bool {
        self.color().is_red()
    }
    /// same rank and suit, regardless of orientation
    pub fn same(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
    /// opposite colors, as tableau descent requires
    pub fn contrasts(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    pub fn up(mut self) -> Self {
        self.up = true;
        self
    }
    pub fn down(mut self) -> Self {
        self.up = false;
        self
    }
    pub fn flip(&mut self) {
        self.up = !self.up;
    }
}

/// cards are born face-down, as in a fresh deck
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self {
            rank,
            suit,
            up: false,
        }
    }
}

/// u8 isomorphism
/// each card is mapped to its position in a fresh deck 0-51,
/// suits outermost. orientation is not encoded.
/// 7♥
/// 2 * 13 + 6 = 32
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) * crate::N_RANKS as u8 + u8::from(c.rank) - 1
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < crate::N_CARDS, "Invalid card u8: {}", n);
        Self::from((
            Rank::from(n % crate::N_RANKS as u8 + 1),
            Suit::from(n / crate::N_RANKS as u8),
        ))
    }
}

/// str isomorphism, e.g. "10♦", "Qs", "ah"
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| String::from("empty card"))?;
        let (rank, suit) = s.split_at(split);
        Ok(Self::from((Rank::try_from(rank)?, Suit::try_from(suit)?)))
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self::from(rand::random_range(0..crate::N_CARDS as u8))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::color::Color;
use super::rank::Rank;
use super::suit::Suit;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
