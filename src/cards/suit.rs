#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[default]
    Spade = 0,
    Club = 1,
    Heart = 2,
    Diamond = 3,
}

impl Suit {
    /// enumeration order of a fresh deck and of the foundation row
    pub const ALL: [Self; crate::N_FOUNDATIONS] =
        [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    pub fn color(&self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Club,
            2 => Suit::Heart,
            3 => Suit::Diamond,
            _ => panic!("Invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "s" | "♠" => Ok(Suit::Spade),
            "c" | "♣" => Ok(Suit::Club),
            "h" | "♥" => Ok(Suit::Heart),
            "d" | "♦" => Ok(Suit::Diamond),
            _ => Err(format!("invalid suit: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spade => "♠",
                Suit::Club => "♣",
                Suit::Heart => "♥",
                Suit::Diamond => "♦",
            }
        )
    }
}

use super::color::Color;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reds_and_blacks() {
        assert!(Suit::Heart.color() == Color::Red);
        assert!(Suit::Diamond.color() == Color::Red);
        assert!(Suit::Spade.color() == Color::Black);
        assert!(Suit::Club.color() == Color::Black);
    }

    #[test]
    fn index_matches_enumeration() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert!(suit.index() == i);
            assert!(Suit::from(i as u8) == *suit);
        }
    }
}
