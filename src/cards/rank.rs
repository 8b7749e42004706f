#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    #[default]
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
    pub const MIN: Self = Rank::Ace;
    pub const MAX: Self = Rank::King;
    pub const ALL: [Self; crate::N_RANKS] = [
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

    /// the rank directly above, if any. King has no successor.
    pub fn next(&self) -> Option<Self> {
        match self {
            Rank::King => None,
            _ => Some(Rank::from(u8::from(*self) + 1)),
        }
    }
    /// true iff self sits exactly one below other
    pub fn precedes(&self, other: Rank) -> bool {
        u8::from(*self) + 1 == u8::from(other)
    }
}

/// u8 isomorphism
/// Ace is 1 and King is 13, the numbering used for
/// foundation runs and tableau descent alike.
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(format!("invalid rank: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
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
        )
    }
}

use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::ALL {
            assert!(rank == Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn ace_is_one_king_is_thirteen() {
        assert!(u8::from(Rank::Ace) == 1);
        assert!(u8::from(Rank::King) == 13);
    }

    #[test]
    fn successor_chain() {
        assert!(Rank::Ace.next() == Some(Rank::Two));
        assert!(Rank::Queen.next() == Some(Rank::King));
        assert!(Rank::King.next() == None);
        assert!(Rank::Six.precedes(Rank::Seven));
        assert!(!Rank::Seven.precedes(Rank::Six));
        assert!(!Rank::Five.precedes(Rank::Seven));
    }

    #[test]
    fn parses_ten_both_ways() {
        assert!(Rank::try_from("10") == Ok(Rank::Ten));
        assert!(Rank::try_from("t") == Ok(Rank::Ten));
        assert!(Rank::try_from("0").is_err());
    }

    #[test]
    #[should_panic]
    fn zero_is_not_a_rank() {
        let _ = Rank::from(0u8);
    }
}
