/// Address of one of the 13 piles on the table.
///
/// Moves name their source and destination by Pile, and every rule
/// over piles matches on it exhaustively. Columns are 0-indexed here
/// but rendered 1-indexed for humans (`T1`..`T7`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pile {
    Tableau(usize),
    Foundation(Suit),
    Waste,
    Stock,
}

impl Pile {
    /// every pile on the table, columns first
    pub fn all() -> impl Iterator<Item = Pile> {
        (0..crate::N_COLUMNS)
            .map(Pile::Tableau)
            .chain(Suit::ALL.into_iter().map(Pile::Foundation))
            .chain([Pile::Waste, Pile::Stock])
    }
    pub fn is_tableau(&self) -> bool {
        matches!(self, Pile::Tableau(_))
    }
    pub fn is_foundation(&self) -> bool {
        matches!(self, Pile::Foundation(_))
    }
    /// out-of-range column indices address nothing
    pub fn exists(&self) -> bool {
        match self {
            Pile::Tableau(i) => *i < crate::N_COLUMNS,
            Pile::Foundation(_) | Pile::Waste | Pile::Stock => true,
        }
    }
}

impl TryFrom<&str> for Pile {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('W') if s.len() == 1 => Ok(Pile::Waste),
            Some('S') if s.len() == 1 => Ok(Pile::Stock),
            Some('T') => match chars.as_str().parse::<usize>() {
                Ok(n) if (1..=crate::N_COLUMNS).contains(&n) => Ok(Pile::Tableau(n - 1)),
                _ => Err(format!("invalid column: {}", s)),
            },
            Some('F') => Suit::try_from(chars.as_str()).map(Pile::Foundation),
            _ => Err(format!("invalid pile: {}", s)),
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Pile::Tableau(i) => write!(f, "T{}", i + 1),
            Pile::Foundation(s) => write!(f, "F{}", s),
            Pile::Waste => write!(f, "W"),
            Pile::Stock => write!(f, "S"),
        }
    }
}

use crate::cards::suit::Suit;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_piles() {
        assert!(Pile::all().count() == 13);
        assert!(Pile::all().filter(Pile::is_tableau).count() == 7);
        assert!(Pile::all().filter(Pile::is_foundation).count() == 4);
    }

    #[test]
    fn parses_human_names() {
        assert!(Pile::try_from("t1") == Ok(Pile::Tableau(0)));
        assert!(Pile::try_from("T7") == Ok(Pile::Tableau(6)));
        assert!(Pile::try_from("fh") == Ok(Pile::Foundation(Suit::Heart)));
        assert!(Pile::try_from("w") == Ok(Pile::Waste));
        assert!(Pile::try_from("S") == Ok(Pile::Stock));
        assert!(Pile::try_from("t0").is_err());
        assert!(Pile::try_from("t8").is_err());
        assert!(Pile::try_from("x").is_err());
    }

    #[test]
    fn display_parses_back() {
        for pile in Pile::all() {
            assert!(Pile::try_from(pile.to_string().as_str()) == Ok(pile));
        }
    }

    #[test]
    fn out_of_range_column() {
        assert!(Pile::Tableau(6).exists());
        assert!(!Pile::Tableau(7).exists());
    }
}
