/// One validated card relocation, alive for a single
/// validate-then-apply transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    cards: Vec<Card>,
    from: Pile,
    to: Pile,
    event: Event,
}

impl Move {
    /// Build a move and classify its scoring event.
    ///
    /// # Panics
    ///
    /// If `cards` is empty, or if `to` is the waste or the stock, which
    /// never receive cards. Moves that passed [`Layout::allows`] satisfy both.
    ///
    /// [`Layout::allows`]: crate::piles::layout::Layout::allows
    pub fn new(cards: Vec<Card>, from: Pile, to: Pile) -> Self {
        assert!(!cards.is_empty());
        Self {
            event: Event::between(from, to),
            cards,
            from,
            to,
        }
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn source(&self) -> Pile {
        self.from
    }
    pub fn target(&self) -> Pile {
        self.to
    }
    pub fn event(&self) -> Event {
        self.event
    }
    /// the card whose rank and color decide legality
    pub fn lead(&self) -> &Card {
        &self.cards[0]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{} {} -> {}", cards, self.from, self.to)
    }
}

use super::event::Event;
use crate::cards::card::Card;
use crate::piles::pile::Pile;
use serde::Deserialize;
use serde::Serialize;
