/// Face-up discard fed only by the stock. Bottom to top.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waste(Vec<Card>);

impl Waste {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn top(&self) -> Option<&Card> {
        self.0.last()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// lay freshly dealt cards on top, in order
    pub fn put(&mut self, cards: Vec<Card>) {
        debug_assert!(cards.iter().all(Card::is_up));
        self.0.extend(cards);
    }
    pub fn pop(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// empty the whole pile, bottom first, for recycling
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.0)
    }

    pub fn is_consistent(&self) -> bool {
        self.top().is_none_or(Card::is_up)
    }
}

impl From<Vec<Card>> for Waste {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

use crate::cards::card::Card;
use serde::Deserialize;
use serde::Serialize;
