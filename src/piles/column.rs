/// One tableau column, bottom to top.
///
/// A face-down prefix sits under a face-up suffix (the "run"). Moves
/// only ever touch the run; exposing a face-down card is a separate
/// step, [`Column::expose`], so the caller can score the flip.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column(Vec<Card>);

impl Column {
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
    /// number of face-down cards under the run
    pub fn hidden(&self) -> usize {
        self.0.iter().take_while(|c| c.is_down()).count()
    }
    /// the face-up suffix
    pub fn run(&self) -> &[Card] {
        &self.0[self.hidden()..]
    }
    /// the top n cards, if there are that many
    pub fn tail(&self, n: usize) -> Option<&[Card]> {
        self.0.len().checked_sub(n).map(|i| &self.0[i..])
    }
    /// true iff cards are a non-empty, all face-up tail of this column
    pub fn is_tail(&self, cards: &[Card]) -> bool {
        !cards.is_empty()
            && cards.len() <= self.run().len()
            && self
                .tail(cards.len())
                .is_some_and(|tail| tail.iter().zip(cards).all(|(a, b)| a.same(b)))
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn put(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
    }
    /// remove the top n cards, keeping their order
    pub fn take(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= self.0.len());
        self.0.split_off(self.0.len() - n)
    }
    /// turn a face-down top card face-up. true iff a card was turned.
    pub fn expose(&mut self) -> bool {
        match self.0.last_mut() {
            Some(card) if card.is_down() => {
                card.flip();
                true
            }
            _ => false,
        }
    }

    /// face-down cards form a contiguous prefix
    pub fn is_consistent(&self) -> bool {
        self.run().iter().all(Card::is_up)
    }
}

impl From<Vec<Card>> for Column {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

use crate::cards::card::Card;
use serde::Deserialize;
use serde::Serialize;
