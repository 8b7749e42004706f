/// Face-down draw pile, held top-first: index 0 is the next card dealt.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock(Vec<Card>);

impl Stock {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// up to n cards off the top, turned face-up, order preserved
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.0.len());
        self.0.drain(..n).map(Card::up).collect()
    }

    /// Rebuild a stock from an exhausted waste pile.
    ///
    /// The waste is cut from its bottom into groups of `draw` (the last
    /// group may be short). Groups go back in reverse order, each keeping
    /// its own internal order, so the last group dealt is the first one
    /// dealt again. Every card is turned face-down.
    pub fn recycle(waste: Vec<Card>, draw: usize) -> Self {
        assert!(draw > 0);
        Self(
            waste
                .chunks(draw)
                .rev()
                .flatten()
                .copied()
                .map(Card::down)
                .collect(),
        )
    }

    pub fn is_consistent(&self) -> bool {
        self.0.iter().all(Card::is_down)
    }
}

impl From<Vec<Card>> for Stock {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(Card::down).collect())
    }
}

use crate::cards::card::Card;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: u8) -> Vec<Card> {
        (0..n).map(Card::from).map(Card::up).collect()
    }

    #[test]
    fn deal_takes_from_the_front() {
        let mut stock = Stock::from(cards(5));
        let dealt = stock.deal(3);
        assert!(dealt.iter().map(|c| u8::from(*c)).eq([0, 1, 2]));
        assert!(dealt.iter().all(Card::is_up));
        assert!(stock.len() == 2);
        assert!(stock.deal(3).len() == 2);
        assert!(stock.is_empty());
        assert!(stock.deal(3).is_empty());
    }

    #[test]
    fn recycle_reverses_groups_not_cards() {
        let stock = Stock::recycle(cards(9), 3);
        assert!(stock.is_consistent());
        assert!(
            stock
                .cards()
                .iter()
                .map(|c| u8::from(*c))
                .eq([6, 7, 8, 3, 4, 5, 0, 1, 2])
        );
    }

    #[test]
    fn recycle_short_final_group() {
        let stock = Stock::recycle(cards(8), 3);
        assert!(
            stock
                .cards()
                .iter()
                .map(|c| u8::from(*c))
                .eq([6, 7, 3, 4, 5, 0, 1, 2])
        );
    }

    #[test]
    fn recycle_draw_one_is_a_plain_reversal() {
        let stock = Stock::recycle(cards(4), 1);
        assert!(stock.cards().iter().map(|c| u8::from(*c)).eq([3, 2, 1, 0]));
    }
}
