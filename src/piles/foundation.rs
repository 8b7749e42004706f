/// Suit-locked ascending pile, Ace upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn is_complete(&self) -> bool {
        self.cards.len() == crate::N_RANKS
    }
    /// the rank this foundation is waiting for
    pub fn wants(&self) -> Option<Rank> {
        match self.top() {
            None => Some(Rank::Ace),
            Some(top) => top.rank().next(),
        }
    }
    pub fn accepts(&self, card: &Card) -> bool {
        card.suit() == self.suit && Some(card.rank()) == self.wants()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// ranks are exactly 1..=k in order, one suit, all face-up
    pub fn is_consistent(&self) -> bool {
        self.cards.len() <= crate::N_RANKS
            && self.cards.iter().zip(Rank::ALL).all(|(card, rank)| {
                card.rank() == rank && card.suit() == self.suit && card.is_up()
            })
    }
}

impl From<Suit> for Foundation {
    fn from(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(crate::N_RANKS),
        }
    }
}

use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wants_its_ace() {
        let f = Foundation::from(Suit::Spade);
        assert!(f.accepts(&Card::from((Rank::Ace, Suit::Spade)).up()));
        assert!(!f.accepts(&Card::from((Rank::Ace, Suit::Heart)).up()));
        assert!(!f.accepts(&Card::from((Rank::Two, Suit::Spade)).up()));
    }

    #[test]
    fn climbs_to_complete() {
        let mut f = Foundation::from(Suit::Diamond);
        for rank in Rank::ALL {
            let card = Card::from((rank, Suit::Diamond)).up();
            assert!(f.accepts(&card));
            f.push(card);
            assert!(f.is_consistent());
        }
        assert!(f.is_complete());
        assert!(f.wants() == None);
    }

    #[test]
    fn gaps_are_inconsistent() {
        let mut f = Foundation::from(Suit::Club);
        f.push(Card::from((Rank::Ace, Suit::Club)).up());
        f.push(Card::from((Rank::Three, Suit::Club)).up());
        assert!(!f.is_consistent());
    }
}
