/// An ordered 52-card deck. The front of the deck is drawn first.
///
/// A fresh deck is the canonical enumeration, suits outermost
/// (♠ ♣ ♥ ♦), Ace through King within each suit, all face-down.
/// Shuffling is the only source of randomness in the engine, and
/// always takes its Rng from the caller so games are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let deck = Self(
            Suit::ALL
                .iter()
                .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::from((r, s))))
                .collect(),
        );
        assert!(deck.is_complete());
        deck
    }

    /// uniform permutation in place (Fisher-Yates via SliceRandom)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle(rng);
        self
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// exactly the 52 rank x suit combinations, each once
    pub fn is_complete(&self) -> bool {
        Self::covers(self.0.iter())
    }
    /// true iff the cards form exactly one full deck,
    /// orientation ignored
    pub fn covers<'a>(cards: impl Iterator<Item = &'a Card>) -> bool {
        let mut seen = [false; crate::N_CARDS];
        let mut count = 0usize;
        for card in cards {
            let i = u8::from(*card) as usize;
            if seen[i] {
                return false;
            }
            seen[i] = true;
            count += 1;
        }
        count == crate::N_CARDS
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

/// draws from the front, in a single forward pass
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl crate::Arbitrary for Deck {
    fn random() -> Self {
        Self::new().shuffled(&mut rand::rng())
    }
}

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_is_canonical() {
        let deck = Deck::new();
        assert!(deck.size() == 52);
        assert!(deck.is_complete());
        assert!(deck.cards().iter().all(|c| c.is_down()));
        assert!(deck.cards()[0] == Card::from((Rank::Ace, Suit::Spade)));
        assert!(deck.cards()[12] == Card::from((Rank::King, Suit::Spade)));
        assert!(deck.cards()[13] == Card::from((Rank::Ace, Suit::Club)));
        assert!(deck.cards()[51] == Card::from((Rank::King, Suit::Diamond)));
    }

    #[test]
    fn fresh_deck_is_deterministic() {
        assert!(Deck::new() == Deck::new());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let deck = Deck::random();
        assert!(deck.size() == 52);
        assert!(deck.is_complete());
    }

    #[test]
    fn seeded_shuffle_reproduces() {
        let a = Deck::new().shuffled(&mut SmallRng::seed_from_u64(7));
        let b = Deck::new().shuffled(&mut SmallRng::seed_from_u64(7));
        let c = Deck::new().shuffled(&mut SmallRng::seed_from_u64(8));
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn duplicates_break_coverage() {
        let mut cards = Vec::from(Deck::new());
        cards[1] = cards[0];
        assert!(!Deck::covers(cards.iter()));
        cards.pop();
        assert!(!Deck::covers(cards.iter()));
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // position of the Ace of Spades over many seeded shuffles
        let ref mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        let trials = 52 * 400;
        let mut hits = [0usize; 52];
        for _ in 0..trials {
            let deck = Deck::new().shuffled(rng);
            let i = deck
                .cards()
                .iter()
                .position(|c| c.rank() == Rank::Ace && c.suit() == Suit::Spade)
                .unwrap();
            hits[i] += 1;
        }
        assert!(hits.iter().all(|&h| h > 250 && h < 550));
    }
}
