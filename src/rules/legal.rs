impl Layout {
    /// every structurally valid selection that can be lifted from a pile
    pub fn selections(&self, from: Pile) -> Vec<&[Card]> {
        if !from.exists() {
            return Vec::new();
        }
        match from {
            Pile::Tableau(i) => {
                let column = self.column(i);
                (1..=column.run().len())
                    .rev()
                    .filter_map(|n| column.tail(n))
                    .collect()
            }
            Pile::Foundation(_) | Pile::Waste => {
                let cards = self.cards(from);
                cards
                    .len()
                    .checked_sub(1)
                    .map(|i| &cards[i..])
                    .into_iter()
                    .collect()
            }
            Pile::Stock => Vec::new(),
        }
    }

    /// Every move the validator would accept right now.
    /// No ordering or preference is implied.
    pub fn legal(&self) -> Vec<Move> {
        Pile::all()
            .flat_map(|from| {
                self.selections(from).into_iter().flat_map(move |cards| {
                    Pile::all()
                        .filter(move |&to| self.allows(cards, from, to))
                        .map(move |to| Move::new(cards.to_vec(), from, to))
                })
            })
            .collect()
    }
}

use super::action::Move;
use crate::cards::card::Card;
use crate::piles::layout::Layout;
use crate::piles::pile::Pile;
