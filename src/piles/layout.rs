/// Every pile on the table: seven columns, four foundations,
/// the waste and the stock.
///
/// Layout knows how to hold and address cards. What may move
/// where lives in [`crate::rules`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    columns: [Column; crate::N_COLUMNS],
    foundations: [Foundation; crate::N_FOUNDATIONS],
    waste: Waste,
    stock: Stock,
}

impl Layout {
    /// Deal a shuffled deck in one forward pass. Column i takes i + 1
    /// cards, only the last of which is face-up; the remaining 24 cards
    /// become the stock in deck order.
    pub fn deal(deck: Deck) -> Self {
        assert!(deck.is_complete());
        let mut cards = deck.into_iter();
        let columns = std::array::from_fn(|i| {
            Column::from(
                (0..=i)
                    .map(|row| {
                        let card = cards.next().expect("52 cards cover the tableau");
                        if row == i { card.up() } else { card.down() }
                    })
                    .collect::<Vec<Card>>(),
            )
        });
        let layout = Self {
            columns,
            foundations: Suit::ALL.map(Foundation::from),
            waste: Waste::empty(),
            stock: Stock::from(cards.collect::<Vec<Card>>()),
        };
        debug_assert!(layout.is_consistent());
        layout
    }

    pub fn column(&self, i: usize) -> &Column {
        &self.columns[i]
    }
    pub fn columns(&self) -> &[Column; crate::N_COLUMNS] {
        &self.columns
    }
    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }
    pub fn foundations(&self) -> &[Foundation; crate::N_FOUNDATIONS] {
        &self.foundations
    }
    pub fn waste(&self) -> &Waste {
        &self.waste
    }
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn column_mut(&mut self, i: usize) -> &mut Column {
        &mut self.columns[i]
    }
    pub fn foundation_mut(&mut self, suit: Suit) -> &mut Foundation {
        &mut self.foundations[suit.index()]
    }
    pub fn waste_mut(&mut self) -> &mut Waste {
        &mut self.waste
    }
    pub fn stock_mut(&mut self) -> &mut Stock {
        &mut self.stock
    }

    /// contents of any pile, bottom to top (stock: top first)
    pub fn cards(&self, pile: Pile) -> &[Card] {
        match pile {
            Pile::Tableau(i) => self.columns[i].cards(),
            Pile::Foundation(suit) => self.foundation(suit).cards(),
            Pile::Waste => self.waste.cards(),
            Pile::Stock => self.stock.cards(),
        }
    }
    /// the card a single-card move would lift from this pile
    pub fn top(&self, pile: Pile) -> Option<&Card> {
        match pile {
            Pile::Tableau(i) => self.columns[i].top(),
            Pile::Foundation(suit) => self.foundation(suit).top(),
            Pile::Waste => self.waste.top(),
            Pile::Stock => None,
        }
    }
    /// every card on the table, in no particular order
    pub fn everything(&self) -> impl Iterator<Item = &Card> {
        Pile::all().flat_map(move |pile| self.cards(pile).iter())
    }

    /// all four foundations complete
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// The structural invariants every mutation must preserve:
    /// one full deck across all piles, face-down prefixes in columns,
    /// gapless foundations, a face-up waste top and a face-down stock.
    pub fn is_consistent(&self) -> bool {
        Deck::covers(self.everything())
            && self.columns.iter().all(Column::is_consistent)
            && self.foundations.iter().all(Foundation::is_consistent)
            && self.waste.is_consistent()
            && self.stock.is_consistent()
    }
}

impl Layout {
    /// Set up an arbitrary position while keeping the full deck on the table.
    ///
    /// Foundation i is built up to `heights[i]` cards of `Suit::ALL[i]`,
    /// columns and waste hold exactly the given cards, and every card not
    /// placed anywhere else goes face-down into the stock in deck order.
    pub fn stage(
        columns: [Vec<Card>; crate::N_COLUMNS],
        waste: Vec<Card>,
        heights: [usize; crate::N_FOUNDATIONS],
    ) -> Self {
        let mut foundations = Suit::ALL.map(Foundation::from);
        for (foundation, height) in foundations.iter_mut().zip(heights) {
            for &rank in Rank::ALL.iter().take(height) {
                foundation.push(Card::from((rank, foundation.suit())).up());
            }
        }
        let placed = columns
            .iter()
            .flatten()
            .chain(waste.iter())
            .chain(foundations.iter().flat_map(|f| f.cards().iter()))
            .map(|c| u8::from(*c))
            .collect::<Vec<u8>>();
        let stock = Deck::new()
            .into_iter()
            .filter(|c| !placed.contains(&u8::from(*c)))
            .collect::<Vec<Card>>();
        Self {
            columns: columns.map(Column::from),
            foundations,
            waste: Waste::from(waste),
            stock: Stock::from(stock),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let show = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| match c.is_up() {
                    true => c.to_string(),
                    false => String::from("##"),
                })
                .collect::<Vec<String>>()
                .join(" ")
        };
        write!(f, "{} [{}]", Pile::Stock, self.stock.len())?;
        writeln!(f, "  {} {}", Pile::Waste, show(self.waste.cards()))?;
        for foundation in self.foundations.iter() {
            let pile = Pile::Foundation(foundation.suit());
            match foundation.top() {
                Some(top) => write!(f, "{} {:<4}", pile, top.to_string())?,
                None => write!(f, "{} {:<4}", pile, "--")?,
            }
        }
        writeln!(f)?;
        for (i, column) in self.columns.iter().enumerate() {
            writeln!(f, "{} {}", Pile::Tableau(i), show(column.cards()))?;
        }
        Ok(())
    }
}

use super::column::Column;
use super::foundation::Foundation;
use super::pile::Pile;
use super::stock::Stock;
use super::waste::Waste;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use serde::Deserialize;
use serde::Serialize;
