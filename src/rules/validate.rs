/// Legality of proposed relocations. Nothing here mutates.
impl Layout {
    /// Structural check on a selection, before any rule applies.
    ///
    /// From a column, the cards must be a non-empty face-up tail; from
    /// the waste or a foundation, exactly the single top card. Nothing
    /// is ever lifted from the stock.
    pub fn selects(&self, cards: &[Card], from: Pile) -> bool {
        if !from.exists() {
            return false;
        }
        match from {
            Pile::Tableau(i) => self.column(i).is_tail(cards),
            Pile::Foundation(_) | Pile::Waste => match cards {
                [card] => self.top(from).is_some_and(|top| top.same(card)),
                _ => false,
            },
            Pile::Stock => false,
        }
    }

    /// Whether `cards`, lifted from `from`, may land on `to`.
    ///
    /// Assumes `cards` already passed [`Layout::selects`]; only the
    /// lead card and the run length matter beyond that.
    pub fn allows(&self, cards: &[Card], from: Pile, to: Pile) -> bool {
        let Some(lead) = cards.first() else {
            return false;
        };
        if from == to || !from.exists() || !to.exists() {
            return false;
        }
        let single = cards.len() == 1;
        let source = match from {
            Pile::Tableau(_) => true,
            Pile::Foundation(_) | Pile::Waste => single,
            Pile::Stock => false,
        };
        let target = match to {
            Pile::Tableau(i) => match self.column(i).top() {
                None => lead.rank() == Rank::King,
                Some(top) => top.is_up() && lead.rank().precedes(top.rank()) && lead.contrasts(top),
            },
            Pile::Foundation(suit) => single && self.foundation(suit).accepts(lead),
            Pile::Waste => false,
            Pile::Stock => false,
        };
        source && target
    }
}

use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::piles::layout::Layout;
use crate::piles::pile::Pile;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::suit::Suit;

    fn up(rank: Rank, suit: Suit) -> Card {
        Card::from((rank, suit)).up()
    }
    fn down(rank: Rank, suit: Suit) -> Card {
        Card::from((rank, suit))
    }

    /// T1: empty   T2: ## 7♥   T3: ## 7♠   T4: 6♥ 5♠
    /// T5: K♣      T6: Q♦      T7: 2♠
    fn layout() -> Layout {
        Layout::stage(
            [
                vec![],
                vec![down(Rank::Nine, Suit::Club), up(Rank::Seven, Suit::Heart)],
                vec![down(Rank::Ten, Suit::Club), up(Rank::Seven, Suit::Spade)],
                vec![up(Rank::Six, Suit::Heart), up(Rank::Five, Suit::Spade)],
                vec![up(Rank::King, Suit::Club)],
                vec![up(Rank::Queen, Suit::Diamond)],
                vec![up(Rank::Two, Suit::Spade)],
            ],
            vec![up(Rank::Three, Suit::Spade)],
            [1, 0, 0, 0],
        )
    }

    #[test]
    fn empty_column_takes_only_kings() {
        let layout = layout();
        let queen = [up(Rank::Queen, Suit::Diamond)];
        let king = [up(Rank::King, Suit::Club)];
        assert!(!layout.allows(&queen, Pile::Tableau(5), Pile::Tableau(0)));
        assert!(layout.allows(&king, Pile::Tableau(4), Pile::Tableau(0)));
    }

    #[test]
    fn descending_alternating_colors() {
        let layout = layout();
        let run = [up(Rank::Six, Suit::Heart), up(Rank::Five, Suit::Spade)];
        assert!(layout.selects(&run, Pile::Tableau(3)));
        assert!(layout.allows(&run, Pile::Tableau(3), Pile::Tableau(2)));
        assert!(!layout.allows(&run, Pile::Tableau(3), Pile::Tableau(1)));
        let queen = [up(Rank::Queen, Suit::Diamond)];
        assert!(layout.allows(&queen, Pile::Tableau(5), Pile::Tableau(4)));
    }

    #[test]
    fn foundations_take_the_next_rank_of_their_suit() {
        let layout = layout();
        let two = [up(Rank::Two, Suit::Spade)];
        let three = [up(Rank::Three, Suit::Spade)];
        assert!(layout.allows(&two, Pile::Tableau(6), Pile::Foundation(Suit::Spade)));
        assert!(!layout.allows(&two, Pile::Tableau(6), Pile::Foundation(Suit::Club)));
        assert!(!layout.allows(&three, Pile::Waste, Pile::Foundation(Suit::Spade)));
    }

    #[test]
    fn foundations_take_one_card_at_a_time() {
        let layout = layout();
        let run = [up(Rank::Six, Suit::Heart), up(Rank::Five, Suit::Spade)];
        assert!(!layout.allows(&run, Pile::Tableau(3), Pile::Foundation(Suit::Heart)));
    }

    #[test]
    fn waste_and_stock_never_receive() {
        let layout = layout();
        let two = [up(Rank::Two, Suit::Spade)];
        assert!(!layout.allows(&two, Pile::Tableau(6), Pile::Waste));
        assert!(!layout.allows(&two, Pile::Tableau(6), Pile::Stock));
    }

    #[test]
    fn selections_are_tails() {
        let layout = layout();
        let six = [up(Rank::Six, Suit::Heart)];
        let five = [up(Rank::Five, Suit::Spade)];
        let seven = [up(Rank::Seven, Suit::Heart)];
        let buried = [down(Rank::Nine, Suit::Club), up(Rank::Seven, Suit::Heart)];
        assert!(!layout.selects(&six, Pile::Tableau(3)));
        assert!(layout.selects(&five, Pile::Tableau(3)));
        assert!(layout.selects(&seven, Pile::Tableau(1)));
        assert!(!layout.selects(&buried, Pile::Tableau(1)));
        assert!(!layout.selects(&[], Pile::Tableau(1)));
        assert!(!layout.selects(&five, Pile::Tableau(9)));
    }

    #[test]
    fn single_top_from_waste_and_foundation() {
        let layout = layout();
        let ace = [up(Rank::Ace, Suit::Spade)];
        let three = [up(Rank::Three, Suit::Spade)];
        assert!(layout.selects(&ace, Pile::Foundation(Suit::Spade)));
        assert!(layout.selects(&three, Pile::Waste));
        assert!(!layout.selects(&ace, Pile::Waste));
        let top = layout.stock().cards()[..1].to_vec();
        assert!(!layout.selects(&top, Pile::Stock));
        assert!(!layout.allows(&top, Pile::Stock, Pile::Tableau(0)));
    }

    #[test]
    fn nothing_moves_onto_itself() {
        let layout = layout();
        let five = [up(Rank::Five, Suit::Spade)];
        assert!(!layout.allows(&five, Pile::Tableau(3), Pile::Tableau(3)));
    }
}
