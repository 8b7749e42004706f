/// What a tap on the stock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// this many cards went from stock to waste
    Dealt(usize),
    /// this many cards went from waste back into the stock
    Recycled(usize),
    /// stock and waste were both empty
    Idle,
}

impl Layout {
    /// true iff a tap on the stock would change anything
    pub fn can_turn(&self) -> bool {
        !(self.stock().is_empty() && self.waste().is_empty())
    }

    /// Deal up to `draw` cards face-up onto the waste, or, with the
    /// stock exhausted, rebuild the stock from the waste.
    pub fn turn(&mut self, draw: usize) -> Turn {
        match (self.stock().is_empty(), self.waste().is_empty()) {
            (true, true) => Turn::Idle,
            (true, false) => {
                let waste = self.waste_mut().drain();
                let n = waste.len();
                *self.stock_mut() = Stock::recycle(waste, draw);
                Turn::Recycled(n)
            }
            (false, _) => {
                let dealt = self.stock_mut().deal(draw);
                let n = dealt.len();
                self.waste_mut().put(dealt);
                Turn::Dealt(n)
            }
        }
    }
}

use crate::piles::layout::Layout;
use crate::piles::stock::Stock;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::deck::Deck;

    #[test]
    fn deals_then_recycles() {
        let mut layout = Layout::deal(Deck::new());
        let stock = layout.stock().cards().to_vec();
        assert!(layout.turn(3) == Turn::Dealt(3));
        assert!(layout.waste().cards().iter().zip(&stock[..3]).all(|(a, b)| a.same(b)));
        assert!(layout.waste().cards().iter().all(Card::is_up));
        for _ in 0..7 {
            assert!(layout.turn(3) == Turn::Dealt(3));
        }
        assert!(layout.stock().is_empty());
        assert!(layout.waste().len() == 24);
        assert!(layout.turn(3) == Turn::Recycled(24));
        assert!(layout.waste().is_empty());
        assert!(layout.stock().len() == 24);
        assert!(layout.is_consistent());
    }

    #[test]
    fn short_final_deal() {
        let mut layout = Layout::deal(Deck::new());
        for _ in 0..4 {
            layout.turn(5);
        }
        assert!(layout.turn(5) == Turn::Dealt(4));
        assert!(layout.is_consistent());
    }

    #[test]
    fn idle_when_both_empty() {
        let mut layout = Layout::stage(
            [
                Deck::new().into_iter().map(Card::up).collect(),
                vec![],
                vec![],
                vec![],
                vec![],
                vec![],
                vec![],
            ],
            vec![],
            [0; 4],
        );
        assert!(!layout.can_turn());
        assert!(layout.turn(3) == Turn::Idle);
    }
}
