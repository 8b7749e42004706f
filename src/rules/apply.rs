impl Layout {
    /// Carry out a validated move.
    ///
    /// Lifts the cards off the source, turns up a newly exposed
    /// face-down column card, and lays the cards on the target in
    /// their original order. Returns the flip event when a card
    /// was turned up.
    pub fn apply(&mut self, mv: &Move) -> Option<Event> {
        debug_assert!(self.selects(mv.cards(), mv.source()));
        debug_assert!(self.allows(mv.cards(), mv.source(), mv.target()));
        let n = mv.cards().len();
        let lifted = match mv.source() {
            Pile::Tableau(i) => self.column_mut(i).take(n),
            Pile::Foundation(suit) => self.foundation_mut(suit).pop().into_iter().collect(),
            Pile::Waste => self.waste_mut().pop().into_iter().collect(),
            Pile::Stock => unreachable!("the stock is dealt, not moved from"),
        };
        assert!(lifted.len() == n);
        let flipped = match mv.source() {
            Pile::Tableau(i) => self.column_mut(i).expose(),
            Pile::Foundation(_) | Pile::Waste | Pile::Stock => false,
        };
        match mv.target() {
            Pile::Tableau(i) => self.column_mut(i).put(lifted),
            Pile::Foundation(suit) => lifted
                .into_iter()
                .for_each(|card| self.foundation_mut(suit).push(card)),
            Pile::Waste | Pile::Stock => unreachable!("{} never receives a move", mv.target()),
        }
        flipped.then_some(Event::Flip)
    }
}

use super::action::Move;
use super::event::Event;
use crate::piles::layout::Layout;
use crate::piles::pile::Pile;
