/// Everything undo has to put back: the piles, the score,
/// the number of deck passes, and whether the game is won.
///
/// State knows how to carry out an already-validated action and
/// keep the books on it. Deciding whether an action is allowed,
/// and remembering how to take it back, is the engine's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    layout: Layout,
    score: Score,
    passes: usize,
    won: bool,
}

impl From<Layout> for State {
    fn from(layout: Layout) -> Self {
        Self {
            won: layout.is_won(),
            layout,
            score: Score::default(),
            passes: 0,
        }
    }
}

impl State {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn passes(&self) -> usize {
        self.passes
    }
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Relocate cards and score it, flip included.
    /// Returns true iff this move completed the last foundation.
    pub fn relocate(&mut self, mv: &Move) -> bool {
        let flip = self.layout.apply(mv);
        self.score.record(mv.event());
        if let Some(flip) = flip {
            self.score.record(flip);
        }
        match mv.target() {
            Pile::Foundation(_) => self.detect(),
            Pile::Tableau(_) | Pile::Waste | Pile::Stock => false,
        }
    }

    /// Tap the stock. Recycling counts a deck pass and scores it.
    pub fn turn(&mut self, draw: usize) -> Turn {
        let turn = self.layout.turn(draw);
        if let Turn::Recycled(_) = turn {
            self.passes += 1;
            self.score.record(Event::Recycle(self.passes));
        }
        turn
    }

    pub fn penalize(&mut self) {
        self.score.record(Event::Penalty);
    }

    /// flags the win once; true only on the transition
    fn detect(&mut self) -> bool {
        if !self.won && self.layout.is_won() {
            self.won = true;
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.layout)?;
        write!(f, "{}  passes {}", self.score, self.passes)?;
        if self.won {
            write!(f, "  WON")?;
        }
        Ok(())
    }
}

use crate::piles::layout::Layout;
use crate::piles::pile::Pile;
use crate::rules::action::Move;
use crate::rules::event::Event;
use crate::rules::recycle::Turn;
use crate::rules::score::Score;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    #[test]
    fn passes_score_after_the_fourth() {
        let mut state = State::from(Layout::deal(Deck::new()));
        let mut recycles = 0;
        while recycles < 6 {
            if let Turn::Recycled(_) = state.turn(3) {
                recycles += 1;
            }
        }
        assert!(state.passes() == 6);
        assert!(state.score().points() == 0);
        assert!(state.score().moves() == 0);
    }

    #[test]
    fn penalty_floors_at_zero() {
        let mut state = State::from(Layout::deal(Deck::new()));
        state.penalize();
        assert!(state.score().points() == 0);
    }
}
