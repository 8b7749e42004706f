/// Everything that can change the score.
///
/// | event                      | points | counts as a move |
/// |----------------------------|--------|------------------|
/// | card to foundation         |   +10  | yes              |
/// | waste to tableau           |    +5  | yes              |
/// | tableau flip on expose     |    +5  | no               |
/// | tableau to tableau         |    +3  | yes              |
/// | foundation to tableau      |   -15  | yes              |
/// | time penalty               |    -2  | no               |
/// | recycle, pass <= 4         |     0  | no               |
/// | recycle, pass > 4          |   -20  | no               |
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Foundation,
    Waste,
    Flip,
    Tableau,
    Retreat,
    Penalty,
    /// carries the pass number, counting from 1
    Recycle(usize),
}

impl Event {
    /// The scoring event of a card relocation between two piles.
    /// Only defined for destinations that can legally receive cards.
    pub fn between(from: Pile, to: Pile) -> Self {
        match (from, to) {
            (_, Pile::Foundation(_)) => Event::Foundation,
            (Pile::Waste | Pile::Stock, Pile::Tableau(_)) => Event::Waste,
            (Pile::Tableau(_), Pile::Tableau(_)) => Event::Tableau,
            (Pile::Foundation(_), Pile::Tableau(_)) => Event::Retreat,
            (_, Pile::Waste | Pile::Stock) => unreachable!("{} never receives a move", to),
        }
    }
    pub fn delta(&self) -> Delta {
        match self {
            Event::Foundation => 10,
            Event::Waste => 5,
            Event::Flip => 5,
            Event::Tableau => 3,
            Event::Retreat => -15,
            Event::Penalty => -2,
            Event::Recycle(pass) if *pass <= crate::FREE_PASSES => 0,
            Event::Recycle(_) => -20,
        }
    }
    /// player-initiated relocations bump the move counter
    pub fn is_move(&self) -> bool {
        match self {
            Event::Foundation | Event::Waste | Event::Tableau | Event::Retreat => true,
            Event::Flip | Event::Penalty | Event::Recycle(_) => false,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Foundation => write!(f, "to foundation"),
            Event::Waste => write!(f, "waste to tableau"),
            Event::Flip => write!(f, "flip"),
            Event::Tableau => write!(f, "tableau to tableau"),
            Event::Retreat => write!(f, "foundation to tableau"),
            Event::Penalty => write!(f, "time penalty"),
            Event::Recycle(pass) => write!(f, "recycle #{}", pass),
        }
    }
}

use crate::Delta;
use crate::piles::pile::Pile;
use serde::Deserialize;
use serde::Serialize;
