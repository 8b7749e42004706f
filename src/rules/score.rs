/// Running points and move counter. Points never drop below zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    points: Points,
    moves: usize,
}

impl Score {
    pub fn points(&self) -> Points {
        self.points
    }
    pub fn moves(&self) -> usize {
        self.moves
    }
    pub fn record(&mut self, event: Event) {
        self.points = self.points.saturating_add_signed(event.delta());
        if event.is_move() {
            self.moves += 1;
        }
        log::trace!("{:<22} {:>+4} -> {:>5} ({} moves)", event, event.delta(), self.points, self.moves);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} pts / {} moves", self.points, self.moves)
    }
}

use super::event::Event;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;
