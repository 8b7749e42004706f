/// A frozen copy of the full game state, taken just before a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot(State);

impl From<&State> for Snapshot {
    fn from(state: &State) -> Self {
        Self(state.clone())
    }
}
impl From<Snapshot> for State {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.0
    }
}

/// Undo stack. Most recent snapshot on top.
#[derive(Debug, Default, Clone)]
pub struct History(Vec<Snapshot>);

impl History {
    pub fn push(&mut self, state: &State) {
        self.0.push(Snapshot::from(state));
    }
    pub fn pop(&mut self) -> Option<State> {
        self.0.pop().map(State::from)
    }
    pub fn depth(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

use super::state::State;
use serde::Deserialize;
use serde::Serialize;
