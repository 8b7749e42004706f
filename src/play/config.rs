/// Per-game rule knobs. Defaults follow the crate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    draw: usize,
    interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draw: crate::DRAW,
            interval: crate::PENALTY_INTERVAL,
        }
    }
}

impl Config {
    /// cards dealt per tap on the stock; draw-one or draw-three
    pub fn with_draw(mut self, draw: usize) -> Self {
        assert!(draw == 1 || draw == 3, "draw must be 1 or 3, got {}", draw);
        self.draw = draw;
        self
    }
    /// ticks between time penalties
    pub fn with_interval(mut self, interval: u64) -> Self {
        assert!(interval > 0);
        self.interval = interval;
        self
    }
    pub fn draw(&self) -> usize {
        self.draw
    }
    pub fn interval(&self) -> u64 {
        self.interval
    }
}

use serde::Deserialize;
use serde::Serialize;
