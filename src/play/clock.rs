/// Elapsed whole seconds, driven by an outside once-a-second timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    elapsed: u64,
    interval: u64,
}

impl From<u64> for Clock {
    fn from(interval: u64) -> Self {
        assert!(interval > 0);
        Self {
            elapsed: 0,
            interval,
        }
    }
}

impl Clock {
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
    /// advance one second. true iff a time penalty falls due on this tick.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        self.elapsed % self.interval == 0
    }
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
