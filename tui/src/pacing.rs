use std::{
    thread,
    time::{Duration, Instant},
};

/// Keeps a minimum interval between two generations.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
    /// When the last generation was shown.
    last: Option<Instant>,
}

impl Pacer {
    /// Create a new [`Pacer`] with the given interval.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Time left before the next generation is due.
    pub fn remaining(&self) -> Duration {
        self.last.map_or(Duration::ZERO, |last| {
            self.interval.saturating_sub(last.elapsed())
        })
    }

    /// Whether the next generation is due.
    pub fn is_due(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Record that a generation was just shown.
    pub fn mark(&mut self) {
        self.last = Some(Instant::now());
    }

    /// Sleep until the next generation is due, and record it as shown.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.mark();
    }
}
