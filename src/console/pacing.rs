use std::time::Duration;

/// Hook called between turns. Only affects how fast a game is displayed.
pub trait Pacer {
    fn pause(&mut self);
}

/// Sleeps for a fixed duration on every pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(ms: u64) -> Self {
        FixedDelay(Duration::from_millis(ms))
    }
}

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

/// A zero delay becomes [`NoDelay`].
pub fn pacer_for(delay: Duration) -> Box<dyn Pacer> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay(delay))
    }
}
