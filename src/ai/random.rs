use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent: the same seed replays the same choices.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, open_columns: &[usize]) -> usize {
        assert!(!open_columns.is_empty(), "No open columns available");
        let idx = self.rng.random_range(0..open_columns.len());
        open_columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
