use std::collections::VecDeque;

use super::agent::Agent;

/// An agent that replays a fixed list of columns in order.
///
/// Once the script runs out it falls back to the leftmost open column. The
/// script is played back as written, so an entry naming a full column is
/// passed through to the engine unchanged.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    moves: VecDeque<usize>,
}

impl ScriptedAgent {
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        ScriptedAgent {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn select_action(&mut self, open_columns: &[usize]) -> usize {
        match self.moves.pop_front() {
            Some(col) => col,
            None => {
                assert!(!open_columns.is_empty(), "No open columns available");
                open_columns[0]
            }
        }
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
