use super::board::Symbol;
use crate::ai::{Agent, RandomAgent};

/// A seat at the table: the symbol it plays and the agent choosing its moves.
#[derive(Debug)]
pub struct Player {
    symbol: Symbol,
    agent: Box<dyn Agent>,
}

impl Player {
    /// Player driven by a [`RandomAgent`]
    pub fn new(symbol: Symbol) -> Self {
        Self::with_agent(symbol, RandomAgent::new())
    }

    pub fn with_agent(symbol: Symbol, agent: impl Agent + 'static) -> Self {
        Player {
            symbol,
            agent: Box::new(agent),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    /// Ask the agent for a column.
    pub fn select_column(&mut self, open_columns: &[usize]) -> usize {
        self.agent.select_action(open_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ScriptedAgent;

    #[test]
    fn test_default_player_is_random() {
        let player = Player::new(Symbol::O);
        assert_eq!(player.symbol(), Symbol::O);
        assert_eq!(player.agent_name(), "Random");
    }

    #[test]
    fn test_player_delegates_to_agent() {
        let mut player = Player::with_agent(Symbol::X, ScriptedAgent::new([6, 2]));
        assert_eq!(player.select_column(&[0, 1, 2, 6]), 6);
        assert_eq!(player.select_column(&[0, 1, 2, 6]), 2);
        assert_eq!(player.agent_name(), "Scripted");
    }
}
