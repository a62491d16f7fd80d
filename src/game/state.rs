use super::board::Symbol;

/// Lifecycle of a game. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Symbol),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        self == GameState::Complete
    }
}

impl GameOutcome {
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameOutcome::Winner(symbol) => Some(symbol),
            GameOutcome::Draw => None,
        }
    }
}
