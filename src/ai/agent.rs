/// Move policy for a player: pick one column out of those still open.
pub trait Agent {
    /// Select a column from `open_columns`, which is non-empty and ascending.
    fn select_action(&mut self, open_columns: &[usize]) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent({})", self.name())
    }
}
