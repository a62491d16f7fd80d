//! Move policies: the [`Agent`] trait, the uniform [`RandomAgent`] used in
//! real games, and the [`ScriptedAgent`] replaying a fixed move list.

mod agent;
mod random;
mod scripted;

pub use agent::Agent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
