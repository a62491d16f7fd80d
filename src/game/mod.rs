//! Core Connect Four game logic: board, win detection, players, and the turn
//! state machine.

mod board;
mod engine;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, Symbol, STANDARD_HEIGHT, STANDARD_WIDTH};
pub use engine::ConnectFourGame;
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{find_winner, CONNECT};
