//! Console glue: where game text goes, how it is laid out, and how fast it
//! scrolls by.

mod output;
pub mod pacing;
pub mod render;

pub use output::{CapturedOutput, ConsoleOutput, Output};
pub use pacing::{FixedDelay, NoDelay, Pacer};
