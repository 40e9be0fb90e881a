pub mod board;

mod cuanteti;
pub use cuanteti::*;

mod silly;
pub use silly::*;

mod tictactoe;
pub use tictactoe::*;

mod toads_and_frogs;
pub use toads_and_frogs::*;

/// Player identifiers for the reference games.
pub type PlayerName = &'static str;
