//! Reference rules engines.
//!
//! Small games with known tree sizes and known values, used to exercise
//! the search end to end and as worked examples of the [`crate::Game`]
//! capability set.
//!
//! - [`Nim`] — single-pile take-away (take 1 or 2, last stone wins)
//! - [`TicTacToe`] — the full 3×3 game

mod nim;
mod tictactoe;

pub use nim::*;
pub use tictactoe::*;
