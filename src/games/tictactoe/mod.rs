//! Tic-tac-toe on the standard 3×3 board.
//!
//! The unreduced game tree has 549,946 nodes and 255,168 finished games
//! (131,184 won by X, 77,904 won by O, 46,080 drawn). Perfect play is a
//! draw. No symmetry reduction is applied; the search must see every
//! move order.

mod board;
mod mark;
mod square;
mod verdict;

pub use board::*;
pub use mark::*;
pub use square::*;
pub use verdict::*;
