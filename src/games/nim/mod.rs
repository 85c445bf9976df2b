//! Single-pile take-away.
//!
//! Players alternate removing one or two stones; whoever takes the last
//! stone wins. The player to move loses exactly when the pile is a
//! multiple of three.
//!
//! # Why Nim?
//!
//! - **Closed-form tree size** — a pile of `n` has `Fib(n + 3) - 1` nodes
//! - **Closed-form value** — the losing positions are known in advance
//! - **Arbitrary depth** — pile size dials the depth without changing rules

mod game;
mod player;
mod take;
mod winner;

pub use game::*;
pub use player::*;
pub use take::*;
pub use winner::*;
