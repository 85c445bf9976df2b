//! Capability traits for a rules engine.
//!
//! The search never inspects a position directly. Everything it needs
//! from a game goes through these four traits:
//! - [`Move`] — an action applied to a position, used as the edge label
//! - [`Turn`] — which player is to act
//! - [`Outcome`] — a terminal result, scored from a given player's perspective
//! - [`Game`] — move generation, move application, and compaction

mod game;
mod moves;
mod outcome;
mod turn;

pub use game::*;
pub use moves::*;
pub use outcome::*;
pub use turn::*;
