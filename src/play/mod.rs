//! Backward induction over a solved tree.
//!
//! - [`Line`] — the principal variation: moves from the root under
//!   optimal play by both sides, and the outcome they reach
//! - [`Tree::values`] / [`Tree::optimal_play`] — bottom-up minimax

mod line;
mod minimax;

pub use line::*;
