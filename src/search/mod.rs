//! Two-phase exhaustive search.
//!
//! 1. [`Expander`] grows the tree breadth-first to a fixed depth, recording
//!    a [`Link`] on every new node.
//! 2. [`Frontier`] detaches the pending leaves into independent seeds,
//!    keeping each one's [`Slot`] on the caller's side.
//! 3. [`Pool`] runs [`solve`] on every seed, possibly in parallel, and
//!    returns the solved subtrees in frontier order.
//! 4. [`Tree::recombine`] grafts each solved subtree back into its slot.
//!
//! [`Search`] strings the phases together behind one call.

mod config;
mod expander;
mod frontier;
mod graft;
mod pool;
mod prune;
mod search;
mod slot;
mod solution;
mod solver;
mod tally;

pub use config::*;
pub use expander::*;
pub use frontier::*;
pub use pool::*;
pub use search::*;
pub use slot::*;
pub use solution::*;
pub use solver::*;
pub use tally::*;
