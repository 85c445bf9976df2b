//! Arena-backed game tree.
//!
//! Nodes live in a petgraph `DiGraph` and are addressed by `NodeIndex`.
//! Edges run parent → child and carry the move, so ownership is strictly
//! top-down and a node's parent is simply its one incoming neighbour.
//!
//! - [`Tree`] — the arena and its structural mutations
//! - [`Node`] — a `Copy` handle for read-only navigation
//! - [`Data`] — the per-node weight (position, turn, outcome, link)
//! - [`Link`] — the (parent, move) record used to graft solved subtrees back
//! - [`Leaves`] — lazy walk over unexpanded, non-terminal leaves

mod data;
mod leaves;
mod link;
mod node;
mod tree;

pub use data::*;
pub use leaves::*;
pub use link::*;
pub use node::*;
pub use tree::*;
