/// An action that takes one position to another.
///
/// Moves label the edges of the tree. They key the parent's child slot
/// during recombination, and their ordering fixes the order in which
/// children are visited, which is what makes tie-breaking deterministic.
///
/// # Requirements
///
/// - Copyable and hashable for cheap edge labels
/// - Totally ordered for deterministic iteration
/// - `Send + Sync` so frontier positions can cross into worker threads
pub trait Move:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Send
    + Sync
    + std::hash::Hash
    + std::fmt::Debug
{
}
