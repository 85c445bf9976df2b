//! Failure taxonomy for the search.
//!
//! Every failure is fatal to the call that raised it. Nothing is retried:
//! a partially enumerated tree would yield a wrong optimal line, not an
//! approximate one.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SearchError {
    /// The rules engine failed to produce a successor, or reported a live
    /// position with no legal moves.
    #[error("rules engine failed at depth {depth}: {source}")]
    Adapter {
        depth: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A frontier subtree could not be solved.
    #[error("frontier task {index} failed: {source}")]
    Task {
        index: usize,
        #[source]
        source: Box<SearchError>,
    },

    /// A frontier entry carries no (parent, move) record to graft against.
    #[error("frontier entry {index} has no parent link; expand with parent pointers before fan-out")]
    Unlinked { index: usize },

    /// A frontier entry's (parent, move) record names a slot the tree does not have.
    #[error("frontier entry {index} links to a slot that does not exist in this tree")]
    Vacant { index: usize },

    /// Recombination was handed a different number of subtrees than slots.
    #[error("{slots} frontier slots but {solved} solved subtrees")]
    Mismatch { slots: usize, solved: usize },

    /// Backward induction was asked for a tree that still has pending leaves.
    #[error("tree still has unexpanded positions")]
    Unsolved,

    /// The worker pool could not be started.
    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl SearchError {
    pub fn adapter(depth: usize, source: anyhow::Error) -> Self {
        Self::Adapter {
            depth,
            source: source.into(),
        }
    }
    pub fn task(index: usize, source: SearchError) -> Self {
        Self::Task {
            index,
            source: Box::new(source),
        }
    }
    /// True for failures that indicate a broken expand/recombine contract
    /// rather than a runtime condition.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Unlinked { .. } | Self::Vacant { .. } | Self::Mismatch { .. } | Self::Unsolved
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
