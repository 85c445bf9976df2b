use crate::*;

/// Knobs for a [`Search`].
///
/// - `depth` — plies expanded serially before fan-out
/// - `workers` — size of the worker pool
/// - `chunk` — frontier tasks handed to a worker per dispatch
///
/// None of these change the result, only how the work is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub depth: usize,
    pub workers: usize,
    pub chunk: usize,
}

impl Config {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
    pub fn with_chunk(mut self, chunk: usize) -> Self {
        self.chunk = chunk.max(1);
        self
    }
    /// One worker per logical core when the pool can run in parallel.
    fn cores() -> usize {
        #[cfg(feature = "parallel")]
        {
            num_cpus::get()
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: SERIAL_DEPTH,
            workers: Self::cores(),
            chunk: CHUNK_SIZE,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "depth {} workers {} chunk {}",
            self.depth, self.workers, self.chunk
        )
    }
}
