use crate::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs [`solve`] over a batch of independent seeds.
///
/// Results come back in seed order whatever order the workers finish
/// in. The first failing seed fails the whole batch as a
/// [`SearchError::Task`] carrying that seed's index; results already
/// produced are dropped. Without the `parallel` feature the batch is
/// solved on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    workers: usize,
    chunk: usize,
}

impl Pool {
    pub fn new(workers: usize, chunk: usize) -> Self {
        Self {
            workers: workers.max(1),
            chunk: chunk.max(1),
        }
    }
    pub fn workers(&self) -> usize {
        self.workers
    }
    pub fn chunk(&self) -> usize {
        self.chunk
    }

    #[cfg(feature = "parallel")]
    pub fn solve<G>(&self, seeds: Vec<Tree<G>>) -> Result<Vec<Tree<G>>>
    where
        G: Game,
    {
        let tally = Tally::new(seeds.len());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;
        let solved = pool.install(|| {
            seeds
                .into_par_iter()
                .with_min_len(self.chunk)
                .enumerate()
                .map(|(i, seed)| self.task(i, seed, &tally))
                .collect::<Result<Vec<_>>>()
        })?;
        log::info!("{}", tally);
        Ok(solved)
    }

    #[cfg(not(feature = "parallel"))]
    pub fn solve<G>(&self, seeds: Vec<Tree<G>>) -> Result<Vec<Tree<G>>>
    where
        G: Game,
    {
        let tally = Tally::new(seeds.len());
        let solved = seeds
            .into_iter()
            .enumerate()
            .map(|(i, seed)| self.task(i, seed, &tally))
            .collect::<Result<Vec<_>>>()?;
        log::info!("{}", tally);
        Ok(solved)
    }

    fn task<G>(&self, i: usize, seed: Tree<G>, tally: &Tally) -> Result<Tree<G>>
    where
        G: Game,
    {
        solve(seed)
            .map_err(|e| SearchError::task(i, e))
            .inspect(|tree| tally.done(tree.n()))
    }
}

impl From<&Config> for Pool {
    fn from(config: &Config) -> Self {
        Self::new(config.workers, config.chunk)
    }
}
