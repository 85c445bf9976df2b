use crate::*;

/// Exact solver for one starting position.
///
/// Expands the first `depth` plies on the calling thread with parent
/// links, detaches the frontier, solves every frontier position in a
/// [`Pool`], grafts the results back, and reads the principal variation
/// off the combined tree. The worker count and chunk size only change
/// how the work is split: the returned tree and line are the same for
/// every [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Search {
    config: Config,
}

impl Search {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run<G>(&self, mut game: G) -> Result<Solution<G>>
    where
        G: Game,
    {
        log::info!("searching with {}", self.config);
        game.compact();
        let mut tree = Tree::seed(game);
        {
            let _timer = Stopwatch::new(format!("expanding {} plies", self.config.depth));
            Expander::new(self.config.depth, true).expand(&mut tree)?;
        }
        let (slots, seeds) = tree.frontier().split();
        let solved = {
            let _timer = Stopwatch::new(format!("solving {} frontier positions", seeds.len()));
            Pool::from(&self.config).solve(seeds)?
        };
        tree.recombine(&slots, solved)?;
        tree.prune();
        let line = {
            let _timer = Stopwatch::new(format!("backing up {} nodes", tree.n()));
            tree.optimal_play().ok_or(SearchError::Unsolved)?
        };
        log::info!("optimal play: {}", line);
        Ok(Solution { tree, line })
    }
}
