use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Shared progress counter for a batch of frontier tasks.
/// Workers report each finished subtree; every report logs one
/// `done/total (pct%) tasks completed` line.
pub struct Tally {
    total: usize,
    done: AtomicUsize,
    nodes: AtomicUsize,
    start: Instant,
}

impl Tally {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
            nodes: AtomicUsize::new(0),
            start: Instant::now(),
        }
    }
    /// Record one solved subtree of `n` nodes.
    pub fn done(&self, n: usize) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.nodes.fetch_add(n, Ordering::Relaxed);
        log::debug!(
            "{}/{} ({:.2}%) tasks completed",
            done,
            self.total,
            self.percent(done)
        );
    }
    pub fn completed(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }
    pub fn nodes(&self) -> usize {
        self.nodes.load(Ordering::Relaxed)
    }
    fn percent(&self, done: usize) -> f32 {
        match self.total {
            0 => 100.,
            n => done as f32 / n as f32 * 100.,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elapsed = self.start.elapsed().as_secs_f32();
        write!(
            f,
            "{}/{} tasks, {} nodes, {:.0} nodes/s",
            self.completed(),
            self.total,
            self.nodes(),
            self.nodes() as f32 / elapsed.max(f32::EPSILON)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_reports() {
        let tally = Tally::new(4);
        tally.done(10);
        tally.done(5);
        assert_eq!(tally.completed(), 2);
        assert_eq!(tally.nodes(), 15);
        assert_eq!(tally.percent(2), 50.);
    }

    #[test]
    fn empty_batch_is_complete() {
        assert_eq!(Tally::new(0).percent(0), 100.);
    }
}
