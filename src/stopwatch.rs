use std::time::Instant;

/// Scoped timer. Logs `message` when started and how long it ran when
/// dropped.
///
/// ```
/// let _timer = endgame::Stopwatch::new("solving");
/// // ... work ...
/// // logs "solving took 1.23 seconds" here
/// ```
pub struct Stopwatch {
    message: String,
    start: Instant,
}

impl Stopwatch {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        log::info!("{}", message);
        Self {
            message,
            start: Instant::now(),
        }
    }
    pub fn seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        log::info!("{} took {:.2} seconds", self.message, self.seconds());
    }
}
