//! Exact, exhaustive solving of finite two-player perfect-information games.
//!
//! The full reachable game tree is enumerated from a fixed position, the
//! enumeration is split at a fixed depth so that independent subtrees can be
//! solved by a worker pool, the solved subtrees are grafted back into one
//! tree, and backward induction extracts the principal variation.
//!
//! # Module Structure
//!
//! - `game` — capability traits a rules engine implements (Game, Move, Turn, Outcome)
//! - `tree` — arena-backed game tree and its node handles
//! - `search` — serial expansion, parallel subtree solving, pruning, recombination
//! - `play` — backward induction and the principal variation
//! - `games` — small reference rules engines
//! - `error` — the failure taxonomy shared by every phase
//! - `stopwatch` — scoped wall-clock timing through the log
pub mod error;
pub mod game;
pub mod games;
pub mod play;
pub mod search;
pub mod stopwatch;
pub mod tree;

pub use error::*;
pub use game::*;
pub use play::*;
pub use search::*;
pub use stopwatch::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Exact terminal utility from one player's perspective. Larger is better.
pub type Score = i32;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Plies expanded serially before the frontier is handed to the worker pool.
pub const SERIAL_DEPTH: usize = 5;
/// Frontier tasks handed to a worker per dispatch.
pub const CHUNK_SIZE: usize = 1;
/// Random opening moves played before solving, to reach a tractable position.
pub const FIXED_MOVES: usize = 30;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
