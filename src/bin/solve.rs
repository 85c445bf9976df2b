//! Solve Binary
//!
//! Plays a random opening, solves the position that remains exactly,
//! and prints the optimal line from there to the end of the game.
//!
//! Options: --game, --stones, --fixed-moves, --depth, --workers, --chunk, --seed

use clap::Parser;
use clap::ValueEnum;
use endgame::games::*;
use endgame::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    Nim,
    Tictactoe,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "nim")]
    game: Variant,
    #[arg(long, default_value_t = 50, help = "Starting pile for nim")]
    stones: u8,
    #[arg(
        long,
        help = "Random opening moves before solving [default: 30 for nim, 0 for tictactoe]"
    )]
    fixed_moves: Option<usize>,
    #[arg(long, default_value_t = SERIAL_DEPTH, help = "Plies expanded before fan-out")]
    depth: usize,
    #[arg(long, help = "Worker threads [default: one per core]")]
    workers: Option<usize>,
    #[arg(long, default_value_t = CHUNK_SIZE, help = "Frontier tasks per dispatch")]
    chunk: usize,
    #[arg(long, help = "Seed for the random opening")]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Config {
        let config = Config::default()
            .with_depth(self.depth)
            .with_chunk(self.chunk);
        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }
    fn rng(&self) -> SmallRng {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("opening seed {}", seed);
        SmallRng::seed_from_u64(seed)
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    match args.game {
        Variant::Nim => {
            let fixed = args.fixed_moves.unwrap_or(FIXED_MOVES);
            run(Nim::new(args.stones), fixed, &args)
        }
        Variant::Tictactoe => {
            let fixed = args.fixed_moves.unwrap_or(0);
            run(TicTacToe::default(), fixed, &args)
        }
    }
}

fn run<G>(mut game: G, fixed: usize, args: &Args) -> anyhow::Result<()>
where
    G: Game + std::fmt::Display,
{
    let ref mut rng = args.rng();
    for _ in 0..fixed {
        let Some(edge) = game.moves().choose(rng).copied() else {
            break;
        };
        if let Some(outcome) = game.play(edge)? {
            log::info!("random opening ended the game: {:?}", outcome);
            println!("{}", game);
            return Ok(());
        }
    }
    println!("{}", game);
    let snapshot = game.clone();
    let solution = {
        let _timer = Stopwatch::new("search");
        Search::new(args.config()).run(game)?
    };
    log::info!("{}", solution);
    for (i, (edge, position)) in solution.line.replay(snapshot)?.into_iter().enumerate() {
        println!("{:>3}. {:?}", i + 1, edge);
        println!("{}", position);
    }
    println!("outcome: {:?}", solution.line.outcome());
    Ok(())
}
