use endgame::games::*;
use endgame::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        expanding_nim_exhaustively,
        solving_tictactoe_serially,
        solving_tictactoe_pooled,
        backing_up_tictactoe,
}

fn expanding_nim_exhaustively(c: &mut criterion::Criterion) {
    c.bench_function("expand a pile of 20 to the end", |b| {
        b.iter(|| solve(Tree::seed(Nim::new(20))))
    });
}

fn solving_tictactoe_serially(c: &mut criterion::Criterion) {
    c.bench_function("solve TicTacToe on one thread", |b| {
        b.iter(|| solve(Tree::seed(TicTacToe::default())))
    });
}

fn solving_tictactoe_pooled(c: &mut criterion::Criterion) {
    let search = Search::new(Config::default().with_depth(2));
    c.bench_function("solve TicTacToe across the pool", |b| {
        b.iter(|| search.run(TicTacToe::default()))
    });
}

fn backing_up_tictactoe(c: &mut criterion::Criterion) {
    let tree = solve(Tree::seed(TicTacToe::default())).expect("tictactoe solves");
    c.bench_function("back up a solved TicTacToe tree", |b| {
        b.iter(|| tree.optimal_play())
    });
}
