use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use american_format::{
    results::{ScoreSubmission, apply_score, build_leaderboard},
    schedule::{GreedyStrategy, Round, Strategy, generate, generate_with_strategy},
};

/// Helper to create a roster of `n` players
fn roster(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("player{}", i)).collect()
}

/// Helper to score every match of a schedule
fn play_all(rounds: Vec<Round>) -> Vec<Round> {
    let games: Vec<u32> = rounds
        .iter()
        .flat_map(|round| &round.matches)
        .map(|m| m.game_number)
        .collect();
    games.into_iter().fold(rounds, |rounds, game| {
        let team1 = f64::from(game % 17);
        let submission = ScoreSubmission::new(game, team1, 16.0 - team1);
        apply_score(&rounds, &submission, 16).unwrap_or(rounds)
    })
}

/// Benchmark round-robin generation for the tuned 8-player format
fn bench_generate_eight_players(c: &mut Criterion) {
    let players = roster(8);
    c.bench_function("generate_8_players_2_courts", |b| {
        b.iter(|| generate(&players, 2, 16));
    });
}

/// Benchmark greedy generation as the roster grows
fn bench_greedy_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_generation");
    for players in [4, 8, 12, 16] {
        let names = roster(players);
        group.bench_with_input(BenchmarkId::from_parameter(players), &names, |b, names| {
            b.iter(|| {
                generate_with_strategy(names, names.len() / 4, 16, Strategy::from(GreedyStrategy))
            });
        });
    }
    group.finish();
}

/// Benchmark leaderboard construction for a fully scored schedule
fn bench_leaderboard(c: &mut Criterion) {
    let rounds = play_all(generate(&roster(16), 4, 16).rounds);
    c.bench_function("leaderboard_16_players", |b| {
        b.iter(|| build_leaderboard(&rounds));
    });
}

criterion_group!(
    schedule_generation,
    bench_generate_eight_players,
    bench_greedy_generation,
);

criterion_group!(results_processing, bench_leaderboard);

criterion_main!(schedule_generation, results_processing);
