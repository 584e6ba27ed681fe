use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifesweeper::{Game, GameConfig, GameState, Level, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Default)]
struct GameStats {
    won: bool,
    clicks: usize,
    lives_lost: u32,
    score: u32,
}

#[derive(Debug, Default)]
struct AggregateStats {
    games: Vec<GameStats>,
}

impl AggregateStats {
    fn games_played(&self) -> usize {
        self.games.len()
    }

    fn win_rate(&self) -> f64 {
        if self.games_played() == 0 {
            return 0.0;
        }
        self.games.iter().filter(|g| g.won).count() as f64 / self.games_played() as f64 * 100.0
    }

    fn average_clicks(&self) -> f64 {
        if self.games_played() == 0 {
            return 0.0;
        }
        self.games.iter().map(|g| g.clicks).sum::<usize>() as f64 / self.games_played() as f64
    }

    fn average_score(&self) -> f64 {
        if self.games_played() == 0 {
            return 0.0;
        }
        self.games.iter().map(|g| g.score as f64).sum::<f64>() / self.games_played() as f64
    }

    fn total_lives_lost(&self) -> u32 {
        self.games.iter().map(|g| g.lives_lost).sum()
    }
}

/// Clicks every cell once in random order, keeping only the latest snapshot.
fn play_random_game(game: Game, rng: &mut StdRng) -> GameStats {
    let mut order: Vec<Position> = game.cells().map(|cell| cell.position()).collect();
    order.shuffle(rng);

    let starting_lives = game.lives().count();
    let mut game = game;
    let mut stats = GameStats::default();

    for pos in order {
        if game.is_finished() {
            break;
        }
        game = game.reveal_at(pos);
        stats.clicks += 1;
    }

    stats.won = game.state() == GameState::Won;
    stats.lives_lost = starting_lives.saturating_sub(game.lives().count());
    stats.score = game.score().value();
    stats
}

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");

    for level in Level::ALL {
        let config = level.config();
        let mut rng = StdRng::seed_from_u64(42);
        group.bench_function(format!("{:?}", level), |b| {
            b.iter(|| black_box(Game::from_config_with_rng(&config, &mut rng).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flood fill");

    for size in [32u32, 128, 512] {
        let game = Game::create(size, size, 0, 3, 0).unwrap();
        group.bench_function(format!("empty {}x{}", size, size), |b| {
            b.iter(|| black_box(game.reveal_at(Position::new(0, 0))))
        });
    }

    group.finish();
}

fn benchmark_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random play");

    for level in Level::ALL {
        let config = level.config();
        let mut rng = StdRng::seed_from_u64(7);

        group.bench_function(format!("{:?}", level), |b| {
            b.iter_with_setup(
                || Game::from_config_with_rng(&config, &mut rng).unwrap(),
                |game| {
                    let mut play_rng = StdRng::seed_from_u64(11);
                    black_box(play_random_game(game, &mut play_rng))
                },
            );
        });

        let mut aggregate = AggregateStats::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let game = Game::from_config_with_rng(&config, &mut rng).unwrap();
            aggregate.games.push(play_random_game(game, &mut rng));
        }

        println!("\n{}:", level.label());
        println!("Win rate: {:.1}%", aggregate.win_rate());
        println!("Average clicks per game: {:.1}", aggregate.average_clicks());
        println!("Average score: {:.1}", aggregate.average_score());
        println!("Total lives lost: {}", aggregate.total_lives_lost());
        println!("Games played: {}", aggregate.games_played());
    }

    group.finish();
}

fn benchmark_bounty_rules(c: &mut Criterion) {
    let config = GameConfig::new(16, 16, 40, 3, 2).with_scoring(lifesweeper::ScoringRules::bounty());
    let mut rng = StdRng::seed_from_u64(5);
    let game = Game::from_config_with_rng(&config, &mut rng).unwrap();
    let mines: Vec<Position> = game
        .cells()
        .filter(|cell| cell.is_mine())
        .map(|cell| cell.position())
        .collect();

    c.bench_function("Flag every mine (bounty)", |b| {
        b.iter(|| {
            let flagged = mines
                .iter()
                .fold(game.clone(), |game, &pos| game.toggle_flag_at(pos));
            black_box(flagged)
        })
    });
}

criterion_group!(
    benches,
    benchmark_generation,
    benchmark_flood_fill,
    benchmark_play,
    benchmark_bounty_rules
);
criterion_main!(benches);
