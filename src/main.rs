use itertools::Itertools;
use lifesweeper::{Action, Game, GameConfig, GameError, GameState, Level, Position, TileView};
use std::io::{self, BufRead, Write};

fn main() {
    env_logger::init();

    match run_game() {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game() -> Result<(), GameError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map_while(Result::ok);

    let Some(config) = choose_level(&mut lines) else {
        return Ok(());
    };
    let mut game = Game::from_config(&config)?;

    while game.state() == GameState::Playing {
        print_board(&game);

        prompt("Enter command (x y [r/f]): ");
        let Some(line) = lines.next() else {
            return Ok(());
        };
        if let Some((pos, action)) = parse_command(&game, &line) {
            game = game.apply(pos, action);
        }
    }

    print_board(&game);
    match game.state() {
        GameState::Won => println!("Congratulations! You won with {} points!", game.score().value()),
        GameState::Lost => println!("Game Over! Final score: {}", game.score().value()),
        GameState::Playing => unreachable!(),
    }

    Ok(())
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

fn choose_level(lines: &mut impl Iterator<Item = String>) -> Option<GameConfig> {
    for (i, level) in Level::ALL.iter().enumerate() {
        println!("{}) {}", i + 1, level.label());
    }
    println!("c) Custom");

    loop {
        prompt("Choose a level: ");
        let line = lines.next()?;
        match line.trim() {
            "c" => return Some(custom_config(lines)?),
            choice => match choice.parse::<usize>() {
                Ok(n) if (1..=Level::ALL.len()).contains(&n) => {
                    return Some(Level::ALL[n - 1].config())
                }
                _ => println!("Invalid level"),
            },
        }
    }
}

fn custom_config(lines: &mut impl Iterator<Item = String>) -> Option<GameConfig> {
    let beginner = Level::Beginner.config();
    let mut ask = |label: &str, default: u32, min: u32| -> Option<u32> {
        prompt(&format!("{} [{}]: ", label, default));
        Some(parse_count(&lines.next()?, default, min))
    };

    let rows = ask("Rows", beginner.rows, 1)?;
    let cols = ask("Columns", beginner.cols, 1)?;
    let mines = ask("Mines", beginner.mines, 0)?;
    Some(GameConfig::custom(rows, cols, mines))
}

/// Parses a custom level number. Anything that is not a number falls back to
/// `default`; numbers are clamped to at least `min`, negatives included.
fn parse_count(input: &str, default: u32, min: u32) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) => n.clamp(i64::from(min), i64::from(u32::MAX)) as u32,
        Err(_) => default,
    }
}

fn print_board(game: &Game) {
    let lives = game.lives();
    println!(
        "Lives: {}/{}  Score: {}  Mines left: {}",
        lives.count(),
        lives.max_lives(),
        game.score().value(),
        game.mines_remaining()
    );

    // Print column numbers
    println!("   {}", (0..game.cols()).map(|x| format!("{:>2}", x)).join(""));

    for (y, row) in game.player_view().iter().enumerate() {
        let tiles = row
            .iter()
            .map(|tile| match tile {
                TileView::Hidden => " □",
                TileView::Flagged => " ⚑",
                TileView::Mine => " *",
                TileView::Revealed { life: true, .. } => " ♥",
                TileView::Revealed {
                    neighbor_mines: 0, ..
                } => "  ",
                TileView::Revealed { neighbor_mines, .. } => DIGITS[*neighbor_mines as usize],
            })
            .join("");
        println!("{:>2} {}", y, tiles);
    }
}

const DIGITS: [&str; 9] = [" 0", " 1", " 2", " 3", " 4", " 5", " 6", " 7", " 8"];

fn parse_command(game: &Game, input: &str) -> Option<(Position, Action)> {
    let mut parts = input.split_whitespace();

    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let action = parts.next().and_then(|s| s.chars().next()).unwrap_or('r');

    let pos = Position::new(x, y);

    if game.cell(pos).is_none() {
        println!("Position out of bounds");
        return None;
    }

    match action {
        'r' => Some((pos, Action::Reveal)),
        'f' => Some((pos, Action::Flag)),
        _ => {
            println!("Invalid action. Use 'r' to reveal or 'f' to flag");
            None
        }
    }
}
