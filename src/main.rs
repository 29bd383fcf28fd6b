use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{bail, Context};
use log::{info, warn};

use random_chess::{config::GameConfig, Game, GameStatus, RandomMover, Square};

enum Command {
    Move(Square, Square),
    Hint(Square),
    Quit,
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let first = words.next().unwrap_or_default();
    if first == "quit" || first == "q" {
        return Ok(Command::Quit);
    }
    let hint = first == "hint";
    let numbers = if hint { words.collect::<Vec<_>>() } else { line.split_whitespace().collect() };
    let numbers: Vec<i8> = numbers
        .into_iter()
        .map(|word| word.parse().with_context(|| format!("{word:?} is not a coordinate")))
        .collect::<Result<_, _>>()?;
    match (hint, numbers.as_slice()) {
        (true, &[row, col]) => Ok(Command::Hint(Square::new(row, col))),
        (false, &[from_row, from_col, to_row, to_col]) => Ok(Command::Move(
            Square::new(from_row, from_col),
            Square::new(to_row, to_col),
        )),
        _ => bail!("expected `row col row col`, `hint row col` or `quit`"),
    }
}

fn print_position(game: &Game) {
    println!();
    for (row, line) in game.board().to_string().lines().enumerate() {
        println!("{row} {line}");
    }
    println!("  01234567");
    println!("turn: {}  move: {}", game.side_to_move(), game.move_number());
}

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = GameConfig::from_env();
    let mut rng = config.rng();
    let player_side = config.resolve_side(&mut rng);
    let mut opponent = RandomMover::new(rng);
    let mut game = Game::new(player_side);
    info!("New game, human plays {player_side}");
    println!("You play {player_side}.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !game.is_finished() {
        print_position(&game);
        if !game.is_player_turn() {
            thread::sleep(config.opponent_delay());
            let played = game.play_opponent(&mut opponent)?;
            println!("opponent: {played}");
            continue;
        }
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Hint(square)) => {
                let hints: Vec<String> = game.hints(square).iter().map(Square::to_string).collect();
                println!("moves: {}", hints.join(" "));
            }
            Ok(Command::Move(from, to)) => {
                if let Err(err) = game.play_move(from, to) {
                    println!("{err}");
                }
            }
            Err(err) => {
                warn!("Bad input {line:?}: {err}");
                println!("{err}");
            }
        }
    }

    print_position(&game);
    match game.status() {
        GameStatus::Won(winner) => println!("{winner} wins!"),
        GameStatus::NoLegalMoves(side) => println!("{side} has no legal moves, game over."),
        GameStatus::InProgress => println!("Game abandoned."),
    }
    info!("Game finished: {:?}", game.status());
    Ok(())
}
