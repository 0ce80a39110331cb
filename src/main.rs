use std::io::Write;

use clap::{Parser, Subcommand};
use palfrey::game::{engine::Game, piece::PieceKind, square::Square};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plays a game on the terminal (DEFAULT)
    Play {
        /// Does not print the board after each move
        #[arg(long)]
        no_board: bool,
    },
}

pub fn main() {
    let args = Arguments::parse();
    env_logger::init();

    match args.command.unwrap_or(Command::Play { no_board: false }) {
        Command::Play { no_board } => play(no_board),
    }
}

fn play(no_board: bool) {
    let mut game = Game::new();
    println!("Moves are origin-target square pairs such as e2e4.");
    println!("Other commands: undo, show, quit.");

    loop {
        if !no_board {
            println!("{game}")
        }
        let Some(line) = prompt(&format!("{}> ", game.turn())) else {
            break;
        };

        match line.as_str() {
            "" => (),
            "quit" | "exit" => break,
            "undo" => game.undo(),
            "show" => println!("{game}"),
            request => match parse_move(request) {
                Some((origin, target)) => {
                    if !game.execute_move(origin, target) {
                        println!("Illegal move: {request}");
                    } else if let Some(square) = game.pending_promotion() {
                        resolve_promotion(&mut game, square)
                    }
                }
                None => println!("Unrecognized command: {request}"),
            },
        }
    }
}

fn resolve_promotion(game: &mut Game, square: Square) {
    loop {
        let Some(line) = prompt(&format!("promote the pawn on {square} to (q/r/b/n)> "))
        else {
            return;
        };
        if let Ok(kind) = line.parse::<PieceKind>() {
            if game.resolve_promotion(square, kind) {
                return;
            }
        }
        println!("Pick one of q, r, b or n.");
    }
}

fn parse_move(request: &str) -> Option<(Square, Square)> {
    let origin = request.get(0..2)?;
    let target = request.get(2..)?;
    Some((origin.parse().ok()?, target.parse().ok()?))
}

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    std::io::stdout().flush().ok()?;
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).ok()? == 0 {
        None
    } else {
        Some(line.trim().to_string())
    }
}
