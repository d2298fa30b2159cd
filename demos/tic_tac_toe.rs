extern crate noughts;

use noughts::game::{DEFAULT_THINKING_BLINKS, Game, THINKING_DELAY_MS, thinking_highlights};
use noughts::random::{RandomGenerator, StandardRandomGenerator};
use noughts::{Board, Coord, MinimaxSearch, Side};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .try_init();

    // Without the flag a random mover stands in for the human, so the demo can run unattended
    let interactive = std::env::args().any(|arg| arg == "--interactive");
    let mut rng = StandardRandomGenerator;
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You are X, the computer is O. Enter moves as `row col`, both 0..2.");
    while game.is_active() {
        match game.turn() {
            Side::Player => {
                let cell = if interactive {
                    print!("> ");
                    io::stdout().flush()?;
                    let Some(line) = lines.next() else {
                        println!();
                        return Ok(());
                    };
                    match parse_cell(&line?) {
                        Some(cell) => cell,
                        None => {
                            println!("Expected two numbers, e.g. `1 1`");
                            continue;
                        }
                    }
                } else {
                    let cells = game.board().empty_cells();
                    match rng.pick(&cells) {
                        Some(cell) => *cell,
                        None => break,
                    }
                };

                if let Err(err) = game.play_player(cell.row, cell.col) {
                    println!("{err}");
                    continue;
                }
                println!("You play {cell}\n{}\n", game.board());
            }
            Side::Ai => {
                if interactive {
                    think(&mut rng);
                }
                print_candidates(game.board());
                match game.play_ai() {
                    Ok(Some(cell)) => println!("Computer plays {cell}\n{}\n", game.board()),
                    Ok(None) => {}
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    if let Some(verdict) = game.outcome().verdict() {
        println!("{verdict}");
    }
    Ok(())
}

fn parse_cell(line: &str) -> Option<Coord> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Coord::new(row, col))
}

fn think(rng: &mut StandardRandomGenerator) {
    for cell in thinking_highlights(rng, DEFAULT_THINKING_BLINKS) {
        print!("\rthinking... {cell}");
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(THINKING_DELAY_MS));
    }
    println!();
}

// Print the score of every reply the computer considers
fn print_candidates(board: &Board) {
    let report = MinimaxSearch::builder(*board)
        .with_side_to_move(Side::Ai)
        .with_tree_recording(true)
        .build()
        .run();
    for (cell, score) in report.candidate_scores() {
        println!("Move: {cell} = {score:+}");
    }
}
