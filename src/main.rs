use draughts::{Board, Color, MoveGen};
use log::info;
use std::env;
use std::process;
use std::time::Instant;

const DEFAULT_DEPTH: usize = 6;

fn main() {
    env_logger::init();

    let depth = match env::args().nth(1) {
        None => DEFAULT_DEPTH,
        Some(arg) => match arg.parse::<usize>() {
            Ok(depth) => depth,
            Err(e) => {
                eprintln!("usage: draughts-perft [DEPTH]  ({}: {})", arg, e);
                process::exit(2);
            }
        },
    };

    let board = Board::initial();
    info!("counting from {}", board);

    let start = Instant::now();
    let nodes = MoveGen::movegen_perft_test(&board, Color::Red, depth);
    let elapsed = start.elapsed();

    println!("Perft {}: {}", depth, nodes);
    println!("Performed in {:.3} seconds", elapsed.as_secs_f64());
}
