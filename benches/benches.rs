#[macro_use]
extern crate bencher;
extern crate draughts;

use bencher::Bencher;
use draughts::{mandatory_capture_origin, valid_moves, Board, Color, MoveGen, Square, ALL_SQUARES};
use std::str::FromStr;

const MIDDLEGAME: &str = "1b1b1b2/b1b3b1/1b3b1b/2b1r3/1r6/4r1r1/1r1r3r/r1r1r3";

// This is a helper function to remove boilerplate code from all the perft_* benchmarks
fn movegen_perft(bench: &mut Bencher, depth: usize, count: usize) {
    let pos = Board::initial();

    bench.iter(|| assert_eq!(MoveGen::movegen_perft_test(&pos, Color::Red, depth), count));
}

fn movegen_perft_1(bench: &mut Bencher) {
    movegen_perft(bench, 1, 7);
}

fn movegen_perft_2(bench: &mut Bencher) {
    movegen_perft(bench, 2, 49);
}

fn board_valid_moves(bench: &mut Bencher) {
    let pos = Board::from_str(MIDDLEGAME).expect("valid position");
    bench.iter(|| {
        let mut total = 0;
        for sq in ALL_SQUARES.iter() {
            total += valid_moves(&pos, *sq, false).len();
        }
        total
    });
}

fn board_mandatory_capture(bench: &mut Bencher) {
    let pos = Board::from_str(MIDDLEGAME).expect("valid position");
    bench.iter(|| mandatory_capture_origin(&pos, Color::Black));
}

fn board_apply_move(bench: &mut Bencher) {
    let pos = Board::initial();
    let from = Square::make_square(5, 2);
    let to = Square::make_square(4, 3);
    bench.iter(|| {
        let after = pos.apply_move(from, to);
        assert!(!after.has_more_captures);
    });
}

fn board_status(bench: &mut Bencher) {
    let pos = Board::from_str(MIDDLEGAME).expect("valid position");
    bench.iter(|| pos.status());
}

benchmark_group!(
    benches,
    movegen_perft_1,
    movegen_perft_2,
    board_valid_moves,
    board_mandatory_capture,
    board_apply_move,
    board_status
);
benchmark_main!(benches);
