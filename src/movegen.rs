use crate::bitboard::{BitBoard, EMPTY};
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use arrayvec::ArrayVec;
use std::iter::ExactSizeIterator;

/// Destination squares for one piece.  A piece has at most four diagonals, so at most four
/// destinations.
pub type MoveList = ArrayVec<Square, 4>;

/// Where can the piece on `square` jump to?
///
/// For each of the piece's directions, the neighbouring square must hold an opponent piece and
/// the square beyond it must be on the board and empty.
pub fn capture_moves(board: &Board, square: Square) -> MoveList {
    let mut result = MoveList::new();
    let piece = match board.piece_on(square) {
        Some(p) => p,
        None => return result,
    };

    for dir in piece.directions() {
        let over = match square.offset(*dir, 1) {
            Some(sq) => sq,
            None => continue,
        };
        let land = match square.offset(*dir, 2) {
            Some(sq) => sq,
            None => continue,
        };
        if land.is_dark()
            && board.piece_on(land).is_none()
            && board.color_on(over) == Some(!piece.color())
        {
            result.push(land);
        }
    }
    result
}

/// Where can the piece on `square` step to without capturing?
pub fn simple_moves(board: &Board, square: Square) -> MoveList {
    let mut result = MoveList::new();
    let piece = match board.piece_on(square) {
        Some(p) => p,
        None => return result,
    };

    for dir in piece.directions() {
        if let Some(dest) = square.offset(*dir, 1) {
            if dest.is_dark() && board.piece_on(dest).is_none() {
                result.push(dest);
            }
        }
    }
    result
}

/// The destinations for the piece on `square`.
///
/// Captures take priority: if the piece has any jump, or `must_capture` is set, only jumps are
/// returned.  Otherwise the simple moves are returned.  An empty square has no moves.
///
/// ```
/// use draughts::{valid_moves, Board, Square};
///
/// let board = Board::initial();
/// let moves = valid_moves(&board, Square::make_square(5, 2), false);
/// assert_eq!(moves.as_slice(), &[Square::make_square(4, 1), Square::make_square(4, 3)]);
///
/// // Nothing to jump, so a forced capture leaves nothing to do.
/// assert!(valid_moves(&board, Square::make_square(5, 2), true).is_empty());
/// ```
pub fn valid_moves(board: &Board, square: Square, must_capture: bool) -> MoveList {
    let captures = capture_moves(board, square);
    if must_capture || !captures.is_empty() {
        captures
    } else {
        simple_moves(board, square)
    }
}

/// The first piece of `color`, scanning row by row, that has a capture available.
///
/// When more than one piece can capture, scan order decides; no attempt is made to find the
/// "best" capture.
pub fn mandatory_capture_origin(board: &Board, color: Color) -> Option<Square> {
    board
        .color_combined(color)
        .find(|sq| !capture_moves(board, *sq).is_empty())
}

/// Can `color` make any move at all, simple or capture?
pub fn any_move_available(board: &Board, color: Color) -> bool {
    board
        .color_combined(color)
        .any(|sq| !valid_moves(board, sq, false).is_empty())
}

#[derive(Copy, Clone, PartialEq, Debug)]
struct SquareAndBitBoard {
    square: Square,
    bitboard: BitBoard,
}

/// An incremental move generator for a whole side.
///
/// It follows the same selection rule as `Game`: if `mandatory_capture_origin` names a piece,
/// only that piece's jumps are generated.  Otherwise every simple move of every piece is
/// generated, sources in scan order.
///
/// ```
/// use draughts::{Board, Color, MoveGen};
///
/// let board = Board::initial();
/// let iterable = MoveGen::new_legal(&board, Color::Red);
///
/// // make sure .len() works.
/// assert_eq!(iterable.len(), 7); // the .len() function does *not* consume the iterator
///
/// for (source, dest) in iterable {
///     assert_eq!(source.row(), 5);
///     assert_eq!(dest.row(), 4);
/// }
/// ```
pub struct MoveGen {
    moves: ArrayVec<SquareAndBitBoard, 32>,
    index: usize,
}

impl MoveGen {
    /// Create a new `MoveGen` structure, generating the legal steps for `color`.
    pub fn new_legal(board: &Board, color: Color) -> MoveGen {
        let mut result = MoveGen::empty();
        match mandatory_capture_origin(board, color) {
            Some(origin) => result.push(origin, capture_moves(board, origin)),
            None => {
                for sq in board.color_combined(color) {
                    result.push(sq, simple_moves(board, sq));
                }
            }
        }
        result
    }

    /// Create a new `MoveGen` for the continuation of a capture chain: only the jumps of the
    /// piece on `square`.
    pub fn new_capture_chain(board: &Board, square: Square) -> MoveGen {
        let mut result = MoveGen::empty();
        result.push(square, capture_moves(board, square));
        result
    }

    fn empty() -> MoveGen {
        MoveGen {
            moves: ArrayVec::new(),
            index: 0,
        }
    }

    fn push(&mut self, square: Square, dests: MoveList) {
        let bitboard = dests
            .iter()
            .fold(EMPTY, |bb, sq| bb | BitBoard::from_square(*sq));
        if bitboard != EMPTY {
            self.moves.push(SquareAndBitBoard { square, bitboard });
        }
    }

    /// Count the leaf steps `depth` plies deep.
    ///
    /// A jump that leaves the same piece another jump does not pass the turn: the next ply is
    /// that piece continuing its chain.
    ///
    /// ```
    /// use draughts::{Board, Color, MoveGen};
    ///
    /// assert_eq!(MoveGen::movegen_perft_test(&Board::initial(), Color::Red, 2), 49);
    /// ```
    pub fn movegen_perft_test(board: &Board, color: Color, depth: usize) -> usize {
        perft(board, color, None, depth)
    }
}

fn perft(board: &Board, color: Color, chain: Option<Square>, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }
    let iterable = match chain {
        Some(sq) => MoveGen::new_capture_chain(board, sq),
        None => MoveGen::new_legal(board, color),
    };

    if depth == 1 {
        iterable.len()
    } else {
        let mut result = 0;
        for (source, dest) in iterable {
            let outcome = board.apply_move(source, dest);
            result += if outcome.captured.is_some() && outcome.has_more_captures {
                perft(&outcome.board, color, Some(dest), depth - 1)
            } else {
                perft(&outcome.board, !color, None, depth - 1)
            };
        }
        result
    }
}

impl ExactSizeIterator for MoveGen {
    /// Give the exact length of this iterator
    fn len(&self) -> usize {
        self.moves[self.index..]
            .iter()
            .map(|m| m.bitboard.popcnt() as usize)
            .sum()
    }
}

impl Iterator for MoveGen {
    type Item = (Square, Square);

    /// Give a size_hint to some functions that need it
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    /// Find the next step.
    fn next(&mut self) -> Option<(Square, Square)> {
        let entry = self.moves.get_mut(self.index)?;
        let src = entry.square;
        let dest = entry.bitboard.to_square();

        entry.bitboard ^= BitBoard::from_square(dest);
        if entry.bitboard == EMPTY {
            self.index += 1;
        }
        Some((src, dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::square::{sq, ALL_SQUARES};
    use std::str::FromStr;

    fn board(position: &str) -> Board {
        Board::from_str(position).expect("valid position")
    }

    #[test]
    fn empty_square_has_no_moves() {
        let b = Board::initial();
        assert!(valid_moves(&b, sq("d4"), false).is_empty());
        assert!(valid_moves(&b, sq("d4"), true).is_empty());
    }

    #[test]
    fn regular_pieces_only_move_forward() {
        let b = board("8/8/8/2b5/8/2r5/8/8");
        // black on c5 (row 3) and red on c3 (row 5) both head for row 4
        assert_eq!(valid_moves(&b, sq("c5"), false).as_slice(), &[sq("b4"), sq("d4")]);
        assert_eq!(valid_moves(&b, sq("c3"), false).as_slice(), &[sq("b4"), sq("d4")]);
    }

    #[test]
    fn kings_move_in_all_four_directions() {
        let b = board("8/8/8/8/3R4/8/8/8");
        assert_eq!(
            valid_moves(&b, sq("d4"), false).as_slice(),
            &[sq("c5"), sq("e5"), sq("c3"), sq("e3")]
        );
    }

    #[test]
    fn edges_bound_the_moves() {
        let b = board("8/8/8/8/8/r7/8/8");
        assert_eq!(valid_moves(&b, sq("a3"), false).as_slice(), &[sq("b4")]);
    }

    #[test]
    fn capture_suppresses_simple_moves() {
        let b = board("8/8/8/8/3b4/2r5/8/8");
        assert_eq!(valid_moves(&b, sq("c3"), false).as_slice(), &[sq("e5")]);
        assert_eq!(simple_moves(&b, sq("c3")).as_slice(), &[sq("b4")]);
    }

    #[test]
    fn cannot_jump_own_pieces_or_onto_occupied_squares() {
        let own = board("8/8/8/8/3r4/2r5/8/8");
        assert!(capture_moves(&own, sq("c3")).is_empty());

        let blocked = board("8/8/8/4b3/3b4/2r5/8/8");
        assert!(capture_moves(&blocked, sq("c3")).is_empty());
    }

    #[test]
    fn cannot_jump_off_the_board() {
        let b = board("1b6/2r5/8/8/8/8/8/8");
        assert!(capture_moves(&b, sq("c7")).is_empty());
        assert_eq!(valid_moves(&b, sq("c7"), false).as_slice(), &[sq("d8")]);
    }

    #[test]
    fn regular_pieces_do_not_capture_backwards() {
        let b = board("8/8/8/8/8/2r5/3b4/8");
        assert!(capture_moves(&b, sq("c3")).is_empty());

        let king = board("8/8/8/8/8/2R5/3b4/8");
        assert_eq!(capture_moves(&king, sq("c3")).as_slice(), &[sq("e1")]);
    }

    #[test]
    fn destinations_are_always_dark_and_on_the_board() {
        let positions = [
            "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1",
            "1B6/2r5/8/4b3/3R4/2b1b3/8/r7",
            "8/8/1b1b4/2R5/1b1b4/8/8/8",
        ];
        for position in positions.iter() {
            let b = board(position);
            for from in ALL_SQUARES.iter() {
                for must in [false, true].iter() {
                    for dest in valid_moves(&b, *from, *must) {
                        assert!(dest.is_dark());
                        assert!(dest.row() < 8 && dest.col() < 8);
                    }
                }
            }
        }
    }

    #[test]
    fn mandatory_capture_uses_scan_order() {
        // Both c3 and g3 can capture; c3 comes first in the row-major scan.
        let b = board("8/8/8/8/3b1b2/2r3r1/8/8");
        assert_eq!(mandatory_capture_origin(&b, Color::Red), Some(sq("c3")));
        // d4 can take c3 straight back.
        assert_eq!(mandatory_capture_origin(&b, Color::Black), Some(sq("d4")));

        // Now a higher red piece (row 3) can capture as well and is found first.
        let b = board("8/8/1b6/r7/3b1b2/2r3r1/8/8");
        assert_eq!(mandatory_capture_origin(&b, Color::Red), Some(sq("a5")));
    }

    #[test]
    fn no_captures_from_the_start() {
        let b = Board::initial();
        assert_eq!(mandatory_capture_origin(&b, Color::Red), None);
        assert_eq!(mandatory_capture_origin(&b, Color::Black), None);
        assert!(MoveGen::new_legal(&b, Color::Black).all(|(_, dest)| {
            (dest.row() as i32 - 2).abs() == 1
        }));
    }

    #[test]
    fn any_move_available_counts_captures() {
        // Red's only piece is hemmed in except for a jump.
        let b = board("8/8/8/8/1b1b4/2r5/8/8");
        assert!(any_move_available(&b, Color::Red));

        let stuck = board("1r6/8/8/8/8/8/8/6b1");
        assert!(!any_move_available(&stuck, Color::Red));
        assert!(!any_move_available(&stuck, Color::Black));
    }

    #[test]
    fn movegen_respects_the_obligated_piece() {
        let b = board("8/8/8/8/3b1b2/2r3r1/8/8");
        let moves: Vec<_> = MoveGen::new_legal(&b, Color::Red).collect();
        assert_eq!(moves, vec![(sq("c3"), sq("e5"))]);
    }

    #[test]
    fn movegen_len_tracks_iteration() {
        let mut iterable = MoveGen::new_legal(&Board::initial(), Color::Black);
        assert_eq!(iterable.len(), 7);
        iterable.next();
        iterable.next();
        assert_eq!(iterable.len(), 5);
        assert_eq!(iterable.count(), 5);
    }

    #[test]
    fn perft_from_the_start() {
        let b = Board::initial();
        assert_eq!(MoveGen::movegen_perft_test(&b, Color::Red, 1), 7);
        assert_eq!(MoveGen::movegen_perft_test(&b, Color::Red, 2), 49);
    }

    #[test]
    fn perft_follows_capture_chains() {
        // Red on a1 can take b2 and then d4: two plies, one line, and the chain keeps red on
        // move for the second jump.
        let b = board("8/8/8/8/3b4/8/1b6/r7");
        assert_eq!(MoveGen::movegen_perft_test(&b, Color::Red, 1), 1);
        assert_eq!(MoveGen::movegen_perft_test(&b, Color::Red, 2), 1);
        let after = b.apply_move(sq("a1"), sq("c3"));
        assert!(after.has_more_captures);
        assert_eq!(after.board.piece_on(sq("c3")), Some(Piece::regular(Color::Red)));
    }
}
