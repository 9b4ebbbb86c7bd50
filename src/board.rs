use crate::bitboard::{BitBoard, EMPTY};
use crate::board_builder::BoardBuilder;
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::draughts_move::{Capture, Move};
use crate::error::Error;
use crate::movegen::{any_move_available, capture_moves};
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use log::{trace, warn};
use std::convert::TryInto;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A representation of a draughts board.  That's why you're here, right?
///
/// A `Board` is a small `Copy` value.  Nothing here changes a board in place: making a move
/// hands back a new `Board`, so earlier positions stay valid for history and undo.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    pieces: [Option<Piece>; NUM_SQUARES],
    color_combined: [BitBoard; NUM_COLORS],
}

/// What is the status of this game?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    RedWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    /// The status where `color` has won.
    #[inline]
    pub fn win_for(color: Color) -> GameStatus {
        match color {
            Color::Red => GameStatus::RedWins,
            Color::Black => GameStatus::BlackWins,
        }
    }

    /// Once a game is over, no further moves are accepted.
    #[inline]
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    /// Who won, if anyone?
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameStatus::RedWins => Some(Color::Red),
            GameStatus::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::RedWins => write!(f, "red wins"),
            GameStatus::BlackWins => write!(f, "black wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// The result of applying one step to a board.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    /// The position after the step.
    pub board: Board,
    /// The square emptied by a jump, if the step was a jump.
    pub captured: Option<Square>,
    /// Can the piece that just moved jump again from where it landed?
    pub has_more_captures: bool,
}

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    pub fn new() -> Board {
        Board {
            pieces: [None; NUM_SQUARES],
            color_combined: [EMPTY; NUM_COLORS],
        }
    }

    /// The standard starting position: twelve black pieces on the dark squares of rows 0-2 and
    /// twelve red pieces on the dark squares of rows 5-7.
    ///
    /// ```
    /// use draughts::{Board, Color};
    ///
    /// let board = Board::initial();
    /// assert_eq!(board.count(Color::Red), 12);
    /// assert_eq!(board.count(Color::Black), 12);
    /// ```
    pub fn initial() -> Board {
        let mut result = Board::new();
        for sq in ALL_SQUARES.iter().filter(|sq| sq.is_dark()) {
            match sq.row() {
                0..=2 => result.put(*sq, Piece::regular(Color::Black)),
                5..=7 => result.put(*sq, Piece::regular(Color::Red)),
                _ => {}
            }
        }
        result
    }

    /// Build a board from pieces that are already known to stand on dark squares.  Used by
    /// `BoardBuilder` after it has validated the position.
    pub(crate) fn from_pieces(pieces: &[Option<Piece>; NUM_SQUARES]) -> Board {
        let mut result = Board::new();
        for sq in ALL_SQUARES.iter() {
            if let Some(piece) = pieces[sq.to_index()] {
                result.put(*sq, piece);
            }
        }
        result
    }

    /// Grab the "combined" `BitBoard`.  This is a `BitBoard` with every piece.
    #[inline]
    pub fn combined(&self) -> BitBoard {
        self.color_combined[0] | self.color_combined[1]
    }

    /// Grab the "color combined" `BitBoard`.  This is a `BitBoard` with every piece of a
    /// particular color.  Iterating it visits the pieces in row-major order.
    #[inline]
    pub fn color_combined(&self, color: Color) -> BitBoard {
        self.color_combined[color.to_index()]
    }

    /// What piece is on a particular `Square`?  Is there even one?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.pieces[square.to_index()]
    }

    /// What color piece is on a particular square?
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_on(square).map(|p| p.color())
    }

    /// How many pieces does `color` have left?
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.color_combined(color).popcnt()
    }

    /// Does this board "make sense"?
    /// Every piece must stand on a dark square, and the bitboards must agree with the grid.
    pub fn is_sane(&self) -> bool {
        if self.color_combined[0] & self.color_combined[1] != EMPTY {
            return false;
        }
        for sq in ALL_SQUARES.iter() {
            let on_grid = self.color_on(*sq);
            for color in ALL_COLORS.iter() {
                if self.color_combined(*color).contains(*sq) != (on_grid == Some(*color)) {
                    return false;
                }
            }
            if on_grid.is_some() && !sq.is_dark() {
                return false;
            }
        }
        true
    }

    /// Place a piece, replacing anything already there.
    fn put(&mut self, square: Square, piece: Piece) {
        self.remove(square);
        self.pieces[square.to_index()] = Some(piece);
        self.color_combined[piece.color().to_index()] |= BitBoard::from_square(square);
    }

    /// Clear a square, returning whatever stood on it.
    fn remove(&mut self, square: Square) -> Option<Piece> {
        let old = self.pieces[square.to_index()].take();
        if let Some(piece) = old {
            self.color_combined[piece.color().to_index()] ^= BitBoard::from_square(square);
        }
        old
    }

    /// Apply one step (a simple move or a single jump) and return the new position.
    ///
    /// * If the step covers two rows it is a jump, and the square between `from` and `to` is
    ///   cleared.
    /// * A regular piece landing on the far row is crowned, whether or not it jumped.
    /// * `has_more_captures` reports whether the piece can jump again from `to`.
    ///
    /// The step is not checked for legality.  If `from` is empty, the board comes back
    /// unchanged with nothing captured.
    ///
    /// ```
    /// use draughts::{Board, Square};
    ///
    /// let board = Board::initial();
    /// let outcome = board.apply_move(Square::make_square(5, 0), Square::make_square(4, 1));
    ///
    /// assert_eq!(outcome.board.piece_on(Square::make_square(5, 0)), None);
    /// assert_eq!(outcome.captured, None);
    /// assert!(!outcome.has_more_captures);
    /// // the original position is untouched
    /// assert!(board.piece_on(Square::make_square(5, 0)).is_some());
    /// ```
    pub fn apply_move(&self, from: Square, to: Square) -> MoveOutcome {
        match self.make_move(from, to) {
            Some((outcome, _)) => outcome,
            None => {
                warn!("no piece on {} to move to {}", from, to);
                MoveOutcome {
                    board: *self,
                    captured: None,
                    has_more_captures: false,
                }
            }
        }
    }

    /// Like `apply_move`, but also returns the full `Move` record needed to undo the step.
    /// Returns `None` if `from` is empty.
    pub fn make_move(&self, from: Square, to: Square) -> Option<(MoveOutcome, Move)> {
        let piece = self.piece_on(from)?;
        let mut result = *self;

        result.remove(from);
        result.put(to, piece);

        let mut captured = None;
        let mut capture = None;
        if (to.row() as i8 - from.row() as i8).abs() == 2 {
            let jumped = from.midpoint(to);
            captured = Some(jumped);
            capture = result.remove(jumped).map(|victim| Capture {
                square: jumped,
                piece: victim,
            });
        }

        let promoted = !piece.is_king() && to.row() == piece.color().to_their_backrow();
        if promoted {
            result.put(to, piece.crowned());
        }

        let has_more_captures = !capture_moves(&result, to).is_empty();
        let m = Move::new(from, to, piece, capture, promoted);
        trace!("{} {} (more captures: {})", piece.color(), m, has_more_captures);

        Some((
            MoveOutcome {
                board: result,
                captured,
                has_more_captures,
            },
            m,
        ))
    }

    /// Reverse a step made by `make_move`, putting back the moving piece as it was and
    /// restoring any captured piece with its original rank.
    ///
    /// ```
    /// use draughts::Board;
    /// use std::str::FromStr;
    ///
    /// let board = Board::from_str("8/8/8/8/3B4/2r5/8/8").expect("valid position");
    /// let (outcome, m) = board
    ///     .make_move("c3".parse().unwrap(), "e5".parse().unwrap())
    ///     .expect("piece on c3");
    ///
    /// assert_eq!(outcome.board.unmake_move(&m), board);
    /// ```
    pub fn unmake_move(&self, m: &Move) -> Board {
        let mut result = *self;
        result.remove(m.get_dest());
        result.put(m.get_source(), m.get_piece());
        if let Some(capture) = m.get_captured() {
            result.put(capture.square, capture.piece);
        }
        result
    }

    /// Decide whether the game is over.
    ///
    /// A side with no pieces left has lost, regardless of anything else.  Otherwise a side
    /// that cannot move has lost, and if neither side can move the game is drawn.
    ///
    /// ```
    /// use draughts::{Board, GameStatus};
    ///
    /// assert_eq!(Board::initial().status(), GameStatus::InProgress);
    /// ```
    pub fn status(&self) -> GameStatus {
        if self.count(Color::Red) == 0 {
            return GameStatus::BlackWins;
        }
        if self.count(Color::Black) == 0 {
            return GameStatus::RedWins;
        }

        match (
            any_move_available(self, Color::Red),
            any_move_available(self, Color::Black),
        ) {
            (false, false) => GameStatus::Draw,
            (false, true) => GameStatus::BlackWins,
            (true, false) => GameStatus::RedWins,
            (true, true) => GameStatus::InProgress,
        }
    }
}

impl Default for Board {
    /// The starting position.
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BoardBuilder::from_str(value)?.try_into()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let builder: BoardBuilder = self.into();
        write!(f, "{}", builder)
    }
}

#[cfg(test)]
use crate::square::sq;

#[test]
fn initial_position_is_sane() {
    let board = Board::initial();
    assert!(board.is_sane());
    for sq in board.combined() {
        assert!(sq.is_dark());
        assert!(sq.row() <= 2 || sq.row() >= 5);
    }
    for sq in board.color_combined(Color::Black) {
        assert!(sq.row() <= 2);
    }
}

#[test]
fn jump_removes_only_the_midpoint() {
    let board = Board::from_str("8/8/8/8/3b4/2r5/8/b7").unwrap();
    let outcome = board.apply_move(sq("c3"), sq("e5"));

    assert_eq!(outcome.captured, Some(sq("d4")));
    assert_eq!(outcome.board.piece_on(sq("d4")), None);
    assert_eq!(
        outcome.board.piece_on(sq("e5")),
        Some(Piece::regular(Color::Red))
    );
    assert_eq!(outcome.board.count(Color::Black), board.count(Color::Black) - 1);
    assert_eq!(outcome.board.count(Color::Red), board.count(Color::Red));
    assert!(outcome.board.piece_on(sq("a1")).is_some());
}

#[test]
fn empty_source_is_a_no_op() {
    let board = Board::initial();
    let outcome = board.apply_move(sq("a5"), sq("b4"));
    assert_eq!(outcome.board, board);
    assert_eq!(outcome.captured, None);
    assert!(!outcome.has_more_captures);
    assert!(board.make_move(sq("a5"), sq("b4")).is_none());
}

#[test]
fn promotion_on_simple_move() {
    let board = Board::from_str("8/r7/8/8/8/8/8/8").unwrap();
    let (outcome, m) = board.make_move(sq("a7"), sq("b8")).unwrap();
    assert_eq!(outcome.board.piece_on(sq("b8")), Some(Piece::king(Color::Red)));
    assert!(m.is_promotion());
    assert_eq!(outcome.board.unmake_move(&m), board);
}

#[test]
fn promotion_then_more_captures_from_the_crowning_square() {
    // Black crowns on e1 and the new king can immediately take f2 backwards.
    let board = Board::from_str("8/8/8/8/8/2b5/3r1r2/8").unwrap();
    let outcome = board.apply_move(sq("c3"), sq("e1"));

    assert_eq!(outcome.board.piece_on(sq("e1")), Some(Piece::king(Color::Black)));
    assert!(outcome.has_more_captures);
}

#[test]
fn regular_piece_does_not_chain_backwards() {
    // f4 is behind the black piece once it lands on e3.
    let board = Board::from_str("8/8/8/2b5/3r1r2/8/8/8").unwrap();
    let outcome = board.apply_move(sq("c5"), sq("e3"));
    assert_eq!(outcome.board.piece_on(sq("e3")), Some(Piece::regular(Color::Black)));
    assert!(!outcome.has_more_captures);
}

#[test]
fn unmake_restores_a_captured_king() {
    let board = Board::from_str("8/8/8/8/3B4/2r5/8/8").unwrap();
    let (outcome, m) = board.make_move(sq("c3"), sq("e5")).unwrap();
    assert_eq!(
        m.get_captured().map(|c| c.piece),
        Some(Piece::king(Color::Black))
    );
    let back = outcome.board.unmake_move(&m);
    assert_eq!(back.piece_on(sq("d4")), Some(Piece::king(Color::Black)));
    assert_eq!(back, board);
}

#[test]
fn status_counts_pieces_first() {
    // Red has a single piece that is blocked in, black has nothing: red still wins.
    let board = Board::from_str("1r6/8/8/8/8/8/8/8").unwrap();
    assert_eq!(board.status(), GameStatus::RedWins);

    let board = Board::from_str("8/8/8/8/8/8/8/6b1").unwrap();
    assert_eq!(board.status(), GameStatus::BlackWins);
}

#[test]
fn status_blocked_sides() {
    // Red on a8 (row 0) cannot move forward, black on h1 (row 7) cannot move forward.
    let board = Board::from_str("1r6/8/8/8/8/8/8/6b1").unwrap();
    assert_eq!(board.status(), GameStatus::Draw);

    // Black is stuck on the bottom row, red can still move.
    let board = Board::from_str("8/8/8/8/8/r7/8/6b1").unwrap();
    assert_eq!(board.status(), GameStatus::RedWins);
}
