use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a square on the board.
///
/// Row 0 is the top edge of the board, where the black pieces start.  Column 0 is the left
/// edge.  Internally this is the row-major index `row * 8 + col`, so ordering squares is the
/// same as scanning the board row by row.
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// How many rows (and columns) are there?
pub const BOARD_SIZE: i8 = 8;

impl Square {
    /// Create a square from a row and a column.  Coordinates off the board give `None`.
    ///
    /// ```
    /// use draughts::Square;
    ///
    /// assert!(Square::new(0, 7).is_some());
    /// assert_eq!(Square::new(8, 0), None);
    /// assert_eq!(Square::new(3, -1), None);
    /// ```
    #[inline]
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if is_valid_position(row, col) {
            Some(Square::make_square(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Make a square given a row and a column.
    /// Note: It is invalid, but allowed, to pass in a row or column >= 8.  Doing so will crash
    /// stuff.
    #[inline]
    pub const fn make_square(row: u8, col: u8) -> Square {
        Square((row << 3) | col)
    }

    /// Convert a row-major index (0..64) back into a square.
    #[inline]
    pub const fn from_index(index: usize) -> Square {
        Square(index as u8)
    }

    /// Return the row of this square.
    #[inline]
    pub fn row(&self) -> u8 {
        self.0 >> 3
    }

    /// Return the column of this square.
    #[inline]
    pub fn col(&self) -> u8 {
        self.0 & 7
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Pieces may only stand on dark squares, which are the squares where `row + col` is odd.
    #[inline]
    pub fn is_dark(&self) -> bool {
        is_dark_square(self.row() as i8, self.col() as i8)
    }

    /// Walk `distance` steps along the diagonal `(d_row, d_col)`.  If that leaves the board,
    /// return `None`.
    ///
    /// ```
    /// use draughts::Square;
    ///
    /// let sq = Square::make_square(5, 0);
    /// assert_eq!(sq.offset((-1, 1), 1), Some(Square::make_square(4, 1)));
    /// assert_eq!(sq.offset((-1, -1), 1), None);
    /// ```
    #[inline]
    pub fn offset(&self, direction: (i8, i8), distance: i8) -> Option<Square> {
        Square::new(
            self.row() as i8 + direction.0 * distance,
            self.col() as i8 + direction.1 * distance,
        )
    }

    /// The square halfway between two squares two rows apart; this is the piece a jump takes.
    #[inline]
    pub fn midpoint(&self, other: Square) -> Square {
        Square::make_square(
            (self.row() + other.row()) / 2,
            (self.col() + other.col()) / 2,
        )
    }
}

/// Is `(row, col)` on the board?
#[inline]
pub fn is_valid_position(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Is `(row, col)` a playable square?  This does not check bounds.
#[inline]
pub fn is_dark_square(row: i8, col: i8) -> bool {
    (row + col).rem_euclid(2) == 1
}

/// A list of every square on the board, in scan order.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut squares = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        squares[i] = Square(i as u8);
        i += 1;
    }
    squares
};

impl fmt::Display for Square {
    /// Columns are lettered `a` to `h`.  Rows are numbered from the red side, so row 7 is `1`
    /// and row 0 is `8`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'1' + (7 - self.row())) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ch: Vec<char> = s.chars().collect();
        if ch.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        match (ch[0], ch[1]) {
            ('a'..='h', '1'..='8') => Ok(Square::make_square(
                7 - (ch[1] as u8 - b'1'),
                ch[0] as u8 - b'a',
            )),
            _ => Err(Error::InvalidSquare),
        }
    }
}

#[cfg(test)]
pub(crate) fn sq(name: &str) -> Square {
    Square::from_str(name).expect("valid square")
}

#[test]
fn square_names() {
    assert_eq!(Square::make_square(5, 0).to_string(), "a3");
    assert_eq!(Square::make_square(0, 7).to_string(), "h8");
    assert_eq!(Square::from_str("b6"), Ok(Square::make_square(2, 1)));
    assert_eq!(Square::from_str("i1"), Err(Error::InvalidSquare));
    assert_eq!(Square::from_str("a9"), Err(Error::InvalidSquare));
    assert_eq!(Square::from_str("a"), Err(Error::InvalidSquare));
}

#[test]
fn dark_squares() {
    let dark = ALL_SQUARES.iter().filter(|sq| sq.is_dark()).count();
    assert_eq!(dark, 32);
    assert!(Square::make_square(0, 1).is_dark());
    assert!(!Square::make_square(0, 0).is_dark());
}

#[test]
fn midpoint_of_a_jump() {
    let from = Square::make_square(5, 2);
    let to = Square::make_square(3, 4);
    assert_eq!(from.midpoint(to), Square::make_square(4, 3));
}
