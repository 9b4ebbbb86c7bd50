use crate::board::Board;
use crate::error::Error;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a position that has *not* been validated.
///
/// This structure is useful in the following cases:
/// * You are trying to build a position manually in code.
/// * You want to convert between a `Board` and the position notation.
///
/// The notation lists the rows from row 0 (the black side) to row 7, separated by `/`.  Inside
/// a row, `r` and `R` are a red piece and a red king, `b` and `B` are a black piece and a black
/// king, and a digit skips that many empty squares.
///
/// ```
/// use draughts::{BoardBuilder, Board, Square, Color, Piece};
/// use std::convert::TryFrom;
///
/// let mut position = BoardBuilder::new();
/// position.piece(Square::make_square(5, 0), Piece::regular(Color::Red));
/// position.piece(Square::make_square(0, 1), Piece::king(Color::Black));
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::make_square(0, 1)], Some(Piece::king(Color::Black)));
/// assert_eq!(position.to_string(), "1B6/8/8/8/8/r7/8/8");
/// assert!(Board::try_from(&position).is_ok());
///
/// // Light squares cannot hold pieces.
/// position.piece(Square::make_square(0, 0), Piece::regular(Color::Red));
/// assert!(Board::try_from(&position).is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardBuilder {
    pieces: [Option<Piece>; NUM_SQUARES],
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
        }
    }

    /// Set up a position with everything pre-loaded.
    ///
    /// ```
    /// use draughts::{BoardBuilder, Board, Square, Color, Piece};
    /// use std::convert::TryInto;
    ///
    /// # use draughts::Error;
    /// # fn main() -> Result<(), Error> {
    /// let board: Board = BoardBuilder::setup(&[
    ///         (Square::make_square(5, 0), Piece::regular(Color::Red)),
    ///         (Square::make_square(2, 1), Piece::regular(Color::Black)),
    ///     ])
    ///     .try_into()?;
    /// assert_eq!(board.count(Color::Red), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn setup<'a>(pieces: impl IntoIterator<Item = &'a (Square, Piece)>) -> BoardBuilder {
        let mut result = BoardBuilder::new();
        for (square, piece) in pieces.into_iter() {
            result.pieces[square.to_index()] = Some(*piece);
        }
        result
    }

    /// Set a piece on a square, overwriting anything already there.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece<'a>(&'a mut self, square: Square, piece: Piece) -> &'a mut Self {
        self[square] = Some(piece);
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square<'a>(&'a mut self, square: Square) -> &'a mut Self {
        self[square] = None;
        self
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<Piece>;

    fn index<'a>(&'a self, index: Square) -> &'a Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut<'a>(&'a mut self, index: Square) -> &'a mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl fmt::Display for BoardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            let mut count = 0;
            for col in 0..8u8 {
                match self.pieces[Square::make_square(row, col).to_index()] {
                    Some(piece) => {
                        if count != 0 {
                            write!(f, "{}", count)?;
                            count = 0;
                        }
                        write!(f, "{}", piece)?;
                    }
                    None => count += 1,
                }
            }

            if count != 0 {
                write!(f, "{}", count)?;
            }

            if row != 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        Board::initial().into()
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition {
            position: value.to_string(),
        };
        let mut result = BoardBuilder::new();

        let rows: Vec<&str> = value.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(invalid());
        }

        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for x in text.chars() {
                if let Some(skip) = x.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(invalid());
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(x).ok_or_else(invalid)?;
                    if col >= 8 {
                        return Err(invalid());
                    }
                    result.pieces[row * 8 + col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(invalid());
            }
        }

        Ok(result)
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        for sq in ALL_SQUARES.iter() {
            if builder[*sq].is_some() && !sq.is_dark() {
                return Err(Error::PieceOnLightSquare { square: *sq });
            }
        }
        Ok(Board::from_pieces(&builder.pieces))
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&builder)
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut result = BoardBuilder::new();
        for sq in board.combined() {
            result.pieces[sq.to_index()] = board.piece_on(sq);
        }
        result
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

#[cfg(test)]
use crate::color::Color;
#[cfg(test)]
use std::convert::TryInto;

#[test]
fn check_initial_position() {
    let initial = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1";
    let builder: BoardBuilder = Board::initial().into();
    assert_eq!(format!("{}", builder), initial);
    assert_eq!(format!("{}", BoardBuilder::default()), initial);
    assert_eq!(Board::from_str(initial), Ok(Board::initial()));
}

#[test]
fn kings_survive_the_notation() {
    let position = "1B6/8/8/8/8/8/8/6R1";
    let board = Board::from_str(position).unwrap();
    assert_eq!(
        board.piece_on(Square::make_square(7, 6)),
        Some(Piece::king(Color::Red))
    );
    assert_eq!(board.to_string(), position);
}

#[test]
fn malformed_positions() {
    for bad in [
        "",
        "8/8/8/8/8/8/8",
        "8/8/8/8/8/8/8/8/8",
        "9/8/8/8/8/8/8/8",
        "7/8/8/8/8/8/8/8",
        "1x6/8/8/8/8/8/8/8",
        "1b1b1b1b1/8/8/8/8/8/8/8",
    ]
    .iter()
    {
        assert_eq!(
            BoardBuilder::from_str(bad),
            Err(Error::InvalidPosition {
                position: bad.to_string()
            }),
            "{}",
            bad
        );
    }
}

#[test]
fn light_square_pieces_are_rejected() {
    let res: Result<Board, _> = BoardBuilder::new()
        .piece(Square::make_square(3, 3), Piece::regular(Color::Black))
        .try_into();
    assert_eq!(
        res,
        Err(Error::PieceOnLightSquare {
            square: Square::make_square(3, 3)
        })
    );
}
