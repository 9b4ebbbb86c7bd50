use crate::color::Color;
use crate::rank::Rank;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A piece on the board.  Pieces are values; promotion replaces the piece rather than changing
/// it.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Piece {
    color: Color,
    rank: Rank,
}

/// Unit vectors for the four diagonals, in generation order: up-left, up-right, down-left,
/// down-right.
pub const ALL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const TOWARD_ROW_ZERO: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const TOWARD_ROW_SEVEN: [(i8, i8); 2] = [(1, -1), (1, 1)];

impl Piece {
    /// Create a piece of some color and rank.
    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Piece {
        Piece { color, rank }
    }

    /// Create an uncrowned piece.
    #[inline]
    pub const fn regular(color: Color) -> Piece {
        Piece::new(color, Rank::Regular)
    }

    /// Create a king.
    #[inline]
    pub const fn king(color: Color) -> Piece {
        Piece::new(color, Rank::King)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Return the crowned version of this piece.
    #[inline]
    pub fn crowned(&self) -> Piece {
        Piece::king(self.color)
    }

    /// The diagonals this piece may move and capture along.
    ///
    /// A king uses all four.  A regular piece only steps toward the opponent's edge.
    ///
    /// ```
    /// use draughts::{Color, Piece};
    ///
    /// assert_eq!(Piece::regular(Color::Red).directions(), &[(-1, -1), (-1, 1)]);
    /// assert_eq!(Piece::regular(Color::Black).directions(), &[(1, -1), (1, 1)]);
    /// assert_eq!(Piece::king(Color::Black).directions().len(), 4);
    /// ```
    #[inline]
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.rank, self.color) {
            (Rank::King, _) => &ALL_DIRECTIONS,
            (Rank::Regular, Color::Red) => &TOWARD_ROW_ZERO,
            (Rank::Regular, Color::Black) => &TOWARD_ROW_SEVEN,
        }
    }

    /// Convert a position-notation character into a piece.
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::regular(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::regular(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }

    /// Convert a piece into its position-notation character.
    pub fn to_char(&self) -> char {
        let c = match self.color {
            Color::Red => 'r',
            Color::Black => 'b',
        };
        if self.is_king() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ALL_COLORS;
    use crate::rank::ALL_RANKS;

    #[test]
    fn notation_characters() {
        for color in ALL_COLORS.iter() {
            for rank in ALL_RANKS.iter() {
                let piece = Piece::new(*color, *rank);
                assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn crowning_keeps_color() {
        let piece = Piece::regular(Color::Black).crowned();
        assert_eq!(piece.color(), Color::Black);
        assert!(piece.is_king());
    }
}
