use crate::piece::Piece;
use crate::square::Square;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A piece removed by a jump, and what it was.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Capture {
    pub square: Square,
    pub piece: Piece,
}

/// Represent one step in memory: either a simple move or a single jump.
///
/// A multi-jump turn is a sequence of `Move`s made by the same piece.  The record keeps the
/// moving piece as it was before the step and the identity of anything it captured, which is
/// enough to put the position back exactly with `Board::unmake_move`.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Move {
    source: Square,
    dest: Square,
    piece: Piece,
    captured: Option<Capture>,
    promoted: bool,
}

impl Move {
    /// Create a new move record.
    #[inline]
    pub fn new(
        source: Square,
        dest: Square,
        piece: Piece,
        captured: Option<Capture>,
        promoted: bool,
    ) -> Move {
        Move {
            source,
            dest,
            piece,
            captured,
            promoted,
        }
    }

    /// Get the source square (square the piece was on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece went to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Get the piece that moved, as it was before this step.
    #[inline]
    pub fn get_piece(&self) -> Piece {
        self.piece
    }

    /// Get the captured piece (maybe).
    #[inline]
    pub fn get_captured(&self) -> Option<Capture> {
        self.captured
    }

    /// The squares emptied by this step's capture, in order.  A single step captures at most
    /// one piece.
    #[inline]
    pub fn captured_squares(&self) -> impl Iterator<Item = Square> {
        self.captured.map(|c| c.square).into_iter()
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Did this step crown the piece?
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted
    }
}

impl fmt::Display for Move {
    /// Simple moves print as `a3-b4`, jumps as `c3xe5`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.source, sep, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn display_uses_draughts_separators() {
        let piece = Piece::regular(Color::Red);
        let simple = Move::new(
            Square::make_square(5, 0),
            Square::make_square(4, 1),
            piece,
            None,
            false,
        );
        assert_eq!(simple.to_string(), "a3-b4");

        let jump = Move::new(
            Square::make_square(5, 2),
            Square::make_square(3, 4),
            piece,
            Some(Capture {
                square: Square::make_square(4, 3),
                piece: Piece::regular(Color::Black),
            }),
            false,
        );
        assert_eq!(jump.to_string(), "c3xe5");
        assert_eq!(
            jump.captured_squares().collect::<Vec<_>>(),
            vec![Square::make_square(4, 3)]
        );
    }
}
