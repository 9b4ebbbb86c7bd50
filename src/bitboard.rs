use crate::square::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A set of squares packed into a `u64`, bit `row * 8 + col` for each square.
///
/// Iterating a `BitBoard` yields its squares in row-major order, which is the order the rules
/// scan the board in.
///
/// ```
/// use draughts::{BitBoard, Square};
///
/// let bb = BitBoard::from_square(Square::make_square(2, 1))
///     | BitBoard::from_square(Square::make_square(0, 7));
///
/// let squares: Vec<Square> = bb.collect();
/// assert_eq!(squares, vec![Square::make_square(0, 7), Square::make_square(2, 1)]);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
pub struct BitBoard(pub u64);

/// An empty bitboard.
pub const EMPTY: BitBoard = BitBoard(0);

/// Every playable square: those where `row + col` is odd.
///
/// ```
/// use draughts::DARK_SQUARES;
///
/// assert_eq!(DARK_SQUARES.popcnt(), 32);
/// ```
pub const DARK_SQUARES: BitBoard = BitBoard(0x55AA_55AA_55AA_55AA);

impl BitAnd for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitand(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 & other.0)
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 | other.0)
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn bitxor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 ^ other.0)
    }
}

impl BitAndAssign for BitBoard {
    #[inline]
    fn bitand_assign(&mut self, other: BitBoard) {
        self.0 &= other.0;
    }
}

impl BitOrAssign for BitBoard {
    #[inline]
    fn bitor_assign(&mut self, other: BitBoard) {
        self.0 |= other.0;
    }
}

impl BitXorAssign for BitBoard {
    #[inline]
    fn bitxor_assign(&mut self, other: BitBoard) {
        self.0 ^= other.0;
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s: String = "".to_owned();
        for x in 0..64 {
            if self.0 & (1u64 << x) == (1u64 << x) {
                s.push_str("X ");
            } else {
                s.push_str(". ");
            }
            if x % 8 == 7 {
                s.push_str("\n");
            }
        }
        write!(f, "{}", s)
    }
}

impl BitBoard {
    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_index())
    }

    /// Convert a `BitBoard` to a `Square`.  This grabs the least-significant `Square`
    #[inline]
    pub fn to_square(&self) -> Square {
        Square::from_index(self.0.trailing_zeros() as usize)
    }

    /// Count the number of `Squares` set in this `BitBoard`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Is this square part of the set?
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        *self & BitBoard::from_square(sq) != EMPTY
    }
}

/// For the `BitBoard`, iterate over every `Square` set.
impl Iterator for BitBoard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let result = self.to_square();
            *self ^= BitBoard::from_square(result);
            Some(result)
        }
    }
}

#[test]
fn dark_squares_mask_matches_squares() {
    use crate::square::ALL_SQUARES;

    for sq in ALL_SQUARES.iter() {
        assert_eq!(DARK_SQUARES.contains(*sq), sq.is_dark());
    }
}
