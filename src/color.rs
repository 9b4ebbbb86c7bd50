use std::fmt;
use std::ops::Not;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a color.
///
/// `Red` moves first and advances toward row 0.  `Black` starts on rows 0-2 and advances toward
/// row 7.
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::Red, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Which way does a regular piece of this color step along the rows?
    ///
    /// ```
    /// use draughts::Color;
    ///
    /// assert_eq!(Color::Red.forward(), -1);
    /// assert_eq!(Color::Black.forward(), 1);
    /// ```
    #[inline]
    pub fn forward(&self) -> i8 {
        match *self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// The row this color starts from.
    #[inline]
    pub fn to_my_backrow(&self) -> u8 {
        match *self {
            Color::Red => 7,
            Color::Black => 0,
        }
    }

    /// The row where a regular piece of this color is crowned.
    #[inline]
    pub fn to_their_backrow(&self) -> u8 {
        (!*self).to_my_backrow()
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::Red {
            Color::Black
        } else {
            Color::Red
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[test]
fn opponents_back_row_is_the_crowning_row() {
    assert_eq!(Color::Red.to_their_backrow(), 0);
    assert_eq!(Color::Black.to_their_backrow(), 7);
    assert_eq!(!Color::Red, Color::Black);
    assert_eq!(!!Color::Black, Color::Black);
}
