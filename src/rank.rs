#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Describe the rank of a piece: either a regular piece or a crowned king
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Rank {
    Regular,
    King,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 2;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [Rank::Regular, Rank::King];

impl Rank {
    /// Convert this `Rank` into a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }
}
