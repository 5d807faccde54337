use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Describe a rank (row) on a chess board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// Enumerate all ranks
pub const ALL_RANKS: [Rank; NUM_RANKS] = [
    Rank::First,
    Rank::Second,
    Rank::Third,
    Rank::Fourth,
    Rank::Fifth,
    Rank::Sixth,
    Rank::Seventh,
    Rank::Eighth,
];

impl Rank {
    /// Convert a `usize` into a `Rank` (the inverse of to_index).  Anything past the eighth rank
    /// is `None`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Rank> {
        ALL_RANKS.get(i).copied()
    }

    /// Convert a rank number as written on the board (1 through 8) into a `Rank`.
    #[inline]
    pub fn from_number(n: u8) -> Option<Rank> {
        Rank::from_index((n as usize).checked_sub(1)?)
    }

    /// Go one rank down, if there is one.
    #[inline]
    pub fn down(&self) -> Option<Rank> {
        Rank::from_index(self.to_index().checked_sub(1)?)
    }

    /// Go one rank up, if there is one.
    #[inline]
    pub fn up(&self) -> Option<Rank> {
        Rank::from_index(self.to_index() + 1)
    }

    /// Convert this `Rank` into a `usize` between 0 and 7 (inclusive).
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The rank number as written on the board, 1 through 8.
    #[inline]
    pub fn to_number(&self) -> u8 {
        *self as u8 + 1
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ '1'..='8'), None) => Ok(ALL_RANKS[(c as u8 - b'1') as usize]),
            _ => Err(Error::InvalidRank),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_number())
    }
}
