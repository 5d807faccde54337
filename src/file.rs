use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Describe a file (column) on a chess board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// Enumerate all files
pub const ALL_FILES: [File; NUM_FILES] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

impl File {
    /// Convert a `usize` into a `File` (the inverse of to_index).  Anything past the H-file is
    /// `None`.
    #[inline]
    pub fn from_index(i: usize) -> Option<File> {
        ALL_FILES.get(i).copied()
    }

    /// Go one file to the left, if there is one.
    #[inline]
    pub fn left(&self) -> Option<File> {
        File::from_index(self.to_index().checked_sub(1)?)
    }

    /// Go one file to the right, if there is one.
    #[inline]
    pub fn right(&self) -> Option<File> {
        File::from_index(self.to_index() + 1)
    }

    /// Convert this `File` into a `usize` from 0 to 7 inclusive.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The letter used for this file in square labels.
    #[inline]
    pub fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ 'a'..='h'), None) => Ok(ALL_FILES[(c as u8 - b'a') as usize]),
            _ => Err(Error::InvalidFile),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
