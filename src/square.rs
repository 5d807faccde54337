use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.
///
/// A `Square` always names one of the 64 cells; there is no way to build one that is off the
/// board.  Use `FromStr`, `from_index` or the `IntoSquare` conversions when the input may be bad.
#[derive(PartialEq, Ord, Eq, PartialOrd, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

const fn all_squares() -> [Square; NUM_SQUARES] {
    let mut result = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        result[i] = Square(i as u8);
        i += 1;
    }
    result
}

/// A list of every square on the chessboard.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = all_squares();

impl Default for Square {
    /// The A1 square.
    fn default() -> Square {
        Square::A1
    }
}

impl Square {
    /// Make a square given a rank and a file
    ///
    /// ```
    /// use chessboard::{Square, Rank, File};
    ///
    /// assert_eq!(Square::make_square(Rank::Fourth, File::D), Square::D4);
    /// ```
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square(((rank.to_index() as u8) << 3) | (file.to_index() as u8))
    }

    /// Convert a table index (0 = a1, 63 = h8) back into a square.
    #[inline]
    pub fn from_index(i: usize) -> Option<Square> {
        ALL_SQUARES.get(i).copied()
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize).unwrap_or(Rank::First)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize).unwrap_or(File::A)
    }

    /// Step `file_delta` files right and `rank_delta` ranks up.  If that walks off the board,
    /// return `None`.
    ///
    /// ```
    /// use chessboard::Square;
    ///
    /// assert_eq!(Square::A1.offset(1, 2), Some(Square::B3));
    /// assert_eq!(Square::A1.offset(-1, 2), None);
    /// ```
    #[inline]
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = (self.0 & 7) as i8 + file_delta;
        let rank = (self.0 >> 3) as i8 + rank_delta;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square(((rank as u8) << 3) | file as u8))
        } else {
            None
        }
    }

    /// If there is a square above me, return that.  Otherwise, None.
    #[inline]
    pub fn up(&self) -> Option<Square> {
        self.offset(0, 1)
    }

    /// If there is a square below me, return that.  Otherwise, None.
    #[inline]
    pub fn down(&self) -> Option<Square> {
        self.offset(0, -1)
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        self.offset(-1, 0)
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        self.offset(1, 0)
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(0, color.pawn_direction())
    }

    /// If there is a square "backward" given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn backward(&self, color: Color) -> Option<Square> {
        self.offset(0, -color.pawn_direction())
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSquare {
            square: s.to_owned(),
        };
        if s.len() != 2 {
            return Err(invalid());
        }
        let file = s
            .get(0..1)
            .ok_or_else(invalid)?
            .parse::<File>()
            .map_err(|_| invalid())?;
        let rank = s
            .get(1..2)
            .ok_or_else(invalid)?
            .parse::<Rank>()
            .map_err(|_| invalid())?;
        Ok(Square::make_square(rank, file))
    }
}

impl TryFrom<u8> for Square {
    type Error = Error;

    /// Read a table index (0 = a1, 63 = h8).  Anything past h8 is `Error::InvalidSquare`.
    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Square::from_index(i as usize).ok_or_else(|| Error::InvalidSquare {
            square: i.to_string(),
        })
    }
}

impl From<Square> for u8 {
    #[inline]
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.get_file(), self.get_rank())
    }
}

/// Anything the board accepts as a square reference.
///
/// Only a `Square` is guaranteed to be on the board; every other form is checked here, and
/// anything outside a-h / 1-8 becomes `Error::InvalidSquare`.
pub trait IntoSquare {
    fn into_square(self) -> Result<Square, Error>;
}

impl IntoSquare for Square {
    #[inline]
    fn into_square(self) -> Result<Square, Error> {
        Ok(self)
    }
}

impl IntoSquare for &Square {
    #[inline]
    fn into_square(self) -> Result<Square, Error> {
        Ok(*self)
    }
}

impl IntoSquare for &str {
    fn into_square(self) -> Result<Square, Error> {
        self.parse()
    }
}

impl IntoSquare for &String {
    fn into_square(self) -> Result<Square, Error> {
        self.parse()
    }
}

impl IntoSquare for (File, Rank) {
    #[inline]
    fn into_square(self) -> Result<Square, Error> {
        Ok(Square::make_square(self.1, self.0))
    }
}

/// A `(file, rank)` pair, with the file counted from 0 (a) and the rank as written, 1 through 8.
impl IntoSquare for (u8, u8) {
    fn into_square(self) -> Result<Square, Error> {
        let (file, rank) = self;
        match (File::from_index(file as usize), Rank::from_number(rank)) {
            (Some(file), Some(rank)) => Ok(Square::make_square(rank, file)),
            _ => Err(Error::InvalidSquare {
                square: format!("({}, {})", file, rank),
            }),
        }
    }
}
