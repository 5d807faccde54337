use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory: a piece goes from `source` to `dest`.
///
/// There is no promotion piece.  A pawn that reaches the far rank always becomes a queen.
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Read a coordinate pair such as "e2e4".
    ///
    /// ```
    /// use chessboard::{ChessMove, Square};
    ///
    /// let mv: ChessMove = "g1f3".parse().expect("valid move");
    /// assert_eq!(mv, ChessMove::new(Square::G1, Square::F3));
    /// assert!("g1f9".parse::<ChessMove>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMove { text: s.to_owned() };
        if s.len() != 4 {
            return Err(invalid());
        }
        let source = s
            .get(0..2)
            .ok_or_else(invalid)?
            .parse::<Square>()
            .map_err(|_| invalid())?;
        let dest = s
            .get(2..4)
            .ok_or_else(invalid)?
            .parse::<Square>()
            .map_err(|_| invalid())?;
        Ok(ChessMove::new(source, dest))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}
