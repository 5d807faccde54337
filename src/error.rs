use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// A coordinate outside of the 8x8 grid was supplied.
    #[fail(display = "Invalid square: {}", square)]
    InvalidSquare { square: String },

    /// A file outside of a-h was supplied.
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// A rank outside of 1-8 was supplied.
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// An operation needed a piece on this square, but there was none.
    #[fail(display = "No piece on square {}", square)]
    EmptySquare { square: Square },

    /// The destination is not one of the pseudo-legal moves of the piece on the source square.
    #[fail(display = "Illegal move: {}{}", source, dest)]
    IllegalMove { source: Square, dest: Square },

    /// The string could not be read as a coordinate-pair move such as "e2e4".
    #[fail(display = "Invalid move string: {}", text)]
    InvalidMove { text: String },
}
