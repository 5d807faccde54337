use crate::color::Color;
use crate::square::Square;
use std::fmt;

/// Represent a chess piece as a very simple enum
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Convert a piece with a color to a string.  White pieces are uppercase, black pieces are
    /// lowercase.
    ///
    /// ```
    /// use chessboard::{Piece, Color};
    ///
    /// assert_eq!(Piece::King.to_string(Color::White), "K");
    /// assert_eq!(Piece::Knight.to_string(Color::Black), "n");
    /// ```
    #[inline]
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        if color == Color::White {
            piece.to_uppercase()
        } else {
            piece
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Piece::Pawn => "p",
                Piece::Knight => "n",
                Piece::Bishop => "b",
                Piece::Rook => "r",
                Piece::Queen => "q",
                Piece::King => "k",
            }
        )
    }
}

/// What a caller sees on a square: the kind of piece and who owns it.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceView {
    kind: Piece,
    color: Color,
}

impl PieceView {
    #[inline]
    pub fn new(kind: Piece, color: Color) -> PieceView {
        PieceView { kind, color }
    }

    #[inline]
    pub fn kind(&self) -> Piece {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl fmt::Display for PieceView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind.to_string(self.color))
    }
}

/// The record the board keeps for an occupied square.
///
/// The `square` is a cache of where the board stored this record.  Only the board hands these
/// out, and it always keeps the cache in step with the square the record lives on.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedPiece {
    kind: Piece,
    color: Color,
    square: Square,
}

impl PlacedPiece {
    #[inline]
    pub(crate) fn new(view: PieceView, square: Square) -> PlacedPiece {
        PlacedPiece {
            kind: view.kind,
            color: view.color,
            square,
        }
    }

    #[inline]
    pub fn kind(&self) -> Piece {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Where this piece stands.
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Drop the position, keeping only what the piece is.
    #[inline]
    pub fn view(&self) -> PieceView {
        PieceView::new(self.kind, self.color)
    }
}

impl From<PlacedPiece> for PieceView {
    fn from(placed: PlacedPiece) -> PieceView {
        placed.view()
    }
}
