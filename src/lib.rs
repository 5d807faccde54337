//! A chessboard state container with a per-piece pseudo-legal move generator.
//!
//! The board is passed explicitly to every operation; there is no global position.
//!
//! ```
//! use chessboard::{apply_move, get_piece, legal_moves, new_board, Color, Piece, Square};
//!
//! let mut board = new_board();
//! assert_eq!(legal_moves(&board, "g1").unwrap().as_slice(), &[Square::H3, Square::F3]);
//!
//! apply_move(&mut board, "g1", "f3").unwrap();
//! let knight = get_piece(&board, "f3").unwrap().expect("knight on f3");
//! assert_eq!((knight.kind(), knight.color()), (Piece::Knight, Color::White));
//! assert!(get_piece(&board, "j3").is_err());
//! ```

mod board;
pub use crate::board::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod error;
pub use crate::error::*;

mod file;
pub use crate::file::*;

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod rank;
pub use crate::rank::*;

mod square;
pub use crate::square::*;

/// A board in the standard starting position.
pub fn new_board() -> Board {
    Board::default()
}

/// Look at what stands on a square.
pub fn get_piece<S: IntoSquare>(board: &Board, square: S) -> Result<Option<PieceView>, Error> {
    Ok(board.get(square)?.map(|piece| piece.view()))
}

/// The pseudo-legal destinations of the piece on `square`.  Empty if there is no piece or it
/// cannot move.
pub fn legal_moves<S: IntoSquare>(board: &Board, square: S) -> Result<MoveList, Error> {
    board.legal_moves(square)
}

/// Move the piece on `from` to `to`.  On error the board is untouched.
pub fn apply_move<F: IntoSquare, T: IntoSquare>(
    board: &mut Board,
    from: F,
    to: T,
) -> Result<(), Error> {
    let m = ChessMove::new(from.into_square()?, to.into_square()?);
    board.make_move(m).map(|_| ())
}

/// The board as a text grid: rank 8 on top, files a-h along the bottom.
pub fn render(board: &Board) -> String {
    board.to_string()
}
