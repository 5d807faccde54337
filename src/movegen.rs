//! Pseudo-legal move generation, one function per piece kind.
//!
//! Every generator is a pure function of a board snapshot, the square the piece stands on, and
//! the color it moves for.  None of them look at whether the mover's king is left in check.
//! A destination is only ever produced if it is empty or holds a piece of the other color.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;
use arrayvec::ArrayVec;

/// The most destinations any one piece can have (a queen in the middle of an empty board).
pub const MAX_DESTINATIONS: usize = 27;

/// A list of destination squares for one piece.
pub type MoveList = ArrayVec<Square, MAX_DESTINATIONS>;

/// (file, rank) steps for the rook rays.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// (file, rank) steps for the bishop rays.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// (file, rank) jumps a knight can make.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// (file, rank) steps a king can make.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate the pseudo-legal destinations for a piece of type `piece` standing on `src`.
///
/// This is the single dispatch point over piece kinds.
///
/// ```
/// use chessboard::{pseudo_legal_moves, Board, Color, Piece, Square};
///
/// let board = Board::default();
/// let moves = pseudo_legal_moves(Piece::Knight, &board, Square::G1, Color::White);
/// assert_eq!(moves.as_slice(), &[Square::H3, Square::F3]);
/// ```
pub fn pseudo_legal_moves(piece: Piece, board: &Board, src: Square, color: Color) -> MoveList {
    match piece {
        Piece::Pawn => pawn_moves(board, src, color),
        Piece::Knight => knight_moves(board, src, color),
        Piece::Bishop => bishop_moves(board, src, color),
        Piece::Rook => rook_moves(board, src, color),
        Piece::Queen => queen_moves(board, src, color),
        Piece::King => king_moves(board, src, color),
    }
}

/// Pawn moves: one step forward onto an empty square, two steps from the starting rank if both
/// squares are empty, diagonal captures, and the en-passant capture.
pub fn pawn_moves(board: &Board, src: Square, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    if let Some(single) = src.forward(color) {
        if board.piece_on(single).is_none() {
            moves.push(single);

            if src.get_rank() == color.to_second_rank() {
                if let Some(double) = single.forward(color) {
                    if board.piece_on(double).is_none() {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for &file_delta in [-1, 1].iter() {
        let dest = match src.offset(file_delta, color.pawn_direction()) {
            Some(dest) => dest,
            None => continue,
        };
        match board.piece_on(dest) {
            Some(target) if target.color() != color => moves.push(dest),
            Some(_) => {}
            None => {
                if en_passant_victim(board, src, dest, color).is_some() {
                    moves.push(dest);
                }
            }
        }
    }

    moves
}

/// If a pawn of `color` on `src` moving to `dest` would be an en-passant capture, return the
/// square of the pawn it takes.
///
/// `dest` must be the board's en-passant target, and the square next to `src` on the target's
/// file must hold an enemy pawn.
pub(crate) fn en_passant_victim(
    board: &Board,
    src: Square,
    dest: Square,
    color: Color,
) -> Option<Square> {
    if board.en_passant() != Some(dest) {
        return None;
    }
    let victim = Square::make_square(src.get_rank(), dest.get_file());
    match board.piece_on(victim) {
        Some(p) if p.kind() == Piece::Pawn && p.color() != color => Some(victim),
        _ => None,
    }
}

/// Rook moves: ray-cast along the ranks and files.
pub fn rook_moves(board: &Board, src: Square, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    ray_moves(board, src, color, &ROOK_DIRECTIONS, &mut moves);
    moves
}

/// Bishop moves: ray-cast along the diagonals.
pub fn bishop_moves(board: &Board, src: Square, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    ray_moves(board, src, color, &BISHOP_DIRECTIONS, &mut moves);
    moves
}

/// Queen moves: the rook rays followed by the bishop rays.
pub fn queen_moves(board: &Board, src: Square, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    ray_moves(board, src, color, &ROOK_DIRECTIONS, &mut moves);
    ray_moves(board, src, color, &BISHOP_DIRECTIONS, &mut moves);
    moves
}

/// Knight moves: every jump that lands on the board and not on one of my own pieces.
pub fn knight_moves(board: &Board, src: Square, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    leaper_moves(board, src, color, &KNIGHT_OFFSETS, &mut moves);
    moves
}

/// King moves: one step in any direction.  Whether the king would be attacked there is not
/// considered.
pub fn king_moves(board: &Board, src: Square, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    leaper_moves(board, src, color, &KING_OFFSETS, &mut moves);
    moves
}

// Walk each direction until the edge or a piece.  An enemy piece is included, a friendly one
// is not.
fn ray_moves(
    board: &Board,
    src: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in directions {
        let mut cur = src;
        while let Some(next) = cur.offset(file_delta, rank_delta) {
            match board.piece_on(next) {
                None => moves.push(next),
                Some(blocker) => {
                    if blocker.color() != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            cur = next;
        }
    }
}

fn leaper_moves(
    board: &Board,
    src: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(dest) = src.offset(file_delta, rank_delta) {
            if board.piece_on(dest).map_or(true, |p| p.color() != color) {
                moves.push(dest);
            }
        }
    }
}
