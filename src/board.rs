use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::file::ALL_FILES;
use crate::movegen::{self, pseudo_legal_moves, MoveList};
use crate::piece::{Piece, PieceView, PlacedPiece};
use crate::rank::ALL_RANKS;
use crate::square::{IntoSquare, Square, ALL_SQUARES, NUM_SQUARES};
use std::fmt;

/// The pieces of a back rank, from the A-file to the H-file.
pub const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A representation of a chess board.  That's why you're here, right?
///
/// Every one of the 64 squares maps to an optional piece record, and the board remembers the
/// square a pawn skipped over on the last move, if that move was a double step.  There is no
/// notion of whose turn it is, no castling and no check detection; the board only knows how
/// pieces move.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    squares: [Option<PlacedPiece>; NUM_SQUARES],
    en_passant: Option<Square>,
}

/// What happened when a move was made.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct MoveRecord {
    chess_move: ChessMove,
    moved: PieceView,
    captured: Option<PlacedPiece>,
    promoted: bool,
}

impl MoveRecord {
    /// The move that was made.
    #[inline]
    pub fn chess_move(&self) -> ChessMove {
        self.chess_move
    }

    /// The piece that moved, as it was before the move.
    #[inline]
    pub fn moved(&self) -> PieceView {
        self.moved
    }

    /// The piece that was taken, with the square it was taken on.  For an en-passant capture
    /// that square is not the destination.
    #[inline]
    pub fn captured(&self) -> Option<PlacedPiece> {
        self.captured
    }

    /// Did a pawn turn into a queen?
    #[inline]
    pub fn promoted(&self) -> bool {
        self.promoted
    }
}

impl Default for Board {
    /// A board set up in the standard starting position.
    ///
    /// ```
    /// use chessboard::{Board, Square, Piece, Color};
    ///
    /// let board = Board::default();
    /// let king = board.piece_on(Square::E1).expect("white king");
    /// assert_eq!((king.kind(), king.color()), (Piece::King, Color::White));
    /// assert_eq!(board.en_passant(), None);
    /// ```
    fn default() -> Board {
        let mut board = Board::empty();
        for color in ALL_COLORS.iter() {
            for (file, piece) in ALL_FILES.iter().zip(BACK_RANK.iter()) {
                board.place(
                    PieceView::new(*piece, *color),
                    Square::make_square(color.to_my_backrank(), *file),
                );
                board.place(
                    PieceView::new(Piece::Pawn, *color),
                    Square::make_square(color.to_second_rank(), *file),
                );
            }
        }
        board
    }
}

impl Board {
    /// Construct a new `Board` that is completely empty.
    /// Note: This does NOT give you the initial position.  Just a blank slate.
    pub fn empty() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
            en_passant: None,
        }
    }

    /// Set up a board with the pieces listed, and nothing else.
    ///
    /// ```
    /// use chessboard::{Board, Square, Piece, Color};
    ///
    /// let board = Board::setup(&[
    ///     (Square::A1, Piece::King, Color::White),
    ///     (Square::H8, Piece::King, Color::Black),
    /// ]);
    /// assert_eq!(board.pieces(Color::Black).count(), 1);
    /// ```
    pub fn setup<'a>(pieces: impl IntoIterator<Item = &'a (Square, Piece, Color)>) -> Board {
        let mut result = Board::empty();
        for &(square, piece, color) in pieces.into_iter() {
            result.place(PieceView::new(piece, color), square);
        }
        result
    }

    /// Grab the record on a square.  The square reference is checked first.
    ///
    /// ```
    /// use chessboard::{Board, Error, Piece};
    ///
    /// let board = Board::default();
    /// assert_eq!(board.get("d8").unwrap().map(|p| p.kind()), Some(Piece::Queen));
    /// assert_eq!(board.get("d5").unwrap(), None);
    /// assert!(board.get("d9").is_err());
    /// ```
    pub fn get<S: IntoSquare>(&self, square: S) -> Result<Option<PlacedPiece>, Error> {
        let square = square.into_square()?;
        Ok(self.piece_on(square))
    }

    /// What piece is on a particular `Square`?  Is there even one?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<PlacedPiece> {
        self.squares[square.to_index()]
    }

    /// Put a piece on a square, replacing whatever was there.
    ///
    /// This is a raw write, not a move.  Nothing is checked except the square itself.
    pub fn set<S: IntoSquare>(&mut self, piece: PieceView, square: S) -> Result<(), Error> {
        let square = square.into_square()?;
        self.place(piece, square);
        Ok(())
    }

    /// Take the piece off a square and hand it back.
    pub fn remove<S: IntoSquare>(&mut self, square: S) -> Result<PlacedPiece, Error> {
        let square = square.into_square()?;
        self.squares[square.to_index()]
            .take()
            .ok_or(Error::EmptySquare { square })
    }

    /// The square a pawn passed over on the last move, if that move was a pawn double step.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Every piece of one color, in square order (a1, b1, ... h8).
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.squares
            .iter()
            .filter_map(|p| *p)
            .filter(move |p| p.color() == color)
    }

    /// The pseudo-legal destinations of whatever stands on `square`.  An empty square has none.
    ///
    /// ```
    /// use chessboard::{Board, Square};
    ///
    /// let board = Board::default();
    /// let moves = board.legal_moves("e2").expect("valid square");
    /// assert_eq!(moves.as_slice(), &[Square::E3, Square::E4]);
    /// assert!(board.legal_moves("e4").expect("valid square").is_empty());
    /// ```
    pub fn legal_moves<S: IntoSquare>(&self, square: S) -> Result<MoveList, Error> {
        let square = square.into_square()?;
        Ok(match self.piece_on(square) {
            Some(piece) => pseudo_legal_moves(piece.kind(), self, square, piece.color()),
            None => MoveList::new(),
        })
    }

    /// Every pseudo-legal move for one side, piece by piece in square order.
    ///
    /// ```
    /// use chessboard::{Board, Color};
    ///
    /// assert_eq!(Board::default().all_moves(Color::Black).len(), 20);
    /// ```
    pub fn all_moves(&self, color: Color) -> Vec<ChessMove> {
        self.pieces(color)
            .flat_map(|piece| {
                let src = piece.square();
                pseudo_legal_moves(piece.kind(), self, src, color)
                    .into_iter()
                    .map(move |dest| ChessMove::new(src, dest))
            })
            .collect()
    }

    /// Make a chess move on this board.
    ///
    /// The move is checked against the pseudo-legal moves of the piece on the source square.
    /// If it is not one of them, or there is no piece, the board is left exactly as it was.
    /// Otherwise:
    ///
    /// * whatever stood on the destination is captured,
    /// * an en-passant capture also removes the pawn beside the source square,
    /// * a pawn that reaches the far rank becomes a queen,
    /// * the en-passant target is set after a pawn double step and cleared after anything else.
    ///
    /// ```
    /// use chessboard::{Board, ChessMove, Square, Error};
    ///
    /// let mut board = Board::default();
    /// board.make_move(ChessMove::new(Square::E2, Square::E4)).expect("legal");
    /// assert_eq!(board.en_passant(), Some(Square::E3));
    ///
    /// let before = board;
    /// let err = board.make_move(ChessMove::new(Square::E4, Square::E6));
    /// assert_eq!(err, Err(Error::IllegalMove { source: Square::E4, dest: Square::E6 }));
    /// assert_eq!(board, before);
    /// ```
    pub fn make_move(&mut self, m: ChessMove) -> Result<MoveRecord, Error> {
        let source = m.get_source();
        let dest = m.get_dest();

        let moved = self
            .piece_on(source)
            .ok_or(Error::EmptySquare { square: source })?;
        let color = moved.color();

        if !pseudo_legal_moves(moved.kind(), self, source, color).contains(&dest) {
            return Err(Error::IllegalMove { source, dest });
        }

        // Nothing below can fail, so the board is never left half-moved.
        let is_pawn = moved.kind() == Piece::Pawn;
        let en_passant_victim = if is_pawn && self.piece_on(dest).is_none() {
            movegen::en_passant_victim(self, source, dest, color)
        } else {
            None
        };

        let captured = match self.squares[dest.to_index()].take() {
            Some(piece) => Some(piece),
            None => en_passant_victim.and_then(|sq| self.squares[sq.to_index()].take()),
        };
        self.squares[source.to_index()] = None;

        let promoted = is_pawn && dest.get_rank() == color.to_their_backrank();
        let kind = if promoted { Piece::Queen } else { moved.kind() };
        self.place(PieceView::new(kind, color), dest);

        let double_step = is_pawn
            && source.get_rank() == color.to_second_rank()
            && dest.get_rank() == color.to_fourth_rank();
        self.en_passant = if double_step {
            source.forward(color)
        } else {
            None
        };

        Ok(MoveRecord {
            chess_move: m,
            moved: moved.view(),
            captured,
            promoted,
        })
    }

    /// Does this board "make sense"?
    /// Every occupied square must hold a record that names that same square.
    pub fn is_sane(&self) -> bool {
        ALL_SQUARES.iter().all(|sq| match self.piece_on(*sq) {
            Some(piece) => piece.square() == *sq,
            None => true,
        })
    }

    fn place(&mut self, piece: PieceView, square: Square) {
        self.squares[square.to_index()] = Some(PlacedPiece::new(piece, square));
    }
}

impl fmt::Display for Board {
    /// Rank 8 on top, files labeled along the bottom.  White pieces are uppercase.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{} ", rank)?;
            for file in ALL_FILES.iter() {
                match self.piece_on(Square::make_square(*rank, *file)) {
                    Some(piece) => write!(f, " {} ", piece.view())?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in ALL_FILES.iter() {
            write!(f, " {} ", file)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> ChessMove {
        s.parse().expect("valid move string")
    }

    #[test]
    fn starting_position() {
        let board = Board::default();
        assert!(board.is_sane());
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
        for file in ALL_FILES.iter() {
            for rank in ALL_RANKS[2..6].iter() {
                assert_eq!(board.piece_on(Square::make_square(*rank, *file)), None);
            }
        }
        let queen = board.piece_on(Square::D8).expect("black queen");
        assert_eq!(queen.view(), PieceView::new(Piece::Queen, Color::Black));
        assert_eq!(queen.square(), Square::D8);
        let pawn = board.piece_on(Square::H2).expect("white pawn");
        assert_eq!(pawn.view(), PieceView::new(Piece::Pawn, Color::White));
        assert_eq!(board.all_moves(Color::White).len(), 20);
    }

    #[test]
    fn set_overwrites_and_remove_clears() {
        let mut board = Board::empty();
        board
            .set(PieceView::new(Piece::Rook, Color::White), "c3")
            .expect("valid square");
        board
            .set(PieceView::new(Piece::Bishop, Color::Black), Square::C3)
            .expect("valid square");
        let placed = board.get("c3").expect("valid square").expect("occupied");
        assert_eq!(placed.view(), PieceView::new(Piece::Bishop, Color::Black));
        assert_eq!(placed.square(), Square::C3);

        assert_eq!(board.remove(Square::C3), Ok(placed));
        assert_eq!(board.get(Square::C3), Ok(None));
        assert_eq!(
            board.remove(Square::C3),
            Err(Error::EmptySquare { square: Square::C3 })
        );
    }

    #[test]
    fn accessors_reject_bad_squares() {
        let mut board = Board::default();
        let before = board;
        assert!(board.get("z1").is_err());
        assert!(board.get((8u8, 1u8)).is_err());
        assert!(board.legal_moves("a0").is_err());
        assert_eq!(
            board.set(PieceView::new(Piece::Queen, Color::White), "i9"),
            Err(Error::InvalidSquare {
                square: "i9".to_owned()
            })
        );
        assert_eq!(
            board.remove((0u8, 9u8)),
            Err(Error::InvalidSquare {
                square: "(0, 9)".to_owned()
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_from_empty_square() {
        let mut board = Board::default();
        let before = board;
        assert_eq!(
            board.make_move(mv("e4e5")),
            Err(Error::EmptySquare { square: Square::E4 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn cannot_capture_own_piece() {
        let mut board = Board::default();
        let before = board;
        assert!(!board
            .legal_moves(Square::A1)
            .expect("valid square")
            .contains(&Square::A2));
        assert_eq!(
            board.make_move(mv("a1a2")),
            Err(Error::IllegalMove {
                source: Square::A1,
                dest: Square::A2
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn capture_removes_exactly_one_piece() {
        let mut board = Board::setup(&[
            (Square::D1, Piece::Rook, Color::White),
            (Square::D7, Piece::Knight, Color::Black),
            (Square::D8, Piece::Queen, Color::Black),
        ]);
        let record = board.make_move(mv("d1d7")).expect("capture");
        let captured = record.captured().expect("knight taken");
        assert_eq!(captured.view(), PieceView::new(Piece::Knight, Color::Black));
        assert_eq!(captured.square(), Square::D7);
        assert_eq!(board.pieces(Color::Black).count(), 1);
        assert_eq!(board.pieces(Color::White).count(), 1);
        let rook = board.piece_on(Square::D7).expect("rook arrived");
        assert_eq!(rook.view(), PieceView::new(Piece::Rook, Color::White));
        assert_eq!(board.piece_on(Square::D1), None);
        assert!(board.is_sane());
    }

    #[test]
    fn double_step_sets_target_and_anything_else_clears_it() {
        let mut board = Board::default();
        board.make_move(mv("e2e4")).expect("legal");
        assert_eq!(board.en_passant(), Some(Square::E3));
        board.make_move(mv("g8f6")).expect("legal");
        assert_eq!(board.en_passant(), None);
        board.make_move(mv("d7d5")).expect("legal");
        assert_eq!(board.en_passant(), Some(Square::D6));
        board.make_move(mv("d2d3")).expect("legal");
        assert_eq!(board.en_passant(), None);
    }

    #[test]
    fn en_passant_window() {
        let mut board = Board::default();
        for m in ["e2e4", "a7a6", "e4e5", "d7d5"].iter() {
            board.make_move(mv(m)).expect("legal");
        }
        assert!(board.legal_moves("e5").unwrap().contains(&Square::D6));

        // a different move in between closes the window
        let mut other = board;
        other.make_move(mv("b1c3")).expect("legal");
        assert!(!other.legal_moves("e5").unwrap().contains(&Square::D6));
        assert_eq!(
            other.make_move(mv("e5d6")),
            Err(Error::IllegalMove {
                source: Square::E5,
                dest: Square::D6
            })
        );

        let record = board.make_move(mv("e5d6")).expect("en passant");
        let captured = record.captured().expect("pawn taken");
        assert_eq!(captured.square(), Square::D5);
        assert_eq!(captured.view(), PieceView::new(Piece::Pawn, Color::Black));
        assert_eq!(board.piece_on(Square::D5), None);
        assert_eq!(board.piece_on(Square::E5), None);
        assert_eq!(
            board.piece_on(Square::D6).map(|p| p.view()),
            Some(PieceView::new(Piece::Pawn, Color::White))
        );
        assert_eq!(board.en_passant(), None);
        assert_eq!(board.pieces(Color::Black).count(), 15);
        assert!(board.is_sane());
    }

    // e5 against a black pawn that just went d7-d5.
    fn after_black_double_step() -> Board {
        let mut board = Board::setup(&[
            (Square::E5, Piece::Pawn, Color::White),
            (Square::D7, Piece::Pawn, Color::Black),
        ]);
        board.make_move(mv("d7d5")).expect("double step");
        assert_eq!(board.en_passant(), Some(Square::D6));
        board
    }

    fn assert_no_en_passant(mut board: Board) {
        assert_eq!(board.en_passant(), Some(Square::D6));
        assert!(!board.legal_moves("e5").unwrap().contains(&Square::D6));
        let before = board;
        assert_eq!(
            board.make_move(mv("e5d6")),
            Err(Error::IllegalMove {
                source: Square::E5,
                dest: Square::D6
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_target_needs_a_pawn_beside() {
        let mut board = after_black_double_step();
        board.remove(Square::D5).expect("black pawn");
        assert_no_en_passant(board);
    }

    #[test]
    fn en_passant_only_takes_pawns() {
        let mut board = after_black_double_step();
        board.remove(Square::D5).expect("black pawn");
        board
            .set(PieceView::new(Piece::Knight, Color::Black), Square::D5)
            .expect("valid square");
        assert_no_en_passant(board);
    }

    #[test]
    fn en_passant_only_takes_enemy_pawns() {
        let mut board = after_black_double_step();
        board.remove(Square::D5).expect("black pawn");
        board
            .set(PieceView::new(Piece::Pawn, Color::White), Square::D5)
            .expect("valid square");
        assert_no_en_passant(board);
    }

    #[test]
    fn black_en_passant() {
        let mut board = Board::setup(&[
            (Square::C2, Piece::Pawn, Color::White),
            (Square::B4, Piece::Pawn, Color::Black),
        ]);
        board.make_move(mv("c2c4")).expect("legal");
        let record = board.make_move(mv("b4c3")).expect("en passant");
        assert_eq!(record.captured().map(|p| p.square()), Some(Square::C4));
        assert_eq!(board.pieces(Color::White).count(), 0);
        assert_eq!(
            board.piece_on(Square::C3).map(|p| p.view()),
            Some(PieceView::new(Piece::Pawn, Color::Black))
        );
    }

    #[test]
    fn promotion_to_queen() {
        let mut board = Board::setup(&[(Square::E7, Piece::Pawn, Color::White)]);
        let record = board.make_move(mv("e7e8")).expect("legal");
        assert!(record.promoted());
        assert_eq!(record.moved(), PieceView::new(Piece::Pawn, Color::White));
        let queen = board.piece_on(Square::E8).expect("promoted piece");
        assert_eq!(queen.view(), PieceView::new(Piece::Queen, Color::White));
        assert_eq!(queen.square(), Square::E8);
        assert!(board
            .pieces(Color::White)
            .all(|p| p.kind() != Piece::Pawn));

        let mut board = Board::setup(&[
            (Square::B2, Piece::Pawn, Color::Black),
            (Square::A1, Piece::Rook, Color::White),
        ]);
        let record = board.make_move(mv("b2a1")).expect("capture promotion");
        assert!(record.promoted());
        assert_eq!(record.captured().map(|p| p.kind()), Some(Piece::Rook));
        assert_eq!(
            board.piece_on(Square::A1).map(|p| p.view()),
            Some(PieceView::new(Piece::Queen, Color::Black))
        );
    }

    #[test]
    fn moves_keep_the_board_sane() {
        let mut board = Board::default();
        let game = [
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "c2c3", "g8f6", "d2d4", "e5d4",
            "c3d4", "c5b4", "b1c3", "f6e4", "c4f7", "e8f7", "d1b3", "d7d5",
        ];
        let mut pieces = 32;
        for m in game.iter() {
            let record = board.make_move(mv(m)).expect("legal");
            if record.captured().is_some() {
                pieces -= 1;
            }
            assert!(board.is_sane());
            let count = board.pieces(Color::White).count() + board.pieces(Color::Black).count();
            assert_eq!(count, pieces);
        }
    }

    #[test]
    fn render_grid() {
        let board = Board::setup(&[
            (Square::A1, Piece::Rook, Color::White),
            (Square::H8, Piece::King, Color::Black),
        ]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  .  .  .  .  .  .  .  k ");
        assert_eq!(lines[7], "1  R  .  .  .  .  .  .  . ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h ");
    }
}
