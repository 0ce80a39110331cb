//! Move legality and attack detection.
//!
//! Everything here is a pure query over a [`Board`] plus two bits of move
//! context: the set of squares pieces have departed from (castling
//! eligibility) and the last committed move (en passant eligibility).
//! Legality at this level is pseudo-legality; leaving one's own king in
//! check is ruled out by the game state machine, not here.

use super::{
    board::Board,
    colour::Colour,
    piece::{Piece, PieceKind},
    square::{File, Square},
};

/// The last committed move. Only consulted to detect the en passant window:
/// an enemy pawn that advanced two ranks on the immediately preceding ply.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub origin: Square,
    pub target: Square,
}

/// The set of squares from which some piece has, at any point, departed.
///
/// This gates castling: king and rook home squares must never appear here.
/// It tracks origin squares rather than piece identity, which is harmless
/// since a home square that lost its original occupant either stays empty
/// or holds a piece that may not castle anyway.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MovedSquares(u64);
impl MovedSquares {
    /// The empty set: nothing has moved yet.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Checks if a piece ever departed from the given square.
    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square as u8) != 0
    }

    /// Records a departure from the given square.
    #[inline]
    pub fn record(&mut self, square: Square) {
        self.0 |= 1 << square as u8
    }
}

/// Checks if moving `piece` from `origin` to `target` follows that piece's
/// movement rules on the given board, including pawn double steps, captures
/// and en passant, and king castling.
///
/// This does not test whether the move leaves the mover's king in check.
pub fn is_pseudo_legal(
    piece: Piece,
    origin: Square,
    target: Square,
    board: &Board,
    moved: MovedSquares,
    last_move: Option<MoveRecord>,
) -> bool {
    pseudo_legal(piece, origin, target, board, moved, last_move, false)
}

// `ignore_castling` is set when this is called back from attack detection,
// breaking the mutual recursion between castling-through-check tests and
// attack tests.
fn pseudo_legal(
    piece: Piece,
    origin: Square,
    target: Square,
    board: &Board,
    moved: MovedSquares,
    last_move: Option<MoveRecord>,
    ignore_castling: bool,
) -> bool {
    let (kind, colour) = piece;
    let (x1, y1) = origin.coords();
    let (x2, y2) = target.coords();
    let (dx, dy) = (x2 - x1, y2 - y1);
    let target_piece = board.piece_on(target);

    if matches!(target_piece, Some((_, c)) if c == colour) {
        return false;
    }

    match kind {
        PieceKind::Pawn => {
            let forward = colour.forward();
            // Single step into an empty square.
            if dx == 0 && dy == forward && target_piece.is_none() {
                return true;
            }
            // Double step from the pawn rank, both squares empty.
            if dx == 0 && dy == 2 * forward && origin.rank() == colour.pawn_rank() {
                return target_piece.is_none()
                    && matches!(Square::from_coords(x1, y1 + forward), Some(step) if board.is_empty(step));
            }
            // Diagonal capture.
            if dx.abs() == 1 && dy == forward && target_piece.is_some() {
                return true;
            }
            // En passant: diagonal step into an empty square, right after an
            // enemy pawn double-stepped onto the adjacent file.
            if dx.abs() == 1 && dy == forward && target_piece.is_none() {
                if let Some(last) = last_move {
                    let (_, ly1) = last.origin.coords();
                    let (lx2, ly2) = last.target.coords();
                    if last.piece == (PieceKind::Pawn, colour.inverse())
                        && (ly2 - ly1).abs() == 2
                        && ly2 == y1
                        && lx2 == x2
                    {
                        return true;
                    }
                }
            }
            false
        }
        PieceKind::Rook => (dx == 0 || dy == 0) && board.path_clear(origin, target),
        PieceKind::Knight => {
            (dx.abs() == 1 && dy.abs() == 2) || (dx.abs() == 2 && dy.abs() == 1)
        }
        PieceKind::Bishop => dx.abs() == dy.abs() && board.path_clear(origin, target),
        PieceKind::Queen => {
            (dx == 0 || dy == 0 || dx.abs() == dy.abs()) && board.path_clear(origin, target)
        }
        PieceKind::King => {
            if dx.abs() <= 1 && dy.abs() <= 1 {
                return true;
            }
            if !ignore_castling && dx.abs() == 2 && dy == 0 {
                castle_allowed(colour, dx > 0, origin, board, moved, last_move)
            } else {
                false
            }
        }
    }
}

fn castle_allowed(
    colour: Colour,
    kingside: bool,
    origin: Square,
    board: &Board,
    moved: MovedSquares,
    last_move: Option<MoveRecord>,
) -> bool {
    let rank = colour.home_rank();
    let king_home = Square::new(File::E, rank);
    if origin != king_home
        || moved.contains(king_home)
        || is_king_in_check(colour, board, moved, last_move)
    {
        return false;
    }

    let rook_home = Square::new(if kingside { File::H } else { File::A }, rank);
    if board.is_empty(rook_home) || moved.contains(rook_home) {
        return false;
    }

    let between: &[File] = if kingside {
        &[File::F, File::G]
    } else {
        &[File::D, File::C, File::B]
    };
    if between.iter().any(|&file| !board.is_empty(Square::new(file, rank))) {
        return false;
    }

    // The king may not pass through or land on an attacked square.
    let travel: &[File] = if kingside {
        &[File::F, File::G]
    } else {
        &[File::D, File::C]
    };
    !travel.iter().any(|&file| {
        is_square_attacked(Square::new(file, rank), colour.inverse(), board, moved, last_move)
    })
}

/// Checks if any piece of `attacker` colour attacks the given square.
///
/// Pawns attack their two diagonal squares whether or not those squares are
/// occupied; their forward pushes never attack anything.
pub fn is_square_attacked(
    square: Square,
    attacker: Colour,
    board: &Board,
    moved: MovedSquares,
    last_move: Option<MoveRecord>,
) -> bool {
    let (tx, ty) = square.coords();
    board
        .pieces_iter()
        .filter(|&(_, (_, colour))| colour == attacker)
        .any(|(from, piece)| match piece.0 {
            PieceKind::Pawn => {
                let (x, y) = from.coords();
                (tx - x).abs() == 1 && ty - y == attacker.forward()
            }
            _ => pseudo_legal(piece, from, square, board, moved, last_move, true),
        })
}

/// Checks if the king of the given colour is attacked.
///
/// A board with no king of that colour counts as in check, so a kingless
/// position can never be chosen as the outcome of a move.
pub fn is_king_in_check(
    colour: Colour,
    board: &Board,
    moved: MovedSquares,
    last_move: Option<MoveRecord>,
) -> bool {
    match board.king_square(colour) {
        Some(king) => is_square_attacked(king, colour.inverse(), board, moved, last_move),
        None => true,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::colour::Colour::*;
    use crate::game::piece::PieceKind::*;

    fn legal(piece: Piece, origin: Square, target: Square, board: &Board) -> bool {
        is_pseudo_legal(piece, origin, target, board, MovedSquares::none(), None)
    }

    #[test]
    fn blocked_bishop_in_initial_position() {
        let board = Board::initial();
        assert!(!legal((Bishop, White), Square::C1, Square::A3, &board));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::initial();
        assert!(legal((Knight, White), Square::G1, Square::F3, &board));
        assert!(legal((Knight, White), Square::G1, Square::H3, &board));
        // Own pawn on e2.
        assert!(!legal((Knight, White), Square::G1, Square::E2, &board));
        // Not a knight jump.
        assert!(!legal((Knight, White), Square::G1, Square::G3, &board));
    }

    #[test]
    fn pawn_steps() {
        let board = Board::initial();
        assert!(legal((Pawn, White), Square::E2, Square::E3, &board));
        assert!(legal((Pawn, White), Square::E2, Square::E4, &board));
        assert!(legal((Pawn, Black), Square::D7, Square::D5, &board));
        // No diagonal step without a capture.
        assert!(!legal((Pawn, White), Square::E2, Square::D3, &board));
        // No double step from a non-starting rank.
        let mut board = Board::empty();
        board.place(Square::E3, (Pawn, White));
        assert!(!legal((Pawn, White), Square::E3, Square::E5, &board));
    }

    #[test]
    fn pawn_double_step_requires_both_squares_empty() {
        let mut board = Board::initial();
        board.place(Square::E3, (Knight, Black));
        assert!(!legal((Pawn, White), Square::E2, Square::E4, &board));
        let mut board = Board::initial();
        board.place(Square::E4, (Knight, Black));
        assert!(!legal((Pawn, White), Square::E2, Square::E4, &board));
    }

    #[test]
    fn pawn_captures_diagonally() {
        let mut board = Board::initial();
        board.place(Square::D3, (Knight, Black));
        assert!(legal((Pawn, White), Square::E2, Square::D3, &board));
        // Straight ahead is a push, never a capture.
        board.place(Square::E3, (Knight, Black));
        assert!(!legal((Pawn, White), Square::E2, Square::E3, &board));
    }

    #[test]
    fn en_passant_window() {
        let mut board = Board::empty();
        board.place(Square::E5, (Pawn, White));
        board.place(Square::D5, (Pawn, Black));
        let double_step = MoveRecord {
            piece: (Pawn, Black),
            origin: Square::D7,
            target: Square::D5,
        };

        assert!(is_pseudo_legal(
            (Pawn, White),
            Square::E5,
            Square::D6,
            &board,
            MovedSquares::none(),
            Some(double_step),
        ));
        // No last move, no en passant.
        assert!(!legal((Pawn, White), Square::E5, Square::D6, &board));
        // A single step does not open the window.
        let single_step = MoveRecord {
            piece: (Pawn, Black),
            origin: Square::D6,
            target: Square::D5,
        };
        assert!(!is_pseudo_legal(
            (Pawn, White),
            Square::E5,
            Square::D6,
            &board,
            MovedSquares::none(),
            Some(single_step),
        ));
        // Wrong file: the capture must land behind the double-stepped pawn.
        assert!(!is_pseudo_legal(
            (Pawn, White),
            Square::E5,
            Square::F6,
            &board,
            MovedSquares::none(),
            Some(double_step),
        ));
    }

    #[test]
    fn sliders_respect_paths() {
        let board = Board::initial();
        assert!(!legal((Rook, White), Square::A1, Square::A4, &board));
        assert!(!legal((Queen, White), Square::D1, Square::D4, &board));
        let mut board = Board::empty();
        board.place(Square::D1, (Queen, White));
        assert!(legal((Queen, White), Square::D1, Square::H5, &board));
        assert!(legal((Queen, White), Square::D1, Square::D8, &board));
        assert!(!legal((Queen, White), Square::D1, Square::E3, &board));
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(Square::E1, (King, White));
        board.place(Square::A1, (Rook, White));
        board.place(Square::H1, (Rook, White));
        board.place(Square::E8, (King, Black));
        board
    }

    #[test]
    fn castling_both_sides_when_conditions_hold() {
        let board = castling_board();
        assert!(legal((King, White), Square::E1, Square::G1, &board));
        assert!(legal((King, White), Square::E1, Square::C1, &board));
    }

    #[test]
    fn castling_rejected_after_king_or_rook_moved() {
        let board = castling_board();
        let mut moved = MovedSquares::none();
        moved.record(Square::E1);
        assert!(!pseudo_legal_with(&board, moved, Square::G1));
        let mut moved = MovedSquares::none();
        moved.record(Square::H1);
        assert!(!pseudo_legal_with(&board, moved, Square::G1));
        // Queenside is unaffected by the kingside rook having moved.
        assert!(pseudo_legal_with(&board, moved, Square::C1));
    }

    fn pseudo_legal_with(board: &Board, moved: MovedSquares, target: Square) -> bool {
        is_pseudo_legal((King, White), Square::E1, target, board, moved, None)
    }

    #[test]
    fn castling_rejected_when_rook_absent_or_path_blocked() {
        let mut board = castling_board();
        board.remove(Square::H1);
        assert!(!legal((King, White), Square::E1, Square::G1, &board));

        let mut board = castling_board();
        board.place(Square::B1, (Knight, White));
        assert!(!legal((King, White), Square::E1, Square::C1, &board));
        // b1 only matters for emptiness, not attack safety.
        assert!(legal((King, White), Square::E1, Square::G1, &board));
    }

    #[test]
    fn castling_rejected_out_of_or_through_check() {
        // Rook on e8 gives check.
        let mut board = castling_board();
        board.place(Square::E4, (Rook, Black));
        assert!(!legal((King, White), Square::E1, Square::G1, &board));

        // f1 is covered: the king would pass through check.
        let mut board = castling_board();
        board.place(Square::F4, (Rook, Black));
        assert!(!legal((King, White), Square::E1, Square::G1, &board));
        // Queenside travel (d1, c1) is unaffected by the f-file rook.
        assert!(legal((King, White), Square::E1, Square::C1, &board));

        // b1 attacked is fine, only c1 and d1 must be safe queenside.
        let mut board = castling_board();
        board.place(Square::B4, (Rook, Black));
        assert!(legal((King, White), Square::E1, Square::C1, &board));
    }

    #[test]
    fn pawns_attack_diagonals_regardless_of_occupancy() {
        let mut board = Board::empty();
        board.place(Square::E4, (Pawn, White));
        let attacked =
            |sq| is_square_attacked(sq, White, &board, MovedSquares::none(), None);
        assert!(attacked(Square::D5));
        assert!(attacked(Square::F5));
        // Pushes do not attack.
        assert!(!attacked(Square::E5));
        assert!(!attacked(Square::D3));
    }

    #[test]
    fn king_in_check_detection() {
        let mut board = Board::empty();
        board.place(Square::E1, (King, White));
        board.place(Square::E8, (Rook, Black));
        assert!(is_king_in_check(White, &board, MovedSquares::none(), None));
        board.place(Square::E5, (Knight, Black));
        assert!(!is_king_in_check(White, &board, MovedSquares::none(), None));
        // A missing king counts as in check.
        assert!(is_king_in_check(Black, &Board::empty(), MovedSquares::none(), None));
    }
}
