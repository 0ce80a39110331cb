//! Board occupancy: which piece sits on which square.

use super::{
    colour::Colour,
    piece::{Piece, PieceKind},
    square::{File, Rank, Square},
};

/// A chess board, mapping occupied squares to the pieces sitting on them.
///
/// Boards are plain values: snapshotting one for history is a `clone`, and
/// restoring it is an assignment.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    // 8x8 array to find which piece sits on which square.
    pieces: [Option<Piece>; 64],
}
impl Default for Board {
    /// A board with no pieces.
    fn default() -> Self {
        Self { pieces: [None; 64] }
    }
}
impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard initial placement of chess.
    pub fn initial() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (i, &kind) in BACK_RANK.iter().enumerate() {
            let file = unsafe { File::from_index_unchecked(i as u8) };
            board.place(Square::new(file, Rank::One), (kind, Colour::White));
            board.place(Square::new(file, Rank::Two), (PieceKind::Pawn, Colour::White));
            board.place(Square::new(file, Rank::Eight), (kind, Colour::Black));
            board.place(Square::new(file, Rank::Seven), (PieceKind::Pawn, Colour::Black));
        }
        board
    }

    /// Returns the piece kind and colour sitting on a given square if any.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.pieces[square as usize]
    }

    /// Checks if a given square is unoccupied.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.pieces[square as usize].is_none()
    }

    /// Puts a piece on the given square, replacing whatever sat there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.pieces[square as usize] = Some(piece)
    }

    /// Removes and returns the piece on the given square if any.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces[square as usize].take()
    }

    /// An iterator over all occupied squares and their pieces.
    pub fn pieces_iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::squares_iter().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Locates the king of the given colour, if one is on the board.
    pub fn king_square(&self, colour: Colour) -> Option<Square> {
        self.pieces_iter()
            .find(|&(_, piece)| piece == (PieceKind::King, colour))
            .map(|(sq, _)| sq)
    }

    /// Checks that every square strictly between `origin` and `target` is
    /// unoccupied, walking the unit step vector towards `target`.
    ///
    /// The two squares must share a rank, file or diagonal; callers only
    /// invoke this after confirming that geometry.
    pub fn path_clear(&self, origin: Square, target: Square) -> bool {
        let (x1, y1) = origin.coords();
        let (x2, y2) = target.coords();
        let dx = (x2 - x1).signum();
        let dy = (y2 - y1).signum();

        let (mut x, mut y) = (x1 + dx, y1 + dy);
        while (x, y) != (x2, y2) {
            match Square::from_coords(x, y) {
                Some(sq) if self.is_empty(sq) => (),
                _ => return false,
            }
            x += dx;
            y += dy;
        }
        true
    }
}
impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = unsafe { Square::from_index_unchecked(rank * 8 + file) };
                write!(
                    f,
                    "{} ",
                    match self.piece_on(sq) {
                        None => ".".to_string(),
                        Some((kind, colour)) =>
                            if colour.is_black() {
                                kind.to_string()
                            } else {
                                kind.to_string().to_uppercase()
                            },
                    }
                )?
            }
            writeln!(f)?
        }
        Ok(())
    }
}
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
