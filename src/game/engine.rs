//! Main API to represent and interact with a running game.
//!
//! [`Game`] owns the authoritative board, turn, history and the
//! awaiting-promotion sub-state. A move request either commits fully
//! (pseudo-legal and the mover's king is safe afterwards) or leaves the
//! state untouched, reporting the outcome as a boolean rather than an
//! error: "nothing happened, ask again".

use super::{
    board::Board,
    colour::Colour,
    history::Snapshot,
    piece::{Piece, PieceKind},
    rules::{self, MoveRecord, MovedSquares},
    square::{File, Square},
};

/// Bounded list of target squares, as returned by highlight queries.
pub type TargetList = heapless::Vec<Square, 64>;

/// A game of chess in progress: board, turn, history and promotion state.
#[derive(Clone)]
pub struct Game {
    board: Board,
    turn: Colour,
    last_move: Option<MoveRecord>,
    moved: MovedSquares,
    history: Vec<Snapshot>,
    selected: Option<Square>,
    pending_promotion: Option<Square>,
}
impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
impl Game {
    /// A fresh game from the standard initial position, white to move.
    pub fn new() -> Self {
        Self::from_setup(Board::initial(), Colour::White)
    }

    /// A game starting from an arbitrary board and side to move, with empty
    /// history.
    ///
    /// The board is taken at face value; a side whose king is missing is
    /// permanently considered in check and will find no legal moves.
    pub fn from_setup(board: Board, turn: Colour) -> Self {
        Self {
            board,
            turn,
            last_move: None,
            moved: MovedSquares::none(),
            history: Vec::new(),
            selected: None,
            pending_promotion: None,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Colour {
        self.turn
    }

    /// The last committed move, if any.
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// The set of squares pieces have departed from.
    pub fn moved_squares(&self) -> MovedSquares {
        self.moved
    }

    /// The square whose pawn is waiting for a promotion choice, if any.
    ///
    /// While this is set, only [`Self::resolve_promotion`] and
    /// [`Self::undo`] can advance the game.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// The currently selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Selects a square for highlighting. Only squares holding a piece of
    /// the side to move can be selected, and never while a promotion is
    /// pending.
    pub fn select(&mut self, square: Square) -> bool {
        if self.pending_promotion.is_none()
            && matches!(self.board.piece_on(square), Some((_, colour)) if colour == self.turn)
        {
            self.selected = Some(square);
            true
        } else {
            false
        }
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None
    }

    /// Checks if the king of the given colour is attacked on the current
    /// board.
    pub fn is_in_check(&self, colour: Colour) -> bool {
        rules::is_king_in_check(colour, &self.board, self.moved, self.last_move)
    }

    /// Checks if moving from `origin` to `target` would commit: the origin
    /// holds a piece of the side to move, the move is pseudo-legal, and the
    /// mover's king is safe afterwards.
    pub fn is_legal(&self, origin: Square, target: Square) -> bool {
        if self.pending_promotion.is_some() {
            return false;
        }
        let Some(piece) = self.board.piece_on(origin) else {
            return false;
        };
        if piece.1 != self.turn {
            return false;
        }
        rules::is_pseudo_legal(piece, origin, target, &self.board, self.moved, self.last_move)
            && !rules::is_king_in_check(
                self.turn,
                &self.hypothetical(piece, origin, target),
                self.moved,
                self.last_move,
            )
    }

    /// Every square the piece on `origin` may legally move to, for move
    /// highlighting.
    pub fn legal_targets(&self, origin: Square) -> TargetList {
        let mut targets = TargetList::new();
        for target in Square::squares_iter() {
            if self.is_legal(origin, target) {
                let _ = targets.push(target);
            }
        }
        targets
    }

    /// Attempts to play a move, returning `true` if it committed.
    ///
    /// On commit the pre-move state is snapshotted for [`Self::undo`], and
    /// the turn flips unless the move put a pawn on its promotion rank, in
    /// which case the game waits for [`Self::resolve_promotion`].
    pub fn execute_move(&mut self, origin: Square, target: Square) -> bool {
        self.execute_move_with(origin, target, |_, _| ())
    }

    /// Same as [`Self::execute_move`], invoking `on_promotion` with the
    /// promotion square and the moving colour when the move leaves a pawn
    /// waiting for its promotion choice.
    pub fn execute_move_with(
        &mut self,
        origin: Square,
        target: Square,
        on_promotion: impl FnOnce(Square, Colour),
    ) -> bool {
        if self.pending_promotion.is_some() {
            return false;
        }
        let Some(piece) = self.board.piece_on(origin) else {
            self.selected = None;
            return false;
        };
        if piece.1 != self.turn {
            self.selected = None;
            return false;
        }

        // Side effects (castling, en passant) are applied to the trial
        // board before the check-safety test so they are part of it.
        let trial = self.hypothetical(piece, origin, target);
        if !rules::is_pseudo_legal(piece, origin, target, &self.board, self.moved, self.last_move)
            || rules::is_king_in_check(self.turn, &trial, self.moved, self.last_move)
        {
            self.selected = None;
            return false;
        }

        self.history.push(Snapshot {
            board: std::mem::replace(&mut self.board, trial),
            turn: self.turn,
            last_move: self.last_move,
            moved: self.moved,
        });
        self.moved.record(origin);
        self.last_move = Some(MoveRecord {
            piece,
            origin,
            target,
        });
        self.selected = None;
        log::debug!("{}: {origin}{target}", self.turn);

        if piece.0 == PieceKind::Pawn && target.rank() == self.turn.promotion_rank() {
            self.pending_promotion = Some(target);
            log::debug!("awaiting promotion choice on {target}");
            on_promotion(target, self.turn);
        } else {
            self.turn.invert();
        }
        true
    }

    /// Resolves a pending promotion by replacing the pawn on `square` with
    /// the chosen kind, then flips the turn.
    ///
    /// Returns `false` without touching the state if no promotion is
    /// pending on that square or the kind is not one a pawn may promote to.
    pub fn resolve_promotion(&mut self, square: Square, kind: PieceKind) -> bool {
        if self.pending_promotion != Some(square) || !kind.is_promotable() {
            return false;
        }
        self.board.place(square, (kind, self.turn));
        self.pending_promotion = None;
        self.turn.invert();
        log::debug!("promoted to {kind} on {square}");
        true
    }

    /// Restores the state from before the last committed move, clearing any
    /// pending promotion and selection. Does nothing on an empty history.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            self.board = snapshot.board;
            self.turn = snapshot.turn;
            self.last_move = snapshot.last_move;
            self.moved = snapshot.moved;
            self.pending_promotion = None;
            self.selected = None;
            log::debug!("took back last move, {} to move", self.turn);
        }
    }

    // The board as it would look after the move: origin vacated, piece on
    // the target, the castling rook relocated and the en-passant victim
    // removed when those apply.
    fn hypothetical(&self, piece: Piece, origin: Square, target: Square) -> Board {
        let mut board = self.board.clone();
        board.remove(origin);
        board.place(target, piece);

        let (x1, y1) = origin.coords();
        let (x2, _) = target.coords();
        let rank = self.turn.home_rank();
        if piece.0 == PieceKind::King && (x2 - x1).abs() == 2 {
            if x2 > x1 {
                board.remove(Square::new(File::H, rank));
                board.place(Square::new(File::F, rank), (PieceKind::Rook, self.turn));
            } else {
                board.remove(Square::new(File::A, rank));
                board.place(Square::new(File::D, rank), (PieceKind::Rook, self.turn));
            }
        }
        if piece.0 == PieceKind::Pawn && (x2 - x1).abs() == 1 && self.board.is_empty(target) {
            if let Some(victim) = Square::from_coords(x2, y1) {
                board.remove(victim);
            }
        }
        board
    }
}
impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.board)?;
        writeln!(f, "side to move: {}", self.turn)?;
        if let Some(square) = self.pending_promotion {
            writeln!(f, "awaiting promotion on {square}")?
        }
        Ok(())
    }
}
impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
