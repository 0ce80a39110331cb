use super::{
    board::Board,
    colour::Colour,
    rules::{MoveRecord, MovedSquares},
};

/// Full pre-move snapshot pushed for every committed move, restored
/// verbatim by undo.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Colour,
    pub last_move: Option<MoveRecord>,
    pub moved: MovedSquares,
}
