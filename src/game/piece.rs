//! Piece types encoding.

use super::colour::Colour;
use thiserror::Error;

/// Total number of different piece kinds (6).
pub const NUM_PIECES: usize = 6;

/// Complete set of information for identifying a piece.
pub type Piece = (PieceKind, Colour);

/// Error raised when parsing a piece kind from its letter.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
#[error("Invalid piece letter: {0}")]
pub struct ParsePieceError(pub char);

/// The kind of a piece, one of Pawn, Knight, Bishop, Rook, Queen or King. Usually
/// with supplementary information about the colour of the piece, in the form of
/// the tuple type [`Piece`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}
impl PieceKind {
    /// The four kinds a pawn may promote to.
    pub const PROMOTION_KINDS: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// Checks if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(self, Self::Knight | Self::Bishop | Self::Rook | Self::Queen)
    }

    /// Iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pawn => 'p',
                Self::Knight => 'n',
                Self::Bishop => 'b',
                Self::Rook => 'r',
                Self::Queen => 'q',
                Self::King => 'k',
            }
        )
    }
}
impl std::str::FromStr for PieceKind {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c = s.chars().next().filter(|_| s.chars().count() == 1);
        Ok(match c.map(|c| c.to_ascii_lowercase()) {
            Some('p') => Self::Pawn,
            Some('n') => Self::Knight,
            Some('b') => Self::Bishop,
            Some('r') => Self::Rook,
            Some('q') => Self::Queen,
            Some('k') => Self::King,
            _ => return Err(ParsePieceError(c.unwrap_or('\0'))),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn promotion_kinds() {
        for kind in PieceKind::PROMOTION_KINDS {
            assert!(kind.is_promotable());
        }
        assert!(!PieceKind::Pawn.is_promotable());
        assert!(!PieceKind::King.is_promotable());
    }

    #[test]
    fn parse_letters() {
        assert_eq!("q".parse::<PieceKind>(), Ok(PieceKind::Queen));
        assert_eq!("N".parse::<PieceKind>(), Ok(PieceKind::Knight));
        assert!("x".parse::<PieceKind>().is_err());
        assert!("qq".parse::<PieceKind>().is_err());
    }
}
