//! Colours for each player and their pieces.

use super::square::Rank;

/// Number of different colours (2).
pub const NUM_COLOURS: usize = 2;

/// Colour enumeration.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Colour {
    White = 0,
    Black = 1,
}
impl Colour {
    /// Inverts the colour in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse()
    }

    /// Returns the inverse of this colour.
    #[inline]
    pub const fn inverse(&self) -> Self {
        if self.is_black() {
            Colour::White
        } else {
            Colour::Black
        }
    }

    /// Checks if the colour variant is white.
    #[inline]
    pub const fn is_white(&self) -> bool {
        matches!(self, Colour::White)
    }

    /// Checks if the colour variant is black.
    #[inline]
    pub const fn is_black(&self) -> bool {
        matches!(self, Colour::Black)
    }

    /// The rank delta of a pawn push for this colour.
    #[inline]
    pub const fn forward(&self) -> i8 {
        if self.is_black() {
            -1
        } else {
            1
        }
    }

    /// The rank this colour's pawns start on.
    #[inline]
    pub const fn pawn_rank(&self) -> Rank {
        if self.is_black() {
            Rank::Seven
        } else {
            Rank::Two
        }
    }

    /// The rank this colour's pieces start on, also the rank castling takes
    /// place on.
    #[inline]
    pub const fn home_rank(&self) -> Rank {
        if self.is_black() {
            Rank::Eight
        } else {
            Rank::One
        }
    }

    /// The rank on which this colour's pawns promote.
    #[inline]
    pub const fn promotion_rank(&self) -> Rank {
        if self.is_black() {
            Rank::One
        } else {
            Rank::Eight
        }
    }
}
impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.is_black() { "black" } else { "white" })
    }
}
