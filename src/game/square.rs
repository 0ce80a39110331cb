//! Enumerations of chessboard accessing constants, such as files, ranks and squares.

use thiserror::Error;

/// Errors raised when parsing a square from coordinate text such as "e4".
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[error("Expected two characters, got {0}")]
    BadLength(usize),
    #[error("Invalid file letter: {0}")]
    InvalidFile(char),
    #[error("Invalid rank digit: {0}")]
    InvalidRank(char),
}

/// Files of a chessboard (A-H).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}
impl File {
    /// A file from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// A file from a given index.
    /// # Safety
    /// If the index is more than 7, results in undefined behavior.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }
}
impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + *self as u8) as char)
    }
}

/// Ranks of a chessboard (1-8).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}
impl Rank {
    /// A rank from a given index.
    ///
    /// Fails if the index is more than 7.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// A rank from a given index.
    /// # Safety
    /// If the index is more than 7, results in undefined behavior.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", 1 + *self as u8)
    }
}

/// General square indexing for an 8x8 board, file-major within each rank.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Square {
    A1,
    B1,
    C1,
    D1,
    E1,
    F1,
    G1,
    H1,
    A2,
    B2,
    C2,
    D2,
    E2,
    F2,
    G2,
    H2,
    A3,
    B3,
    C3,
    D3,
    E3,
    F3,
    G3,
    H3,
    A4,
    B4,
    C4,
    D4,
    E4,
    F4,
    G4,
    H4,
    A5,
    B5,
    C5,
    D5,
    E5,
    F5,
    G5,
    H5,
    A6,
    B6,
    C6,
    D6,
    E6,
    F6,
    G6,
    H6,
    A7,
    B7,
    C7,
    D7,
    E7,
    F7,
    G7,
    H7,
    A8,
    B8,
    C8,
    D8,
    E8,
    F8,
    G8,
    H8,
}
impl Square {
    /// Instantiates a new square based on file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { std::mem::transmute((rank as u8) << 3 | (file as u8)) }
    }

    /// Instantiates a new square from its index.
    ///
    /// Returns `None` if the index is more than 63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(unsafe { Self::from_index_unchecked(index) })
        } else {
            None
        }
    }

    /// Instantiates a new square from its index.
    /// # Safety
    /// If the index is more than 63, causes undefined behavior.
    #[inline]
    pub const unsafe fn from_index_unchecked(index: u8) -> Self {
        std::mem::transmute(index)
    }

    /// Returns the rank of the square.
    #[inline]
    pub const fn rank(self) -> Rank {
        unsafe { std::mem::transmute((self as u8) >> 3) }
    }
    /// Returns the file of the square.
    #[inline]
    pub const fn file(self) -> File {
        unsafe { std::mem::transmute((self as u8) & 7) }
    }

    /// Returns the (x, y) coordinates of this square, both in `[0, 7]`,
    /// with x counting files from a and y counting ranks from 1.
    #[inline]
    pub const fn coords(self) -> (i8, i8) {
        (self.file() as i8, self.rank() as i8)
    }

    /// The square sitting at the given (x, y) coordinates.
    ///
    /// Returns `None` if either coordinate falls outside `[0, 7]`.
    #[inline]
    pub const fn from_coords(x: i8, y: i8) -> Option<Self> {
        if x >= 0 && x < 8 && y >= 0 && y < 8 {
            Some(Self::new(
                unsafe { File::from_index_unchecked(x as u8) },
                unsafe { Rank::from_index_unchecked(y as u8) },
            ))
        } else {
            None
        }
    }

    /// An iterator over all squares, ordered from A1 to H8.
    pub fn squares_iter() -> impl Iterator<Item = Self> {
        (0..64).map(|i| unsafe { Square::from_index_unchecked(i) })
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(ParseSquareError::BadLength(s.chars().count())),
        };
        let file = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => unsafe { File::from_index_unchecked(c as u8 - b'a') },
            c => return Err(ParseSquareError::InvalidFile(c)),
        };
        let rank = match rank {
            c @ '1'..='8' => unsafe { Rank::from_index_unchecked(c as u8 - b'1') },
            c => return Err(ParseSquareError::InvalidRank(c)),
        };
        Ok(Self::new(file, rank))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coords_roundtrip() {
        for sq in Square::squares_iter() {
            let (x, y) = sq.coords();
            assert_eq!(Square::from_coords(x, y), Some(sq));
        }
        assert_eq!(Square::from_coords(-1, 0), None);
        assert_eq!(Square::from_coords(3, 8), None);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert_eq!("H8".parse::<Square>(), Ok(Square::H8));
        assert_eq!(Square::C7.to_string(), "c7");
        assert!("e9".parse::<Square>().is_err());
        assert!("i1".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn npo_for_enums() {
        use std::mem::size_of;
        assert_eq!(size_of::<File>(), size_of::<Option<File>>());
        assert_eq!(size_of::<Rank>(), size_of::<Option<Rank>>());
        assert_eq!(size_of::<Square>(), size_of::<Option<Square>>());
    }
}
