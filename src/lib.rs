//! # Palfrey
//! A chess rules engine: it validates moves (including check, castling,
//! en passant and promotion), produces the resulting position, and supports
//! full undo.
//!
//! It is usable as a library to embed behind your own interface and as a
//! standalone binary providing a terminal board. It deliberately does not
//! search for moves, evaluate positions or detect game-ending conditions;
//! those are the embedder's concern.

pub mod game;
