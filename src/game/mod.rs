//! # Chess API
//! This module contains everything chess related: the board, the movement
//! and check rules, and the game state machine with its undo history.

pub mod board;
pub mod colour;
pub mod engine;
mod history;
pub mod piece;
pub mod rules;
pub mod square;
