pub mod config;
pub mod core;

// module re-exports
pub use crate::core::definitions::{
    Cell, Color, GameStatus, MatchInterface, Move, Piece, PieceType, Square,
};
pub use crate::core::engine::{Board, STARTING_LAYOUT};
pub use crate::core::game::{Game, MoveError};
pub use crate::core::opponent::{choose_move, Algorithm, RandomMover};
