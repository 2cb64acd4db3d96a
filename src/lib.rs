//! Rules engine for English draughts (checkers)
//!
//! The engine owns the board state and everything needed to drive one match:
//! - Legal-move computation under the mandatory-capture rule
//! - Multi-jump capture chains, resolved to every maximal continuation
//! - Promotion to queen on the far row, including mid-chain
//! - Terminal detection: a player with no legal move loses
//!
//! Rendering and input handling are deliberately out of scope. A driver asks
//! [`Game::legal_moves`] what is playable, lets the player pick one entry,
//! and commits the choice with [`Game::apply_chosen_move`].
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: the 8x8 grid, core types and move application
//! - [`rules`]: move generation, capture-chain resolution, win detection
//! - [`game`]: turn orchestration and match status
//! - [`error`]: the boundary error taxonomy
//!
//! # Quick Start
//!
//! ```
//! use draughts::{Game, GameStatus};
//!
//! let mut game = Game::new();
//!
//! // Player One opens; captures would be mandatory if any existed.
//! let moves = game.legal_moves();
//! assert!(!moves.is_empty());
//!
//! let status = game.apply_chosen_move(&moves[0]).unwrap();
//! assert_eq!(status, GameStatus::InProgress);
//! ```
//!
//! # Rule Set
//!
//! English draughts on the dark squares of an 8x8 board. Pawns step and
//! capture on their forward diagonals only; queens use all four diagonals.
//! If any capturing chain exists for the player to move, only capture moves
//! are legal, and every chain offered is maximal (it cannot be extended by a
//! further jump). When several maximal chains exist the caller picks one;
//! there is no longest-chain mandate.

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Jump, Move, Player, Pos, BOARD_SIZE};
pub use error::GameError;
pub use game::{Game, GameStatus};
