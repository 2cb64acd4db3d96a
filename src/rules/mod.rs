//! Game rules for English draughts
//!
//! This module implements the rule set for draughts including:
//! - Move generation (single steps and single-jump capture candidates)
//! - Capture-chain resolution (mandatory multi-jump captures)
//! - Win detection (the player left without a legal move loses)

pub mod chain;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use chain::{all_chains_for, chains_from, CaptureChain};
pub use movegen::{one_jump_captures_for, simple_moves_for};
pub use win::check_winner;
