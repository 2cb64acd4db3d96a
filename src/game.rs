//! Turn orchestration for one match
//!
//! [`Game`] owns the live board, derives the player to move from a turn
//! counter, computes the legal-move set under the mandatory-capture rule,
//! validates and applies the caller's choice, and re-evaluates the match
//! status after every move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::error::GameError;
use crate::rules::{all_chains_for, check_winner, simple_moves_for, CaptureChain};

/// Whether the match is still running or has been decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

/// One match of draughts.
///
/// The board is mutated exclusively through [`Game::apply_chosen_move`].
/// Independent matches own independent `Game` values; nothing is shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: u32,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// A match at the standard starting position, Player One to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// A match resumed from an arbitrary position.
    ///
    /// The status is evaluated immediately, so a position in which the
    /// player to move is already stuck comes back as `Won`.
    pub fn from_position(board: Board, turn: u32) -> Self {
        let status = match check_winner(&board, player_for_turn(turn)) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress,
        };
        Self {
            board,
            turn,
            status,
            history: Vec::new(),
        }
    }

    /// Read-only view of the live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed turns so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves applied so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player to move: One on even turns, Two on odd
    pub fn current_player(&self) -> Player {
        player_for_turn(self.turn)
    }

    /// Every move the current player may legally choose.
    ///
    /// Captures are mandatory: as soon as any chain exists for any of the
    /// player's pieces, the set holds exactly the capture moves and no
    /// simple move is legal. The result is deterministic for a given
    /// position (row-major piece order), and empty once the match is won.
    pub fn legal_moves(&self) -> Vec<Move> {
        if matches!(self.status, GameStatus::Won(_)) {
            return Vec::new();
        }
        let player = self.current_player();
        let chains = all_chains_for(&self.board, player);
        if !chains.is_empty() {
            return chains.into_iter().map(CaptureChain::into_move).collect();
        }
        let mut moves = Vec::new();
        for (pos, _) in self.board.pieces_of(player) {
            moves.extend(simple_moves_for(&self.board, pos));
        }
        moves
    }

    /// Validate and apply one of the caller's [`Game::legal_moves`].
    ///
    /// On success the move is committed, the turn counter advances by one
    /// and the re-evaluated status is returned. `InvalidMove` and
    /// `GameOver` leave the match untouched.
    pub fn apply_chosen_move(&mut self, mv: &Move) -> Result<GameStatus, GameError> {
        if let GameStatus::Won(_) = self.status {
            return Err(GameError::GameOver);
        }
        if !self.legal_moves().contains(mv) {
            return Err(GameError::InvalidMove(mv.clone()));
        }
        self.board.apply_move(mv)?;
        self.history.push(mv.clone());
        self.turn += 1;
        if let Some(winner) = check_winner(&self.board, self.current_player()) {
            self.status = GameStatus::Won(winner);
        }
        Ok(self.status)
    }

    /// Start over from the opening position
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn player_for_turn(turn: u32) -> Player {
    if turn % 2 == 0 {
        Player::One
    } else {
        Player::Two
    }
}
