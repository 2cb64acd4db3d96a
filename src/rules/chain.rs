//! Capture-chain resolution
//!
//! Expands single-jump captures into complete multi-jump chains with a
//! depth-first search. Each branch of the search owns a cloned board on
//! which the moving piece has been relocated; captured pieces stay on that
//! board until the chain commits and are tracked in a captured-position set
//! instead, so the same piece can be jumped at most once per chain and no
//! chain lands on a square a captured piece still occupies.
//!
//! The resolver emits every *maximal* chain (one that no further jump can
//! extend) and leaves the choice between them to the caller.

use std::collections::HashSet;

use crate::board::{Board, Cell, Jump, Move, Player, Pos};

use super::movegen::one_jump_captures_for;

/// A capture chain built up by the search.
///
/// Converted into a [`Move::Capture`] once complete; partial chains never
/// leave this module.
#[derive(Debug, Clone)]
pub struct CaptureChain {
    from: Pos,
    jumps: Vec<Jump>,
    captured: HashSet<Pos>,
}

impl CaptureChain {
    fn new(from: Pos) -> Self {
        Self {
            from,
            jumps: Vec::new(),
            captured: HashSet::new(),
        }
    }

    /// Number of pieces this chain captures
    #[inline]
    pub fn len(&self) -> usize {
        self.jumps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty()
    }

    /// Square the chain starts from
    #[inline]
    pub fn from(&self) -> Pos {
        self.from
    }

    /// Square the chain finally lands on
    #[inline]
    pub fn destination(&self) -> Pos {
        self.jumps.last().map(|jump| jump.to).unwrap_or(self.from)
    }

    /// Positions captured so far
    #[inline]
    pub fn captured(&self) -> &HashSet<Pos> {
        &self.captured
    }

    /// The completed chain as a playable move
    pub fn into_move(self) -> Move {
        Move::Capture {
            from: self.from,
            jumps: self.jumps,
        }
    }
}

/// All maximal capture chains for the piece at `from`.
///
/// A chain is maximal when no further jump is available from its final
/// landing square given the pieces it has already captured. A piece with no
/// jump at all produces no chains: a zero-jump chain is not a capture.
pub fn chains_from(board: &Board, from: Pos) -> Vec<CaptureChain> {
    let mut chains = Vec::new();
    extend_chain(board.clone(), from, CaptureChain::new(from), &mut chains);
    chains
}

/// All maximal capture chains for every piece `player` has on the board
pub fn all_chains_for(board: &Board, player: Player) -> Vec<CaptureChain> {
    let mut chains = Vec::new();
    for (pos, _) in board.pieces_of(player) {
        chains.extend(chains_from(board, pos));
    }
    chains
}

/// DFS step: branch on every jump available at `pos`, emitting `chain` once
/// nothing extends it.
fn extend_chain(board: Board, pos: Pos, chain: CaptureChain, out: &mut Vec<CaptureChain>) {
    let candidates = one_jump_captures_for(&board, pos, &chain.captured);
    if candidates.is_empty() {
        if !chain.is_empty() {
            out.push(chain);
        }
        return;
    }
    for jump in candidates {
        // Relocation promotes a pawn landing on its promotion row, so the
        // rest of this branch searches with queen mobility. The jumped
        // piece stays on the simulated board; the captured set is what
        // rules it out from here on. Removal happens at commit.
        let mut next_board = board.clone();
        let piece = next_board.get(pos);
        next_board.set_cell(pos, Cell::Empty);
        next_board.set_cell(jump.to, piece.promoted_on(jump.to));

        let mut next_chain = chain.clone();
        next_chain.jumps.push(jump);
        next_chain.captured.insert(jump.via);
        extend_chain(next_board, jump.to, next_chain, out);
    }
}
