//! Per-piece move generation primitives
//!
//! Pawns step and jump on their two forward diagonals; queens on all four.
//! Both operations here look exactly one step (or one jump) ahead: chaining
//! jumps together is the resolver's job, not the generator's.

use std::collections::HashSet;

use crate::board::{Board, Cell, Jump, Move, Pos};

/// Column deltas for the two diagonal routes
const ROUTES: [i32; 2] = [-1, 1];

/// Diagonal deltas available to `cell` for stepping and jumping.
///
/// Pawns are restricted to their forward row direction; queens cover all
/// four diagonals. An empty cell has no deltas.
fn diagonals(cell: Cell) -> Vec<(i32, i32)> {
    let mut deltas = Vec::with_capacity(4);
    match cell {
        Cell::Empty => {}
        Cell::Pawn(player) => {
            for route in ROUTES {
                deltas.push((player.direction(), route));
            }
        }
        Cell::Queen(_) => {
            for direction in [1, -1] {
                for route in ROUTES {
                    deltas.push((direction, route));
                }
            }
        }
    }
    deltas
}

/// Single-step moves for the piece at `from`.
///
/// One `Move::Simple` per in-bounds empty diagonal landing. An empty `from`
/// cell yields no moves.
pub fn simple_moves_for(board: &Board, from: Pos) -> Vec<Move> {
    let cell = board.get(from);
    let mut moves = Vec::new();
    for (dr, dc) in diagonals(cell) {
        if let Some(to) = from.offset(dr, dc) {
            if board.get(to).is_empty() {
                moves.push(Move::Simple { from, to });
            }
        }
    }
    moves
}

/// Single-jump capture candidates for the piece at `from`.
///
/// `excluded` holds the positions already captured earlier in the current
/// chain: those pieces are still physically on the board but can no longer
/// be jumped over or landed on. A candidate is valid iff the landing square
/// is on the board, empty and not excluded, and the jumped square holds an
/// opposing piece that is not excluded.
pub fn one_jump_captures_for(board: &Board, from: Pos, excluded: &HashSet<Pos>) -> Vec<Jump> {
    let cell = board.get(from);
    let Some(player) = cell.owner() else {
        return Vec::new();
    };
    let mut jumps = Vec::new();
    for (dr, dc) in diagonals(cell) {
        let Some(via) = from.offset(dr, dc) else {
            continue;
        };
        let Some(to) = from.offset(dr * 2, dc * 2) else {
            continue;
        };
        if excluded.contains(&via) || excluded.contains(&to) {
            continue;
        }
        if board.get(via).owner() == Some(player.opponent()) && board.get(to).is_empty() {
            jumps.push(Jump { via, to });
        }
    }
    jumps
}
