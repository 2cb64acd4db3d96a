//! Terminal-position detection
//!
//! Draughts has no stalemate: the player who cannot move on their turn has
//! lost, whether their pieces are gone or merely boxed in.

use crate::board::{Board, Player};

use super::chain::all_chains_for;
use super::movegen::simple_moves_for;

/// Winner, if the position is terminal for the player now to move.
///
/// Capture chains are checked first: when one exists the mover trivially
/// has a legal move. Otherwise the mover loses iff none of their pieces has
/// a simple move, which includes having no pieces at all.
pub fn check_winner(board: &Board, to_move: Player) -> Option<Player> {
    if !all_chains_for(board, to_move).is_empty() {
        return None;
    }
    let stuck = board
        .pieces_of(to_move)
        .iter()
        .all(|(pos, _)| simple_moves_for(board, *pos).is_empty());
    if stuck {
        Some(to_move.opponent())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_opening_position_is_not_terminal() {
        let board = Board::new();
        assert_eq!(check_winner(&board, Player::One), None);
        assert_eq!(check_winner(&board, Player::Two), None);
    }

    #[test]
    fn test_no_pieces_means_loss() {
        let mut board = Board::empty();
        board.set_cell(Pos::new(3, 2), Cell::Pawn(Player::One));

        assert_eq!(check_winner(&board, Player::Two), Some(Player::One));
    }

    #[test]
    fn test_boxed_in_pawn_loses() {
        // The Two pawn in the corner cannot step ((6,1) is occupied) and
        // cannot jump ((5,2) is occupied), so Two is stuck.
        let mut board = Board::empty();
        board.set_cell(Pos::new(7, 0), Cell::Pawn(Player::Two));
        board.set_cell(Pos::new(6, 1), Cell::Pawn(Player::One));
        board.set_cell(Pos::new(5, 2), Cell::Pawn(Player::One));

        assert_eq!(check_winner(&board, Player::Two), Some(Player::One));
    }

    #[test]
    fn test_available_capture_keeps_the_game_running() {
        // The only pawn has no simple move but does have a jump
        let mut board = Board::empty();
        board.set_cell(Pos::new(7, 0), Cell::Pawn(Player::Two));
        board.set_cell(Pos::new(6, 1), Cell::Pawn(Player::One));

        assert_eq!(check_winner(&board, Player::Two), None);
    }

    #[test]
    fn test_stuck_mover_does_not_decide_for_the_opponent() {
        let mut board = Board::empty();
        board.set_cell(Pos::new(7, 0), Cell::Pawn(Player::Two));
        board.set_cell(Pos::new(6, 1), Cell::Pawn(Player::One));
        board.set_cell(Pos::new(5, 2), Cell::Pawn(Player::One));

        // One, to move, is fine even though Two would be stuck
        assert_eq!(check_winner(&board, Player::One), None);
    }
}
