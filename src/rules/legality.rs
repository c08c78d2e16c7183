//! Board-level move legality

use crate::board::{Board, Pos};

/// A move is legal on a board when it targets an empty cell
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

/// All empty cells in row-major order
pub fn legal_moves(board: &Board) -> Vec<Pos> {
    board.empty_cells().iter_ones().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, TOTAL_CELLS};

    #[test]
    fn test_empty_board_all_moves_legal() {
        let board = Board::new();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), TOTAL_CELLS);
        assert_eq!(moves[0], Pos::new(0, 0));
        assert_eq!(moves[TOTAL_CELLS - 1], Pos::new(5, 5));
    }

    #[test]
    fn test_occupied_cell_not_legal() {
        let board = Board::new().with_stone(Pos::new(2, 2), Player::X);
        assert!(!is_valid_move(&board, Pos::new(2, 2)));
        assert!(is_valid_move(&board, Pos::new(2, 3)));
        assert!(!legal_moves(&board).contains(&Pos::new(2, 2)));
    }
}
