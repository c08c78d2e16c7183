//! Move validation and application

use tracing::debug;

use crate::board::{Player, Pos};
use crate::error::MoveRejection;
use crate::rules::is_valid_move;

use super::state::{GameState, Move};

/// Check whether `mover` may play at `(row, col)`.
///
/// Checks run in order: game still in progress, coordinates on the
/// board, cell empty, and finally that it is `mover`'s turn. This is
/// the same validation `apply_move` performs, exposed with a reason so
/// that a UI or a network boundary re-validating a peer's move does not
/// need its own copy.
pub fn check_move(
    state: &GameState,
    mover: Player,
    row: i32,
    col: i32,
) -> Result<Pos, MoveRejection> {
    if state.is_over() {
        return Err(MoveRejection::GameOver);
    }
    let pos = Pos::try_new(row, col).ok_or(MoveRejection::OutOfBounds { row, col })?;
    if !is_valid_move(state.board(), pos) {
        return Err(MoveRejection::Occupied {
            row: pos.row,
            col: pos.col,
        });
    }
    let expected = state.current_player();
    if mover != expected {
        return Err(MoveRejection::NotYourTurn {
            expected,
            got: mover,
        });
    }
    Ok(pos)
}

impl GameState {
    /// Apply the current player's move at `(row, col)`.
    ///
    /// A rejected move (game over, out of bounds, occupied cell) returns
    /// a state equal to `self`. On success the symbol is written, the
    /// move is appended to the history, the redo stack is cleared and
    /// the status is recomputed.
    #[must_use]
    pub fn apply_move(&self, row: i32, col: i32) -> GameState {
        let mover = self.current_player();
        let pos = match check_move(self, mover, row, col) {
            Ok(pos) => pos,
            Err(reason) => {
                debug!(row, col, %reason, "move rejected");
                return self.clone();
            }
        };

        let mut next = self.clone();
        next.board = self.board.with_stone(pos, mover);
        next.history.record(Move {
            mover,
            pos,
            seq: self.next_seq,
        });
        next.next_seq += 1;
        next.settle();

        debug!(%mover, %pos, status = ?next.status, "move applied");
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::game::GameStatus;

    fn play(moves: &[(i32, i32)]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(Player::X), |s, &(r, c)| s.apply_move(r, c))
    }

    #[test]
    fn test_apply_writes_mover_symbol() {
        let state = GameState::new(Player::X).apply_move(2, 3);
        assert_eq!(state.board().get(Pos::new(2, 3)), Cell::Taken(Player::X));
        assert_eq!(state.move_count(), 1);
        assert_eq!(
            state.last_move(),
            Some(Move {
                mover: Player::X,
                pos: Pos::new(2, 3),
                seq: 0
            })
        );
    }

    #[test]
    fn test_occupied_cell_is_identity() {
        let state = play(&[(0, 0)]);
        assert_eq!(state.apply_move(0, 0), state);
    }

    #[test]
    fn test_out_of_bounds_is_identity() {
        let state = play(&[(0, 0)]);
        assert_eq!(state.apply_move(6, 0), state);
        assert_eq!(state.apply_move(-1, 3), state);
        assert_eq!(state.apply_move(2, 17), state);
    }

    #[test]
    fn test_finished_game_is_identity() {
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)]);
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(
            state.winning_line(),
            Some([Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)])
        );
        assert_eq!(state.apply_move(5, 5), state);
    }

    #[test]
    fn test_cell_count_matches_move_count() {
        let state = play(&[(0, 0), (5, 5), (2, 3), (3, 2), (0, 0), (4, 4)]);
        assert_eq!(state.board().stone_count() as usize, state.move_count());
        assert_eq!(state.move_count(), 5);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let state = play(&[(0, 0), (5, 5), (2, 3)]);
        let seqs: Vec<u32> = state.history().applied().iter().map(|m| m.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn test_check_move_reasons() {
        let state = play(&[(0, 0)]);
        assert_eq!(
            check_move(&state, Player::O, 7, 0),
            Err(MoveRejection::OutOfBounds { row: 7, col: 0 })
        );
        assert_eq!(
            check_move(&state, Player::O, 0, 0),
            Err(MoveRejection::Occupied { row: 0, col: 0 })
        );
        assert_eq!(
            check_move(&state, Player::X, 1, 1),
            Err(MoveRejection::NotYourTurn {
                expected: Player::O,
                got: Player::X
            })
        );
        assert_eq!(check_move(&state, Player::O, 1, 1), Ok(Pos::new(1, 1)));
    }

    #[test]
    fn test_check_move_game_over_first() {
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)]);
        assert_eq!(
            check_move(&state, Player::O, -3, 9),
            Err(MoveRejection::GameOver)
        );
    }

    #[test]
    fn test_full_board_draw() {
        // Pair each X cell of the brick fill with an O cell. Every
        // intermediate board is a subset of the final one, so no four appears.
        let mut state = GameState::new(Player::X);
        let mut xs: Vec<Pos> = Vec::new();
        let mut os: Vec<Pos> = Vec::new();
        for pos in Pos::all() {
            if (pos.col / 2 + pos.row) % 2 == 0 {
                xs.push(pos);
            } else {
                os.push(pos);
            }
        }
        assert_eq!(xs.len(), os.len());
        for (x, o) in xs.iter().zip(os.iter()) {
            state = state.apply_move(x.row as i32, x.col as i32);
            assert_eq!(state.status(), GameStatus::InProgress);
            state = state.apply_move(o.row as i32, o.col as i32);
        }
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.apply_move(0, 0), state);
    }
}
