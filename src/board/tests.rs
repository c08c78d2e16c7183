use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 2 * 6 + 3);

    let pos2 = Pos::from_index(15);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 3);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 6));
    assert_eq!(Pos::try_new(6, 2), None);
    assert_eq!(Pos::try_new(5, 2), Some(Pos::new(5, 2)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 6);
    assert_eq!(TOTAL_CELLS, 36);
    assert_eq!(WIN_LENGTH, 4);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 5) < Pos::new(1, 0));
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 5).to_index(), 5);
    assert_eq!(Pos::new(5, 0).to_index(), 30);
    assert_eq!(Pos::new(5, 5).to_index(), 35);
}

#[test]
fn test_with_stone_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_stone(Pos::new(1, 1), Player::X);

    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(1, 1)), Cell::Taken(Player::X));
    assert_eq!(next.stone_count(), 1);
}

#[test]
fn test_place_and_remove_restores_board() {
    let original = Board::new().with_stone(Pos::new(0, 0), Player::O);
    let mut scratch = original;
    scratch.place_stone(Pos::new(3, 3), Player::X);
    assert_ne!(scratch, original);
    scratch.remove_stone(Pos::new(3, 3));
    assert_eq!(scratch, original);
}

#[test]
fn test_empty_cells_bitboard() {
    let board = Board::new()
        .with_stone(Pos::new(0, 0), Player::X)
        .with_stone(Pos::new(5, 5), Player::O);
    let empty: Vec<Pos> = board.empty_cells().iter_ones().collect();

    assert_eq!(empty.len(), 34);
    assert_eq!(empty[0], Pos::new(0, 1));
    assert!(!empty.contains(&Pos::new(5, 5)));
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        assert!(!board.is_full());
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        board.place_stone(pos, player);
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_from_rows_and_display() {
    let board = Board::from_rows(&[
        "X . . . . .",
        ". O . . . .",
        ". . . . . .",
        ". . . . . .",
        ". . . . . .",
        ". . . . . X",
    ])
    .unwrap();

    assert_eq!(board.get(Pos::new(0, 0)), Cell::Taken(Player::X));
    assert_eq!(board.get(Pos::new(1, 1)), Cell::Taken(Player::O));
    assert_eq!(board.get(Pos::new(5, 5)), Cell::Taken(Player::X));
    assert_eq!(board.stone_count(), 3);

    let text = board.to_string();
    assert!(text.contains("0  X . . . . ."));
    assert!(Board::from_rows(&["X", "", "", "", "", ""]).is_none());
}
