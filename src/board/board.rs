//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board: one bitboard per player.
///
/// `Board` is a small `Copy` value. Player-facing code treats it as
/// immutable and goes through [`Board::with_stone`]; only the search
/// scratch board uses the in-place `place_stone`/`remove_stone` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    x: Bitboard,
    o: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.x.get(pos) {
            Cell::Taken(Player::X)
        } else if self.o.get(pos) {
            Cell::Taken(Player::O)
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Check whether `player` owns the cell at `pos`
    #[inline]
    pub fn is_owned_by(&self, pos: Pos, player: Player) -> bool {
        self.stones(player).get(pos)
    }

    /// Copy of this board with `player`'s symbol written at `pos`
    #[must_use]
    pub fn with_stone(&self, pos: Pos, player: Player) -> Board {
        let mut next = *self;
        next.place_stone(pos, player);
        next
    }

    /// Copy of this board with the cell at `pos` cleared
    #[must_use]
    pub fn without_stone(&self, pos: Pos) -> Board {
        let mut next = *self;
        next.remove_stone(pos);
        next
    }

    /// Place a stone in place (search scratch boards only)
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos), "cell {pos} already taken");
        self.stones_mut(player).set(pos);
    }

    /// Remove a stone in place (search scratch boards only)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &Bitboard {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    #[inline]
    fn stones_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Bitboard of all empty cells
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        self.x.union(self.o).complement()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Build a board from six row strings of `X`, `O` and `.`.
    ///
    /// Returns `None` if the layout is malformed.
    pub fn from_rows(rows: &[&str; BOARD_SIZE]) -> Option<Board> {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIZE {
                return None;
            }
            for (c, ch) in chars.into_iter().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'X' | 'x' => board.place_stone(pos, Player::X),
                    'O' | 'o' => board.place_stone(pos, Player::O),
                    '.' => {}
                    _ => return None,
                }
            }
        }
        Some(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {c}")?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{r} ")?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Cell::Empty => '.',
                    Cell::Taken(p) => p.symbol(),
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
