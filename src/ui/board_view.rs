//! Board rendering for the four-in-a-row GUI

use crate::{Board, Cell, Player, Pos, WinningLine, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Everything the board view needs to draw one frame
pub struct BoardFrame<'a> {
    pub board: &'a Board,
    pub current_player: Player,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<WinningLine>,
    pub accepting_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks on occupied cells are reported too, so the caller can
    /// explain why the move was refused.
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &BoardFrame<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let hovered = if frame.accepting_input {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        self.draw_cells(&painter, hovered, frame.board);
        self.draw_coordinates(&painter);
        self.draw_symbols(&painter, frame.board);

        if let Some(pos) = frame.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = frame.winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(pos) = frame.suggested_move {
            self.draw_suggestion(&painter, pos, frame.current_player);
        }
        if let Some(pos) = hovered {
            if frame.board.is_empty(pos) {
                let faded = player_color(frame.current_player).gamma_multiply(0.35);
                self.draw_symbol(&painter, pos, frame.current_player, faded);
            }
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the 6x6 cell grid
    fn draw_cells(&self, painter: &Painter, hovered: Option<Pos>, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for pos in Pos::all() {
            let rect = self.cell_rect(pos);
            let fill = match hovered {
                Some(h) if h == pos && board.is_empty(pos) => CELL_BG_HOVER,
                Some(h) if h == pos => hover_invalid(),
                _ => CELL_BG,
            };
            painter.rect_filled(rect, CornerRadius::same(4), fill);
            painter.rect_stroke(rect, CornerRadius::same(4), stroke, egui::StrokeKind::Inside);
        }
    }

    /// Row and column indices along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + (i as f32 + 0.5) * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + BOARD_MARGIN / 2.0);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);

            let left = Pos2::new(self.board_rect.min.x + BOARD_MARGIN / 2.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), COORD_TEXT);
        }
    }

    fn draw_symbols(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            if let Cell::Taken(player) = board.get(pos) {
                self.draw_symbol(painter, pos, player, player_color(player));
            }
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_symbol(&self, painter: &Painter, pos: Pos, player: Player, color: Color32) {
        let center = self.board_to_screen(pos);
        let r = self.cell_size * SYMBOL_RATIO;
        let stroke = Stroke::new(SYMBOL_STROKE, color);
        match player {
            Player::X => {
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
            }
            Player::O => {
                painter.circle_stroke(center, r, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-10.0, 10.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &WinningLine) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for cell in line {
            painter.rect_stroke(
                self.cell_rect(*cell).shrink(3.0),
                CornerRadius::same(4),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[line.len() - 1]);
        painter.line_segment([start, end], stroke);
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.board_to_screen(pos);
        painter.circle_stroke(center, self.cell_size * 0.42, Stroke::new(2.0, SUGGESTION));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            format!("{player}?"),
            egui::FontId::proportional(16.0),
            SUGGESTION,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;
        Pos::try_new(row, col)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
