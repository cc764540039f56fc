//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Coord, Mark};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Cells per side of the last board drawn
    dimension: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            dimension: 0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_moves: &[Coord],
        winning_segment: Option<&[Coord]>,
        input_enabled: bool,
    ) -> Option<Coord> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y).max(1.0);

        self.dimension = board.dimension();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / self.dimension.max(1) as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_cells(&painter, board);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        for &coord in last_moves {
            self.draw_last_move_marker(&painter, coord);
        }

        if let Some(segment) = winning_segment {
            self.draw_winning_segment(&painter, segment);
        }

        if !input_enabled {
            return None;
        }

        let pointer = response.hover_pos()?;
        let coord = self.screen_to_board(pointer)?;
        if !board.get(coord).is_empty() {
            return None;
        }

        painter.rect_filled(self.cell_rect(coord).shrink(2.0), CornerRadius::same(2), hover_valid());
        response.clicked().then_some(coord)
    }

    /// Fill played and unplayed cells
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        for (coord, mark) in board.cells() {
            let fill = if mark.is_empty() { CELL_BG } else { CELL_PLAYED_BG };
            painter.rect_filled(self.cell_rect(coord), CornerRadius::ZERO, fill);
        }
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let extent = self.cell_size * self.dimension as f32;

        for i in 0..=self.dimension {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = origin + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, extent)], stroke);

            // Horizontal line
            let start = origin + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(extent, 0.0)], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (coord, mark) in board.cells() {
            self.draw_mark(painter, coord, mark);
        }
    }

    fn draw_mark(&self, painter: &Painter, coord: Coord, mark: Mark) {
        let center = self.board_to_screen(coord);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let width = (self.cell_size * MARK_STROKE_RATIO).max(1.5);

        match mark {
            Mark::X => {
                let stroke = Stroke::new(width, MARK_X);
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(half, -half), center + Vec2::new(-half, half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, Stroke::new(width, MARK_O));
            }
            Mark::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, coord: Coord) {
        let corner = self.cell_rect(coord).right_top() + Vec2::new(-6.0, 6.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Outline the winning cells and join their centers
    fn draw_winning_segment(&self, painter: &Painter, segment: &[Coord]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);

        for &coord in segment {
            painter.rect_stroke(
                self.cell_rect(coord).shrink(2.0),
                CornerRadius::same(3),
                stroke,
                egui::StrokeKind::Inside,
            );
        }

        for pair in segment.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                Stroke::new(WIN_STROKE_WIDTH, Color32::from_rgba_unmultiplied(40, 200, 60, 160)),
            );
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, coord: Coord) -> Rect {
        let min = self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(coord.col as f32, coord.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Coord> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 || self.cell_size <= 0.0 {
            return None;
        }

        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;
        let coord = Coord::new(row, col);
        coord.is_within(self.dimension).then_some(coord)
    }

    /// Convert board position to the screen position of the cell center
    pub fn board_to_screen(&self, coord: Coord) -> Pos2 {
        self.cell_rect(coord).center()
    }
}
