//! Per-piece movement predicates.
//!
//! Each rule answers whether the shape of `start -> end` is legal for its
//! piece and whether the path is clear on `board`. Apart from the king, the
//! rules do not look at who stands on `end`: excluding friendly targets is the
//! caller's job (see [`Board::friendly_fire`]). Board bounds are the caller's
//! job too, except that the sliding rules refuse a path that walks off the
//! board.

use crate::core::definitions::{Cell, Color, Square};
use crate::core::engine::Board;
use crate::core::utils::{between, displacement, is_in_diagonal_line, is_in_straight_line};

fn path_is_clear(start: Square, end: Square, board: &Board) -> bool {
    between(start, end).all(|square| board.is_empty(square))
}

/// Single push onto an empty square, double push from the home row through
/// two empty squares, or a one-column diagonal step onto an occupied square.
pub fn pawn(color: Color, start: Square, end: Square, board: &Board) -> bool {
    let direction = color.pawn_direction();
    let front = start.offset(direction, 0);
    if start.col == end.col {
        if front == end && board.is_empty(end) {
            return true;
        }
        start.row == color.pawn_home_row()
            && front.offset(direction, 0) == end
            && board.is_empty(end)
            && board.is_empty(front)
    } else {
        start.col.abs_diff(end.col) == 1 && front.row == end.row && board.is_occupied(end)
    }
}

/// Same row or column with nothing strictly in between.
/// `start == end` passes: there is nothing in between.
pub fn rook(start: Square, end: Square, board: &Board) -> bool {
    is_in_straight_line(start, end) && path_is_clear(start, end, board)
}

/// Same diagonal with nothing strictly in between.
/// `start == end` passes: there is nothing in between.
pub fn bishop(start: Square, end: Square, board: &Board) -> bool {
    is_in_diagonal_line(start, end) && path_is_clear(start, end, board)
}

pub fn knight(start: Square, end: Square) -> bool {
    matches!(displacement(start, end), (2, 1) | (1, 2))
}

pub fn queen(start: Square, end: Square, board: &Board) -> bool {
    rook(start, end, board) || bishop(start, end, board)
}

/// One step in any direction onto a square not held by `color`.
pub fn king(color: Color, start: Square, end: Square, board: &Board) -> bool {
    let (rows, cols) = displacement(start, end);
    if rows > 1 || cols > 1 {
        return false;
    }
    board.cell(end).and_then(Cell::color) != Some(color)
}
