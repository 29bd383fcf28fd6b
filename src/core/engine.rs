use std::fmt::Display;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Color, Move, Piece, PieceType, Square};
use crate::core::rules;
use crate::core::utils::all_squares;

/// Standard starting position, row 0 first. Uppercase is White.
pub const STARTING_LAYOUT: [&str; 8] = [
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
];

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/** 8x8 grid of cells, row-major. Row 0 is Black's back rank. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    arr: [[Cell; 8]; 8],
}

impl Board {
    /** Board without any piece on it. */
    pub fn new() -> Board {
        Board {
            arr: [[Cell::Empty; 8]; 8],
        }
    }

    /// Parses an 8x8 letter literal (`.` or space for an empty square).
    /// Returns `None` on a wrong row length or an unknown letter.
    pub fn from_rows(rows: [&str; 8]) -> Option<Board> {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let letters: Vec<char> = line.chars().collect();
            if letters.len() != 8 {
                return None;
            }
            for (col, letter) in letters.into_iter().enumerate() {
                board.arr[row][col] = match letter {
                    '.' | ' ' => Cell::Empty,
                    letter => Cell::Figure(Piece::from_char(letter)?),
                };
            }
        }
        Some(board)
    }

    pub fn inside(&self) -> &[[Cell; 8]; 8] {
        &self.arr
    }

    /** `None` for off-board squares. */
    pub fn cell(&self, square: Square) -> Option<Cell> {
        if square.is_valid() {
            Some(self.arr[square.row as usize][square.col as usize])
        } else {
            None
        }
    }

    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.cell(square).and_then(Cell::piece)
    }

    /** On the board and empty. */
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).is_some_and(Cell::is_empty)
    }

    /** On the board and holding a piece of either color. */
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece(square).is_some()
    }

    /// Overwrites a single square. Writes outside the board are dropped.
    pub fn set(&mut self, square: Square, cell: Cell) {
        if square.is_valid() {
            self.arr[square.row as usize][square.col as usize] = cell;
        } else {
            trace!("Ignoring write to off-board square {square}");
        }
    }

    /// True when `square` holds a piece of `color`, i.e. `color` may not land there.
    pub fn friendly_fire(&self, color: Color, square: Square) -> bool {
        self.cell(square).and_then(Cell::color) == Some(color)
    }

    /// Geometric legality of `start -> end` for `piece`, regardless of who
    /// stands on `end` (the king rule aside). Off-board squares and an empty
    /// cell are never legal.
    pub fn is_legal(&self, piece: impl Into<Cell>, start: Square, end: Square) -> bool {
        let Cell::Figure(piece) = piece.into() else {
            return false;
        };
        if !start.is_valid() || !end.is_valid() {
            return false;
        }
        match piece.kind {
            PieceType::Pawn => rules::pawn(piece.color, start, end, self),
            PieceType::Rook => rules::rook(start, end, self),
            PieceType::Knight => rules::knight(start, end),
            PieceType::Bishop => rules::bishop(start, end, self),
            PieceType::Queen => rules::queen(start, end, self),
            PieceType::King => rules::king(piece.color, start, end, self),
        }
    }

    /// Destinations for the piece standing on `start`, row-major. Friendly
    /// targets are excluded.
    pub fn legal_destinations(&self, start: Square) -> Vec<Square> {
        let Some(piece) = self.piece(start) else {
            return Vec::new();
        };
        all_squares()
            .filter(|&end| self.is_legal(piece, start, end) && !self.friendly_fire(piece.color, end))
            .collect()
    }

    /// Every `(start, end)` pair `color` can play, row-major over starts and
    /// then over destinations. Empty when nothing can move.
    pub fn legal_moves(&self, color: Color) -> Vec<(Square, Square)> {
        let moves: Vec<_> = self
            .iter_pieces()
            .filter(|(_, piece)| piece.color == color)
            .flat_map(|(start, _)| {
                self.legal_destinations(start)
                    .into_iter()
                    .map(move |end| (start, end))
            })
            .collect();
        trace!("{} legal moves for {color}", moves.len());
        moves
    }

    /// Puts `piece` on `end` and clears `start`.
    ///
    /// Nothing is validated: the move must already have been judged legal.
    /// Whatever stood on `end` is lost.
    pub fn apply(&mut self, start: Square, end: Square, piece: Piece) {
        trace!("Apply {} {start} -> {end}", piece.to_char());
        self.set(end, Cell::Figure(piece));
        self.set(start, Cell::Empty);
    }

    /** Same as [`Board::apply`] for a move value. */
    pub fn execute(&mut self, _move: Move) {
        self.apply(_move.from, _move.to, _move.piece)
    }

    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        all_squares().filter_map(|square| self.piece(square).map(|piece| (square, piece)))
    }

    /// Compact binary snapshot of the board.
    pub fn encode(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Board, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::new();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.arr[0][col] = Piece::new(kind, Color::Black).into();
            board.arr[1][col] = Piece::new(PieceType::Pawn, Color::Black).into();
            board.arr[6][col] = Piece::new(PieceType::Pawn, Color::White).into();
            board.arr[7][col] = Piece::new(kind, Color::White).into();
        }
        board
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.arr {
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
