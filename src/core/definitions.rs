use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    #[default]
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /** Row step of a pawn of this color. Row 0 is Black's back rank. */
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /** Row the pawns of this color start on. */
    pub fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "white"
        } else {
            "black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    fn from_letter(letter: char) -> Option<PieceType> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Letter encoding used by board literals: uppercase is White, lowercase is Black.
    pub fn from_char(letter: char) -> Option<Piece> {
        let kind = PieceType::from_letter(letter)?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { kind, color })
    }

    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Figure(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Figure(piece) => Some(piece),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn color(self) -> Option<Color> {
        self.piece().map(|piece| piece.color)
    }

    pub fn to_char(self) -> char {
        self.piece().map(Piece::to_char).unwrap_or('.')
    }
}

impl From<Piece> for Cell {
    fn from(value: Piece) -> Self {
        Cell::Figure(value)
    }
}

/// Board coordinate. Coordinates outside `0..8` are representable so that
/// callers can ask about them; every query answers negatively for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    pub fn is_valid(self) -> bool {
        crate::core::utils::is_valid_coord(self.row, self.col)
    }

    pub fn offset(self, rows: i8, cols: i8) -> Square {
        Square {
            row: self.row.wrapping_add(rows),
            col: self.col.wrapping_add(cols),
        }
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Square { row, col }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/** Proposed move. Carries the piece read from `from` when it was proposed. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.piece.to_char(), self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /** A king was captured by this color. */
    Won(Color),
    /** This color is to move and has nothing to play. */
    NoLegalMoves(Color),
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What the presentation layer needs from a running match.
pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, row: usize, col: usize) -> Option<Cell>;
    fn possible_moves(&self, row: usize, col: usize) -> Option<Vec<Move>>;
    fn current_player(&self) -> Color;
    fn game_ended(&self) -> bool;
}
