use std::fmt::Display;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::definitions::{
    Cell, Color, GameStatus, MatchInterface, Move, PieceType, Square,
};
use crate::core::engine::Board;
use crate::core::opponent::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /** The game has already ended. */
    GameOver(GameStatus),
    /** It is this color's turn, not the caller's. */
    NotYourTurn(Color),
    OffBoard(Square),
    NoPiece(Square),
    /** The piece on the square belongs to the side not on move. */
    WrongColor(Square),
    FriendlyFire(Square),
    Illegal(Move),
}

impl Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver(status) => write!(f, "game is over: {status:?}"),
            MoveError::NotYourTurn(color) => write!(f, "it is {color}'s turn"),
            MoveError::OffBoard(square) => write!(f, "square {square} is off the board"),
            MoveError::NoPiece(square) => write!(f, "no piece on {square}"),
            MoveError::WrongColor(square) => {
                write!(f, "piece on {square} belongs to the other side")
            }
            MoveError::FriendlyFire(square) => write!(f, "{square} is held by your own piece"),
            MoveError::Illegal(_move) => write!(f, "illegal move {_move}"),
        }
    }
}

impl std::error::Error for MoveError {}

/// One human against one engine-driven side.
///
/// Owns the board, whose turn it is and the move number. The number grows
/// every time the turn comes back to White.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    move_number: u32,
    player_side: Color,
    status: GameStatus,
}

impl Game {
    pub fn new(player_side: Color) -> Game {
        Game::with_board(Board::default(), player_side, Color::White)
    }

    pub fn with_board(board: Board, player_side: Color, side_to_move: Color) -> Game {
        let mut game = Game {
            board,
            side_to_move,
            move_number: 1,
            player_side,
            status: GameStatus::InProgress,
        };
        game.refresh_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn player_side(&self) -> Color {
        self.player_side
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_player_turn(&self) -> bool {
        self.side_to_move == self.player_side
    }

    /// Move hints for the piece on `square`. Empty unless the game is running
    /// and the piece belongs to the side to move.
    pub fn hints(&self, square: Square) -> Vec<Square> {
        match self.board.piece(square) {
            Some(piece) if !self.is_finished() && piece.color == self.side_to_move => {
                self.board.legal_destinations(square)
            }
            _ => Vec::new(),
        }
    }

    /// Human move. Only accepted on the human's turn.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<GameStatus, MoveError> {
        self.ensure_running()?;
        if !self.is_player_turn() {
            return Err(MoveError::NotYourTurn(self.side_to_move));
        }
        let _move = self.validate(from, to).map_err(|err| {
            debug!("Rejected {from} -> {to}: {err}");
            err
        })?;
        Ok(self.commit(_move))
    }

    /// Lets `opponent` play the side the human does not control.
    pub fn play_opponent(&mut self, opponent: &mut impl Algorithm) -> Result<Move, MoveError> {
        self.ensure_running()?;
        if self.is_player_turn() {
            return Err(MoveError::NotYourTurn(self.side_to_move));
        }
        let Some(chosen) = opponent.solve(&self.board, self.side_to_move) else {
            self.status = GameStatus::NoLegalMoves(self.side_to_move);
            return Err(MoveError::GameOver(self.status));
        };
        let _move = self.validate(chosen.from, chosen.to)?;
        debug!("Opponent plays {_move}");
        self.commit(_move);
        Ok(_move)
    }

    fn ensure_running(&self) -> Result<(), MoveError> {
        if self.is_finished() {
            Err(MoveError::GameOver(self.status))
        } else {
            Ok(())
        }
    }

    fn validate(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        for square in [from, to] {
            if !square.is_valid() {
                return Err(MoveError::OffBoard(square));
            }
        }
        let piece = self.board.piece(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongColor(from));
        }
        if self.board.friendly_fire(piece.color, to) {
            return Err(MoveError::FriendlyFire(to));
        }
        let _move = Move { from, to, piece };
        if !self.board.is_legal(piece, from, to) {
            return Err(MoveError::Illegal(_move));
        }
        Ok(_move)
    }

    fn commit(&mut self, _move: Move) -> GameStatus {
        let captured = self.board.piece(_move.to);
        self.board.execute(_move);
        let mover = self.side_to_move;
        if captured.is_some_and(|piece| piece.kind == PieceType::King) {
            info!("{mover} captured the king at {}", _move.to);
            self.status = GameStatus::Won(mover);
            return self.status;
        }
        self.side_to_move = mover.opposite();
        if self.side_to_move == Color::White {
            self.move_number += 1;
        }
        self.refresh_status();
        self.status
    }

    fn refresh_status(&mut self) {
        if self.board.legal_moves(self.side_to_move).is_empty() {
            info!("{} has no legal moves", self.side_to_move);
            self.status = GameStatus::NoLegalMoves(self.side_to_move);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Color::White)
    }
}

impl MatchInterface for Game {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        self.board.inside().iter().map(|row| row.to_vec()).collect()
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let square = Square::new(i8::try_from(row).ok()?, i8::try_from(col).ok()?);
        self.board.cell(square)
    }

    fn possible_moves(&self, row: usize, col: usize) -> Option<Vec<Move>> {
        let from = Square::new(i8::try_from(row).ok()?, i8::try_from(col).ok()?);
        let piece = self.board.piece(from)?;
        let moves: Vec<_> = self
            .hints(from)
            .into_iter()
            .map(|to| Move { from, to, piece })
            .collect();
        if moves.is_empty() {
            None
        } else {
            Some(moves)
        }
    }

    fn current_player(&self) -> Color {
        self.side_to_move
    }

    fn game_ended(&self) -> bool {
        self.is_finished()
    }
}
