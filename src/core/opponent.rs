use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::definitions::{Color, Move};
use crate::core::engine::Board;

/// Picks a move for `color`, uniformly over [`Board::legal_moves`].
/// `None` when `color` has nothing to play.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let moves = board.legal_moves(color);
    let &(from, to) = moves.choose(rng)?;
    let piece = board.piece(from)?;
    debug!("Picked {} {from} -> {to} out of {} moves", piece.to_char(), moves.len());
    Some(Move { from, to, piece })
}

// Anything able to play a side on its own.
pub trait Algorithm {
    fn solve(&mut self, board: &Board, color: Color) -> Option<Move>;
}

/// Opponent playing uniformly random legal moves.
#[derive(Debug, Clone)]
pub struct RandomMover<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    pub fn new(rng: R) -> Self {
        RandomMover { rng }
    }
}

impl RandomMover<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomMover::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Algorithm for RandomMover<R> {
    fn solve(&mut self, board: &Board, color: Color) -> Option<Move> {
        choose_move(board, color, &mut self.rng)
    }
}
