use criterion::{black_box, criterion_group, criterion_main, Criterion};
use random_chess::{choose_move, Algorithm, Board, Color, PieceType, RandomMover, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn type_to_value(kind: PieceType) -> u64 {
    match kind {
        PieceType::Pawn => 100,
        PieceType::Knight => 325,
        PieceType::Bishop => 350,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 0,
    }
}

fn iter_pieces(board: &Board) -> u64 {
    board
        .iter_pieces()
        .map(|(_, piece)| type_to_value(piece.kind))
        .sum()
}

fn for_piece_count(board: &Board) -> u64 {
    let mut result = 0;
    for row in 0..8i8 {
        for col in 0..8i8 {
            if let Some(piece) = board.piece(Square::new(row, col)) {
                result += type_to_value(piece.kind);
            }
        }
    }
    result
}

fn stupid_game(mut board: Board, seed: u64, max_steps: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut color = Color::White;
    for _ in 0..max_steps {
        match choose_move(&board, color, &mut rng) {
            Some(_move) => board.execute(_move),
            None => break,
        }
        color = color.opposite();
    }
    board
}

fn utils_benchmark(c: &mut Criterion) {
    c.bench_function("iter piece count", |b| {
        b.iter(|| iter_pieces(black_box(&Board::default())))
    });
    c.bench_function("for piece count", |b| {
        b.iter(|| for_piece_count(black_box(&Board::default())))
    });
    c.bench_function("legal moves start", |b| {
        b.iter(|| black_box(Board::default()).legal_moves(Color::White))
    });
    c.bench_function("random mover start", |b| {
        let mut mover = RandomMover::seeded(0);
        b.iter(|| {
            mover.solve(black_box(&Board::default()), Color::White)
        })
    });
    c.bench_function("stupid game 100", |b| {
        b.iter(|| stupid_game(Board::default(), black_box(42), 100))
    });
}

criterion_group!(benches, utils_benchmark);
criterion_main!(benches);
