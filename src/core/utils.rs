use crate::core::definitions::Square;

/// Walks the squares strictly between two points on a line.
///
/// Stops right before `target`. If the walk leaves the board the off-board
/// square is yielded once and the iterator ends, so occupancy checks over it
/// fail instead of running forever.
#[derive(Debug)]
pub struct BetweenIterator {
    current: Square,
    target: Square,
    step: (i8, i8),
    done: bool,
}

impl Iterator for BetweenIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.current = self.current.offset(self.step.0, self.step.1);
        if self.current == self.target {
            self.done = true;
            None
        } else {
            if !self.current.is_valid() {
                self.done = true;
            }
            Some(self.current)
        }
    }
}

/// Squares strictly between `from` and `to`. Empty for `from == to` and for
/// adjacent squares. Only meaningful when the two points share a rank, file
/// or diagonal.
pub fn between(from: Square, to: Square) -> BetweenIterator {
    let step = (
        (i16::from(to.row) - i16::from(from.row)).signum() as i8,
        (i16::from(to.col) - i16::from(from.col)).signum() as i8,
    );
    BetweenIterator {
        current: from,
        target: to,
        step,
        done: step == (0, 0),
    }
}

/// Absolute (row, col) displacement between two squares.
#[inline]
pub fn displacement(a: Square, b: Square) -> (u8, u8) {
    (a.row.abs_diff(b.row), a.col.abs_diff(b.col))
}

pub fn is_in_straight_line(a: Square, b: Square) -> bool {
    a.row == b.row || a.col == b.col
}

pub fn is_in_diagonal_line(a: Square, b: Square) -> bool {
    let (rows, cols) = displacement(a, b);
    rows == cols
}

#[inline]
pub fn is_valid_coord(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Every on-board square, row-major.
pub fn all_squares() -> impl Iterator<Item = Square> {
    (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
}
