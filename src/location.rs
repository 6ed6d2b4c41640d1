//! Board coordinates.

use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::ops::Add;

use ndarray::Ix;
use serde::{Deserialize, Serialize};

/// One signed board coordinate.
pub type Coord = i32;
/// A board side length, in cells.
pub type Dimension = NonZero<usize>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default, Serialize, Deserialize)]
/// A position `(col, row)` on a board. The top left corner is `GridPosition(0, 0)` and rows grow downward.
///
/// Coordinates are signed so that stepping off the top or left edge yields a position that
/// [`Board::in_bounds`](crate::Board::in_bounds) rejects rather than wrapping around.
pub struct GridPosition(pub Coord, pub Coord);

impl GridPosition {
    /// Column, counted from the left edge.
    pub fn col(&self) -> Coord {
        self.0
    }

    /// Row, counted from the top edge.
    pub fn row(&self) -> Coord {
        self.1
    }

    /// `(row, col)` for indexing the cell array. Only meaningful for in-bounds positions.
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.1 as Ix, self.0 as Ix)
    }

    /// Move by `(dcol, drow)`. The result may be off the board.
    pub fn offset_by(self, rhs: (Coord, Coord)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Add for GridPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.offset_by((rhs.0, rhs.1))
    }
}

impl From<(Ix, Ix)> for GridPosition {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1 as Coord, value.0 as Coord)
    }
}

impl Display for GridPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
