use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::location::{Coord, GridPosition};

/// The four directions a beam can travel, in clockwise order.
///
/// Rotation arithmetic relies on the declaration order: the discriminant plus one, modulo four,
/// is the direction a quarter turn clockwise.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Default, Ord, PartialOrd, Display, EnumString, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Toward row 0.
    #[default]
    Up,
    /// Toward higher columns.
    Right,
    /// Toward higher rows.
    Down,
    /// Toward column 0.
    Left,
}

impl Direction {
    /// Rotate by `steps` quarter turns clockwise. Negative `steps` turn counterclockwise.
    pub fn rotate_cw(self, steps: i32) -> Self {
        Self::VARIANTS[((self as i32 + steps.rem_euclid(4)) % 4) as usize]
    }

    /// The direction a half turn away.
    pub fn opposite(self) -> Self {
        self.rotate_cw(2)
    }

    /// The unit `(col, row)` step for this direction.
    pub fn offset(self) -> (Coord, Coord) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Attempt the step from `location` in this direction. The result may be off the board.
    pub fn attempt_from(self, location: GridPosition) -> GridPosition {
        location.offset_by(self.offset())
    }
}
