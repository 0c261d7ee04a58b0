//! Compass directions of the Moore neighbourhood.

/// One of the eight neighbour directions, with row 0 at the top.
///
/// The discriminant is the neighbour slot index; a direction and its
/// [`opposite`](Direction::opposite) are four slots apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `(row - 1, col - 1)`
    NorthWest = 0,
    /// `(row - 1, col)`
    North = 1,
    /// `(row - 1, col + 1)`
    NorthEast = 2,
    /// `(row, col + 1)`
    East = 3,
    /// `(row + 1, col + 1)`
    SouthEast = 4,
    /// `(row + 1, col)`
    South = 5,
    /// `(row + 1, col - 1)`
    SouthWest = 6,
    /// `(row, col - 1)`
    West = 7,
}

impl Direction {
    /// All directions in slot order.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// Slot index in a neighbour table.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.slot() + 4) % 8]
    }

    /// `(d_row, d_col)` offset.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
        }
    }
}
