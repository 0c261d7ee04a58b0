//! 2D square lattice with 8-connected neighbourhood (cardinal + diagonal).

use crate::direction::Direction;
use crate::error::SpaceError;
use smallvec::SmallVec;

/// Neighbour slots of one cell, indexed by [`Direction::slot`].
pub type NeighbourSlots = [Option<usize>; 8];

/// A two-dimensional square lattice with Moore neighbourhood.
///
/// Each cell has coordinate `(row, col)` with row 0 at the top and a flat
/// row-major index `row * cols + col`. Edges absorb: corners have 3
/// neighbours, other border cells 5, interior cells 8. There is no
/// wraparound.
///
/// The neighbour table is built once at construction during a single
/// row-major scan. Each cell links to the neighbours already visited
/// (north-west, north, north-east, west) and registers itself in the
/// opposite slot of each, so adjacency is symmetric by construction.
#[derive(Debug, Clone)]
pub struct Square8 {
    rows: u32,
    cols: u32,
    neighbours: Vec<NeighbourSlots>,
}

impl Square8 {
    /// Maximum size of either dimension.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `rows * cols` lattice.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(SpaceError::CellCountOverflow)`
    /// if the cell count does not fit a `u32`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(SpaceError::CellCountOverflow { rows, cols });
        }

        let (r_len, c_len) = (rows as usize, cols as usize);
        let mut neighbours = vec![[None; 8]; r_len * c_len];
        let mut link = |from: usize, dir: Direction, to: usize| {
            neighbours[from][dir.slot()] = Some(to);
            neighbours[to][dir.opposite().slot()] = Some(from);
        };

        for r in 0..r_len {
            for c in 0..c_len {
                let i = r * c_len + c;
                if r > 0 && c > 0 {
                    link(i, Direction::NorthWest, i - c_len - 1);
                }
                if r > 0 {
                    link(i, Direction::North, i - c_len);
                }
                if r > 0 && c + 1 < c_len {
                    link(i, Direction::NorthEast, i - c_len + 1);
                }
                if c > 0 {
                    link(i, Direction::West, i - 1);
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            neighbours,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Always returns `false`; construction rejects empty lattices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat index of `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> Result<usize, SpaceError> {
        if row >= self.rows || col >= self.cols {
            return Err(SpaceError::CoordOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }

    /// `(row, col)` of a flat index, or `None` if out of range.
    pub fn coord(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(((index / cols) as u32, (index % cols) as u32))
    }

    /// Neighbour of `index` in direction `dir`, if it exists.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn neighbour(&self, index: usize, dir: Direction) -> Option<usize> {
        self.neighbours[index][dir.slot()]
    }

    /// All eight neighbour slots of `index`; absent neighbours are `None`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn neighbour_slots(&self, index: usize) -> &NeighbourSlots {
        &self.neighbours[index]
    }

    /// Indices of the existing neighbours of `index`, in slot order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn neighbours(&self, index: usize) -> SmallVec<[usize; 8]> {
        self.neighbours[index].iter().flatten().copied().collect()
    }
}
