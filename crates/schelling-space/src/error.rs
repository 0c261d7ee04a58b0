//! Error types for lattice construction and coordinate lookup.

use std::fmt;

/// Errors arising from space construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// `rows * cols` does not fit the cell index range.
    CellCountOverflow {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
    /// A coordinate is outside the lattice.
    CoordOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Lattice rows.
        rows: u32,
        /// Lattice columns.
        cols: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { rows, cols } => {
                write!(f, "{rows} x {cols} cells exceeds u32::MAX")
            }
            Self::CoordOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "coordinate ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
            ),
        }
    }
}

impl std::error::Error for SpaceError {}
