use thiserror::Error;

/// Errors reported by the puzzle engine.
///
/// Invalid arguments (out-of-range coordinates, bad constraint values,
/// malformed puzzle files) are surfaced as values so that embedding clients
/// can recover; the engine never terminates its host process.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("constraint {0} is not -1 (unconstrained) or in 0..=9")]
    InvalidConstraint(i8),

    #[error("grid needs at least one row and one column")]
    EmptyDimensions,

    #[error("{rows}x{cols} grid is too large to represent")]
    DimensionsTooLarge { rows: usize, cols: usize },

    #[error("board of {cells} cells exceeds the exhaustive search limit of 63 cells")]
    BoardTooLarge { cells: usize },

    #[error("expected {expected} cells for a {rows}x{cols} grid, got {found}")]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("rate {0} is outside [0, 1]")]
    InvalidRate(f64),

    #[error("malformed puzzle file: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse failures for the persisted puzzle text format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("header must be four integers `rows cols wrapping neighbourhood`")]
    BadHeader,

    #[error("wrapping flag must be 0 or 1, got {0}")]
    BadWrapping(i64),

    #[error("neighbourhood mode must be in 0..=3, got {0}")]
    BadNeighbourhood(i64),

    #[error("puzzle body ends before row {0}")]
    MissingRow(usize),

    #[error("row {row} has {found} characters, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid constraint character {ch:?} at cell ({row}, {col})")]
    BadConstraintChar { ch: char, row: usize, col: usize },

    #[error("invalid color character {ch:?} at cell ({row}, {col})")]
    BadColorChar { ch: char, row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
