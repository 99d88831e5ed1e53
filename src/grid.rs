use std::fmt;

use crate::error::{GridError, Result};
use crate::format;
use crate::history::History;

/// Constraint value meaning "this cell imposes no requirement".
pub const UNCONSTRAINED: i8 = -1;

/// Largest representable constraint (a cell has at most 9 cells in its
/// neighborhood, itself included).
pub const MAX_CONSTRAINT: i8 = 9;

/// Board side used by the short constructors and the default puzzle.
pub const DEFAULT_SIZE: usize = 5;

/// Color of one cell. Every cell starts `Empty` and the player paints it
/// `Black` or `White`; a won grid has no `Empty` cell left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Empty,
    Black,
    White,
}

/// Shape of the neighbor set used when counting around a cell.
///
/// The non-exclude modes count the cell itself as part of its own
/// neighborhood (a `Full` interior cell sees 9 cells, an `Ortho` one 5);
/// the exclude variants drop the cell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbourhood {
    Full,
    Ortho,
    FullExcludeSelf,
    OrthoExcludeSelf,
}

impl Neighbourhood {
    /// Numeric tag used by the persisted file format.
    pub(crate) fn as_index(self) -> u8 {
        match self {
            Neighbourhood::Full => 0,
            Neighbourhood::Ortho => 1,
            Neighbourhood::FullExcludeSelf => 2,
            Neighbourhood::OrthoExcludeSelf => 3,
        }
    }

    pub(crate) fn from_index(n: i64) -> Option<Self> {
        match n {
            0 => Some(Neighbourhood::Full),
            1 => Some(Neighbourhood::Ortho),
            2 => Some(Neighbourhood::FullExcludeSelf),
            3 => Some(Neighbourhood::OrthoExcludeSelf),
            _ => None,
        }
    }

    /// Whether offset (dr, dc) belongs to this neighborhood shape.
    pub(crate) fn admits(self, dr: isize, dc: isize) -> bool {
        let ortho = dr == 0 || dc == 0;
        let is_self = dr == 0 && dc == 0;
        match self {
            Neighbourhood::Full => true,
            Neighbourhood::Ortho => ortho,
            Neighbourhood::FullExcludeSelf => !is_self,
            Neighbourhood::OrthoExcludeSelf => ortho && !is_self,
        }
    }
}

/// A rectangular puzzle grid: per-cell constraints and colors in row-major
/// order, plus the wrapping/neighborhood options and the move history.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) wrapping: bool,
    pub(crate) neigh: Neighbourhood,
    pub(crate) constraints: Vec<i8>,
    pub(crate) colors: Vec<Color>,
    pub(crate) history: History,
}

/// Structural equality: dimensions, options and every cell. The move
/// history is deliberately not part of a grid's identity.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.wrapping == other.wrapping
            && self.neigh == other.neigh
            && self.constraints == other.constraints
            && self.colors == other.colors
    }
}

impl Eq for Grid {}

impl Grid {
    /// Builds a default-sized (5x5), non-wrapping, `Full`-neighborhood grid
    /// from explicit cell arrays. With `colors == None` every cell starts
    /// `Empty`.
    pub fn new(constraints: &[i8], colors: Option<&[Color]>) -> Result<Self> {
        Self::new_ext(
            DEFAULT_SIZE,
            DEFAULT_SIZE,
            constraints,
            colors,
            false,
            Neighbourhood::Full,
        )
    }

    /// Builds an all-empty, all-unconstrained default-sized grid.
    pub fn new_empty() -> Self {
        // Default dimensions are nonzero, so this cannot fail.
        Self::new_empty_ext(DEFAULT_SIZE, DEFAULT_SIZE, false, Neighbourhood::Full)
            .unwrap_or_else(|_| unreachable!("default size is nonzero"))
    }

    /// Builds a grid with explicit dimensions, options and cell arrays.
    /// Both arrays must hold exactly `rows * cols` entries (row-major);
    /// `colors == None` leaves every cell `Empty`.
    pub fn new_ext(
        rows: usize,
        cols: usize,
        constraints: &[i8],
        colors: Option<&[Color]>,
        wrapping: bool,
        neigh: Neighbourhood,
    ) -> Result<Self> {
        let mut grid = Self::new_empty_ext(rows, cols, wrapping, neigh)?;
        let expected = rows * cols;
        if constraints.len() != expected {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                expected,
                found: constraints.len(),
            });
        }
        for &n in constraints {
            check_constraint(n)?;
        }
        grid.constraints.copy_from_slice(constraints);
        if let Some(colors) = colors {
            if colors.len() != expected {
                return Err(GridError::CellCountMismatch {
                    rows,
                    cols,
                    expected,
                    found: colors.len(),
                });
            }
            grid.colors.copy_from_slice(colors);
        }
        Ok(grid)
    }

    /// Builds an all-empty, all-unconstrained grid with explicit dimensions
    /// and options.
    pub fn new_empty_ext(
        rows: usize,
        cols: usize,
        wrapping: bool,
        neigh: Neighbourhood,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions);
        }
        let cells = rows
            .checked_mul(cols)
            .ok_or(GridError::DimensionsTooLarge { rows, cols })?;
        Ok(Grid {
            rows,
            cols,
            wrapping,
            neigh,
            constraints: vec![UNCONSTRAINED; cells],
            colors: vec![Color::Empty; cells],
            history: History::default(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    pub fn neighbourhood(&self) -> Neighbourhood {
        self.neigh
    }

    /// Row-major flat index for (row, col), or an out-of-bounds error.
    pub(crate) fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Constraint of cell (row, col); `UNCONSTRAINED` when the cell imposes
    /// no requirement.
    pub fn constraint(&self, row: usize, col: usize) -> Result<i8> {
        Ok(self.constraints[self.index(row, col)?])
    }

    /// Sets the constraint of cell (row, col) to `UNCONSTRAINED` or 0..=9.
    pub fn set_constraint(&mut self, row: usize, col: usize, n: i8) -> Result<()> {
        check_constraint(n)?;
        let idx = self.index(row, col)?;
        self.constraints[idx] = n;
        Ok(())
    }

    /// Color of cell (row, col).
    pub fn color(&self, row: usize, col: usize) -> Result<Color> {
        Ok(self.colors[self.index(row, col)?])
    }

    /// Sets the color of cell (row, col) directly, without touching the
    /// move history. Players go through [`Grid::play_move`] instead.
    pub fn set_color(&mut self, row: usize, col: usize, c: Color) -> Result<()> {
        let idx = self.index(row, col)?;
        self.colors[idx] = c;
        Ok(())
    }

    /// The documented 5x5 demonstration puzzle (all cells empty).
    pub fn default_puzzle() -> Self {
        Self::new(&DEFAULT_CONSTRAINTS, None)
            .unwrap_or_else(|_| unreachable!("default arrays are well formed"))
    }

    /// The demonstration puzzle with its known solution colored in.
    pub fn default_solution() -> Self {
        Self::new(&DEFAULT_CONSTRAINTS, Some(&DEFAULT_SOLUTION))
            .unwrap_or_else(|_| unreachable!("default arrays are well formed"))
    }
}

fn check_constraint(n: i8) -> Result<()> {
    if n == UNCONSTRAINED || (0..=MAX_CONSTRAINT).contains(&n) {
        Ok(())
    } else {
        Err(GridError::InvalidConstraint(n))
    }
}

#[rustfmt::skip]
const DEFAULT_CONSTRAINTS: [i8; DEFAULT_SIZE * DEFAULT_SIZE] = [
     0, -1, -1,  3, -1,
    -1,  5, -1, -1, -1,
    -1, -1,  4, -1,  1,
     6, -1,  6,  3, -1,
    -1, -1, -1, -1, -1,
];

const B: Color = Color::Black;
const W: Color = Color::White;

#[rustfmt::skip]
const DEFAULT_SOLUTION: [Color; DEFAULT_SIZE * DEFAULT_SIZE] = [
    W, W, B, W, W,
    W, W, B, W, B,
    B, B, B, W, W,
    B, B, W, W, W,
    B, B, B, B, W,
];

/// ASCII board with row/column rulers; each cell renders as its file-format
/// token (constraint character then color character).
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "     ")?;
        for j in 0..self.cols {
            write!(f, "{j:<3}")?;
        }
        writeln!(f)?;
        let ruler = "-".repeat(3 * self.cols);
        writeln!(f, "     {ruler}")?;
        for i in 0..self.rows {
            write!(f, "{i:>3} |")?;
            for j in 0..self.cols {
                let idx = i * self.cols + j;
                let n = format::constraint_char(self.constraints[idx]);
                let c = format::color_char(self.colors[idx]);
                write!(f, "{n}{c} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "     {ruler}")
    }
}
