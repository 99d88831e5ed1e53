//! Neighbor enumeration: the nine-offset scan filtered by the grid's
//! neighborhood mode, with toroidal wrapping when enabled.

use crate::error::Result;
use crate::grid::{Color, Grid};

/// One-step direction for [`Grid::next_cell`]. Only the four cardinal
/// directions ever yield a neighbor; the diagonal variants are accepted but
/// always report "no neighbor" (kept for compatibility with existing
/// clients of the navigation API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Grid {
    /// Resolves offset (dr, dc) from (row, col): wraps modulo the grid
    /// dimensions when wrapping is on, otherwise drops offsets that land
    /// outside the board.
    fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if self.wrapping {
            let r = r.rem_euclid(self.rows as isize) as usize;
            let c = c.rem_euclid(self.cols as isize) as usize;
            Some((r, c))
        } else if r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
            Some((r as usize, c as usize))
        } else {
            None
        }
    }

    /// Counts, among the cells in (row, col)'s neighborhood, those whose
    /// current color is `color`. The neighborhood shape follows the grid's
    /// mode; non-exclude modes include the cell itself.
    pub fn count_neighbors(&self, row: usize, col: usize, color: Color) -> Result<usize> {
        self.index(row, col)?;
        Ok(self.count_neighbors_unchecked(row, col, color))
    }

    pub(crate) fn count_neighbors_unchecked(&self, row: usize, col: usize, color: Color) -> usize {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if !self.neigh.admits(dr, dc) {
                    continue;
                }
                let Some((r, c)) = self.offset(row, col, dr, dc) else {
                    continue;
                };
                if self.colors[r * self.cols + c] == color {
                    count += 1;
                }
            }
        }
        count
    }

    /// Largest neighborhood a cell at (row, col) can have, from its position
    /// and the wrapping flag alone (mode-independent, self included):
    /// 9 for interior or wrapping cells, 6 on an edge, 4 in a corner.
    /// Used to bound searches, not by status evaluation.
    pub fn max_neighbors(&self, row: usize, col: usize) -> Result<usize> {
        self.index(row, col)?;
        if self.wrapping {
            return Ok(9);
        }
        let on_row_edge = row == 0 || row == self.rows - 1;
        let on_col_edge = col == 0 || col == self.cols - 1;
        Ok(match (on_row_edge, on_col_edge) {
            (true, true) => 4,
            (true, false) | (false, true) => 6,
            (false, false) => 9,
        })
    }

    /// One-step navigation from (row, col). Returns the adjacent cell in the
    /// given cardinal direction, wrapping across edges when enabled, or
    /// `None` when the step leaves the board (or the direction is diagonal).
    /// Independent of the neighborhood mode.
    pub fn next_cell(
        &self,
        row: usize,
        col: usize,
        dir: Direction,
    ) -> Result<Option<(usize, usize)>> {
        self.index(row, col)?;
        let (dr, dc) = match dir {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft
            | Direction::UpRight
            | Direction::DownLeft
            | Direction::DownRight => return Ok(None),
        };
        Ok(self.offset(row, col, dr, dc))
    }
}
