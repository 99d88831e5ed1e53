//! Per-cell satisfaction verdicts and the whole-grid win check. Status is
//! recomputed from grid state on every query, never cached.

use crate::error::Result;
use crate::grid::{Color, Grid, UNCONSTRAINED};

/// Verdict for one cell, derived from its constraint and neighbor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The constraint is met (or, for unconstrained cells, the whole
    /// neighborhood is colored).
    Satisfied,
    /// Not met yet, but empty neighbors remain that could still meet it.
    Unsatisfied,
    /// Provably unmeetable: too many black neighbors already, or too few
    /// with no empty neighbor left to raise the count.
    Error,
}

impl Grid {
    /// Satisfaction status of cell (row, col).
    pub fn status(&self, row: usize, col: usize) -> Result<Status> {
        self.index(row, col)?;
        Ok(self.status_unchecked(row, col))
    }

    fn status_unchecked(&self, row: usize, col: usize) -> Status {
        let n = self.constraints[row * self.cols + col];
        let empty = self.count_neighbors_unchecked(row, col, Color::Empty);
        if n == UNCONSTRAINED {
            return if empty == 0 {
                Status::Satisfied
            } else {
                Status::Unsatisfied
            };
        }
        let black = self.count_neighbors_unchecked(row, col, Color::Black) as i8;
        if black > n {
            Status::Error
        } else if black < n && empty == 0 {
            Status::Error
        } else if black < n {
            Status::Unsatisfied
        } else {
            Status::Satisfied
        }
    }

    /// Whether the puzzle is won: every cell colored and every cell
    /// satisfied. O(rows * cols * neighborhood) per call.
    pub fn is_won(&self) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.colors[row * self.cols + col] == Color::Empty {
                    return false;
                }
                if self.status_unchecked(row, col) != Status::Satisfied {
                    return false;
                }
            }
        }
        true
    }
}
