//! Move application with undo/redo. Two ordered logs back the feature:
//! `played` grows at its tail; `undo` moves a record from the played tail to
//! the undone *head*, and `redo` takes from the undone head back to the
//! played tail. The asymmetric ends are what keep interleaved
//! undo/redo/play sequences replaying in the right order.

use std::collections::VecDeque;

use crate::error::Result;
use crate::grid::{Color, Grid};

/// One recorded color change, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub previous_color: Color,
    pub applied_color: Color,
}

/// The two move logs. Owned by the grid; cleared wholesale on restart.
#[derive(Debug, Clone, Default)]
pub(crate) struct History {
    played: VecDeque<Move>,
    undone: VecDeque<Move>,
}

impl History {
    fn clear(&mut self) {
        self.played.clear();
        self.undone.clear();
    }
}

impl Grid {
    /// Plays one move: records the cell's prior color, applies the new one,
    /// appends the record to the played log and discards any pending redo
    /// chain. Fails on out-of-bounds coordinates without touching the grid.
    pub fn play_move(&mut self, row: usize, col: usize, color: Color) -> Result<()> {
        let idx = self.index(row, col)?;
        let mv = Move {
            row,
            col,
            previous_color: self.colors[idx],
            applied_color: color,
        };
        self.colors[idx] = color;
        self.history.played.push_back(mv);
        self.history.undone.clear();
        Ok(())
    }

    /// Reverts the most recently played move, making it available for redo.
    /// Does nothing when no move has been played.
    pub fn undo(&mut self) {
        if let Some(mv) = self.history.played.pop_back() {
            self.colors[mv.row * self.cols + mv.col] = mv.previous_color;
            self.history.undone.push_front(mv);
        }
    }

    /// Replays the most recently undone move. Does nothing when the redo
    /// chain is empty (or was invalidated by a new move).
    pub fn redo(&mut self) {
        if let Some(mv) = self.history.undone.pop_front() {
            self.colors[mv.row * self.cols + mv.col] = mv.applied_color;
            self.history.played.push_back(mv);
        }
    }

    /// Wipes every cell back to `Empty` and drops both move logs. Restart
    /// itself is not undoable.
    pub fn restart(&mut self) {
        self.colors.fill(Color::Empty);
        self.history.clear();
    }
}
