//! Exhaustive solving and solution counting. A solved grid has every cell
//! Black or White, so candidates are the `2^(rows*cols)` bitstrings over the
//! cells in row-major order: bit `k` set means cell `k` is Black.
//!
//! Intentionally brute force; complexity is exponential in the cell count
//! and only small boards (the generator defaults to 4x4) are practical.

use crate::error::{GridError, Result};
use crate::grid::{Color, Grid};

/// Hard cap on exhaustive enumeration: candidate words are 64-bit.
const MAX_CELLS: usize = 63;

fn assign_word(grid: &mut Grid, word: u64) {
    for (k, cell) in grid.colors.iter_mut().enumerate() {
        *cell = if word >> k & 1 == 1 {
            Color::Black
        } else {
            Color::White
        };
    }
}

impl Grid {
    /// Searches for a winning full coloring, trying candidate bitstrings in
    /// increasing integer order. On success the first winning assignment is
    /// written into the grid (its only mutation) and `Ok(true)` is returned;
    /// an unsolvable grid yields `Ok(false)` and is left untouched.
    ///
    /// Boards of 64 or more cells are beyond the enumeration's word width
    /// and are rejected with [`GridError::BoardTooLarge`] before any search.
    pub fn solve(&mut self) -> Result<bool> {
        let cells = self.enumeration_cells()?;
        let mut work = self.clone();
        for word in 0..1u64 << cells {
            assign_word(&mut work, word);
            if work.is_won() {
                self.colors.copy_from_slice(&work.colors);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Counts the winning full colorings of this grid's constraint set. The
    /// enumeration runs on a private deep copy, so the grid itself is never
    /// mutated. Same cell-count cap as [`Grid::solve`].
    pub fn count_solutions(&self) -> Result<u64> {
        let cells = self.enumeration_cells()?;
        let mut work = self.clone();
        let mut count = 0;
        for word in 0..1u64 << cells {
            assign_word(&mut work, word);
            if work.is_won() {
                count += 1;
            }
        }
        Ok(count)
    }

    fn enumeration_cells(&self) -> Result<usize> {
        let cells = self.rows * self.cols;
        if cells > MAX_CELLS {
            return Err(GridError::BoardTooLarge { cells });
        }
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Neighbourhood;

    fn grid_2x2(constraints: &[(usize, usize, i8)]) -> Grid {
        let mut g = Grid::new_empty_ext(2, 2, false, Neighbourhood::Full).unwrap();
        for &(i, j, n) in constraints {
            g.set_constraint(i, j, n).unwrap();
        }
        g
    }

    #[test]
    fn unconstrained_board_counts_all_colorings() {
        let g = grid_2x2(&[]);
        assert_eq!(g.count_solutions().unwrap(), 16);
    }

    #[test]
    fn forced_all_black_board() {
        // (0,0)'s Full neighborhood is the whole 2x2 board.
        let mut g = grid_2x2(&[(0, 0, 4)]);
        assert_eq!(g.count_solutions().unwrap(), 1);
        assert!(g.solve().unwrap());
        assert!(g.is_won());
        for (i, j) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(g.color(i, j).unwrap(), Color::Black);
        }
    }

    #[test]
    fn solve_picks_lowest_word_first() {
        // Exactly one black anywhere on the board: four winning colorings.
        // The lowest winning word is 1, i.e. cell (0,0) black alone.
        let mut g = grid_2x2(&[(0, 0, 1)]);
        assert_eq!(g.count_solutions().unwrap(), 4);
        assert!(g.solve().unwrap());
        assert_eq!(g.color(0, 0).unwrap(), Color::Black);
        for (i, j) in [(0, 1), (1, 0), (1, 1)] {
            assert_eq!(g.color(i, j).unwrap(), Color::White);
        }
    }

    #[test]
    fn unsolvable_board_leaves_grid_untouched() {
        // 2 and 0 at the same corner pair cannot both hold over the shared
        // 2x2 neighborhood.
        let mut g = grid_2x2(&[(0, 0, 4), (1, 1, 0)]);
        let before = g.clone();
        assert_eq!(g.count_solutions().unwrap(), 0);
        assert!(!g.solve().unwrap());
        assert_eq!(g, before);
    }

    #[test]
    fn solve_fails_exactly_when_count_is_zero() {
        let boards = [
            grid_2x2(&[]),
            grid_2x2(&[(0, 0, 4)]),
            grid_2x2(&[(0, 0, 0)]),
            grid_2x2(&[(0, 0, 4), (1, 1, 0)]),
            grid_2x2(&[(0, 1, 2)]),
        ];
        for g in boards {
            let mut s = g.clone();
            assert_eq!(s.solve().unwrap(), g.count_solutions().unwrap() > 0);
            if g.count_solutions().unwrap() > 0 {
                assert!(s.is_won());
            }
        }
    }

    #[test]
    fn count_solutions_never_mutates() {
        let mut g = grid_2x2(&[(0, 0, 2)]);
        g.set_color(0, 0, Color::Black).unwrap();
        let before = g.clone();
        g.count_solutions().unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn prefilled_colors_are_overwritten_by_candidates() {
        // A pre-colored cell does not pin the search: counting is over full
        // reassignments of the board.
        let mut g = grid_2x2(&[]);
        g.set_color(0, 0, Color::Black).unwrap();
        assert_eq!(g.count_solutions().unwrap(), 16);
    }

    #[test]
    fn ortho_wrapping_3x3_all_black() {
        // Wrapping Ortho: every cell sees itself plus 4 cardinals. A 5
        // constraint forces all five black; placing it everywhere forces
        // the all-black board.
        let mut g = Grid::new_empty_ext(3, 3, true, Neighbourhood::Ortho).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                g.set_constraint(i, j, 5).unwrap();
            }
        }
        assert_eq!(g.count_solutions().unwrap(), 1);
        assert!(g.solve().unwrap());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(g.color(i, j).unwrap(), Color::Black);
            }
        }
    }

    #[test]
    fn oversized_board_is_rejected_before_searching() {
        let g = Grid::new_empty_ext(8, 8, false, Neighbourhood::Full).unwrap();
        assert!(matches!(
            g.count_solutions(),
            Err(GridError::BoardTooLarge { cells: 64 })
        ));
        let mut s = g.clone();
        assert!(matches!(s.solve(), Err(GridError::BoardTooLarge { .. })));
        assert_eq!(s, g);
    }

    #[test]
    fn solve_bypasses_move_history() {
        let mut g = grid_2x2(&[(0, 0, 4)]);
        g.play_move(0, 0, Color::White).unwrap();
        assert!(g.solve().unwrap());
        // The solver's writes are not undoable moves; undo only reverts the
        // played move.
        g.undo();
        assert_eq!(g.color(0, 0).unwrap(), Color::Empty);
        assert_eq!(g.color(1, 1).unwrap(), Color::Black);
    }
}
