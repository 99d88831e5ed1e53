//! Random solvable puzzle generation: sample a full coloring, pin a subset
//! of cells to their observed black-neighbor counts, then validate the
//! candidate with the win check.

use rand::Rng;

use crate::error::{GridError, Result};
use crate::grid::{Color, Grid, Neighbourhood};

/// Generates a random puzzle with `rand::thread_rng()`. See
/// [`random_puzzle_with`].
#[allow(clippy::too_many_arguments)]
pub fn random_puzzle(
    rows: usize,
    cols: usize,
    wrapping: bool,
    neigh: Neighbourhood,
    with_solution: bool,
    black_rate: f64,
    constraint_rate: f64,
) -> Result<Option<Grid>> {
    random_puzzle_with(
        &mut rand::thread_rng(),
        rows,
        cols,
        wrapping,
        neigh,
        with_solution,
        black_rate,
        constraint_rate,
    )
}

/// Generates a random puzzle of the given shape and options.
///
/// Every cell is colored Black with probability `black_rate` (White
/// otherwise), then `round(constraint_rate * rows * cols)` cells are picked
/// uniformly at random — with replacement, so duplicates collapse — and each
/// picked cell's constraint is set to its current black-neighbor count,
/// which satisfies it by construction.
///
/// Returns `Ok(None)` when the sampled candidate does not validate as won;
/// callers retry. On success, returns the solved grid when `with_solution`
/// is true, or the same grid restarted to all-Empty (a fresh puzzle with a
/// known-solvable constraint set) when false.
///
/// Both rates must lie in `[0, 1]`.
#[allow(clippy::too_many_arguments)]
pub fn random_puzzle_with<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    wrapping: bool,
    neigh: Neighbourhood,
    with_solution: bool,
    black_rate: f64,
    constraint_rate: f64,
) -> Result<Option<Grid>> {
    if !(0.0..=1.0).contains(&black_rate) {
        return Err(GridError::InvalidRate(black_rate));
    }
    if !(0.0..=1.0).contains(&constraint_rate) {
        return Err(GridError::InvalidRate(constraint_rate));
    }

    let mut grid = Grid::new_empty_ext(rows, cols, wrapping, neigh)?;

    for row in 0..rows {
        for col in 0..cols {
            let color = if rng.gen_bool(black_rate) {
                Color::Black
            } else {
                Color::White
            };
            grid.set_color(row, col, color)?;
        }
    }

    let picks = (constraint_rate * (rows * cols) as f64).round() as usize;
    for _ in 0..picks {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let blacks = grid.count_neighbors(row, col, Color::Black)?;
        grid.set_constraint(row, col, blacks as i8)?;
    }

    if !grid.is_won() {
        return Ok(None);
    }

    if !with_solution {
        grid.restart();
    }
    Ok(Some(grid))
}
