//! Mosaic logic-puzzle engine.
//!
//! A puzzle is a rectangular grid of cells, each Empty, Black or White, some
//! bearing a numeric constraint on the black-cell count in their
//! neighborhood. The engine owns the grid model, neighbor counting under the
//! wrapping and neighborhood-shape options, per-cell status evaluation, move
//! history with undo/redo, an exhaustive solver/solution counter, a random
//! puzzle generator and the persisted text format. Everything is
//! single-threaded and synchronous; graphical or interactive clients sit on
//! top of this API.

pub mod error;
pub mod format;
pub mod generator;
mod grid;
mod history;
mod neighbors;
mod solver;
mod status;

pub use error::{FormatError, GridError, Result};
pub use generator::{random_puzzle, random_puzzle_with};
pub use grid::{Color, DEFAULT_SIZE, Grid, MAX_CONSTRAINT, Neighbourhood, UNCONSTRAINED};
pub use history::Move;
pub use neighbors::Direction;
pub use status::Status;
