//! Persisted puzzle text format.
//!
//! Line 1 holds four whitespace-separated integers: `rows cols wrapping
//! neighbourhood` (wrapping 0|1, neighbourhood 0..=3). Each of the next
//! `rows` lines holds exactly `cols` two-character tokens with no
//! separators: a constraint character (`-` or a digit) followed by a color
//! character (`e`, `w` or `b`). Parsing fails clean — no partial grid is
//! ever returned.

use std::fs;
use std::path::Path;

use crate::error::{FormatError, GridError, Result};
use crate::grid::{Color, Grid, Neighbourhood, UNCONSTRAINED};

pub(crate) fn constraint_char(n: i8) -> char {
    if n == UNCONSTRAINED {
        '-'
    } else {
        (b'0' + n as u8) as char
    }
}

pub(crate) fn color_char(c: Color) -> char {
    match c {
        Color::Empty => 'e',
        Color::White => 'w',
        Color::Black => 'b',
    }
}

fn color_from_char(ch: char) -> Option<Color> {
    match ch {
        'e' => Some(Color::Empty),
        'w' => Some(Color::White),
        'b' => Some(Color::Black),
        _ => None,
    }
}

/// Parses a grid from puzzle-format text.
pub fn parse(text: &str) -> Result<Grid> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(FormatError::BadHeader)?;
    let fields: Vec<i64> = header
        .split_whitespace()
        .map(|f| f.parse::<i64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| FormatError::BadHeader)?;
    let &[rows, cols, wrapping, neigh] = fields.as_slice() else {
        return Err(FormatError::BadHeader.into());
    };
    if rows <= 0 || cols <= 0 {
        return Err(GridError::EmptyDimensions);
    }
    let (rows, cols) = (rows as usize, cols as usize);
    let wrapping = match wrapping {
        0 => false,
        1 => true,
        other => return Err(FormatError::BadWrapping(other).into()),
    };
    let neigh = Neighbourhood::from_index(neigh).ok_or(FormatError::BadNeighbourhood(neigh))?;

    // Sized by the rows actually read, never by the header's claim: a
    // malformed header must fail clean, not drive an allocation.
    let mut constraints = Vec::new();
    let mut colors = Vec::new();
    for row in 0..rows {
        let line = lines.next().ok_or(FormatError::MissingRow(row))?;
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != 2 * cols {
            return Err(FormatError::RowLength {
                row,
                expected: 2 * cols,
                found: chars.len(),
            }
            .into());
        }
        for col in 0..cols {
            let n_ch = chars[2 * col];
            let c_ch = chars[2 * col + 1];
            let n = match n_ch {
                '-' => UNCONSTRAINED,
                '0'..='9' => (n_ch as u8 - b'0') as i8,
                _ => {
                    return Err(FormatError::BadConstraintChar {
                        ch: n_ch,
                        row,
                        col,
                    }
                    .into());
                }
            };
            let c = color_from_char(c_ch).ok_or(FormatError::BadColorChar {
                ch: c_ch,
                row,
                col,
            })?;
            constraints.push(n);
            colors.push(c);
        }
    }

    Grid::new_ext(rows, cols, &constraints, Some(&colors), wrapping, neigh)
}

/// Serializes a grid to puzzle-format text (inverse of [`parse`]).
pub fn serialize(grid: &Grid) -> String {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut out = String::with_capacity(16 + rows * (2 * cols + 1));
    out.push_str(&format!(
        "{} {} {} {}\n",
        rows,
        cols,
        grid.is_wrapping() as u8,
        grid.neighbourhood().as_index()
    ));
    for row in 0..rows {
        for col in 0..cols {
            let idx = row * cols + col;
            out.push(constraint_char(grid.constraints[idx]));
            out.push(color_char(grid.colors[idx]));
        }
        out.push('\n');
    }
    out
}

/// Loads a grid from a puzzle file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Writes a grid to a puzzle file, overwriting any existing content.
pub fn save<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    fs::write(path, serialize(grid))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_round_trip(grid: &Grid) {
        let text = serialize(grid);
        let back = parse(&text).expect("serialized grid must parse");
        assert_eq!(&back, grid);
    }

    #[test]
    fn default_puzzle_round_trips() {
        assert_round_trip(&Grid::default_puzzle());
        assert_round_trip(&Grid::default_solution());
    }

    #[test]
    fn empty_7x6_round_trips() {
        let g = Grid::new_empty_ext(7, 6, false, Neighbourhood::Full).unwrap();
        let back = parse(&serialize(&g)).unwrap();
        assert_eq!((back.rows(), back.cols()), (7, 6));
        assert!(!back.is_wrapping());
        assert_eq!(back.neighbourhood(), Neighbourhood::Full);
        for i in 0..7 {
            for j in 0..6 {
                assert_eq!(back.color(i, j).unwrap(), Color::Empty);
                assert_eq!(back.constraint(i, j).unwrap(), UNCONSTRAINED);
            }
        }
        assert_eq!(back, g);
    }

    #[test]
    fn options_round_trip() {
        for wrapping in [false, true] {
            for neigh in [
                Neighbourhood::Full,
                Neighbourhood::Ortho,
                Neighbourhood::FullExcludeSelf,
                Neighbourhood::OrthoExcludeSelf,
            ] {
                let mut g = Grid::new_empty_ext(2, 3, wrapping, neigh).unwrap();
                g.set_constraint(1, 2, 4).unwrap();
                g.set_color(0, 0, Color::Black).unwrap();
                g.set_color(0, 1, Color::White).unwrap();
                assert_round_trip(&g);
            }
        }
    }

    #[test]
    fn generated_puzzle_round_trips() {
        use rand::SeedableRng;
        let g = crate::generator::random_puzzle_with(
            &mut rand::rngs::StdRng::seed_from_u64(42),
            4,
            4,
            true,
            Neighbourhood::Ortho,
            true,
            0.4,
            0.5,
        )
        .unwrap()
        .unwrap();
        assert_round_trip(&g);
    }

    #[test]
    fn parse_known_text() {
        let g = parse("2 2 1 1\n0e-b\n-w9e\n").unwrap();
        assert!(g.is_wrapping());
        assert_eq!(g.neighbourhood(), Neighbourhood::Ortho);
        assert_eq!(g.constraint(0, 0).unwrap(), 0);
        assert_eq!(g.constraint(0, 1).unwrap(), UNCONSTRAINED);
        assert_eq!(g.constraint(1, 1).unwrap(), 9);
        assert_eq!(g.color(0, 1).unwrap(), Color::Black);
        assert_eq!(g.color(1, 0).unwrap(), Color::White);
        assert_eq!(g.color(1, 1).unwrap(), Color::Empty);
    }

    #[test]
    fn header_must_be_four_integers() {
        for text in ["", "2 2 0\n", "2 2 0 0 7\n", "a b c d\n", "2 2 zero 0\n"] {
            let err = parse(text).unwrap_err();
            assert!(
                matches!(err, GridError::Format(FormatError::BadHeader)),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn bad_option_values_rejected() {
        assert!(matches!(
            parse("2 2 2 0\n-e-e\n-e-e\n").unwrap_err(),
            GridError::Format(FormatError::BadWrapping(2))
        ));
        assert!(matches!(
            parse("2 2 0 4\n-e-e\n-e-e\n").unwrap_err(),
            GridError::Format(FormatError::BadNeighbourhood(4))
        ));
        assert!(matches!(
            parse("0 2 0 0\n").unwrap_err(),
            GridError::EmptyDimensions
        ));
    }

    #[test]
    fn bad_cell_tokens_rejected() {
        assert!(matches!(
            parse("1 2 0 0\n*e-e\n").unwrap_err(),
            GridError::Format(FormatError::BadConstraintChar { ch: '*', .. })
        ));
        assert!(matches!(
            parse("1 2 0 0\n-e-x\n").unwrap_err(),
            GridError::Format(FormatError::BadColorChar { ch: 'x', col: 1, .. })
        ));
    }

    #[test]
    fn huge_header_dimensions_fail_clean() {
        // A header can claim any dimensions; only the body rows actually
        // present may cost memory. Overflowing products and exabyte-scale
        // claims must come back as errors, not aborts.
        assert!(matches!(
            parse("4611686018427387904 4 0 0\n").unwrap_err(),
            GridError::Format(FormatError::MissingRow(0))
        ));
        assert!(matches!(
            parse("1000000 1000000 0 0\n-e-e\n").unwrap_err(),
            GridError::Format(FormatError::RowLength { row: 0, .. })
        ));
        assert!(parse("9223372036854775807 9223372036854775807 0 0\n").is_err());
    }

    #[test]
    fn truncated_body_rejected() {
        assert!(matches!(
            parse("3 2 0 0\n-e-e\n-e-e\n").unwrap_err(),
            GridError::Format(FormatError::MissingRow(2))
        ));
        assert!(matches!(
            parse("1 3 0 0\n-e-e\n").unwrap_err(),
            GridError::Format(FormatError::RowLength {
                row: 0,
                expected: 6,
                found: 4
            })
        ));
    }

    #[test]
    fn save_and_load_files() {
        let mut path = std::env::temp_dir();
        path.push(format!("mosaic_format_test_{}.txt", std::process::id()));
        let g = Grid::default_solution();
        save(&g, &path).unwrap();
        let back = load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(back, g);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load("/nonexistent/mosaic/puzzle.txt").unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
