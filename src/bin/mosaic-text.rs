//! Line-oriented interactive client. Reads one command per line; malformed
//! input is reported and the session continues.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use mosaic::{Color, Grid, Status, UNCONSTRAINED, format};

const HELP: &str = "\
actions:
- 'w <row> <col>' paint square white
- 'b <row> <col>' paint square black
- 'e <row> <col>' wipe square back to empty
- 'z' undo
- 'y' redo
- 'r' restart
- 's <filename>' save
- 'h' help
- 'q' quit";

fn report_errors(grid: &Grid) {
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            let constrained = grid
                .constraint(i, j)
                .is_ok_and(|n| n != UNCONSTRAINED);
            if constrained && grid.status(i, j).is_ok_and(|s| s == Status::Error) {
                println!("constraint at ({i}, {j}) cannot be satisfied");
            }
        }
    }
}

fn parse_cell(parts: &[&str]) -> Option<(usize, usize)> {
    let row = parts.first()?.parse().ok()?;
    let col = parts.get(1)?.parse().ok()?;
    Some((row, col))
}

fn main() {
    let mut grid = match env::args().nth(1) {
        Some(path) => match format::load(&path) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("failed to load puzzle from {path}: {e}");
                process::exit(1);
            }
        },
        None => Grid::default_puzzle(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !grid.is_won() {
        print!("{grid}");
        report_errors(&grid);
        println!("type a command ([h] for help):");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            // End of input; leave quietly.
            return;
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["h"] => println!("{HELP}"),
            ["q"] => {
                println!("giving up already?");
                return;
            }
            ["r"] => grid.restart(),
            ["z"] => grid.undo(),
            ["y"] => grid.redo(),
            ["s", path] => match format::save(&grid, path) {
                Ok(()) => println!("saved to {path}"),
                Err(e) => eprintln!("failed to save to {path}: {e}"),
            },
            [cmd @ ("w" | "b" | "e"), rest @ ..] => {
                let Some((row, col)) = parse_cell(rest) else {
                    eprintln!("expected two cell coordinates, e.g. `{cmd} 1 2`");
                    continue;
                };
                let color = match *cmd {
                    "w" => Color::White,
                    "b" => Color::Black,
                    _ => Color::Empty,
                };
                if let Err(e) = grid.play_move(row, col, color) {
                    eprintln!("invalid move: {e}");
                }
            }
            _ => eprintln!("unknown command {line:?} ([h] for help)"),
        }
    }

    print!("{grid}");
    println!("congratulations, puzzle solved!");
}
