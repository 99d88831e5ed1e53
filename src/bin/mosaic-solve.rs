//! Batch solver CLI: load a puzzle, solve it or count its solutions, write
//! the result to a file or stdout.

use std::env;
use std::fs;
use std::process;

use mosaic::format;

fn usage() -> ! {
    eprintln!("Usage: mosaic-solve <-s|-c> <input> [<output>]");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        usage();
    }
    let option = args[0].as_str();
    let input = args[1].as_str();
    let output = args.get(2).map(String::as_str);

    let mut grid = match format::load(input) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error loading puzzle from {input}: {e}");
            process::exit(1);
        }
    };

    match option {
        "-s" => {
            match grid.solve() {
                Ok(true) => {}
                Ok(false) => {
                    eprintln!("no solution found for puzzle");
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("cannot solve puzzle: {e}");
                    process::exit(1);
                }
            }
            match output {
                Some(path) => {
                    if let Err(e) = format::save(&grid, path) {
                        eprintln!("error writing {path}: {e}");
                        process::exit(1);
                    }
                }
                None => print!("{grid}"),
            }
        }
        "-c" => {
            let count = match grid.count_solutions() {
                Ok(n) => n,
                Err(e) => {
                    eprintln!("cannot count solutions: {e}");
                    process::exit(1);
                }
            };
            match output {
                Some(path) => {
                    if let Err(e) = fs::write(path, format!("{count}\n")) {
                        eprintln!("error writing {path}: {e}");
                        process::exit(1);
                    }
                }
                None => println!("{count}"),
            }
        }
        other => {
            eprintln!("invalid option {other}");
            usage();
        }
    }
}
