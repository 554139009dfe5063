/*
cli_options.rs

Copyright 2026 The Keeropkeer Authors

This file is part of Keeropkeer.

Keeropkeer is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Keeropkeer is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Keeropkeer. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Keeropkeer generates random "Keer op Keer 2" player sheets: a board of
//! colored blocks plus the layout metadata (scores, labels, and special
//! cells) that a renderer needs to draw the sheet.
//!
//! # Examples
//!
//! Generate one board with the standard game parameters and print it:
//!
//! ```
//! $ keeropkeer
//! Colors: 1=red 2=blue 3=green 4=orange 5=yellow
//!
//! 2 2 4 4 4 1 1 3 3 3 2 2 2
//! 5 2 2 4 1 1 5 5 3 2 2 4 2
//! ...
//!
//! Start column: 6
//! ```
//!
//! Generate a reproducible board for a renderer, as JSON:
//!
//! ```
//! $ keeropkeer --seed 42 --json
//! {"height":20,"width":13,...,"grid":{...},"layout":{...}}
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::fmt;
use strum_macros::FromRepr;

use keeropkeer::GameBoard;

// Number of failed generation attempts after which the command gives up.
// Parameters that leave no room to the fill algorithm would otherwise make
// the retry loop spin forever.
const MAX_ERRORS: usize = 100;

/// Palette names of the block colors on the printed sheets.
#[derive(Debug, Copy, Clone, FromRepr)]
#[repr(usize)]
enum ColorName {
    Red = 1,
    Blue,
    Green,
    Orange,
    Yellow,
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorName::Red => write!(f, "red"),
            ColorName::Blue => write!(f, "blue"),
            ColorName::Green => write!(f, "green"),
            ColorName::Orange => write!(f, "orange"),
            ColorName::Yellow => write!(f, "yellow"),
        }
    }
}

/// Build random Keer op Keer 2 boards.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of board rows
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Number of board columns
    #[arg(long, default_value_t = 13)]
    width: usize,

    /// Number of block colors
    #[arg(long, default_value_t = 5)]
    colors: usize,

    /// Upper bound (exclusive) for the random block size
    #[arg(long, default_value_t = 6)]
    max_block_size: usize,

    /// Number of dice cells
    #[arg(long, default_value_t = 5)]
    dice: usize,

    /// Number of star cells
    #[arg(long, default_value_t = 13)]
    stars: usize,

    /// Seed for the random source, for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Number of boards to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the boards as JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the boards
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and generate the requested boards.
///
/// Return the command exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut game_board: GameBoard = GameBoard::new(args.height, args.width);
    game_board.num_colors = args.colors;
    game_board.max_block_size = args.max_block_size;
    game_board.num_dice = args.dice;
    game_board.num_stars = args.stars;

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut blocks: usize = 0;
    let mut errors: usize = 0;
    let mut i: usize = 0;
    while i < args.count {
        debug!("Board {i}");

        match game_board.generate(&mut rng) {
            Ok(()) => {
                total += game_board.duration;
                if game_board.duration > max {
                    max = game_board.duration;
                }
                blocks += game_board.iteration;

                if args.json {
                    match serde_json::to_string(&game_board) {
                        Ok(s) => println!("{s}"),
                        Err(e) => {
                            eprintln!("Cannot serialize the board: {e}");
                            return 1;
                        }
                    }
                } else {
                    print_board(&game_board);
                }
                i += 1;
            }

            Err(e) => {
                // The random fill painted itself into a corner, or the board
                // cannot hold the requested markers. Count the failure and
                // try again with a fresh board.
                errors += 1;
                debug!("ERROR generating a random board: {e:?}");
                if errors >= MAX_ERRORS {
                    eprintln!("Giving up after {errors} failed attempts: {e:?}");
                    return 1;
                }
            }
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s
      blocks = {}
      errors = {}",
            total,
            total / args.count as f32,
            max,
            blocks,
            errors
        );
    }
    0
}

/// Print a generated board and its layout as text.
fn print_board(game_board: &GameBoard) {
    let mut legend: String = String::new();
    for color in 1..=game_board.num_colors {
        match ColorName::from_repr(color) {
            Some(name) => legend.push_str(&format!(" {color}={name}")),
            None => legend.push_str(&format!(" {color}")),
        }
    }
    println!("Colors:{legend}");
    println!();
    print!("{}", game_board.grid);
    println!();

    println!("Start column: {}", game_board.layout.start_column);
    println!("Column names: {:?}", game_board.layout.col_names);
    println!("Row names: {:?}", game_board.layout.row_names);
    println!("Row scores: {:?}", game_board.layout.row_scores);
    println!(
        "Column scores (first): {:?}",
        game_board.layout.col_scores_top
    );
    println!(
        "Column scores (next): {:?}",
        game_board.layout.col_scores_bottom
    );
    println!("Row attributes: {:?}", game_board.layout.row_attributes);

    print!("Dice cells:");
    for coord in &game_board.layout.dice {
        print!(" {coord}");
    }
    println!();

    print!("Star cells:");
    for coord in &game_board.layout.star {
        print!(" {coord}");
    }
    println!();
}
