/*
game_board.rs

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

//! Generate random playing boards.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;

use super::block::{Block, BlockError, ColorId};
use super::coord::Coord;
use super::grid::{Grid, GridError};
use super::layout::Layout;

/// Default number of block colors.
const NUM_COLORS: usize = 5;

/// Default upper bound (exclusive) for the random block size.
const MAX_BLOCK_SIZE: usize = 6;

/// Default number of dice cells.
const NUM_DICE: usize = 5;

/// Default number of star cells.
const NUM_STARS: usize = 13;

/// Type of errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The board is not full, but no color has a free cell left.
    Stalled,

    /// Not enough blocks with unmarked cells to place every special marker.
    NotEnoughBlocks,

    /// A grown block broke a block invariant.
    /// This is a bookkeeping bug in the generator.
    Block(BlockError),

    /// The board rejected a grown block.
    /// This is a bookkeeping bug in the generator.
    Grid(GridError),
}

/// [`GameBoard`] object.
///
/// Fills a board with random blocks, then derives the [`Layout`] metadata
/// from the finished board. Generation runs in those two strict phases and
/// is not resumable, but the same object can generate any number of boards:
/// each [`GameBoard::generate`] call starts over from an empty board.
#[derive(Serialize, Debug)]
pub struct GameBoard {
    /// Number of board rows.
    pub height: usize,

    /// Number of board columns.
    pub width: usize,

    /// Number of block colors.
    pub num_colors: usize,

    /// Upper bound (exclusive) for the random block size target.
    pub max_block_size: usize,

    /// Number of dice cells to place.
    pub num_dice: usize,

    /// Number of star cells to place.
    pub num_stars: usize,

    /// The generated board.
    pub grid: Grid,

    /// Presentation metadata derived from the finished board.
    pub layout: Layout,

    /// Number of blocks drawn by the last [`GameBoard::generate`] call.
    #[serde(skip)]
    pub iteration: usize,

    /// Duration in seconds of the last [`GameBoard::generate`] call.
    #[serde(skip)]
    pub duration: f32,

    /// Time when the generation started. Used to compute the
    /// [`GameBoard::duration`].
    #[serde(skip)]
    start: Instant,
}

impl GameBoard {
    /// Create the object with the default game parameters.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            num_colors: NUM_COLORS,
            max_block_size: MAX_BLOCK_SIZE,
            num_dice: NUM_DICE,
            num_stars: NUM_STARS,
            grid: Grid::new(height, width),
            layout: Layout::new(),
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate a complete board.
    ///
    /// Any previously generated board is discarded. With a seeded random
    /// source, the generated board is reproducible end to end.
    ///
    /// # Errors
    ///
    /// The method returns [`GenerateError::Stalled`] when no color can claim
    /// any of the remaining free cells (the random fill painted itself into
    /// a corner; the caller can retry), and
    /// [`GenerateError::NotEnoughBlocks`] when the board has fewer blocks
    /// with unmarked cells than requested markers.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Result<(), GenerateError> {
        self.grid = Grid::new(self.height, self.width);
        self.layout = Layout::new();
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        while !self.grid.is_full() {
            self.draw_block(rng)?;
            self.iteration += 1;
        }

        self.layout.compute(self.height, self.width, rng);
        self.draw_attributes(rng)?;

        self.duration = self.start.elapsed().as_secs_f32();
        debug!("Blocks = {}  Duration = {}", self.iteration, self.duration);
        Ok(())
    }

    /// Grow one block on a random color's free cells and put it on the
    /// board.
    fn draw_block<R: Rng>(&mut self, rng: &mut R) -> Result<(), GenerateError> {
        // Try the colors in random order and keep the first one that still
        // has a free cell. A color without free cells leaves the candidate
        // list, so the search always ends.
        let mut candidates: Vec<ColorId> = (1..=self.num_colors).collect();
        let (color, mut available) = loop {
            if candidates.is_empty() {
                debug!("No color can claim a free cell: generation stalled");
                return Err(GenerateError::Stalled);
            }
            let i: usize = rng.random_range(0..candidates.len());
            let color: ColorId = candidates.swap_remove(i);
            let available: Vec<Coord> = self.grid.coords_available_color(color);
            if !available.is_empty() {
                break (color, available);
            }
            debug!("No free cell left for color {color}");
        };

        let length: usize = rng
            .random_range(0..self.max_block_size.max(1))
            .min(available.len());
        let start: Coord = available.remove(0);
        let coords: Vec<Coord> = Self::draw_connected_coords(start, &mut available, length, rng);
        debug!(
            "Block color {color} seeded at {start}: {} cells (target {length})",
            coords.len()
        );

        let block: Block = Block::new(coords, color).map_err(GenerateError::Block)?;
        self.grid.add_block(block).map_err(GenerateError::Grid)?;
        Ok(())
    }

    /// Grow a connected group of cells from `start`, drawing from the
    /// `available` pool.
    ///
    /// Each round collects every available cell at distance 1 from the
    /// group, with one entry per group cell it touches, and draws the next
    /// cell from that list. A cell touching the group on several sides is
    /// therefore more likely to be drawn, which makes compact blocks more
    /// frequent than snakes. The growth stops early when no available cell
    /// touches the group.
    fn draw_connected_coords<R: Rng>(
        start: Coord,
        available: &mut Vec<Coord>,
        length: usize,
        rng: &mut R,
    ) -> Vec<Coord> {
        let mut connected: Vec<Coord> = vec![start];
        while connected.len() < length {
            let mut neighboring: Vec<Coord> = Vec::new();
            for member in &connected {
                neighboring.extend(
                    available
                        .iter()
                        .copied()
                        .filter(|c| member.distance(*c) == 1),
                );
            }
            match neighboring.choose(rng) {
                Some(&next) => {
                    connected.push(next);
                    available.retain(|c| *c != next);
                }
                None => break,
            }
        }
        connected
    }

    /// Place the dice and star markers on the finished board.
    fn draw_attributes<R: Rng>(&mut self, rng: &mut R) -> Result<(), GenerateError> {
        let mut claimed: HashSet<Coord> = HashSet::new();
        self.layout.dice = Self::draw_marker_coords(&self.grid, self.num_dice, &mut claimed, rng)?;
        self.layout.star = Self::draw_marker_coords(&self.grid, self.num_stars, &mut claimed, rng)?;
        Ok(())
    }

    /// Draw `count` marked cells, each from a distinct block.
    ///
    /// A drawn block leaves the pool whether or not it has unmarked cells
    /// left, so one block carries at most one marker of each kind. The
    /// `claimed` set is shared between the kinds, so a cell never carries
    /// two markers.
    fn draw_marker_coords<R: Rng>(
        grid: &Grid,
        count: usize,
        claimed: &mut HashSet<Coord>,
        rng: &mut R,
    ) -> Result<Vec<Coord>, GenerateError> {
        // Blocks that still have an unmarked cell
        let mut pool: Vec<usize> = (0..grid.blocks().len())
            .filter(|i| {
                grid.blocks()[*i]
                    .coords()
                    .iter()
                    .any(|c| !claimed.contains(c))
            })
            .collect();

        let mut coords: Vec<Coord> = Vec::with_capacity(count);
        while coords.len() < count {
            if pool.is_empty() {
                debug!("Only {} of {count} markers could be placed", coords.len());
                return Err(GenerateError::NotEnoughBlocks);
            }
            let i: usize = rng.random_range(0..pool.len());
            let block: &Block = &grid.blocks()[pool.swap_remove(i)];
            let free: Vec<Coord> = block
                .coords()
                .iter()
                .copied()
                .filter(|c| !claimed.contains(c))
                .collect();
            if let Some(&coord) = free.choose(rng) {
                claimed.insert(coord);
                coords.push(coord);
            }
        }
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generated(seed: u64) -> GameBoard {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let mut game_board: GameBoard = GameBoard::new(20, 13);
        game_board.generate(&mut rng).expect("default parameters");
        game_board
    }

    #[test]
    fn generate_fills_the_board() {
        let game_board: GameBoard = generated(42);
        assert!(game_board.grid.is_full());
        assert!(game_board.iteration > 0);

        let mut occupied: HashSet<Coord> = HashSet::new();
        for block in game_board.grid.blocks() {
            assert!(!block.is_empty());
            assert!(block.len() < MAX_BLOCK_SIZE);
            assert!(block.color() >= 1 && block.color() <= NUM_COLORS);
            assert!(Block::is_connected(block.coords()));
            for coord in block.coords() {
                // No two blocks share a cell
                assert!(occupied.insert(*coord));
            }
        }
        assert_eq!(occupied.len(), 20 * 13);
    }

    #[test]
    fn generated_blocks_never_touch_their_color() {
        let game_board: GameBoard = generated(7);
        let blocks: &[Block] = game_board.grid.blocks();
        for (i, block) in blocks.iter().enumerate() {
            for other in &blocks[i + 1..] {
                assert!(!block.neighbors(other, false, true));
            }
        }
    }

    #[test]
    fn generate_places_the_markers() {
        let game_board: GameBoard = generated(3);
        assert_eq!(game_board.layout.dice.len(), NUM_DICE);
        assert_eq!(game_board.layout.star.len(), NUM_STARS);

        // Markers never share a cell, within a kind or across kinds
        let mut claimed: HashSet<Coord> = HashSet::new();
        for coord in game_board
            .layout
            .dice
            .iter()
            .chain(game_board.layout.star.iter())
        {
            assert!(claimed.insert(*coord));
            // Every marker sits on a block
            assert!(
                game_board
                    .grid
                    .blocks()
                    .iter()
                    .any(|b| b.contains(*coord))
            );
        }

        // Within a kind, every marker sits on a distinct block
        for kind in [&game_board.layout.dice, &game_board.layout.star] {
            let mut blocks_used: HashSet<usize> = HashSet::new();
            for coord in kind {
                let owner: usize = game_board
                    .grid
                    .blocks()
                    .iter()
                    .position(|b| b.contains(*coord))
                    .expect("marker on a block");
                assert!(blocks_used.insert(owner));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let first: GameBoard = generated(12345);
        let second: GameBoard = generated(12345);
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.layout, second.layout);
    }

    #[test]
    fn single_color_stalls_on_a_small_board() {
        // With one color and single-cell blocks, the third block has no
        // legal cell left on a 2x2 board: the free cells all touch a
        // same-colored block.
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut game_board: GameBoard = GameBoard::new(2, 2);
        game_board.num_colors = 1;
        game_board.max_block_size = 1;
        assert_eq!(game_board.generate(&mut rng), Err(GenerateError::Stalled));
    }

    #[test]
    fn single_cell_board_generates() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut game_board: GameBoard = GameBoard::new(1, 1);
        game_board.num_colors = 1;
        game_board.num_dice = 1;
        game_board.num_stars = 0;
        game_board.generate(&mut rng).expect("one cell, one block");
        assert!(game_board.grid.is_full());
        assert_eq!(game_board.layout.dice.len(), 1);
        assert!(game_board.layout.star.is_empty());
    }

    #[test]
    fn too_many_markers_fail() {
        // A 2x2 board holds at most four blocks, far fewer than the default
        // five dice and thirteen stars.
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let mut game_board: GameBoard = GameBoard::new(2, 2);
        assert_eq!(
            game_board.generate(&mut rng),
            Err(GenerateError::NotEnoughBlocks)
        );
    }
}
