/*
grid.rs

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

//! The playing board and its placement rules.
//!
//! A [`Grid`] object holds the blocks of a board with fixed dimensions. Every
//! insertion verifies that the new block does not overlap an existing block,
//! does not touch a block of the same color, and stays within the board.
//! The availability queries tell the generator which cells are still free,
//! overall or for one specific color.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::block::{Block, ColorId};
use super::coord::Coord;

/// Type of errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The block shares a cell with a block already on the board.
    Overlap,

    /// The block touches a block of the same color.
    SameColorNeighbor,

    /// A cell of the block lies outside the board.
    OutOfBounds,

    /// The block is not on the board.
    NotFound,
}

/// The playing board: a fixed-size container of blocks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows.
    height: usize,

    /// Number of columns.
    width: usize,

    /// Blocks on the board, in insertion order.
    blocks: Vec<Block>,
}

impl Grid {
    /// Create an empty board with the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            blocks: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Blocks on the board, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Put a block on the board.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not modify the board, if the
    /// block overlaps an existing block, touches a block of the same color,
    /// or has a cell outside the board. The three checks are independent
    /// preconditions and all must pass.
    pub fn add_block(&mut self, block: Block) -> Result<(), GridError> {
        if self.blocks.iter().any(|b| b.overlaps(&block)) {
            return Err(GridError::Overlap);
        }
        if self.blocks.iter().any(|b| b.neighbors(&block, false, true)) {
            return Err(GridError::SameColorNeighbor);
        }
        if block.coords().iter().any(|c| {
            c.x < 0 || c.y < 0 || c.x as usize >= self.height || c.y as usize >= self.width
        }) {
            return Err(GridError::OutOfBounds);
        }
        self.blocks.push(block);
        Ok(())
    }

    /// Take a block off the board.
    ///
    /// The first block with the same cells and color as the given one is
    /// removed.
    ///
    /// # Errors
    ///
    /// The method returns an error if no such block is on the board.
    pub fn remove_block(&mut self, block: &Block) -> Result<(), GridError> {
        match self.blocks.iter().position(|b| b == block) {
            Some(i) => {
                self.blocks.remove(i);
                Ok(())
            }
            None => Err(GridError::NotFound),
        }
    }

    /// Whether the board carries no cells at all.
    ///
    /// A board with no blocks is empty, and so is a board where every block
    /// has zero cells.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_empty())
    }

    /// Whether every cell of the board is claimed by a block.
    pub fn is_full(&self) -> bool {
        if self.blocks.is_empty() {
            return false;
        }
        self.occupied().len() == self.height * self.width
    }

    /// All the cells claimed by a block.
    fn occupied(&self) -> HashSet<Coord> {
        self.blocks
            .iter()
            .flat_map(|b| b.coords().iter().copied())
            .collect()
    }

    /// Free cells of the board, in row-major order.
    ///
    /// The order is deterministic so that seeded runs are reproducible.
    pub fn coords_available(&self) -> Vec<Coord> {
        let occupied: HashSet<Coord> = self.occupied();
        let mut available: Vec<Coord> = Vec::with_capacity(self.height * self.width);
        for x in 0..self.height {
            for y in 0..self.width {
                let coord: Coord = Coord::new(x as i32, y as i32);
                if !occupied.contains(&coord) {
                    available.push(coord);
                }
            }
        }
        available
    }

    /// Free cells where a block of the given color could claim a cell.
    ///
    /// Free cells that touch a cell of the given color are excluded. This
    /// rules out same-color adjacency before a block is even proposed, which
    /// saves the generator from growing blocks that the board would reject.
    pub fn coords_available_color(&self, color: ColorId) -> Vec<Coord> {
        let mut excluded: HashSet<Coord> = HashSet::new();
        for block in self.blocks.iter().filter(|b| b.color() == color) {
            for coord in block.coords() {
                excluded.extend(coord.neighbors());
            }
        }
        self.coords_available()
            .into_iter()
            .filter(|c| !excluded.contains(c))
            .collect()
    }
}

/// Render the board row by row, with the color of each cell and `-` for the
/// free cells. Debugging convenience only.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut cells: Vec<Vec<ColorId>> = vec![vec![0; self.width]; self.height];
        for block in &self.blocks {
            for coord in block.coords() {
                cells[coord.x as usize][coord.y as usize] = block.color();
            }
        }
        for row in &cells {
            for (i, color) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match color {
                    0 => write!(f, "-")?,
                    c => write!(f, "{c}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
