/*
block.rs

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

//! Colored blocks of connected cells.
//!
//! A [`Block`] object owns an ordered list of distinct coordinates and a
//! color. After every successful operation, the coordinates are either empty
//! or form a single connected component under 4-neighbor adjacency. Failed
//! operations leave the block unchanged: every mutation builds and validates
//! a candidate state before committing it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::coord::Coord;

/// Color identifier.
///
/// Real colors start at 1. The value 0 marks an uncolored block.
pub type ColorId = usize;

/// Type of errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockError {
    /// The coordinate is already part of the block.
    DuplicateCoordinate,

    /// The coordinates would not form one connected component.
    NotConnected,

    /// The coordinate is not part of the block.
    NotFound,
}

/// A group of connected cells sharing one color.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Block {
    /// Cells as an ordered list of coordinates.
    coords: Vec<Coord>,

    /// Stores the membership of the coordinates.
    /// Instead of looking for a coordinate in the [`Block::coords`] vector,
    /// this [`std::collections::HashSet`] speeds up the lookup.
    members: HashSet<Coord>,

    /// Block color.
    color: ColorId,
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords && self.color == other.color
    }
}

impl Block {
    /// Create a [`Block`] object from an initial list of cells.
    ///
    /// # Errors
    ///
    /// The method returns an error if the list contains a coordinate twice,
    /// or if the cells do not form one connected component. An empty list is
    /// valid and produces the canonical empty block.
    pub fn new(coords: Vec<Coord>, color: ColorId) -> Result<Self, BlockError> {
        let members: HashSet<Coord> = coords.iter().copied().collect();
        if members.len() != coords.len() {
            return Err(BlockError::DuplicateCoordinate);
        }
        if !coords.is_empty() && !Self::is_connected(&coords) {
            return Err(BlockError::NotConnected);
        }
        Ok(Self {
            coords,
            members,
            color,
        })
    }

    /// Whether the given cells form one connected component.
    ///
    /// The traversal starts from the first coordinate and expands through the
    /// neighbor links that are themselves in the list. The cells are
    /// connected when every coordinate has been visited. An empty list is not
    /// connected; a single cell is trivially connected. Duplicated
    /// coordinates do not change the result.
    pub fn is_connected(coords: &[Coord]) -> bool {
        let first: Coord = match coords.first() {
            Some(c) => *c,
            None => return false,
        };
        let distinct: HashSet<Coord> = coords.iter().copied().collect();
        if distinct.len() == 1 {
            return true;
        }

        let mut seen: HashSet<Coord> = HashSet::with_capacity(distinct.len());
        let mut frontier: Vec<Coord> = vec![first];
        while let Some(coord) = frontier.pop() {
            seen.insert(coord);
            frontier.extend(
                coord
                    .neighbors()
                    .into_iter()
                    .filter(|n| distinct.contains(n) && !seen.contains(n)),
            );
        }
        seen.len() == distinct.len()
    }

    /// Whether the block has no cells.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of cells in the block.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Cells of the block, in insertion order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Whether the given cell is part of the block.
    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }

    /// Color of the block.
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Set the color of the block.
    pub fn set_color(&mut self, color: ColorId) {
        self.color = color;
    }

    /// Add a cell to the block.
    ///
    /// The new cell does not have to touch one specific existing cell: it can
    /// bridge several of them. Only the connectivity of the resulting block
    /// matters.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not modify the block, if the
    /// cell is already present or if the grown block would not be connected.
    pub fn add_coord(&mut self, coord: Coord) -> Result<(), BlockError> {
        if self.members.contains(&coord) {
            return Err(BlockError::DuplicateCoordinate);
        }
        let mut candidate: Vec<Coord> = self.coords.clone();
        candidate.push(coord);
        if !Self::is_connected(&candidate) {
            return Err(BlockError::NotConnected);
        }
        self.coords = candidate;
        self.members.insert(coord);
        Ok(())
    }

    /// Add a batch of cells to the block, all or nothing.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not modify the block, if the
    /// batch combined with the existing cells contains any coordinate twice,
    /// or if the combined cells would not be connected.
    pub fn add_coords(&mut self, coords: &[Coord]) -> Result<(), BlockError> {
        let mut candidate: Vec<Coord> = self.coords.clone();
        candidate.extend_from_slice(coords);
        let distinct: HashSet<Coord> = candidate.iter().copied().collect();
        if distinct.len() != candidate.len() {
            return Err(BlockError::DuplicateCoordinate);
        }
        if !Self::is_connected(&candidate) {
            return Err(BlockError::NotConnected);
        }
        self.coords = candidate;
        self.members = distinct;
        Ok(())
    }

    /// Remove a cell from the block.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not modify the block, if the
    /// cell is not part of the block, or if the remaining cells would be
    /// neither empty nor connected.
    pub fn remove_coord(&mut self, coord: Coord) -> Result<(), BlockError> {
        if !self.members.contains(&coord) {
            return Err(BlockError::NotFound);
        }
        let candidate: Vec<Coord> = self
            .coords
            .iter()
            .copied()
            .filter(|c| *c != coord)
            .collect();
        if !candidate.is_empty() && !Self::is_connected(&candidate) {
            return Err(BlockError::NotConnected);
        }
        self.coords = candidate;
        self.members.remove(&coord);
        Ok(())
    }

    /// Remove a batch of cells from the block, all or nothing.
    ///
    /// # Errors
    ///
    /// The method returns an error, and does not modify the block, if any
    /// cell of the batch is not part of the block, or if the remaining cells
    /// would be neither empty nor connected.
    pub fn remove_coords(&mut self, coords: &[Coord]) -> Result<(), BlockError> {
        if coords.iter().any(|c| !self.members.contains(c)) {
            return Err(BlockError::NotFound);
        }
        let removed: HashSet<Coord> = coords.iter().copied().collect();
        let candidate: Vec<Coord> = self
            .coords
            .iter()
            .copied()
            .filter(|c| !removed.contains(c))
            .collect();
        if !candidate.is_empty() && !Self::is_connected(&candidate) {
            return Err(BlockError::NotConnected);
        }
        self.members = candidate.iter().copied().collect();
        self.coords = candidate;
        Ok(())
    }

    /// Whether the block shares at least one cell with the other block.
    ///
    /// A non-empty block overlaps itself. An empty block overlaps nothing.
    pub fn overlaps(&self, other: &Block) -> bool {
        self.coords.iter().any(|c| other.members.contains(c))
    }

    /// Whether the block touches the other block.
    ///
    /// Two blocks are neighbors when the union of their cells is one
    /// connected component and their coordinate lists are not identical. The
    /// connectivity test on the union is the adjacency test: two disjoint
    /// connected shapes touch exactly when their union is itself one
    /// connected shape.
    ///
    /// An empty block is nobody's neighbor. With `same_color`, blocks of
    /// different colors are not neighbors. Unless `overlap_allowed`,
    /// overlapping blocks are not neighbors.
    pub fn neighbors(&self, other: &Block, overlap_allowed: bool, same_color: bool) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if same_color && self.color != other.color {
            return false;
        }
        if !overlap_allowed && self.overlaps(other) {
            return false;
        }
        if self.coords == other.coords {
            return false;
        }
        let union: Vec<Coord> = self
            .coords
            .iter()
            .chain(other.coords.iter())
            .copied()
            .collect();
        Self::is_connected(&union)
    }
}

/// Render the block over its bounding box, with `-` for the positions that
/// are not part of the block. Debugging convenience only.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coords.is_empty() {
            return write!(f, "[]");
        }
        let min_x: i32 = self.coords.iter().map(|c| c.x).min().unwrap_or(0);
        let max_x: i32 = self.coords.iter().map(|c| c.x).max().unwrap_or(0);
        let min_y: i32 = self.coords.iter().map(|c| c.y).min().unwrap_or(0);
        let max_y: i32 = self.coords.iter().map(|c| c.y).max().unwrap_or(0);

        for x in min_x..=max_x {
            for y in min_y..=max_y {
                if y > min_y {
                    write!(f, " ")?;
                }
                if self.members.contains(&Coord::new(x, y)) {
                    write!(f, "{}", self.color)?;
                } else {
                    write!(f, "-")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
