/*
coord.rs

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

//! Cell coordinates on the playing board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position on the playing board.
///
/// [`Coord::x`] is the row index and [`Coord::y`] is the column index.
/// Coordinates are plain values: two [`Coord`] objects with the same `x` and
/// `y` are equal and hash identically, so coordinates can be used as
/// [`std::collections::HashSet`] members.
///
/// Coordinates are not bounded. The board verifies the bounds itself when a
/// block is inserted.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index.
    pub x: i32,

    /// Column index.
    pub y: i32,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Coord {
    /// Create a [`Coord`] object.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the four positions adjacent to this one.
    ///
    /// The order is fixed so that seeded runs are reproducible.
    pub fn neighbors(&self) -> [Coord; 4] {
        [
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x, self.y - 1),
            Coord::new(self.x, self.y + 1),
        ]
    }

    /// Return the Manhattan distance to the given position.
    ///
    /// Two coordinates are adjacent when their distance is exactly 1.
    pub fn distance(&self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_of_origin() {
        assert_eq!(
            Coord::new(0, 0).neighbors(),
            [
                Coord::new(-1, 0),
                Coord::new(1, 0),
                Coord::new(0, -1),
                Coord::new(0, 1),
            ]
        );
    }

    #[test]
    fn distance_is_manhattan() {
        assert_eq!(Coord::new(0, 0).distance(Coord::new(0, 0)), 0);
        assert_eq!(Coord::new(0, 0).distance(Coord::new(0, 1)), 1);
        assert_eq!(Coord::new(0, 0).distance(Coord::new(1, 1)), 2);
        assert_eq!(Coord::new(2, 3).distance(Coord::new(-1, 5)), 5);
    }

    #[test]
    fn equal_coords_hash_identically() {
        let mut set: HashSet<Coord> = HashSet::new();
        set.insert(Coord::new(3, 4));
        set.insert(Coord::new(3, 4));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Coord::new(3, 4)));
    }
}
