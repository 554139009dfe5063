/*
lib.rs

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

//! Random "Keer op Keer 2" playing boards.
//!
//! The crate builds complete player sheets: a board of colored, connected
//! blocks where no two blocks of the same color touch, plus the layout
//! metadata (scores, axis labels, row categories, and special cells) that a
//! renderer needs to draw the sheet. See the [`generator`] module for the
//! board model and the generation entry points.

#![warn(missing_docs)]

pub mod generator;

pub use generator::block::Block;
pub use generator::coord::Coord;
pub use generator::game_board::GameBoard;
pub use generator::grid::Grid;
pub use generator::layout::Layout;
