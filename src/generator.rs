/*
generator.rs

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

//! Board model and random board generation.
//!
//! A playing board is a [`grid::Grid`] object: colored blocks of connected
//! cells ([`block::Block`] objects built from [`coord::Coord`] positions),
//! placed so that no two blocks overlap and no two blocks of the same color
//! touch. The grid enforces those rules on every insertion; the blocks
//! themselves guarantee that their cells always form one connected shape.
//!
//! To build a playing board, create a [`game_board::GameBoard`] object and
//! use its [`game_board::GameBoard::generate`] method with a random source.
//! The method fills the board with random blocks, then derives the
//! [`layout::Layout`] metadata (scores, axis labels, row categories, and
//! special cells) that a renderer needs to draw the complete player sheet.
//! With a seeded random source, the board and its layout are reproducible.

pub mod block;
pub mod coord;
pub mod game_board;
pub mod grid;
pub mod layout;
