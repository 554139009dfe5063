/*
layout.rs

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

//! Presentation metadata derived from a finished board.
//!
//! The renderer does not compute anything itself: scores, axis labels, row
//! categories, and the positions of the special cells all come from a
//! [`Layout`] object, which is filled once the board generation is complete.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Points awarded for completing a row.
const ROW_SCORE: usize = 5;

/// Scores, labels, and special cells of a finished board.
///
/// The fields are filled by [`Layout::compute`], except the marker lists
/// ([`Layout::dice`] and [`Layout::star`]) which the generator draws from the
/// finished board.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Layout {
    /// Column where every player starts.
    pub start_column: usize,

    /// Column labels, left to right.
    pub col_names: Vec<usize>,

    /// Row labels, top to bottom.
    /// The numbering continues after the last column label.
    pub row_names: Vec<usize>,

    /// Points awarded for each completed row.
    pub row_scores: Vec<usize>,

    /// Points of each column for the first player to complete it.
    pub col_scores_top: Vec<usize>,

    /// Points of each column for the following players.
    pub col_scores_bottom: Vec<usize>,

    /// Category of each row (1, 2, or 3).
    pub row_attributes: Vec<usize>,

    /// Cells that grant an extra die.
    pub dice: Vec<Coord>,

    /// Cells that grant a star bonus.
    pub star: Vec<Coord>,
}

impl Layout {
    /// Create an empty [`Layout`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every track that derives from the board dimensions alone.
    ///
    /// The marker lists are left empty; the generator draws them from the
    /// finished board.
    pub fn compute<R: Rng>(&mut self, height: usize, width: usize, rng: &mut R) {
        self.draw_start_column(width, rng);
        self.compute_names(height, width);
        self.compute_scores(height, width);
        self.draw_row_attributes(height, rng);
    }

    /// Select the start column from the middle third of the board.
    ///
    /// Boards too narrow to have a middle third use the central column.
    fn draw_start_column<R: Rng>(&mut self, width: usize, rng: &mut R) {
        let low: usize = width.div_ceil(3);
        let high: usize = width * 2 / 3;
        self.start_column = if low < high {
            rng.random_range(low..high)
        } else {
            width / 2
        };
        debug!("Start column = {}", self.start_column);
    }

    /// Label the columns, then keep numbering through the rows.
    fn compute_names(&mut self, height: usize, width: usize) {
        self.col_names = (0..width).collect();
        self.row_names = (width..width + height).collect();
    }

    /// Compute the row track and the two column tracks.
    ///
    /// Every row is worth the same number of points. The top column track
    /// grows like a pyramid away from the start column, which itself is worth
    /// nothing, and the two border columns are worth two points more than
    /// their inward neighbor. The bottom track is the top track halved,
    /// rounded up.
    fn compute_scores(&mut self, height: usize, width: usize) {
        self.row_scores = vec![ROW_SCORE; height];

        self.col_scores_top = (0..width)
            .map(|col| {
                let offset: usize = col.abs_diff(self.start_column);
                if offset == 0 { 0 } else { 2 + (offset - 1) / 3 }
            })
            .collect();
        if width >= 2 {
            self.col_scores_top[0] = self.col_scores_top[1] + 2;
            self.col_scores_top[width - 1] = self.col_scores_top[width - 2] + 2;
        }

        self.col_scores_bottom = self
            .col_scores_top
            .iter()
            .map(|score| score.div_ceil(2))
            .collect();
        self.col_scores_bottom[self.start_column] = 0;
    }

    /// Deal the three row categories in a repeating cycle, then shuffle the
    /// assignment.
    fn draw_row_attributes<R: Rng>(&mut self, height: usize, rng: &mut R) {
        let mut attributes: Vec<usize> = (0..height).map(|row| row % 3 + 1).collect();
        attributes.shuffle(rng);
        self.row_attributes = attributes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn layout(height: usize, width: usize, seed: u64) -> Layout {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        let mut layout: Layout = Layout::new();
        layout.compute(height, width, &mut rng);
        layout
    }

    #[test]
    fn start_column_is_in_the_middle_third() {
        for seed in 0..20 {
            let layout: Layout = layout(20, 13, seed);
            assert!(layout.start_column >= 5);
            assert!(layout.start_column < 8);
        }
    }

    #[test]
    fn start_column_on_a_narrow_board() {
        let layout: Layout = layout(2, 2, 0);
        assert_eq!(layout.start_column, 1);
    }

    #[test]
    fn names_number_columns_then_rows() {
        let layout: Layout = layout(20, 13, 1);
        assert_eq!(layout.col_names, (0..13).collect::<Vec<usize>>());
        assert_eq!(layout.row_names, (13..33).collect::<Vec<usize>>());
    }

    #[test]
    fn every_row_scores_the_same() {
        let layout: Layout = layout(20, 13, 2);
        assert_eq!(layout.row_scores, vec![5; 20]);
    }

    #[test]
    fn top_track_is_a_pyramid_with_raised_borders() {
        let layout: Layout = layout(20, 13, 3);
        let start: usize = layout.start_column;
        let top: &[usize] = &layout.col_scores_top;

        assert_eq!(top.len(), 13);
        assert_eq!(top[start], 0);
        // One to three columns away: 2 points, then the score grows by one
        // every three columns
        assert_eq!(top[start + 1], 2);
        assert_eq!(top[start - 1], 2);
        assert_eq!(top[start + 4], 3);
        // Border columns beat their inward neighbor by two
        assert_eq!(top[0], top[1] + 2);
        assert_eq!(top[12], top[11] + 2);
    }

    #[test]
    fn bottom_track_is_half_the_top_track() {
        let layout: Layout = layout(20, 13, 4);
        for (col, score) in layout.col_scores_bottom.iter().enumerate() {
            if col == layout.start_column {
                assert_eq!(*score, 0);
            } else {
                assert_eq!(*score, layout.col_scores_top[col].div_ceil(2));
            }
        }
    }

    #[test]
    fn row_attributes_keep_the_cycle_multiset() {
        let layout: Layout = layout(20, 13, 5);
        assert_eq!(layout.row_attributes.len(), 20);

        let mut sorted: Vec<usize> = layout.row_attributes.clone();
        sorted.sort_unstable();
        let mut expected: Vec<usize> = (0..20).map(|row| row % 3 + 1).collect();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn compute_leaves_the_markers_alone() {
        let layout: Layout = layout(20, 13, 6);
        assert!(layout.dice.is_empty());
        assert!(layout.star.is_empty());
    }
}
