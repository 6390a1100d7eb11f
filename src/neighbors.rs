// This file is part of FruitSort.
//
// FruitSort is free software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// FruitSort is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with FruitSort. If not,
// see <https://www.gnu.org/licenses/>.

use itertools::Itertools;

use crate::grid::{Coord, Grid, Swap};

/// Every legal swap on a `rows` x `cols` grid: first each pair of cells within a row (row by
/// row), then each pair of cells within a column (column by column).
pub fn swaps(rows: usize, cols: usize) -> Vec<Swap> {
    let within_rows = (0..rows).flat_map(|row| (0..cols)
        .tuple_combinations()
        .map(move |(a, b)| Swap::new(Coord::new(row, a), Coord::new(row, b))));
    let within_cols = (0..cols).flat_map(|col| (0..rows)
        .tuple_combinations()
        .map(move |(a, b)| Swap::new(Coord::new(a, col), Coord::new(b, col))));
    return within_rows.chain(within_cols).collect();
}

pub fn neighbor_count(rows: usize, cols: usize) -> usize {
    return rows * cols * (cols.saturating_sub(1)) / 2 + cols * rows * (rows.saturating_sub(1)) / 2;
}

/// Each grid one swap away from `grid`, paired with the swap that produced it.
pub fn successors(grid: &Grid) -> Vec<(Swap, Grid)> {
    let (rows, cols) = grid.shape();
    return swaps(rows, cols).into_iter()
        .map(|swap| (swap, grid.swap(swap)))
        .collect();
}

pub fn expand(grid: &Grid) -> Vec<Grid> {
    return successors(grid).into_iter().map(|(_, next)| next).collect();
}
