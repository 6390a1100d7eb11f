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

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::item::Category;

/// For each category, every size of that category in the grid, sorted ascending. Position `j` of
/// a category's sequence is the size the heuristic expects in column `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSpec {
    targets: BTreeMap<Category, Vec<u32>>,
}

impl GoalSpec {
    pub fn derive(grid: &Grid) -> Self {
        let mut targets: BTreeMap<Category, Vec<u32>> = BTreeMap::new();
        for item in grid.items() {
            targets.entry(item.category().clone()).or_default().push(item.size());
        }
        for sizes in targets.values_mut() {
            sizes.sort_unstable();
        }
        return Self { targets };
    }

    /// Wraps a precomputed goal. Each sequence is sorted on the way in.
    pub fn from_targets(targets: BTreeMap<Category, Vec<u32>>) -> Self {
        let targets = targets.into_iter()
            .map(|(category, sizes)| (category, sizes.into_iter().sorted_unstable().collect::<Vec<u32>>()))
            .collect();
        return Self { targets };
    }

    pub fn sizes(&self, category: &Category) -> Option<&[u32]> {
        return self.targets.get(category).map(Vec::as_slice);
    }

    /// The size expected at column `col` for an item of `category`.
    pub fn target(&self, category: &Category, col: usize) -> Option<u32> {
        return self.sizes(category).and_then(|sizes| sizes.get(col).copied());
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        return self.targets.keys();
    }

    pub fn total_items(&self) -> usize {
        return self.targets.values().map(Vec::len).sum();
    }

    /// Checks that this goal holds exactly the sizes of each category in `grid`, no more and no
    /// fewer.
    pub fn verify(&self, grid: &Grid) -> GridResult<()> {
        let actual = Self::derive(grid);
        let mismatch = self.targets.keys()
            .chain(actual.targets.keys())
            .find(|&category| self.sizes(category) != actual.sizes(category));
        return match mismatch {
            Some(category) => Err(GridError::GoalMismatch { category: category.name().to_owned() }),
            None => Ok(()),
        };
    }

    /// Whether a grid with `cols` columns can be split into rows of one category each. Row and
    /// column swaps reach every permutation of the cells, so this is exact.
    pub fn is_feasible(&self, cols: usize) -> bool {
        return cols > 0 && self.targets.values().all(|sizes| sizes.len() % cols == 0);
    }
}

/// True when every row holds a single category in non-descending size order.
pub fn is_goal(grid: &Grid) -> bool {
    for row in 0..grid.rows() {
        let cells = grid.row(row);
        let name = cells[0].category();
        if cells.iter().any(|item| item.category() != name) { return false; }
        if cells.iter().tuple_windows().any(|(a, b)| a.size() > b.size()) { return false; }
    }
    return true;
}
