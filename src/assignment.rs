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

use std::fmt;

use itertools::Itertools;

use crate::grid::Grid;
use crate::item::{Category, Item};

/// The category each row is expected to end up holding, decided once by majority vote over the
/// initial grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    rows: Vec<Category>,
}

impl ColumnAssignment {
    pub fn derive(grid: &Grid) -> Self {
        return Self {
            rows: (0..grid.rows()).map(|row| majority(grid.row(row))).collect(),
        };
    }

    pub fn get(&self, row: usize) -> &Category {
        return &self.rows[row];
    }

    pub fn len(&self) -> usize {
        return self.rows.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.rows.is_empty();
    }
}

// On a tie the category that appeared first in the row wins.
fn majority(row: &[Item]) -> Category {
    let mut tally: Vec<(&Category, usize)> = Vec::new();
    for item in row {
        match tally.iter_mut().find(|(category, _)| *category == item.category()) {
            Some((_, count)) => *count += 1,
            None => tally.push((item.category(), 1)),
        }
    }

    let mut best = tally[0];
    for &entry in &tally[1..] {
        if entry.1 > best.1 { best = entry; }
    }
    return best.0.clone();
}

impl fmt::Display for ColumnAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "[{}]", self.rows.iter().join(", "));
    }
}
