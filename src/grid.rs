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

use std::path::Path;
use std::{cmp, fmt, fs};

use itertools::Itertools;

use crate::error::{GridError, GridResult};
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        return Self { row, col };
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "({},{})", self.row, self.col);
    }
}

/// An exchange of two cells. The coordinates are stored sorted, so swapping a with b and b with a
/// compare equal.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Swap {
    pub a: Coord,
    pub b: Coord,
}

impl Swap {
    pub fn new(a: Coord, b: Coord) -> Self {
        let first = cmp::min(a, b);
        let second = cmp::max(a, b);
        return Self { a: first, b: second };
    }
}

/// A rectangular arrangement of items, one search state. Grids are values: `swap` returns a new
/// grid and never touches the original.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: Vec<Vec<Item>>,
}

impl Grid {
    pub fn from_rows(cells: Vec<Vec<Item>>) -> GridResult<Self> {
        if cells.is_empty() || cells[0].is_empty() { return Err(GridError::Empty); }
        let expected = cells[0].len();
        if let Some((row, found)) = cells.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(GridError::Ragged { row, expected, found });
        }
        return Ok(Self { cells });
    }

    /// Builds a grid from rows of `category_size` strings.
    pub fn from_labels(rows: &[Vec<&str>]) -> GridResult<Self> {
        let cells = rows.iter()
            .enumerate()
            .map(|(row, labels)| labels.iter()
                .enumerate()
                .map(|(col, label)| Item::parse(label, row, col))
                .collect::<GridResult<Vec<Item>>>())
            .collect::<GridResult<Vec<Vec<Item>>>>()?;
        return Self::from_rows(cells);
    }

    /// Parses one row per non-blank line, cells separated by whitespace or commas.
    pub fn parse(text: &str) -> GridResult<Self> {
        let rows: Vec<Vec<&str>> = text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|cell| !cell.is_empty())
                .collect())
            .collect();
        return Self::from_labels(&rows);
    }

    pub fn from_file(path: &Path) -> GridResult<Self> {
        return Self::parse(&fs::read_to_string(path)?);
    }

    pub fn rows(&self) -> usize {
        return self.cells.len();
    }

    pub fn cols(&self) -> usize {
        return self.cells[0].len();
    }

    pub fn shape(&self) -> (usize, usize) {
        return (self.rows(), self.cols());
    }

    pub fn get(&self, coord: Coord) -> &Item {
        return &self.cells[coord.row][coord.col];
    }

    pub fn cell_at(&self, row: usize, col: usize) -> &Item {
        return &self.cells[row][col];
    }

    pub fn row(&self, row: usize) -> &[Item] {
        return &self.cells[row];
    }

    /// All cells in row-major order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        return self.cells.iter().flatten();
    }

    pub fn swap(&self, swap: Swap) -> Self {
        let Swap { a, b } = swap;
        let mut c = self.cells.clone();
        if a.row == b.row {
            c[a.row].swap(a.col, b.col);
        } else {
            (c[a.row][a.col], c[b.row][b.col]) = (c[b.row][b.col].clone(), c[a.row][a.col].clone());
        }
        return Self { cells: c };
    }

    pub fn diff(&self, other: &Self) -> Vec<Coord> {
        let (selfsize, othersize) = (self.shape(), other.shape());
        let fmt = |size: (usize, usize)| format!("{}x{}", size.0, size.1);
        assert!(selfsize == othersize,
                "Size mismatch: {} vs {}", fmt(selfsize), fmt(othersize));

        return (0..selfsize.0)
            .cartesian_product(0..selfsize.1)
            .map(|(row, col)| Coord::new(row, col))
            .filter(|&coord| self.get(coord) != other.get(coord))
            .collect();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.cells.iter()
            .map(|row| row.iter().join(" "))
            .join("\n");
        return write!(f, "{}", text);
    }
}
