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

use thiserror::Error;

/// Errors raised while building a grid from external input.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("cell ({row},{col}) is not of the form category_size: {text:?}")]
    MalformedCell { row: usize, col: usize, text: String },

    #[error("cell ({row},{col}) has an unparsable size: {text:?}")]
    InvalidSize { row: usize, col: usize, text: String },

    #[error("cell ({row},{col}) has size 0; sizes start at 1")]
    ZeroSize { row: usize, col: usize },

    #[error("goal sizes for {category:?} do not match the items of that category in the grid")]
    GoalMismatch { category: String },

    #[error("failed to read grid: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
