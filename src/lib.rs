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

//! Sorting labeled, sized items into single-category rows with as few swaps as possible.
//!
//! Items may be swapped within a row or within a column. A grid is solved when every row holds one
//! category and sizes do not decrease along the row.

pub mod assignment;
pub mod error;
pub mod goal;
pub mod grid;
pub mod heuristic;
pub mod item;
pub mod neighbors;
pub mod search;

pub use assignment::ColumnAssignment;
pub use error::{GridError, GridResult};
pub use goal::{is_goal, GoalSpec};
pub use grid::{Coord, Grid, Swap};
pub use heuristic::{Heuristic, Priority};
pub use item::{Category, Item};
pub use search::{solve, solve_derived, SearchOutcome, SearchStats, Solution};
