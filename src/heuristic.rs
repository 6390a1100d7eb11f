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

//! Scoring of grids against the row assignment and the goal sizes.
//!
//! Every cell earns one point when its category is not the one assigned to its row, and one more
//! when its size is not the size its own category expects at that column. A single swap touches
//! two cells, so it can remove at most four points; dividing by four keeps the estimate below the
//! number of swaps still needed.

use std::fmt;

use crate::assignment::ColumnAssignment;
use crate::goal::GoalSpec;
use crate::grid::Grid;

/// Points removable by one swap.
pub const POINTS_PER_SWAP: u32 = 4;

/// Frontier key, `(cost + penalty) / 4`. Only the numerator is stored, so comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Priority(u32);

impl Priority {
    pub const ZERO: Priority = Priority(0);

    pub fn numerator(self) -> u32 {
        return self.0;
    }

    pub fn value(self) -> f64 {
        return f64::from(self.0) / f64::from(POINTS_PER_SWAP);
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.value());
    }
}

/// The values derived once from the initial grid, shared by every scoring call of one search.
#[derive(Debug, Clone)]
pub struct Heuristic {
    assignment: ColumnAssignment,
    goal: GoalSpec,
}

impl Heuristic {
    pub fn new(assignment: ColumnAssignment, goal: GoalSpec) -> Self {
        return Self { assignment, goal };
    }

    pub fn assignment(&self) -> &ColumnAssignment {
        return &self.assignment;
    }

    pub fn goal(&self) -> &GoalSpec {
        return &self.goal;
    }

    pub fn penalty(&self, grid: &Grid) -> u32 {
        return penalty(grid, &self.assignment, &self.goal);
    }

    pub fn score(&self, cost: u32, grid: &Grid) -> Priority {
        return score(cost, grid, &self.assignment, &self.goal);
    }
}

pub fn penalty(grid: &Grid, assignment: &ColumnAssignment, goal: &GoalSpec) -> u32 {
    assert!(grid.rows() == assignment.len(),
            "Grid has {} rows but the assignment covers {}", grid.rows(), assignment.len());

    let mut penalty = 0;
    for row in 0..grid.rows() {
        let expected = assignment.get(row);
        for (col, item) in grid.row(row).iter().enumerate() {
            if item.category() != expected { penalty += 1; }
            // A column past the end of the category's sizes counts as a mismatch.
            if goal.target(item.category(), col) != Some(item.size()) { penalty += 1; }
        }
    }
    return penalty;
}

/// Scores `grid` reached at `cost` swaps.
pub fn score(cost: u32, grid: &Grid, assignment: &ColumnAssignment, goal: &GoalSpec) -> Priority {
    return Priority(cost + penalty(grid, assignment, goal));
}
