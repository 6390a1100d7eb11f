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

//! A* over grids, one swap per unit of cost.
//!
//! The frontier is ordered by [`Priority`], ties going to the entry pushed first. A grid is only
//! kept out of the frontier once an identical grid has been popped; two copies pushed before
//! either is popped both stay queued, and both are expanded if they are popped.
//!
//! The state space is finite but can be very large, so a search over a big, scrambled grid may run
//! for a long time and hold a lot of memory. Nothing bounds it.

use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;
use std::{cmp, fmt};

use crate::assignment::ColumnAssignment;
use crate::error::GridResult;
use crate::goal::{is_goal, GoalSpec};
use crate::grid::{Grid, Swap};
use crate::heuristic::{Heuristic, Priority};
use crate::neighbors::successors;

const PROGRESS_INTERVAL: u64 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the frontier, including the goal.
    pub popped: u64,
    /// Popped grids whose successors were generated.
    pub expanded: u64,
    pub generated: u64,
    /// Successors dropped because an identical grid had already been popped.
    pub skipped_visited: u64,
    pub max_frontier: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "popped {}, expanded {}, generated {} ({} already visited), peak frontier {}",
                      self.popped, self.expanded, self.generated, self.skipped_visited,
                      self.max_frontier);
    }
}

/// The path accepted by the search, from the initial grid to a goal grid inclusive.
#[derive(Debug, Clone)]
pub struct Solution {
    path: Vec<Grid>,
    swaps: Vec<Swap>,
    stats: SearchStats,
}

impl Solution {
    /// The goal grid.
    pub fn grid(&self) -> &Grid {
        return &self.path[self.path.len() - 1];
    }

    pub fn path(&self) -> &[Grid] {
        return &self.path;
    }

    /// The swap applied between each grid of the path and the next.
    pub fn swaps(&self) -> &[Swap] {
        return &self.swaps;
    }

    pub fn cost(&self) -> u32 {
        return self.swaps.len() as u32;
    }

    pub fn stats(&self) -> &SearchStats {
        return &self.stats;
    }

    pub fn into_parts(self) -> (Grid, Vec<Grid>, u32) {
        let cost = self.cost();
        let grid = self.grid().clone();
        return (grid, self.path, cost);
    }
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Solved(Solution),
    /// Every reachable grid was expanded without meeting the goal, or the items cannot form
    /// single-category rows at all.
    NoSolution(SearchStats),
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        return match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::NoSolution(_) => None,
        };
    }

    pub fn into_solution(self) -> Option<Solution> {
        return match self {
            SearchOutcome::Solved(solution) => Some(solution),
            SearchOutcome::NoSolution(_) => None,
        };
    }

    pub fn stats(&self) -> &SearchStats {
        return match self {
            SearchOutcome::Solved(solution) => solution.stats(),
            SearchOutcome::NoSolution(stats) => stats,
        };
    }

    pub fn is_solved(&self) -> bool {
        return matches!(self, SearchOutcome::Solved(_));
    }
}

// The path holds every grid before `grid`; children share their parent's grids through `Rc`.
#[derive(Debug)]
struct Node {
    grid: Rc<Grid>,
    path: Vec<Rc<Grid>>,
    swaps: Vec<Swap>,
    cost: u32,
}

#[derive(Debug)]
struct Entry {
    priority: Priority,
    seq: u64,
    node: Node,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        return self.cmp(other) == cmp::Ordering::Equal;
    }
}

impl Eq for Entry {}

// BinaryHeap pops the greatest entry, so the lowest priority and then the earliest push must
// compare greatest.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        return other.priority.cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq));
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        return Some(self.cmp(other));
    }
}

struct Session {
    heuristic: Heuristic,
    frontier: BinaryHeap<Entry>,
    visited: HashSet<Rc<Grid>>,
    stats: SearchStats,
    next_seq: u64,
}

impl Session {
    fn new(heuristic: Heuristic) -> Self {
        return Self {
            heuristic,
            frontier: BinaryHeap::new(),
            visited: HashSet::new(),
            stats: SearchStats::default(),
            next_seq: 0,
        };
    }

    fn push(&mut self, priority: Priority, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.frontier.push(Entry { priority, seq, node });
        self.stats.max_frontier = cmp::max(self.stats.max_frontier, self.frontier.len());
    }

    // Queues every successor of `grid` that has not been popped yet. `path` ends with `grid`.
    fn expand(&mut self, grid: &Grid, path: &[Rc<Grid>], swaps: &[Swap], cost: u32) {
        for (swap, next) in successors(grid) {
            self.stats.generated += 1;
            if self.visited.contains(&next) {
                self.stats.skipped_visited += 1;
                continue;
            }

            let priority = self.heuristic.score(cost + 1, &next);
            let mut child_swaps = swaps.to_vec();
            child_swaps.push(swap);
            self.push(priority, Node {
                grid: Rc::new(next),
                path: path.to_vec(),
                swaps: child_swaps,
                cost: cost + 1,
            });
        }
    }

    fn run(mut self, initial: &Grid) -> SearchOutcome {
        let shape = initial.shape();
        self.push(Priority::ZERO, Node {
            grid: Rc::new(initial.clone()),
            path: Vec::new(),
            swaps: Vec::new(),
            cost: 0,
        });

        while let Some(Entry { priority, node, .. }) = self.frontier.pop() {
            let Node { grid, mut path, swaps, cost } = node;
            assert!(grid.shape() == shape, "Grid of shape {:?} in a {:?} search",
                    grid.shape(), shape);
            path.push(Rc::clone(&grid));
            self.visited.insert(Rc::clone(&grid));
            self.stats.popped += 1;

            if is_goal(&grid) {
                tracing::info!(cost, popped = self.stats.popped, generated = self.stats.generated,
                               "goal reached");
                return SearchOutcome::Solved(Solution {
                    path: path.iter().map(|grid| Grid::clone(grid)).collect(),
                    swaps,
                    stats: self.stats,
                });
            }

            tracing::trace!(cost, %priority, frontier = self.frontier.len(), "expanding");
            self.stats.expanded += 1;
            if self.stats.expanded % PROGRESS_INTERVAL == 0 {
                tracing::debug!(expanded = self.stats.expanded, cost, %priority,
                                frontier = self.frontier.len(), visited = self.visited.len(),
                                "search progress");
            }

            self.expand(&grid, &path, &swaps, cost);
        }

        tracing::info!(popped = self.stats.popped, generated = self.stats.generated,
                       "frontier exhausted without reaching the goal");
        return SearchOutcome::NoSolution(self.stats);
    }
}

/// Finds a cheapest sequence of swaps from `initial` to a grid whose rows each hold one category
/// in non-descending size order. Fails before searching when `goal` does not hold exactly the
/// sizes of each category in `initial`.
pub fn solve(initial: &Grid, goal: &GoalSpec) -> GridResult<SearchOutcome> {
    goal.verify(initial)?;
    return Ok(search(initial, goal));
}

/// Derives the goal from `initial` and solves.
pub fn solve_derived(initial: &Grid) -> SearchOutcome {
    return search(initial, &GoalSpec::derive(initial));
}

// `goal` has already been checked against `initial`.
fn search(initial: &Grid, goal: &GoalSpec) -> SearchOutcome {
    let (rows, cols) = initial.shape();
    let assignment = ColumnAssignment::derive(initial);
    tracing::info!(rows, cols, %assignment, "starting search");

    if !goal.is_feasible(cols) {
        tracing::warn!(cols, "some category cannot fill whole rows; no goal grid exists");
        return SearchOutcome::NoSolution(SearchStats::default());
    }

    return Session::new(Heuristic::new(assignment, goal.clone())).run(initial);
}
