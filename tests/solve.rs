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

use std::collections::{BTreeMap, HashMap, VecDeque};

use fruitsort::{heuristic, neighbors};
use fruitsort::{
    is_goal, solve, solve_derived, Category, ColumnAssignment, GoalSpec, Grid, GridError, Item,
    Solution,
};

const REFERENCE: &str = include_str!("../demos/reference.txt");

fn grid(text: &str) -> Grid {
    return Grid::parse(text).unwrap();
}

fn sorted_items(grid: &Grid) -> Vec<Item> {
    let mut items: Vec<Item> = grid.items().cloned().collect();
    items.sort();
    return items;
}

// Checks everything a solution must satisfy regardless of which path the search accepted.
fn check_solution(initial: &Grid, solution: &Solution) {
    let path = solution.path();
    assert_eq!(&path[0], initial);
    assert_eq!(path.last(), Some(solution.grid()));
    assert_eq!(solution.cost() as usize, path.len() - 1);
    assert_eq!(solution.swaps().len(), path.len() - 1);
    assert!(is_goal(solution.grid()));

    let items = sorted_items(initial);
    for (pair, &swap) in path.windows(2).zip(solution.swaps()) {
        assert_eq!(pair[0].shape(), initial.shape());
        assert_eq!(sorted_items(&pair[1]), items);
        assert_eq!(pair[0].diff(&pair[1]).len(), 2);
        assert_eq!(pair[0].swap(swap), pair[1]);
    }
}

#[test]
fn two_mismatched_cells_and_a_reorder() {
    let initial = grid("
        orange_1 apple_1
        apple_2 orange_2
        banana_1 banana_2
    ");
    let solution = solve_derived(&initial).into_solution().unwrap();
    check_solution(&initial, &solution);

    // Exchanging apple_1 and orange_2 leaves the apple row as [apple_2, apple_1], so no single
    // swap is enough.
    assert_eq!(solution.cost(), 2);
    assert_eq!(solution.grid(), &grid("
        orange_1 orange_2
        apple_1 apple_2
        banana_1 banana_2
    "));
}

#[test]
fn solved_grid_returns_itself() {
    let initial = grid("
        apple_1 apple_2
        banana_1 banana_2
        orange_1 orange_2
    ");
    let (last, path, cost) = solve_derived(&initial).into_solution().unwrap().into_parts();
    assert_eq!(cost, 0);
    assert_eq!(path, vec![initial.clone()]);
    assert_eq!(last, initial);
}

#[test]
fn reference_grid_takes_two_swaps() {
    let initial = grid(REFERENCE);
    assert_eq!(initial.shape(), (3, 10));

    let outcome = solve_derived(&initial);
    let solution = outcome.solution().unwrap();
    check_solution(&initial, solution);
    assert_eq!(solution.cost(), 2);
    assert_eq!(solution.grid(), &grid("
        orange_1 orange_2 orange_3 orange_4 orange_5 orange_6 orange_7 orange_8 orange_9 orange_10
        apple_1 apple_2 apple_3 apple_4 apple_5 apple_6 apple_7 apple_8 apple_9 apple_10
        banana_1 banana_2 banana_3 banana_4 banana_5 banana_6 banana_7 banana_8 banana_9 banana_10
    "));
    assert_eq!(outcome.stats().generated, 165 * outcome.stats().expanded);
}

#[test]
fn category_without_a_majority_row_still_lands() {
    // Votes go apple, apple, banana: cherry owns no row to begin with.
    let initial = grid("
        apple_1 banana_1
        apple_2 cherry_1
        banana_2 cherry_2
    ");
    let assignment = ColumnAssignment::derive(&initial);
    assert!((0..3).all(|row| assignment.get(row).name() != "cherry"));

    let solution = solve_derived(&initial).into_solution().unwrap();
    check_solution(&initial, &solution);
    assert!((0..3).any(|row| solution.grid().cell_at(row, 0).category().name() == "cherry"));
}

#[test]
fn heuristic_never_overestimates_along_solution() {
    for text in [REFERENCE, "orange_1 apple_1\napple_2 orange_2\nbanana_1 banana_2"] {
        let initial = grid(text);
        let assignment = ColumnAssignment::derive(&initial);
        let goal = GoalSpec::derive(&initial);
        let solution = solve(&initial, &goal).unwrap().into_solution().unwrap();

        let cost = solution.cost() as f64;
        for (i, state) in solution.path().iter().enumerate() {
            let remaining = cost - i as f64;
            assert!(heuristic::score(0, state, &assignment, &goal).value() <= remaining);
        }
    }
}

// Swaps are their own inverse, so a breadth-first walk out of `goal` gives every grid's distance
// to it.
fn distances_from(goal: &Grid) -> HashMap<Grid, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(goal.clone(), 0);
    queue.push_back(goal.clone());
    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        for next in neighbors::expand(&cur) {
            if dist.contains_key(&next) { continue; }
            dist.insert(next.clone(), d + 1);
            queue.push_back(next);
        }
    }
    return dist;
}

#[test]
fn heuristic_never_overestimates_on_any_arrangement() {
    // The assignment (a, b) agrees with this goal, which therefore scores zero.
    let goal_grid = grid("a_1 a_2\nb_1 b_2");
    let assignment = ColumnAssignment::derive(&goal_grid);
    let goal = GoalSpec::derive(&goal_grid);

    let dist = distances_from(&goal_grid);
    assert_eq!(dist.len(), 24);
    for (state, &k) in &dist {
        assert!(heuristic::score(0, state, &assignment, &goal).value() <= k as f64,
                "overestimate at distance {}:\n{}", k, state);
    }
}

#[test]
fn supplied_goal_must_match_the_grid() {
    let initial = grid("
        apple_1 apple_2
        banana_1 banana_2
    ");
    let mut targets = BTreeMap::new();
    targets.insert(Category::new("apple"), vec![1, 2, 3]);
    targets.insert(Category::new("banana"), vec![1]);
    assert!(matches!(solve(&initial, &GoalSpec::from_targets(targets)),
                     Err(GridError::GoalMismatch { .. })));

    let outcome = solve(&initial, &GoalSpec::derive(&initial)).unwrap();
    assert_eq!(outcome.solution().unwrap().cost(), 0);
}

#[test]
fn rows_that_cannot_be_uniform_have_no_solution() {
    // Three apples cannot fill whole rows of two.
    let initial = grid("
        apple_1 apple_2
        apple_3 banana_1
    ");
    let outcome = solve_derived(&initial);
    assert!(!outcome.is_solved());
    assert!(outcome.into_solution().is_none());
}

#[test]
fn malformed_grids_are_rejected_before_search() {
    assert!(matches!(Grid::parse("apple_1 apple_2\nbanana_1"), Err(GridError::Ragged { .. })));
    assert!(matches!(Grid::parse("apple_1 apple\n"), Err(GridError::MalformedCell { .. })));
    assert!(matches!(Grid::parse("apple_0 apple_1\n"), Err(GridError::ZeroSize { .. })));
    assert!(matches!(Grid::from_file(std::path::Path::new("/nonexistent/grid.txt")),
                     Err(GridError::Io(_))));
}
