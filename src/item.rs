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
use std::rc::Rc;

use crate::error::{GridError, GridResult};

/// The label of an item. Cloning shares the underlying name, so copying a grid never allocates
/// per cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(Rc<str>);

impl Category {
    pub fn new(name: &str) -> Self {
        return Self(Rc::from(name));
    }

    pub fn name(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    category: Category,
    size: u32,
}

impl Item {
    /// `None` when `size` is 0.
    pub fn try_new(category: Category, size: u32) -> Option<Self> {
        if size == 0 { return None; }
        return Some(Self { category, size });
    }

    /// Panics when `size` is 0; use [`Item::try_new`] for sizes that come from outside.
    pub fn new(category: Category, size: u32) -> Self {
        return match Self::try_new(category, size) {
            Some(item) => item,
            None => panic!("Item sizes start at 1, got 0"),
        };
    }

    /// Parses a `category_size` cell. The size follows the last underscore, so categories may
    /// themselves contain underscores. `row` and `col` only label errors.
    pub fn parse(text: &str, row: usize, col: usize) -> GridResult<Self> {
        let malformed = || GridError::MalformedCell { row, col, text: text.to_owned() };
        let (name, size) = text.rsplit_once('_').ok_or_else(malformed)?;
        if name.is_empty() || size.is_empty() { return Err(malformed()); }

        let size: u32 = size.parse().map_err(|_| GridError::InvalidSize {
            row,
            col,
            text: text.to_owned(),
        })?;
        return Self::try_new(Category::new(name), size).ok_or(GridError::ZeroSize { row, col });
    }

    pub fn category(&self) -> &Category {
        return &self.category;
    }

    pub fn size(&self) -> u32 {
        return self.size;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}_{}", self.category, self.size);
    }
}
