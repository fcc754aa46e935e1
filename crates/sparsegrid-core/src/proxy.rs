//! Two-step row/cell access into a [`SparseGrid`].
//!
//! `grid.row(x)` and `grid.row_mut(x)` pick a row without touching storage;
//! `.cell(y)` on the result picks one cell of that row. Reads and writes go
//! through the cell handle and land directly in the grid's map, so a row is
//! never materialized.
//!
//! Handles obtained through a shared borrow ([`Row`], [`Cell`]) can only
//! read. Writing needs [`RowMut`] / [`CellMut`], which require a mutable
//! borrow of the grid:
//!
//! ```compile_fail
//! use sparsegrid_core::SparseGrid;
//!
//! let grid: SparseGrid<i32> = SparseGrid::new();
//! grid.row(0).cell(0).set(1);
//! ```

use std::fmt;

use crate::coord::{Coordinate, GridIndex};
use crate::grid::SparseGrid;
use crate::iter::RowIter;

/// Read-only handle to one row of a grid.
pub struct Row<'a, T, I = i64> {
    grid: &'a SparseGrid<T, I>,
    x: I,
}

impl<'a, T, I: GridIndex> Row<'a, T, I> {
    pub(crate) fn new(grid: &'a SparseGrid<T, I>, x: I) -> Self {
        Self { grid, x }
    }

    /// Row coordinate.
    pub fn x(&self) -> I {
        self.x
    }

    /// Select the cell in column `y`.
    pub fn cell(&self, y: I) -> Cell<'a, T, I> {
        Cell {
            grid: self.grid,
            at: Coordinate::new(self.x, y),
        }
    }

    /// Value in column `y`.
    pub fn get(&self, y: I) -> &'a T {
        self.grid.get(self.x, y)
    }

    /// Non-default cells of this row as `(y, &value)`, by ascending `y`.
    pub fn iter(&self) -> RowIter<'a, T, I> {
        self.grid.row_entries(self.x)
    }

    /// Number of non-default cells in this row.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<T, I: Copy> Clone for Row<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I: Copy> Copy for Row<'_, T, I> {}

impl<T, I: fmt::Debug> fmt::Debug for Row<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row").field("x", &self.x).finish()
    }
}

/// Read-only handle to one cell of a grid.
pub struct Cell<'a, T, I = i64> {
    grid: &'a SparseGrid<T, I>,
    at: Coordinate<I>,
}

impl<'a, T, I: GridIndex> Cell<'a, T, I> {
    /// Current value, or the grid default if the cell is not stored.
    pub fn get(&self) -> &'a T {
        self.grid.get_at(self.at)
    }

    pub fn coordinate(&self) -> Coordinate<I> {
        self.at
    }

    /// Check whether the cell currently reads as the grid default.
    pub fn is_default(&self) -> bool {
        !self.grid.contains_at(self.at)
    }
}

impl<T, I: Copy> Clone for Cell<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I: Copy> Copy for Cell<'_, T, I> {}

impl<T: fmt::Debug, I: GridIndex> fmt::Debug for Cell<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("at", &self.at)
            .field("value", self.get())
            .finish()
    }
}

/// Read-write handle to one row of a grid.
pub struct RowMut<'a, T, I = i64> {
    grid: &'a mut SparseGrid<T, I>,
    x: I,
}

impl<'a, T, I: GridIndex> RowMut<'a, T, I> {
    pub(crate) fn new(grid: &'a mut SparseGrid<T, I>, x: I) -> Self {
        Self { grid, x }
    }

    /// Row coordinate.
    pub fn x(&self) -> I {
        self.x
    }

    /// Select the cell in column `y` for reading and writing.
    ///
    /// The row stays usable once the returned cell is dropped, so several
    /// cells of one row can be written in sequence.
    pub fn cell(&mut self, y: I) -> CellMut<'_, T, I> {
        CellMut {
            grid: &mut *self.grid,
            at: Coordinate::new(self.x, y),
        }
    }

    /// Value in column `y`.
    pub fn get(&self, y: I) -> &T {
        self.grid.get(self.x, y)
    }

    /// Non-default cells of this row as `(y, &value)`, by ascending `y`.
    pub fn iter(&self) -> RowIter<'_, T, I> {
        self.grid.row_entries(self.x)
    }

    /// Read-only view of the same row.
    pub fn as_row(&self) -> Row<'_, T, I> {
        Row::new(&*self.grid, self.x)
    }
}

impl<T: PartialEq, I: GridIndex> RowMut<'_, T, I> {
    /// Write `value` into column `y`.
    ///
    /// ```
    /// use sparsegrid_core::SparseGrid;
    ///
    /// let mut grid: SparseGrid<i32> = SparseGrid::new();
    /// grid.row_mut(2).set(0, 1).set(1, 2).set(2, 3);
    /// assert_eq!(grid.row(2).len(), 3);
    /// ```
    pub fn set(&mut self, y: I, value: T) -> &mut Self {
        self.grid.put(self.x, y, value);
        self
    }
}

impl<T, I: fmt::Debug> fmt::Debug for RowMut<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMut").field("x", &self.x).finish()
    }
}

/// Read-write handle to one cell of a grid.
///
/// [`set`](CellMut::set) returns the handle itself, so writes to the same
/// cell can be chained and are applied left to right:
///
/// ```
/// use sparsegrid_core::SparseGrid;
///
/// let mut grid: SparseGrid<i32> = SparseGrid::new();
/// grid.row_mut(5).cell(5).set(7).set(0).set(9);
///
/// assert_eq!(grid[(5, 5)], 9);
/// assert_eq!(grid.size(), 1);
/// ```
pub struct CellMut<'a, T, I = i64> {
    grid: &'a mut SparseGrid<T, I>,
    at: Coordinate<I>,
}

impl<T, I: GridIndex> CellMut<'_, T, I> {
    /// Current value, or the grid default if the cell is not stored.
    pub fn get(&self) -> &T {
        self.grid.get_at(self.at)
    }

    pub fn coordinate(&self) -> Coordinate<I> {
        self.at
    }

    /// Check whether the cell currently reads as the grid default.
    pub fn is_default(&self) -> bool {
        !self.grid.contains_at(self.at)
    }

    /// Put the cell back to the grid default.
    pub fn reset(&mut self) -> &mut Self {
        self.grid.remove_at(self.at);
        self
    }
}

impl<T: PartialEq, I: GridIndex> CellMut<'_, T, I> {
    /// Write `value` into the cell.
    ///
    /// Writing the grid default erases the cell from storage.
    pub fn set(&mut self, value: T) -> &mut Self {
        self.grid.put_at(self.at, value);
        self
    }

    /// Replace the value with `f(current)`.
    pub fn update<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(self.get());
        self.set(next)
    }
}

impl<T: fmt::Debug, I: GridIndex> fmt::Debug for CellMut<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellMut")
            .field("at", &self.at)
            .field("value", self.get())
            .finish()
    }
}
