//! Sparse storage for an unbounded two-dimensional grid.
//!
//! The grid keeps a single ordered map from [`Coordinate`] to value. A cell is
//! present in the map exactly when its value differs from the grid's default,
//! so the map never holds more entries than there are non-default cells.

use std::collections::BTreeMap;
use std::ops::Index;

use crate::coord::{Coordinate, GridIndex};
use crate::iter::{IntoIter, Iter, RowIter};
use crate::proxy::{Row, RowMut};

/// An infinite grid of `T` values where every cell starts as a default value.
///
/// `I` is the integer type of both axes and defaults to `i64`.
///
/// # Examples
///
/// ```
/// use sparsegrid_core::SparseGrid;
///
/// let mut grid: SparseGrid<char> = SparseGrid::with_default('.');
/// grid.put(-3, 2, '#');
/// grid.put(-3, 1, '@');
///
/// assert_eq!(*grid.get(0, 0), '.');
/// assert_eq!(grid.size(), 2);
///
/// let cells: Vec<_> = grid.iter().map(|(x, y, c)| (x, y, *c)).collect();
/// assert_eq!(cells, vec![(-3, 1, '@'), (-3, 2, '#')]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid<T, I = i64> {
    /// Non-default cells only.
    entries: BTreeMap<Coordinate<I>, T>,
    /// Value of every cell missing from `entries`.
    default: T,
}

impl<T, I: GridIndex> SparseGrid<T, I> {
    /// Create an empty grid whose cells all read as `default`.
    pub fn with_default(default: T) -> Self {
        Self {
            entries: BTreeMap::new(),
            default,
        }
    }

    /// The value reported for every cell that has not been set.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Get the value of the cell at `(x, y)`.
    ///
    /// Returns the default value when the cell is not stored.
    pub fn get(&self, x: I, y: I) -> &T {
        self.get_at(Coordinate::new(x, y))
    }

    pub(crate) fn get_at(&self, at: Coordinate<I>) -> &T {
        self.entries.get(&at).unwrap_or(&self.default)
    }

    /// Check whether the cell at `(x, y)` holds a non-default value.
    pub fn contains(&self, x: I, y: I) -> bool {
        self.contains_at(Coordinate::new(x, y))
    }

    pub(crate) fn contains_at(&self, at: Coordinate<I>) -> bool {
        self.entries.contains_key(&at)
    }

    /// Reset the cell at `(x, y)` to the default value.
    ///
    /// Returns the value that was stored there, if any.
    pub fn remove(&mut self, x: I, y: I) -> Option<T> {
        self.remove_at(Coordinate::new(x, y))
    }

    pub(crate) fn remove_at(&mut self, at: Coordinate<I>) -> Option<T> {
        let previous = self.entries.remove(&at);
        if previous.is_some() {
            tracing::trace!(
                x = ?at.x(),
                y = ?at.y(),
                stored = self.entries.len(),
                "erased cell"
            );
        }
        previous
    }

    /// Reset every cell to the default value.
    pub fn clear(&mut self) {
        let erased = self.entries.len();
        self.entries.clear();
        tracing::debug!(erased, "cleared grid");
    }

    /// Number of cells holding a non-default value.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether every cell holds the default value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(x, y, &value)` for every non-default cell in
    /// coordinate order.
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter::new(self.entries.iter())
    }

    /// Same as [`iter`](Self::iter).
    pub fn entries(&self) -> Iter<'_, T, I> {
        self.iter()
    }

    /// Select row `x` for read-only cell access.
    pub fn row(&self, x: I) -> Row<'_, T, I> {
        Row::new(self, x)
    }

    /// Select row `x` for reading and writing cells.
    pub fn row_mut(&mut self, x: I) -> RowMut<'_, T, I> {
        RowMut::new(self, x)
    }

    pub(crate) fn row_entries(&self, x: I) -> RowIter<'_, T, I> {
        RowIter::new(
            self.entries
                .range(Coordinate::row_start(x)..=Coordinate::row_end(x)),
        )
    }

    /// Get all non-default cells within a rectangle.
    ///
    /// `start` and `end` are opposite corners, both inclusive, in any order.
    /// Cells are returned in coordinate order.
    ///
    /// # Arguments
    ///
    /// * `start` - One corner of the rectangle
    /// * `end` - The opposite corner
    pub fn cells_in_range(&self, start: Coordinate<I>, end: Coordinate<I>) -> Vec<(I, I, &T)> {
        let (min_x, max_x) = (start.x().min(end.x()), start.x().max(end.x()));
        let (min_y, max_y) = (start.y().min(end.y()), start.y().max(end.y()));

        self.entries
            .range(Coordinate::new(min_x, min_y)..=Coordinate::new(max_x, max_y))
            .filter(|(at, _)| at.y() >= min_y && at.y() <= max_y)
            .map(|(at, value)| (at.x(), at.y(), value))
            .collect()
    }
}

impl<T: PartialEq, I: GridIndex> SparseGrid<T, I> {
    /// Set the cell at `(x, y)` to `value`.
    ///
    /// Writing the default value erases the cell. Returns the value that was
    /// stored there before, if any.
    pub fn put(&mut self, x: I, y: I, value: T) -> Option<T> {
        self.put_at(Coordinate::new(x, y), value)
    }

    pub(crate) fn put_at(&mut self, at: Coordinate<I>, value: T) -> Option<T> {
        if value == self.default {
            return self.remove_at(at);
        }

        let previous = self.entries.insert(at, value);
        tracing::trace!(
            x = ?at.x(),
            y = ?at.y(),
            overwrote = previous.is_some(),
            stored = self.entries.len(),
            "stored cell"
        );
        previous
    }
}

impl<T: Default, I: GridIndex> SparseGrid<T, I> {
    /// Create an empty grid whose default is `T::default()`.
    pub fn new() -> Self {
        Self::with_default(T::default())
    }
}

impl<T: Default, I: GridIndex> Default for SparseGrid<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I: GridIndex> Index<(I, I)> for SparseGrid<T, I> {
    type Output = T;

    fn index(&self, (x, y): (I, I)) -> &T {
        self.get(x, y)
    }
}

impl<T, I: GridIndex> Index<Coordinate<I>> for SparseGrid<T, I> {
    type Output = T;

    fn index(&self, at: Coordinate<I>) -> &T {
        self.get_at(at)
    }
}

impl<T: PartialEq, I: GridIndex> Extend<(I, I, T)> for SparseGrid<T, I> {
    fn extend<It: IntoIterator<Item = (I, I, T)>>(&mut self, iter: It) {
        for (x, y, value) in iter {
            self.put(x, y, value);
        }
    }
}

impl<T: Default + PartialEq, I: GridIndex> FromIterator<(I, I, T)> for SparseGrid<T, I> {
    fn from_iter<It: IntoIterator<Item = (I, I, T)>>(iter: It) -> Self {
        let mut grid = Self::new();
        grid.extend(iter);
        grid
    }
}

impl<'a, T, I: GridIndex> IntoIterator for &'a SparseGrid<T, I> {
    type Item = (I, I, &'a T);
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, I: GridIndex> IntoIterator for SparseGrid<T, I> {
    type Item = (I, I, T);
    type IntoIter = IntoIter<T, I>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries.into_iter())
    }
}
