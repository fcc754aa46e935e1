//! Iterators over the stored cells of a [`SparseGrid`](crate::SparseGrid).
//!
//! Only cells holding a non-default value are visited. Every iterator walks
//! cells in ascending coordinate order: by `x`, then by `y`.

use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::coord::{Coordinate, GridIndex};

/// Borrowing iterator over `(x, y, &value)` for every stored cell.
///
/// Created by [`SparseGrid::iter`](crate::SparseGrid::iter).
#[derive(Debug)]
pub struct Iter<'a, T, I = i64> {
    inner: btree_map::Iter<'a, Coordinate<I>, T>,
}

impl<'a, T, I> Iter<'a, T, I> {
    pub(crate) fn new(inner: btree_map::Iter<'a, Coordinate<I>, T>) -> Self {
        Self { inner }
    }
}

impl<T, I> Clone for Iter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T, I: GridIndex> Iterator for Iter<'a, T, I> {
    type Item = (I, I, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(at, value)| (at.x(), at.y(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, I: GridIndex> DoubleEndedIterator for Iter<'_, T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(at, value)| (at.x(), at.y(), value))
    }
}

impl<T, I: GridIndex> ExactSizeIterator for Iter<'_, T, I> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, I: GridIndex> FusedIterator for Iter<'_, T, I> {}

/// Owning iterator over `(x, y, value)` for every stored cell.
///
/// Created by `SparseGrid::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T, I = i64> {
    inner: btree_map::IntoIter<Coordinate<I>, T>,
}

impl<T, I> IntoIter<T, I> {
    pub(crate) fn new(inner: btree_map::IntoIter<Coordinate<I>, T>) -> Self {
        Self { inner }
    }
}

impl<T, I: GridIndex> Iterator for IntoIter<T, I> {
    type Item = (I, I, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(at, value)| (at.x(), at.y(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, I: GridIndex> DoubleEndedIterator for IntoIter<T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(at, value)| (at.x(), at.y(), value))
    }
}

impl<T, I: GridIndex> ExactSizeIterator for IntoIter<T, I> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, I: GridIndex> FusedIterator for IntoIter<T, I> {}

/// Iterator over `(y, &value)` for the stored cells of a single row.
///
/// Created by [`Row::iter`](crate::Row::iter) and
/// [`RowMut::iter`](crate::RowMut::iter).
#[derive(Debug)]
pub struct RowIter<'a, T, I = i64> {
    inner: btree_map::Range<'a, Coordinate<I>, T>,
}

impl<'a, T, I> RowIter<'a, T, I> {
    pub(crate) fn new(inner: btree_map::Range<'a, Coordinate<I>, T>) -> Self {
        Self { inner }
    }
}

impl<T, I> Clone for RowIter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T, I: GridIndex> Iterator for RowIter<'a, T, I> {
    type Item = (I, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(at, value)| (at.y(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, I: GridIndex> DoubleEndedIterator for RowIter<'_, T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(at, value)| (at.y(), value))
    }
}

impl<T, I: GridIndex> FusedIterator for RowIter<'_, T, I> {}

#[cfg(test)]
mod tests {
    use crate::SparseGrid;

    fn sample() -> SparseGrid<i32> {
        let mut grid = SparseGrid::new();
        grid.put(0, 0, 1);
        grid.put(-3, 2, 2);
        grid.put(-3, 1, 3);
        grid.put(5, -7, 4);
        grid
    }

    #[test]
    fn test_iter_follows_coordinate_order() {
        let grid = sample();
        let cells: Vec<_> = grid.iter().map(|(x, y, v)| (x, y, *v)).collect();
        assert_eq!(cells, vec![(-3, 1, 3), (-3, 2, 2), (0, 0, 1), (5, -7, 4)]);
    }

    #[test]
    fn test_iter_reverse() {
        let grid = sample();
        let coords: Vec<_> = grid.iter().rev().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(5, -7), (0, 0), (-3, 2), (-3, 1)]);
    }

    #[test]
    fn test_iter_exact_size() {
        let grid = sample();
        let mut iter = grid.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        iter.next_back();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_iter_is_restartable() {
        let grid = sample();
        let first: Vec<_> = grid.iter().collect();
        let second: Vec<_> = grid.iter().collect();
        assert_eq!(first, second);

        // A cloned iterator resumes from the same position
        let mut iter = grid.iter();
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, iter.collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_empty_grid() {
        let mut grid = sample();
        grid.clear();

        let mut iter = grid.iter();
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iter_owned() {
        let mut grid: SparseGrid<String> = SparseGrid::new();
        grid.put(2, 2, "b".to_string());
        grid.put(1, 9, "a".to_string());

        let cells: Vec<(i64, i64, String)> = grid.into_iter().collect();
        assert_eq!(
            cells,
            vec![(1, 9, "a".to_string()), (2, 2, "b".to_string())]
        );
    }

    #[test]
    fn test_for_loop_over_reference() {
        let grid = sample();
        let mut sum = 0;
        for (_, _, value) in &grid {
            sum += value;
        }
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_row_iter_stays_in_row() {
        let grid = sample();

        let row: Vec<_> = grid.row(-3).iter().map(|(y, v)| (y, *v)).collect();
        assert_eq!(row, vec![(1, 3), (2, 2)]);

        let reversed: Vec<_> = grid.row(-3).iter().rev().map(|(y, _)| y).collect();
        assert_eq!(reversed, vec![2, 1]);

        assert_eq!(grid.row(-2).iter().next(), None);
    }
}
