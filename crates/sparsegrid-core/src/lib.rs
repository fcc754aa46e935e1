//! Infinite two-dimensional sparse grid.
//!
//! A [`SparseGrid`] behaves like a grid where every cell starts out holding a
//! fixed default value. Only cells whose value differs from that default are
//! stored, so memory use is proportional to the number of "interesting"
//! cells rather than to the extent of the grid.
//!
//! Cells are addressed in two steps, first by row and then by column:
//!
//! ```
//! use sparsegrid_core::SparseGrid;
//!
//! let mut grid: SparseGrid<i32> = SparseGrid::new();
//! grid.row_mut(100).cell(100).set(314);
//! assert_eq!(*grid.row(100).cell(100).get(), 314);
//! assert_eq!(grid.size(), 1);
//!
//! grid.row_mut(100).cell(100).set(0);
//! assert_eq!(grid[(100, 100)], 0);
//! assert_eq!(grid.size(), 0);
//! ```

pub mod coord;
pub mod error;
pub mod grid;
pub mod iter;
pub mod proxy;

pub use coord::{Coordinate, GridIndex};
pub use error::CoordinateError;
pub use grid::SparseGrid;
pub use iter::{IntoIter, Iter, RowIter};
pub use proxy::{Cell, CellMut, Row, RowMut};
