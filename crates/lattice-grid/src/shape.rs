//! Structural view over two-level containers.
//!
//! Sampling does not require a [`Grid`]: any ordered sequence of ordered
//! sequences with a length and an index operator will do. [`GridShape`]
//! captures exactly that capability so plain `Vec<Vec<T>>` values, nested
//! arrays and slices can be passed wherever a grid is expected.

#![warn(missing_docs)]

use crate::grid::Grid;

/// Any container indexed as `container[x][y]`.
///
/// Rows are not required to have equal lengths. Consumers that assume a
/// square shape (such as uniform sampling) only get their guarantees when the
/// rows happen to be equal in length, which is always true for a [`Grid`].
pub trait GridShape {
    /// The type stored at each coordinate.
    type Cell;

    /// Number of outer entries (the extent of the `x` dimension).
    fn outer_len(&self) -> usize;

    /// The inner sequence at outer index `x`, or `None` if `x` is out of range.
    fn row(&self, x: usize) -> Option<&[Self::Cell]>;

    /// Number of inner entries at outer index `x`; zero when `x` is out of range.
    fn inner_len(&self, x: usize) -> usize {
        self.row(x).map_or(0, <[Self::Cell]>::len)
    }

    /// The cell at `(x, y)`, or `None` if either index is out of range.
    fn cell(&self, x: usize, y: usize) -> Option<&Self::Cell> {
        self.row(x)?.get(y)
    }
}

impl<T> GridShape for Grid<T> {
    type Cell = T;

    fn outer_len(&self) -> usize {
        self.len()
    }

    fn row(&self, x: usize) -> Option<&[T]> {
        self.column(x)
    }
}

impl<T> GridShape for [Vec<T>] {
    type Cell = T;

    fn outer_len(&self) -> usize {
        self.len()
    }

    fn row(&self, x: usize) -> Option<&[T]> {
        self.get(x).map(Vec::as_slice)
    }
}

impl<T> GridShape for Vec<Vec<T>> {
    type Cell = T;

    fn outer_len(&self) -> usize {
        self.len()
    }

    fn row(&self, x: usize) -> Option<&[T]> {
        self.as_slice().row(x)
    }
}

impl<T, const N: usize> GridShape for [[T; N]] {
    type Cell = T;

    fn outer_len(&self) -> usize {
        self.len()
    }

    fn row(&self, x: usize) -> Option<&[T]> {
        self.get(x).map(|row| row.as_slice())
    }
}

impl<T, const N: usize, const M: usize> GridShape for [[T; N]; M] {
    type Cell = T;

    fn outer_len(&self) -> usize {
        M
    }

    fn row(&self, x: usize) -> Option<&[T]> {
        self.as_slice().row(x)
    }
}

impl<T, const N: usize> GridShape for Vec<[T; N]> {
    type Cell = T;

    fn outer_len(&self) -> usize {
        self.len()
    }

    fn row(&self, x: usize) -> Option<&[T]> {
        self.as_slice().row(x)
    }
}
