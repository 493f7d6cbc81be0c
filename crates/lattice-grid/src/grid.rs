//! Square grid container filled by a generator callback.
//!
//! A [`Grid`] is built eagerly: the generator is called once per coordinate,
//! `x`-major and `y`-minor, both ascending. Cells are stored column by column
//! so that `grid[x][y]` yields the value the generator returned for `(x, y)`.

#![warn(missing_docs)]

use core::convert::Infallible;
use core::fmt;
use core::ops::{Index, IndexMut};

use rand::Rng;
use tracing::{debug, warn};

use crate::error::GridError;
use crate::random;

/// A `size × size` grid of cells.
///
/// The outer index `x` selects a column and the inner index `y` a cell within
/// it. Columns are only ever handed out as slices, so cell values may be
/// reassigned after construction but the square shape cannot be changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    /// One `Vec` per `x`, each holding exactly `columns.len()` cells.
    columns: Vec<Vec<T>>,
}

impl<T> Grid<T> {
    /// Creates a new grid by calling `callback(x, y)` for every coordinate.
    ///
    /// # Arguments
    /// * `size` - Extent of both dimensions; `0` produces an empty grid
    /// * `callback` - Generator for the value stored at `(x, y)`
    ///
    /// The callback is invoked exactly `size * size` times, for `x` in
    /// `0..size` and, within each `x`, for `y` in `0..size`. A panic in the
    /// callback unwinds out of the constructor and drops the cells built so far.
    pub fn new<F>(size: usize, mut callback: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        match Self::try_new(size, |x, y| Ok::<T, Infallible>(callback(x, y))) {
            Ok(grid) => grid,
            Err(never) => match never {},
        }
    }

    /// Creates a new grid from a fallible generator.
    ///
    /// Invocation order is the same as [`Grid::new`]. The first `Err` stops
    /// construction immediately: no further coordinates are generated, the
    /// cells produced so far are dropped and the error is returned unchanged.
    pub fn try_new<E, F>(size: usize, mut callback: F) -> Result<Self, E>
    where
        F: FnMut(usize, usize) -> Result<T, E>,
    {
        let mut columns = Vec::with_capacity(size);

        for x in 0..size {
            let mut column = Vec::with_capacity(size);
            for y in 0..size {
                let cell = callback(x, y).inspect_err(|_| {
                    debug!(x, y, size, "Generator failed, discarding partially built grid");
                })?;
                column.push(cell);
            }
            columns.push(column);
        }

        debug!(size, cells = size * size, "Grid constructed");
        Ok(Grid { columns })
    }

    /// Creates a new grid from a signed size.
    ///
    /// Negative sizes (and sizes that do not fit in `usize`) are treated as
    /// an empty grid; the callback is never invoked in that case.
    pub fn from_signed_size<F>(size: i64, callback: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let extent = match usize::try_from(size) {
            Ok(extent) => extent,
            Err(_) => {
                warn!(size, "Grid size is not a valid extent, building an empty grid");
                0
            }
        };
        Self::new(extent, callback)
    }

    /// Gets the extent of both dimensions.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Number of outer entries. Always equal to [`Grid::size`].
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` for a grid built with size `0`.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Gets the cell at `(x, y)`, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.columns.get(x)?.get(y)
    }

    /// Gets a mutable reference to the cell at `(x, y)`, or `None` when out of range.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.columns.get_mut(x)?.get_mut(y)
    }

    /// Gets the column at outer index `x`.
    pub fn column(&self, x: usize) -> Option<&[T]> {
        self.columns.get(x).map(Vec::as_slice)
    }

    /// All columns, in ascending `x` order.
    pub fn columns(&self) -> &[Vec<T>] {
        &self.columns
    }

    /// Consumes the grid and returns its columns.
    pub fn into_columns(self) -> Vec<Vec<T>> {
        self.columns
    }

    /// Picks a uniformly random cell using the thread-local generator.
    ///
    /// See [`random::random`].
    pub fn random(&self) -> Result<&T, GridError> {
        random::random(self)
    }

    /// Picks a uniformly random cell using the supplied generator.
    ///
    /// See [`random::random_in`].
    pub fn random_in<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, GridError> {
        random::random_in(self, rng)
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, x: usize) -> &[T] {
        &self.columns[x]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, x: usize) -> &mut [T] {
        &mut self.columns[x]
    }
}

impl<T> AsRef<[Vec<T>]> for Grid<T> {
    fn as_ref(&self) -> &[Vec<T>] {
        &self.columns
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid ({}x{})", self.size(), self.size())?;
        for column in &self.columns {
            for (y, cell) in column.iter().enumerate() {
                if y > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
