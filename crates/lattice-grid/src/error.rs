//! This module defines the error types used by the `lattice-grid` crate.

#![warn(missing_docs)]

use core::fmt;

/// Error type for grid operations.
///
/// Construction never produces a `GridError`: a failing generator callback
/// surfaces its own error type unchanged through [`crate::Grid::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The container has no outer entries, so there is no cell to pick.
    EmptyGrid,
    /// The outer entry at the given index has no inner entries.
    /// Only reachable with jagged input; a `Grid` never has empty columns.
    EmptyRow(usize),
    /// A [`crate::GridShape`] reported a row length that its cell lookup
    /// does not honour, so the sampled coordinate has no cell.
    OutOfBounds {
        /// Outer index of the sampled coordinate.
        x: usize,
        /// Inner index of the sampled coordinate.
        y: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "Cannot sample from an empty grid"),
            GridError::EmptyRow(x) => write!(f, "Cannot sample from empty row at x = {}", x),
            GridError::OutOfBounds { x, y } => {
                write!(f, "Sampled position ({}, {}) is out of bounds", x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}
