#![warn(missing_docs)]
#![doc = "Square 2D grids filled by a generator callback."]
#![doc = ""]
#![doc = "This crate provides the `Grid` container, which is built eagerly by calling a"]
#![doc = "generator once per `(x, y)` coordinate, and uniform random cell sampling over"]
#![doc = "any two-level container through the `GridShape` trait."]

pub mod error;
pub mod grid;
pub mod random;
pub mod shape;

pub use error::GridError;
pub use grid::Grid;
pub use random::{random, random_in, random_position_in};
pub use shape::GridShape;
