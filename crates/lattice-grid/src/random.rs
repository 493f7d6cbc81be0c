//! Uniform random cell sampling over any [`GridShape`].
//!
//! The outer index is drawn first, then the inner index is drawn over the
//! length of that particular row. For square input (every [`crate::Grid`])
//! each cell is picked with probability `1 / n²`; jagged input skews the
//! distribution towards cells in shorter rows.

#![warn(missing_docs)]

use rand::Rng;
use tracing::trace;

use crate::error::GridError;
use crate::shape::GridShape;

/// Picks a random `(x, y)` coordinate of `grid` using `rng`.
///
/// # Errors
/// * [`GridError::EmptyGrid`] if `grid` has no outer entries
/// * [`GridError::EmptyRow`] if the selected outer entry has no inner entries
pub fn random_position_in<G, R>(grid: &G, rng: &mut R) -> Result<(usize, usize), GridError>
where
    G: GridShape + ?Sized,
    R: Rng + ?Sized,
{
    let outer = grid.outer_len();
    if outer == 0 {
        return Err(GridError::EmptyGrid);
    }
    let x = rng.random_range(0..outer);

    let inner = grid.inner_len(x);
    if inner == 0 {
        return Err(GridError::EmptyRow(x));
    }
    let y = rng.random_range(0..inner);

    trace!(x, y, "Sampled grid position");
    Ok((x, y))
}

/// Returns the cell at a uniformly chosen coordinate, drawing from `rng`.
///
/// # Errors
/// Same as [`random_position_in`], plus [`GridError::OutOfBounds`] when the
/// shape's `inner_len` reports more cells than its `row` holds.
pub fn random_in<'a, G, R>(grid: &'a G, rng: &mut R) -> Result<&'a G::Cell, GridError>
where
    G: GridShape + ?Sized,
    R: Rng + ?Sized,
{
    let (x, y) = random_position_in(grid, rng)?;
    // Misses only when `inner_len` and `row` disagree.
    grid.cell(x, y).ok_or(GridError::OutOfBounds { x, y })
}

/// Returns the cell at a uniformly chosen coordinate, drawing from the
/// thread-local generator.
pub fn random<G>(grid: &G) -> Result<&G::Cell, GridError>
where
    G: GridShape + ?Sized,
{
    random_in(grid, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_generated_value() {
        let grid = Grid::new(4, |x, y| x * 10 + y);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let value = *grid.random_in(&mut rng).unwrap();
            let (x, y) = (value / 10, value % 10);
            assert!(x < 4 && y < 4);
            assert_eq!(grid[x][y], value);
        }
    }

    #[test]
    fn test_every_cell_reachable() {
        let grid = Grid::new(3, |x, y| (x, y));
        let mut seen = HashSet::new();
        for _ in 0..5000 {
            seen.insert(*random(&grid).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let grid = Grid::new(5, |x, y| x * 5 + y);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let first: Vec<(usize, usize)> = (0..50)
            .map(|_| random_position_in(&grid, &mut a).unwrap())
            .collect();
        let second: Vec<(usize, usize)> = (0..50)
            .map(|_| random_position_in(&grid, &mut b).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_grid_fails() {
        let grid: Grid<u8> = Grid::new(0, |_, _| 0);
        assert_eq!(grid.random(), Err(GridError::EmptyGrid));

        let empty: Vec<Vec<u8>> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_position_in(&empty, &mut rng),
            Err(GridError::EmptyGrid)
        ));
    }

    #[test]
    fn test_empty_row_fails() {
        let jagged: Vec<Vec<u8>> = vec![Vec::new()];
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_in(&jagged, &mut rng), Err(GridError::EmptyRow(0)));
    }

    #[test]
    fn test_plain_containers() {
        let mut rng = StdRng::seed_from_u64(11);

        let nested = vec![vec!['a', 'b'], vec!['c', 'd']];
        let picked = *random_in(&nested, &mut rng).unwrap();
        assert!("abcd".contains(picked));

        let arrays = [[1u8; 3]; 3];
        assert_eq!(random_in(&arrays, &mut rng), Ok(&1));

        let slice: &[Vec<i32>] = &[vec![-1], vec![-2]];
        let value = *random_in(slice, &mut rng).unwrap();
        assert!(value == -1 || value == -2);
    }

    #[test]
    fn test_jagged_rows_use_own_length() {
        let jagged = vec![vec![0], vec![10, 11, 12]];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let (x, y) = random_position_in(&jagged, &mut rng).unwrap();
            assert!(y < jagged[x].len());
        }
    }

    #[test]
    fn test_dyn_rng() {
        let grid = Grid::new(2, |x, y| x + y);
        let mut seeded = StdRng::seed_from_u64(9);
        let rng: &mut dyn rand::RngCore = &mut seeded;
        assert!(random_in(&grid, rng).unwrap() <= &2);
    }

    /// Reports a longer row than it actually stores.
    struct Overstated(Vec<Vec<u8>>);

    impl GridShape for Overstated {
        type Cell = u8;

        fn outer_len(&self) -> usize {
            self.0.len()
        }

        fn row(&self, x: usize) -> Option<&[u8]> {
            self.0.get(x).map(Vec::as_slice)
        }

        fn inner_len(&self, x: usize) -> usize {
            self.0.get(x).map_or(0, |row| row.len() + 100)
        }
    }

    #[test]
    fn test_inconsistent_shape_is_out_of_bounds() {
        let shape = Overstated(vec![vec![7]]);
        let mut rng = StdRng::seed_from_u64(13);
        let mut saw_out_of_bounds = false;
        for _ in 0..200 {
            match random_in(&shape, &mut rng) {
                Ok(value) => assert_eq!(*value, 7),
                Err(e) => {
                    assert!(matches!(e, GridError::OutOfBounds { x: 0, y } if y >= 1));
                    saw_out_of_bounds = true;
                }
            }
        }
        assert!(saw_out_of_bounds);
    }
}
