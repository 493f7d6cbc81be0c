use lattice_grid::{Grid, GridShape, random_position_in};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Each cell stores its own coordinates as a label
    let grid = Grid::new(6, |x, y| format!("{}{}", (b'a' + x as u8) as char, y));
    println!("{}", grid);

    // Same seed, same picks
    let mut rng = StdRng::seed_from_u64(2024);
    let num_samples = 5;
    println!("Sampling {} random cells...", num_samples);
    for _ in 0..num_samples {
        let (x, y) = random_position_in(&grid, &mut rng)?;
        println!("  ({}, {}) -> {}", x, y, grid[x][y]);
    }

    // Any nested container works, not just a Grid
    let jagged = vec![vec![1, 2, 3], vec![4], vec![5, 6]];
    println!(
        "\nJagged input has {} rows, sampled value: {}",
        jagged.outer_len(),
        lattice_grid::random(&jagged)?
    );

    // Sampling an empty grid is an error, not a panic
    let empty: Grid<u8> = Grid::new(0, |_, _| 0);
    match empty.random() {
        Ok(value) => println!("Unexpected value from empty grid: {}", value),
        Err(e) => println!("Empty grid: {}", e),
    }

    Ok(())
}
