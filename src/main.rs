mod settings; // brings `settings.rs` in as `crate::settings`

use anyhow::Context;
use lattice_grid::{Grid, random_position_in};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};

use settings::Settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Lattice demo started.");

    let config = settings::load_config().context("failed to load configuration")?;
    let settings = Settings::from_config(&config).context("invalid configuration")?;
    info!(?settings, "Using settings");

    let grid = Grid::from_signed_size(settings.grid_size, |x, y| x * 10 + y);
    println!("{}", grid);

    let picks = match settings.seed {
        Some(seed) => {
            info!(seed, "Sampling with a seeded generator");
            sample_cells(&grid, &mut StdRng::seed_from_u64(seed), settings.trials)?
        }
        None => sample_cells(&grid, &mut rand::rng(), settings.trials)?,
    };

    info!(picks, "Lattice demo finished.");
    Ok(())
}

/// Samples `trials` cells from `grid`, logging each pick.
///
/// Returns the number of cells sampled.
fn sample_cells<R: Rng + ?Sized>(
    grid: &Grid<usize>,
    rng: &mut R,
    trials: usize,
) -> anyhow::Result<usize> {
    if grid.is_empty() {
        warn!("Grid is empty, skipping sampling.");
        return Ok(0);
    }

    let mut picks = 0;
    for trial in 0..trials {
        let (x, y) = random_position_in(grid, rng)
            .with_context(|| format!("sampling trial {} failed", trial))?;
        info!(trial, x, y, value = grid[x][y], "Sampled cell");
        picks += 1;
    }
    Ok(picks)
}
