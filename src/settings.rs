use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "LATTICE";
/// Upper bound on `sampling.trials`; each trial logs one line.
const MAX_TRIALS: usize = 1_000_000;

/// Demo parameters read from `config/default.toml` and `LATTICE_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Signed on purpose, negative sizes build an empty grid.
    pub grid_size: i64,
    pub trials: usize,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let grid_size = config.get_int("grid.size")?;

        let trials = config.get_int("sampling.trials")?;
        let trials = usize::try_from(trials).map_err(|_| {
            ConfigError::Message(format!("sampling.trials must be non-negative, got {}", trials))
        })?;
        if trials > MAX_TRIALS {
            return Err(ConfigError::Message(format!(
                "sampling.trials must be at most {}, got {}",
                MAX_TRIALS, trials
            )));
        }

        let seed = match config.get_int("sampling.seed") {
            Ok(seed) => Some(u64::try_from(seed).map_err(|_| {
                ConfigError::Message(format!("sampling.seed must be non-negative, got {}", seed))
            })?),
            Err(ConfigError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Settings {
            grid_size,
            trials,
            seed,
        })
    }
}

fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("grid.size", 4_i64)?
        .set_default("sampling.trials", 8_i64)
}

/// `LATTICE_GRID__SIZE` maps to `grid.size`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with(DEFAULT_CONFIG_PATH, environment())
}

/// Layers defaults, the optional TOML file at `path`, then `env`.
fn load_config_with(path: &str, env: Environment) -> Result<Config, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = base_builder()?
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(env)
        .build();

    match settings {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
