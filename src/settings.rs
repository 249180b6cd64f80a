use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use lattice_grid::AxisOrder;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level settings for the grid walker.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub grid: GridSettings,
}

/// The region to walk. `end` decides the dimensionality.
#[derive(Debug, Clone, Deserialize)]
pub struct GridSettings {
    pub end: Vec<i64>,
    #[serde(default)]
    pub start: Option<Vec<i64>>,
    #[serde(default)]
    pub order: AxisOrder,
}

/// Loads settings from a TOML file, with `LATTICE_GRID__ORDER`-style
/// environment overrides on top. Coordinate lists are comma separated,
/// e.g. `LATTICE_GRID__END=4,5`.
pub fn load_config(path: &str) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let builder = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(environment());

    match build(builder) {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// `LATTICE_`-prefixed overrides; `grid.end` and `grid.start` parse as
/// integer lists.
fn environment() -> Environment {
    Environment::with_prefix("LATTICE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("grid.end")
        .with_list_parse_key("grid.start")
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    builder.build()?.try_deserialize()
}

#[cfg(test)]
fn parse(toml: &str) -> Result<Settings, ConfigError> {
    build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
}
