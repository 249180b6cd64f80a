mod settings; // brings `settings.rs` in as `crate::settings`

use std::io::{self, Write};

use anyhow::{Context, bail};
use lattice_grid::{Point, Region};
use settings::GridSettings;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Points go to stdout, logs to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings::DEFAULT_CONFIG_PATH.to_string());
    let settings = settings::load_config(&path)
        .with_context(|| format!("failed to load configuration from {path}"))?;

    let mut out = io::stdout().lock();
    let emitted = run(&settings.grid, &mut out)?;
    info!(emitted = %emitted, "Grid walk finished");
    Ok(())
}

/// Dispatches on the configured dimensionality and walks the grid.
fn run(grid: &GridSettings, out: &mut impl Write) -> anyhow::Result<u128> {
    match grid.end.len() {
        2 => walk::<2>(grid, out),
        3 => walk::<3>(grid, out),
        n => bail!("grid.end must have 2 or 3 coordinates, found {n}"),
    }
}

fn walk<const D: usize>(grid: &GridSettings, out: &mut impl Write) -> anyhow::Result<u128> {
    let end = Point::<D>::try_from(grid.end.as_slice())?;
    let start = match &grid.start {
        Some(coords) => Point::<D>::try_from(coords.as_slice())
            .context("grid.start must have as many coordinates as grid.end")?,
        None => Point::zero(),
    };

    let region = Region::new(start, end);
    info!(%start, %end, order = ?grid.order, points = %region.point_count(), "Walking grid");

    let mut emitted = 0u128;
    for p in region.iter_with(grid.order) {
        debug!(point = %p, "Emitting point");
        writeln!(out, "{p}")?;
        emitted += 1;
    }
    Ok(emitted)
}
