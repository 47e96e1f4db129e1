//! Command-line arguments and the validated run configuration.

use std::path::PathBuf;

use clap::Parser;
use gridpath_core::{Grid, Point};
use gridpath_gen::{DEFAULT_BLOCK_ONE_IN, MapGen};
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::error::{AppError, Result};

/// Default grid width and height.
pub const DEFAULT_SIZE: i32 = 5;

/// Largest generated grid, in cells.
pub const MAX_CELLS: u64 = 1 << 22;

/// Find a shortest path across a grid with A*.
#[derive(Parser, Debug, Clone)]
#[command(name = "gridpath", version, about)]
pub struct Args {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_SIZE)]
    pub width: i32,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_SIZE)]
    pub height: i32,

    /// Seed for the grid generator (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Block one cell in N on average (0 = no obstacles)
    #[arg(long, default_value_t = DEFAULT_BLOCK_ONE_IN)]
    pub block_one_in: u32,

    /// Fixed start cell as X,Y
    #[arg(long, value_parser = parse_point, requires = "end")]
    pub start: Option<Point>,

    /// Fixed end cell as X,Y
    #[arg(long, value_parser = parse_point, requires = "start")]
    pub end: Option<Point>,

    /// Read the grid from an ASCII map file instead of generating one
    #[arg(short, long, conflicts_with_all = ["width", "height", "seed", "block_one_in", "start", "end"])]
    pub map: Option<PathBuf>,

    /// Colorize the route overlay
    #[arg(long)]
    pub color: bool,

    /// Cross-check the route length with a breadth-first search
    #[arg(long)]
    pub verify: bool,
}

/// Parse `X,Y` into a [`Point`].
pub fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    Random {
        width: i32,
        height: i32,
        block_one_in: u32,
        endpoints: Option<(Point, Point)>,
    },
    File(PathBuf),
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: GridSource,
    pub seed: Option<u64>,
    pub color: bool,
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: GridSource::Random {
                width: DEFAULT_SIZE,
                height: DEFAULT_SIZE,
                block_one_in: DEFAULT_BLOCK_ONE_IN,
                endpoints: None,
            },
            seed: None,
            color: false,
            verify: false,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let source = match args.map {
            Some(path) => GridSource::File(path),
            None => {
                if args.width <= 0 || args.height <= 0 {
                    return Err(AppError::Config(format!(
                        "grid size must be positive, got {}x{}",
                        args.width, args.height
                    )));
                }
                let cells = args.width as u64 * args.height as u64;
                if cells > MAX_CELLS {
                    return Err(AppError::Config(format!(
                        "grid {}x{} has {cells} cells, at most {MAX_CELLS} allowed",
                        args.width, args.height
                    )));
                }
                let endpoints = match (args.start, args.end) {
                    (Some(s), Some(e)) => Some((s, e)),
                    (None, None) => None,
                    _ => {
                        return Err(AppError::Config(
                            "--start and --end must be given together".to_string(),
                        ));
                    }
                };
                GridSource::Random {
                    width: args.width,
                    height: args.height,
                    block_one_in: args.block_one_in,
                    endpoints,
                }
            }
        };
        Ok(Self {
            source,
            seed: args.seed,
            color: args.color,
            verify: args.verify,
        })
    }
}

impl Config {
    /// Build or load the grid this configuration describes.
    pub fn load_grid(&self) -> Result<Grid> {
        match &self.source {
            GridSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| AppError::ReadMap {
                    path: path.clone(),
                    source,
                })?;
                info!("loaded map {}", path.display());
                Ok(text.parse()?)
            }
            GridSource::Random {
                width,
                height,
                block_one_in,
                endpoints,
            } => {
                let seed = self.seed.unwrap_or_else(|| rand::rng().random());
                info!("generating {width}x{height} grid with seed {seed}");
                let mut mg =
                    MapGen::new(StdRng::seed_from_u64(seed)).with_block_one_in(*block_one_in);
                let grid = match endpoints {
                    Some((start, end)) => mg.random_grid_between(*width, *height, *start, *end)?,
                    None => mg.random_grid(*width, *height)?,
                };
                Ok(grid)
            }
        }
    }
}
