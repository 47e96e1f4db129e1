//! **gridpath** — find a shortest path across a grid of random obstacles.
//!
//! Wires the pieces of the workspace together: [`config`] turns
//! command-line arguments into a grid (generated or read from a map file),
//! [`gridpath_paths`] searches it, and [`render`] prints the outcome.

pub mod config;
pub mod error;
pub mod render;

use std::io::Write;

use gridpath_core::Grid;
use gridpath_paths::{NotFound, Route, ShortestPath, bfs_distance};
use log::{info, warn};

pub use config::{Args, Config, GridSource};
pub use error::{AppError, Result};

/// Load the grid, search it and write the report to `out`.
///
/// The report is `true`/`false` (whether a path exists), the grid, and on
/// success the route overlay plus the route coordinates from end to start.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<std::result::Result<Route, NotFound>> {
    let grid = config.load_grid()?;
    let outcome = grid.shortest_path();

    match &outcome {
        Ok(route) => info!("found route of {} steps", route.steps()),
        Err(e) => warn!("{e}"),
    }

    if config.verify {
        verify(&grid, outcome.as_ref().ok())?;
    }

    writeln!(out, "{}", outcome.is_ok())?;
    out.write_all(render::render_grid(&grid).as_bytes())?;
    if let Ok(route) = &outcome {
        if config.color {
            render::write_colored(out, &grid, Some(route))?;
        } else {
            out.write_all(render::render_route(&grid, route).as_bytes())?;
        }
        writeln!(out, "{}", render::render_coords(route))?;
    }
    out.flush()?;
    Ok(outcome)
}

fn verify(grid: &Grid, route: Option<&Route>) -> Result<()> {
    let astar = route.map(Route::steps);
    let bfs = bfs_distance(grid, grid.bounds(), grid.start(), grid.end());
    if astar.map(|s| s as i32) != bfs {
        return Err(AppError::Verify { astar, bfs });
    }
    info!("verified against BFS");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Point;
    use std::path::PathBuf;

    fn map_config(name: &str, text: &str) -> Config {
        let dir = std::env::temp_dir().join(format!("gridpath-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path: PathBuf = dir.join(name);
        std::fs::write(&path, text).unwrap();
        Config {
            source: GridSource::File(path),
            verify: true,
            ..Config::default()
        }
    }

    #[test]
    fn report_for_found_route() {
        let config = map_config("found.txt", "@o\n*#\n");
        let mut out = Vec::new();
        let route = run(&config, &mut out).unwrap().unwrap();
        assert_eq!(route.steps(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "true\n\
             @   o   \n\n*   #   \n\n\n\
             @   +   \n\n*   #   \n\n\n\
             (1, 1)  (1, 0)  (0, 0)  \n"
        );
    }

    #[test]
    fn report_for_missing_route() {
        let config = map_config("missing.txt", "@*#\n");
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        assert_eq!(
            outcome,
            Err(NotFound {
                start: Point::new(0, 0),
                end: Point::new(2, 0)
            })
        );
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "false\n@   *   #   \n\n\n");
    }

    #[test]
    fn seeded_random_runs_verify() {
        for seed in 0..20 {
            let config = Config {
                seed: Some(seed),
                verify: true,
                color: seed % 2 == 0,
                ..Config::default()
            };
            let mut out = Vec::new();
            run(&config, &mut out).unwrap();
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn bad_map_is_an_error() {
        let config = map_config("bad.txt", "@oo\n");
        let mut out = Vec::new();
        assert!(matches!(run(&config, &mut out), Err(AppError::Grid(_))));
    }
}
