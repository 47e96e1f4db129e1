//! Text rendering of grids and routes.
//!
//! The plain layout spaces glyphs three columns apart and follows each row
//! with a blank line so the grid reads roughly square in a terminal. It can
//! be parsed back with [`Grid::from_str`](std::str::FromStr).

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridpath_core::{Attr, Grid, Point};
use gridpath_paths::Route;

/// Glyph for route cells between the endpoints.
pub const ROUTE_GLYPH: char = '+';

const CELL_SEP: &str = "   ";

fn glyph_at(grid: &Grid, p: Point, route: Option<&Route>) -> char {
    let attr = grid.attr(p);
    match (attr, route) {
        (Attr::Free, Some(r)) if r.contains(p) => ROUTE_GLYPH,
        _ => attr.glyph(),
    }
}

fn render(grid: &Grid, route: Option<&Route>) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push(glyph_at(grid, Point::new(x, y), route));
            out.push_str(CELL_SEP);
        }
        out.push_str("\n\n");
    }
    out.push('\n');
    out
}

/// The grid alone.
pub fn render_grid(grid: &Grid) -> String {
    render(grid, None)
}

/// The grid with route cells marked by [`ROUTE_GLYPH`].
pub fn render_route(grid: &Grid, route: &Route) -> String {
    render(grid, Some(route))
}

/// Route coordinates from end back to start, `(x, y)` separated by two
/// spaces.
pub fn render_coords(route: &Route) -> String {
    let mut out = String::new();
    for p in route.iter_from_end() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{p}  ");
    }
    out
}

fn color_of(ch: char) -> Color {
    match Attr::from_glyph(ch) {
        Some(Attr::Free) => Color::DarkGrey,
        Some(Attr::Blocked) => Color::Red,
        Some(Attr::Start) => Color::Green,
        Some(Attr::End) => Color::Blue,
        None => Color::Yellow,
    }
}

/// Write the route overlay with one foreground color per cell kind.
pub fn write_colored<W: Write>(out: &mut W, grid: &Grid, route: Option<&Route>) -> io::Result<()> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let ch = glyph_at(grid, Point::new(x, y), route);
            queue!(
                out,
                SetForegroundColor(color_of(ch)),
                Print(ch),
                ResetColor,
                Print(CELL_SEP)
            )?;
        }
        queue!(out, Print("\n\n"))?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::ShortestPath;

    fn sample() -> Grid {
        "@o\n*#".parse().unwrap()
    }

    #[test]
    fn grid_layout() {
        assert_eq!(render_grid(&sample()), "@   o   \n\n*   #   \n\n\n");
    }

    #[test]
    fn rendered_grid_parses_back() {
        let g: Grid = "@oo*\no*oo\nooo#".parse().unwrap();
        assert_eq!(render_grid(&g).parse::<Grid>().unwrap(), g);
    }

    #[test]
    fn route_overlay_marks_free_cells_only() {
        let g = sample();
        let route = g.shortest_path().unwrap();
        assert_eq!(render_route(&g, &route), "@   +   \n\n*   #   \n\n\n");
    }

    #[test]
    fn coords_run_end_to_start() {
        let route = sample().shortest_path().unwrap();
        assert_eq!(render_coords(&route), "(1, 1)  (1, 0)  (0, 0)  ");
    }

    #[test]
    fn colored_output_contains_glyphs() {
        let g = sample();
        let route = g.shortest_path().unwrap();
        let mut buf = Vec::new();
        write_colored(&mut buf, &g, Some(&route)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for ch in ['@', '+', '*', '#'] {
            assert!(text.contains(ch), "missing {ch:?} in {text:?}");
        }
        assert!(text.contains("\x1b["));
    }
}
