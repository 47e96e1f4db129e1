use gridpath_core::{Grid, Point, Range};
use log::{debug, trace};

use crate::error::NotFound;
use crate::frontier::Frontier;
use crate::node::NodeStates;
use crate::route::{self, Route};
use crate::traits::AstarPather;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped with up-to-date priority and expanded.
    pub expanded: usize,
    /// Entries pushed onto the frontier, start included.
    pub pushed: usize,
    /// Popped entries skipped because a cheaper one superseded them.
    pub stale: usize,
}

/// A* search over any [`AstarPather`] restricted to a grid rectangle.
///
/// Owns the node arena and the frontier. Each [`run`](Astar::run) starts
/// from scratch; the arena stays readable afterwards through
/// [`states`](Astar::states).
pub struct Astar<'a, P> {
    pather: &'a P,
    states: NodeStates,
    frontier: Frontier,
    stats: SearchStats,
    nbuf: Vec<Point>,
}

impl<'a, P: AstarPather> Astar<'a, P> {
    pub fn new(pather: &'a P, range: Range) -> Self {
        Self {
            pather,
            states: NodeStates::new(range),
            frontier: Frontier::new(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Search state left by the last run.
    pub fn states(&self) -> &NodeStates {
        &self.states
    }

    /// Counters of the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute a shortest path from `from` to `to`.
    ///
    /// Returns the full route (both endpoints included) or [`NotFound`] once
    /// the frontier is exhausted.
    ///
    /// # Panics
    ///
    /// If either endpoint lies outside the range.
    pub fn run(&mut self, from: Point, to: Point) -> Result<Route, NotFound> {
        let range = self.states.range();
        let Some(start_idx) = self.states.idx(from) else {
            panic!("start {from} is outside search range {range}");
        };
        let Some(goal_idx) = self.states.idx(to) else {
            panic!("end {to} is outside search range {range}");
        };

        self.states.reset();
        self.frontier.clear();
        self.stats = SearchStats::default();

        debug!("astar: {from} -> {to} in {range}");

        let pather = self.pather;
        let h = pather.estimate(from, to);
        self.states.relax(start_idx, 0, h, None);
        self.frontier.push(start_idx, h);
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.frontier.pop_min() else {
                break 'search false;
            };

            let ci = current.idx;

            // A cheaper entry for this node was pushed after this one.
            if self.states.node(ci).f != current.f {
                self.stats.stale += 1;
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.stats.expanded += 1;
            let current_g = self.states.node(ci).g;
            let current_point = self.states.point(ci);
            trace!("astar: expand {current_point} g={current_g} f={}", current.f);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                if !pather.passable(np) {
                    continue;
                }
                let Some(ni) = self.states.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);
                let h = pather.estimate(np, to);

                let n = self.states.node(ni);
                if n.visited && tentative_g + h >= n.f {
                    continue;
                }

                self.states.relax(ni, tentative_g, h, Some(current_point));
                self.frontier.push(ni, tentative_g + h);
                self.stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;

        debug!(
            "astar: {} after {} expansions ({} pushed, {} stale)",
            if found { "found" } else { "exhausted" },
            self.stats.expanded,
            self.stats.pushed,
            self.stats.stale,
        );

        if !found {
            return Err(NotFound {
                start: from,
                end: to,
            });
        }

        Ok(route::reconstruct(&self.states, to))
    }
}

/// Shortest path on `grid` from `start` to `end`.
///
/// Blocked cells are never entered; every step costs 1 and the Manhattan
/// distance guides the search.
pub fn search(grid: &Grid, start: Point, end: Point) -> Result<Route, NotFound> {
    Astar::new(grid, grid.bounds()).run(start, end)
}

/// Search a grid between its own start and end cells.
pub trait ShortestPath {
    fn shortest_path(&self) -> Result<Route, NotFound>;
}

impl ShortestPath for Grid {
    fn shortest_path(&self) -> Result<Route, NotFound> {
        search(self, self.start(), self.end())
    }
}
