use std::collections::VecDeque;

use gridpath_core::{Point, Range};

use crate::traits::Pather;

/// Sentinel value meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Breadth-first distance map from `source`, one entry per cell of `range`
/// in row-major order. Each step has cost 1; impassable or unreached cells
/// hold [`UNREACHABLE`].
///
/// Much simpler than A* and exact on unit-cost grids, which makes it the
/// reference the search is checked against.
pub fn bfs_map<P: Pather>(pather: &P, range: Range, source: Point) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; range.len()];
    let Some(si) = range.index(source) else {
        return dist;
    };
    dist[si] = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(si);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci];
        let cp = range.point(ci);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if !pather.passable(np) {
                continue;
            }
            let Some(ni) = range.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current_dist + 1;
            queue.push_back(ni);
        }
    }

    dist
}

/// Number of steps on a shortest path from `from` to `to`, or `None` if `to`
/// cannot be reached.
pub fn bfs_distance<P: Pather>(pather: &P, range: Range, from: Point, to: Point) -> Option<i32> {
    let ti = range.index(to)?;
    let d = bfs_map(pather, range, from)[ti];
    (d != UNREACHABLE).then_some(d)
}
