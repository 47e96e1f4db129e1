use gridpath_core::Point;

use crate::node::NodeStates;

/// A path found by the search, stored from start to end inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Wrap a start-to-end list of points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves, i.e. edges between consecutive points.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Points from start to end.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Points from end back to start.
    pub fn iter_from_end(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().rev()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Walk predecessor links from `end` back to the cell without one and
/// return the route in start-to-end order.
///
/// Only meaningful after a successful search: `end` must have been visited.
pub fn reconstruct(states: &NodeStates, end: Point) -> Route {
    debug_assert!(
        states.get(end).is_some_and(|n| n.is_visited()),
        "reconstructing from unvisited cell {end}"
    );
    let mut points = Vec::new();
    let mut cur = Some(end);
    while let Some(p) = cur {
        points.push(p);
        cur = states.get(p).and_then(|n| n.predecessor());
    }
    points.reverse();
    Route { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Range;

    #[test]
    fn reconstruct_follows_predecessors() {
        let mut states = NodeStates::new(Range::new(0, 0, 3, 1));
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(2, 0);
        states.relax(states.idx(a).unwrap(), 0, 2, None);
        states.relax(states.idx(b).unwrap(), 1, 1, Some(a));
        states.relax(states.idx(c).unwrap(), 2, 0, Some(b));

        let route = reconstruct(&states, c);
        assert_eq!(route.points(), &[a, b, c]);
        assert_eq!(route.steps(), 2);
        assert_eq!(route.start(), Some(a));
        assert_eq!(route.end(), Some(c));
        assert_eq!(route.iter_from_end().collect::<Vec<_>>(), vec![c, b, a]);
    }

    #[test]
    fn single_point_route_has_no_steps() {
        let route = Route::from_points(vec![Point::new(4, 4)]);
        assert_eq!(route.len(), 1);
        assert_eq!(route.steps(), 0);
        assert!(route.contains(Point::new(4, 4)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let route = Route::from_points(vec![Point::new(0, 0), Point::new(1, 0)]);
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"points":[{"x":0,"y":0},{"x":1,"y":0}]}"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);
    }
}
