use gridpath_core::{Point, Range};

// ---------------------------------------------------------------------------
// Per-cell search bookkeeping
// ---------------------------------------------------------------------------

/// Search state of one grid cell.
///
/// Once `visited` is set, `f == g + h` holds, and `parent` is either `None`
/// (the start cell) or the neighbour this cell was best reached from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeState {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<Point>,
    pub(crate) visited: bool,
}

impl NodeState {
    /// Best known cost from the start to this cell.
    #[inline]
    pub fn cost_so_far(&self) -> i32 {
        self.g
    }

    /// Estimated remaining cost to the goal.
    #[inline]
    pub fn heuristic(&self) -> i32 {
        self.h
    }

    /// `cost_so_far + heuristic`, the frontier priority.
    #[inline]
    pub fn total_estimate(&self) -> i32 {
        self.f
    }

    /// The cell this one was reached from on the best known path.
    #[inline]
    pub fn predecessor(&self) -> Option<Point> {
        self.parent
    }

    /// Whether this cell has ever been assigned a cost.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

// ---------------------------------------------------------------------------
// NodeStates arena
// ---------------------------------------------------------------------------

/// Dense arena of [`NodeState`]s, one per cell of a [`Range`], indexed
/// row-major. Predecessors are stored as coordinates, never as references.
#[derive(Debug, Clone)]
pub struct NodeStates {
    range: Range,
    nodes: Vec<NodeState>,
}

impl NodeStates {
    /// Fresh, all-unvisited state for every cell in `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            nodes: vec![NodeState::default(); range.len()],
        }
    }

    /// The covered grid rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// State of `p`, or `None` if `p` is outside the range.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&NodeState> {
        self.range.index(p).map(|i| &self.nodes[i])
    }

    /// Iterate over the visited cells and their state, row-major.
    pub fn visited(&self) -> impl Iterator<Item = (Point, &NodeState)> + '_ {
        self.range
            .iter()
            .zip(self.nodes.iter())
            .filter(|(_, n)| n.visited)
    }

    /// Forget all state without reallocating.
    pub(crate) fn reset(&mut self) {
        self.nodes.fill(NodeState::default());
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.range.index(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.range.point(idx)
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &NodeState {
        &self.nodes[idx]
    }

    /// Record a (better) way of reaching `idx`.
    #[inline]
    pub(crate) fn relax(&mut self, idx: usize, g: i32, h: i32, parent: Option<Point>) {
        let n = &mut self.nodes[idx];
        n.g = g;
        n.h = h;
        n.f = g + h;
        n.parent = parent;
        n.visited = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_states_are_unvisited() {
        let states = NodeStates::new(Range::new(0, 0, 3, 2));
        assert_eq!(states.visited().count(), 0);
        let n = states.get(Point::new(2, 1)).unwrap();
        assert!(!n.is_visited());
        assert_eq!(n.predecessor(), None);
        assert!(states.get(Point::new(3, 0)).is_none());
    }

    #[test]
    fn relax_keeps_total_consistent() {
        let mut states = NodeStates::new(Range::new(0, 0, 3, 3));
        let p = Point::new(1, 2);
        let i = states.idx(p).unwrap();
        states.relax(i, 3, 2, Some(Point::new(1, 1)));
        let n = states.get(p).unwrap();
        assert!(n.is_visited());
        assert_eq!(n.cost_so_far(), 3);
        assert_eq!(n.heuristic(), 2);
        assert_eq!(n.total_estimate(), 5);
        assert_eq!(n.predecessor(), Some(Point::new(1, 1)));
        assert_eq!(states.point(i), p);
        assert_eq!(states.visited().map(|(q, _)| q).collect::<Vec<_>>(), vec![p]);

        states.reset();
        assert_eq!(states.visited().count(), 0);
    }
}
