use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
///
/// `f` is a snapshot taken at push time; the arena may have moved on since,
/// in which case the entry is stale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeRef {
    pub idx: usize,
    pub f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of pending nodes keyed by total estimate.
///
/// Duplicate entries for the same index are allowed.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for arena index `idx` with priority `f`.
    #[inline]
    pub fn push(&mut self, idx: usize, f: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(NodeRef { idx, f, seq });
    }

    /// Remove and return the entry with the smallest `f`.
    #[inline]
    pub fn pop_min(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_f() {
        let mut q = Frontier::new();
        for (idx, f) in [(0, 7), (1, 3), (2, 9), (3, 1), (4, 5)] {
            q.push(idx, f);
        }
        assert_eq!(q.len(), 5);
        let order: Vec<i32> = std::iter::from_fn(|| q.pop_min()).map(|r| r.f).collect();
        assert_eq!(order, vec![1, 3, 5, 7, 9]);
        assert!(q.is_empty());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut q = Frontier::new();
        q.push(10, 4);
        q.push(11, 4);
        q.push(12, 2);
        q.push(13, 4);
        let order: Vec<usize> = std::iter::from_fn(|| q.pop_min()).map(|r| r.idx).collect();
        assert_eq!(order, vec![12, 10, 11, 13]);
    }

    #[test]
    fn keeps_duplicates() {
        let mut q = Frontier::new();
        q.push(1, 6);
        q.push(1, 4);
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop_min().map(|r| (r.idx, r.f)), Some((1, 4)));
        assert_eq!(q.pop_min().map(|r| (r.idx, r.f)), Some((1, 6)));
        assert_eq!(q.pop_min(), None);
    }

    #[test]
    fn clear_empties() {
        let mut q = Frontier::new();
        q.push(0, 0);
        q.clear();
        assert!(q.is_empty());
    }
}
