// history.rs - Bounded point trail
//
// Keeps the most recent `capacity` points in push order. Once full,
// each push evicts exactly one point from the front.

use std::collections::VecDeque;

use super::Point3;

pub struct PointHistory {
    points: VecDeque<Point3>,
    capacity: usize,
}

impl PointHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, p: Point3) {
        self.points.push_back(p);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Oldest to newest. Borrowed, so callers cannot mutate the trail.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Point3> + '_ {
        self.points.iter()
    }

    /// Owned copy of the contents, oldest first.
    pub fn snapshot(&self) -> Vec<Point3> {
        self.points.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Point3 {
        Point3::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn test_fills_in_order() {
        let mut h = PointHistory::new(4);
        assert!(h.is_empty());
        for i in 0..3 { h.push(p(i)); }
        assert_eq!(h.snapshot(), vec![p(0), p(1), p(2)]);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut h = PointHistory::new(5);
        for i in 0..100 {
            h.push(p(i));
            assert!(h.len() <= 5);
        }
        assert_eq!(h.len(), 5);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let cap = 5;
        for k in [0, 1, 7, 23] {
            let mut h = PointHistory::new(cap);
            for i in 0..cap + k { h.push(p(i)); }
            let expected: Vec<_> = (k..cap + k).map(p).collect();
            assert_eq!(h.snapshot(), expected);
        }
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut h = PointHistory::new(3);
        h.push(p(1));
        let mut snap = h.snapshot();
        snap[0] = p(9);
        snap.push(p(10));
        assert_eq!(h.snapshot(), vec![p(1)]);
    }

    #[test]
    fn test_clear() {
        let mut h = PointHistory::new(3);
        for i in 0..5 { h.push(p(i)); }
        h.clear();
        assert_eq!(h.len(), 0);
        assert_eq!(h.capacity(), 3);
    }
}
