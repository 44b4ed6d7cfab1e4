use std::collections::HashMap;

use gridstar_core::Point;

/// Closed set: positions that have been popped and expanded.
///
/// Each position is stamped with a discovery order (1 for the first position
/// finalized, 2 for the next, and so on). The order exists for observers only;
/// the search itself just asks [`contains`](Self::contains).
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    order: HashMap<Point, usize>,
    sequence: Vec<Point>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize `p`, returning its discovery order, or `None` if it was
    /// already finalized (its order is left untouched).
    pub fn insert(&mut self, p: Point) -> Option<usize> {
        if self.order.contains_key(&p) {
            return None;
        }
        self.sequence.push(p);
        let n = self.sequence.len();
        self.order.insert(p, n);
        Some(n)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.order.contains_key(&p)
    }

    /// Discovery order of `p`, if finalized.
    pub fn order(&self, p: Point) -> Option<usize> {
        self.order.get(&p).copied()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Positions in the order they were finalized, with their order index.
    pub fn iter_in_order(&self) -> impl Iterator<Item = (Point, usize)> + '_ {
        self.sequence.iter().enumerate().map(|(i, &p)| (p, i + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_start_at_one_and_increase() {
        let mut v = VisitedSet::new();
        assert_eq!(v.insert(Point::new(0, 0)), Some(1));
        assert_eq!(v.insert(Point::new(1, 0)), Some(2));
        assert_eq!(v.order(Point::new(1, 0)), Some(2));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn reinsert_keeps_first_order() {
        let mut v = VisitedSet::new();
        v.insert(Point::new(3, 3));
        v.insert(Point::new(4, 3));
        assert_eq!(v.insert(Point::new(3, 3)), None);
        assert_eq!(v.order(Point::new(3, 3)), Some(1));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn iter_in_order_matches_orders() {
        let mut v = VisitedSet::new();
        for p in [Point::new(2, 0), Point::new(0, 5), Point::new(-1, -1)] {
            v.insert(p);
        }
        let listed: Vec<_> = v.iter_in_order().collect();
        assert_eq!(
            listed,
            vec![
                (Point::new(2, 0), 1),
                (Point::new(0, 5), 2),
                (Point::new(-1, -1), 3)
            ]
        );
        for (p, n) in listed {
            assert_eq!(v.order(p), Some(n));
        }
        assert!(!v.contains(Point::new(0, 0)));
    }
}
