use gridstar_core::Point;

use crate::frontier::FrontierEntry;
use crate::search::SearchState;

/// A finalized position and the order in which it was finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitedEntry {
    pub position: Point,
    pub order: usize,
}

/// Everything an observer (a renderer, a log, a test) can see of a search
/// between two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSnapshot {
    pub state: SearchState,
    pub start: Option<Point>,
    pub goal: Option<Point>,
    /// Open candidates in pop order.
    pub frontier: Vec<FrontierEntry>,
    /// Closed positions in discovery order.
    pub visited: Vec<VisitedEntry>,
    pub path: Option<Vec<Point>>,
    pub expansions: usize,
    /// Most entries the frontier ever held at once.
    pub frontier_peak: usize,
}

impl SearchSnapshot {
    /// Snapshot of a stepper with no session.
    pub fn idle() -> Self {
        Self {
            state: SearchState::Idle,
            start: None,
            goal: None,
            frontier: Vec::new(),
            visited: Vec::new(),
            path: None,
            expansions: 0,
            frontier_peak: 0,
        }
    }

    /// Discovery order of `p`, if it has been finalized.
    pub fn order_of(&self, p: Point) -> Option<usize> {
        self.visited
            .iter()
            .find(|v| v.position == p)
            .map(|v| v.order)
    }

    /// Whether `p` is waiting in the frontier.
    pub fn is_open(&self, p: Point) -> bool {
        self.frontier.iter().any(|e| e.position == p)
    }

    /// Whether `p` lies on the found path.
    pub fn on_path(&self, p: Point) -> bool {
        self.path.as_ref().is_some_and(|path| path.contains(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, Stepper};

    #[test]
    fn snapshot_mid_search() {
        let g: Graph = crate::builtin_maze().into_iter().collect();
        let mut s = Stepper::new(&g);
        s.start(Point::new(0, 0), Point::new(7, 7)).unwrap();
        s.step().unwrap();

        let snap = s.snapshot();
        assert_eq!(snap.state, SearchState::Running);
        assert_eq!(snap.start, Some(Point::new(0, 0)));
        assert_eq!(snap.order_of(Point::new(0, 0)), Some(1));
        assert!(snap.is_open(Point::new(1, 0)));
        assert!(snap.is_open(Point::new(0, 1)));
        assert!(!snap.is_open(Point::new(0, 0)));
        assert!(!snap.on_path(Point::new(0, 0)));
        assert_eq!(snap.expansions, 1);
        assert_eq!(snap.frontier_peak, 2);
    }

    #[test]
    fn snapshot_after_success_marks_path() {
        let g: Graph = crate::builtin_maze().into_iter().collect();
        let mut s = Stepper::new(&g);
        s.start(Point::new(0, 0), Point::new(2, 1)).unwrap();
        s.run_to_completion().unwrap();
        let snap = s.snapshot();
        assert_eq!(snap.state, SearchState::Succeeded);
        assert!(snap.on_path(Point::new(2, 0)));
        assert!(snap.order_of(Point::new(2, 1)).is_some());
    }
}
