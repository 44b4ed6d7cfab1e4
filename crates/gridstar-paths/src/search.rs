//! The stepwise A* engine.
//!
//! A [`Session`] holds everything one search needs: the node arena, the open
//! and closed sets and, once found, the path. [`Session::step`] performs one
//! atomic expansion. [`Stepper`] owns at most one session over a borrowed
//! graph and is what interactive drivers normally hold on to.

use gridstar_core::Point;

use crate::distance::manhattan;
use crate::error::{EndpointRole, SearchError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::graph::Graph;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::snapshot::{SearchSnapshot, VisitedEntry};
use crate::traits::Pather;
use crate::visited::VisitedSet;

/// Lifecycle of a [`Stepper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No session.
    Idle,
    /// Session open, goal not yet reached, frontier not yet drained.
    Running,
    /// Goal reached; a path is available.
    Succeeded,
    /// Frontier drained without reaching the goal.
    Exhausted,
}

impl SearchState {
    /// Whether the state is `Succeeded` or `Exhausted`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted)
    }
}

/// What a single call to `step` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The given position was finalized and its neighbors expanded; the
    /// search goes on.
    Expanded(Point),
    /// The goal was popped; the path is ready.
    Found,
    /// Nothing is left to expand and the goal was never reached.
    Exhausted,
}

/// Final result of driving a session to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Positions from start to goal, both included.
    Found(Vec<Point>),
    /// No route exists between start and goal.
    Exhausted,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(p) => Some(p),
            Self::Exhausted => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// State of one search from `start` to `goal`.
///
/// A session must always be stepped with the graph it was opened on.
#[derive(Debug, Clone)]
pub struct Session {
    start: Point,
    goal: Point,
    nodes: NodeArena,
    frontier: Frontier,
    visited: VisitedSet,
    state: SearchState,
    goal_node: Option<NodeId>,
    path: Option<Vec<Point>>,
    expansions: usize,
    nbuf: Vec<Point>,
}

impl Session {
    /// Open a session, seeding the frontier with the start node.
    ///
    /// Both endpoints must be vertices of `pather`.
    pub fn new<P: Pather>(pather: &P, start: Point, goal: Point) -> Result<Self, SearchError> {
        if !pather.contains(start) {
            return Err(SearchError::InvalidEndpoint {
                role: EndpointRole::Start,
                point: start,
            });
        }
        if !pather.contains(goal) {
            return Err(SearchError::InvalidEndpoint {
                role: EndpointRole::Goal,
                point: goal,
            });
        }

        let mut nodes = NodeArena::new();
        let root = SearchNode::new(start, None, 0, manhattan(start, goal));
        let id = nodes.alloc(root);
        let mut frontier = Frontier::new();
        frontier.push(FrontierEntry::new(id, &root));

        log::debug!("search {start} -> {goal} started (h = {})", root.h);
        Ok(Self {
            start,
            goal,
            nodes,
            frontier,
            visited: VisitedSet::new(),
            state: SearchState::Running,
            goal_node: None,
            path: None,
            expansions: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Perform one step: pop the best candidate, finalize it, then either
    /// finish (goal) or push its unvisited neighbors.
    ///
    /// On a finished session this returns the terminal signal again and
    /// changes nothing.
    pub fn step<P: Pather>(&mut self, pather: &P) -> Step {
        match self.state {
            SearchState::Succeeded => return Step::Found,
            SearchState::Exhausted => return Step::Exhausted,
            SearchState::Idle | SearchState::Running => {}
        }

        let Some(entry) = self.frontier.pop_min() else {
            self.state = SearchState::Exhausted;
            log::debug!(
                "search {} -> {} exhausted after {} expansions",
                self.start,
                self.goal,
                self.expansions
            );
            return Step::Exhausted;
        };

        let current = *self.nodes.get(entry.node);
        let order = self.visited.insert(current.position);
        // Other candidates for this position can never be expanded now.
        self.frontier.remove_position(current.position);

        if current.position == self.goal {
            let path = self.nodes.path_to(entry.node);
            log::debug!(
                "search {} -> {} found a {}-edge path after {} expansions",
                self.start,
                self.goal,
                path.len() - 1,
                self.expansions
            );
            self.goal_node = Some(entry.node);
            self.path = Some(path);
            self.state = SearchState::Succeeded;
            return Step::Found;
        }

        self.expansions += 1;
        log::trace!(
            "expand {} (#{}, g = {}, f = {})",
            current.position,
            order.unwrap_or_default(),
            current.g,
            current.f
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(current.position, &mut nbuf);

        let g = current.g.saturating_add(1);
        for &np in nbuf.iter() {
            if self.visited.contains(np) {
                continue;
            }
            if self.frontier.contains_with_cost_at_most(np, g) {
                log::trace!("  skip {np}: already queued at g <= {g}");
                continue;
            }
            let node = SearchNode::new(np, Some(entry.node), g, manhattan(np, self.goal));
            let id = self.nodes.alloc(node);
            self.frontier.push(FrontierEntry::new(id, &node));
            log::trace!("  queue {np} (g = {}, f = {})", node.g, node.f);
        }

        self.nbuf = nbuf;
        Step::Expanded(current.position)
    }

    /// Step until the session succeeds or is exhausted.
    pub fn run_to_completion<P: Pather>(&mut self, pather: &P) -> SearchOutcome {
        loop {
            match self.step(pather) {
                Step::Expanded(_) => {}
                Step::Found => {
                    return SearchOutcome::Found(self.path.clone().unwrap_or_default());
                }
                Step::Exhausted => return SearchOutcome::Exhausted,
            }
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Open set.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Closed set, with discovery order.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Every node created so far, including superseded candidates.
    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    /// The finalized goal node, once found.
    pub fn goal_node(&self) -> Option<NodeId> {
        self.goal_node
    }

    /// Start-to-goal path, once found.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    /// Number of positions finalized and expanded. The pop that reaches the
    /// goal is not an expansion.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Capture the observable state of the session.
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            state: self.state,
            start: Some(self.start),
            goal: Some(self.goal),
            frontier: self.frontier.entries(),
            visited: self
                .visited
                .iter_in_order()
                .map(|(position, order)| VisitedEntry { position, order })
                .collect(),
            path: self.path.clone(),
            expansions: self.expansions,
            frontier_peak: self.frontier.high_water(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stepper
// ---------------------------------------------------------------------------

/// Step-driven A* search over a borrowed graph.
///
/// ```
/// use gridstar_core::Point;
/// use gridstar_paths::{EdgeRecord, Graph, Step, Stepper};
///
/// let graph: Graph = [
///     EdgeRecord::new(Point::new(0, 0), Point::new(1, 0)),
///     EdgeRecord::new(Point::new(1, 0), Point::new(2, 0)),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut search = Stepper::new(&graph);
/// search.start(Point::new(0, 0), Point::new(2, 0)).unwrap();
/// while let Step::Expanded(p) = search.step().unwrap() {
///     println!("expanded {p}");
/// }
/// assert_eq!(search.path().map(<[_]>::len), Some(3));
/// ```
#[derive(Debug)]
pub struct Stepper<'g, P: Pather = Graph> {
    pather: &'g P,
    session: Option<Session>,
}

impl<'g, P: Pather> Stepper<'g, P> {
    /// Create an idle stepper over `pather`.
    pub fn new(pather: &'g P) -> Self {
        Self {
            pather,
            session: None,
        }
    }

    /// Discard any current session and open a fresh one.
    ///
    /// If either endpoint is not a vertex, nothing changes and
    /// [`SearchError::InvalidEndpoint`] is returned.
    pub fn start(&mut self, start: Point, goal: Point) -> Result<(), SearchError> {
        match Session::new(self.pather, start, goal) {
            Ok(session) => {
                self.session = Some(session);
                Ok(())
            }
            Err(err) => {
                log::warn!("search not started: {err}");
                Err(err)
            }
        }
    }

    /// Advance the current session by one step.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        let session = self.session.as_mut().ok_or(SearchError::NotStarted)?;
        Ok(session.step(self.pather))
    }

    /// Step until the current session succeeds or is exhausted.
    pub fn run_to_completion(&mut self) -> Result<SearchOutcome, SearchError> {
        let session = self.session.as_mut().ok_or(SearchError::NotStarted)?;
        Ok(session.run_to_completion(self.pather))
    }

    /// Drop the current session and return to `Idle`.
    pub fn reset(&mut self) {
        self.session = None;
    }

    pub fn state(&self) -> SearchState {
        self.session
            .as_ref()
            .map_or(SearchState::Idle, Session::state)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn frontier(&self) -> Option<&Frontier> {
        self.session.as_ref().map(Session::frontier)
    }

    pub fn visited(&self) -> Option<&VisitedSet> {
        self.session.as_ref().map(Session::visited)
    }

    pub fn path(&self) -> Option<&[Point]> {
        self.session.as_ref().and_then(Session::path)
    }

    /// Expansions performed by the current session (0 when idle).
    pub fn expansions(&self) -> usize {
        self.session.as_ref().map_or(0, Session::expansions)
    }

    /// Observable state; an idle stepper yields an empty snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.session
            .as_ref()
            .map_or_else(SearchSnapshot::idle, Session::snapshot)
    }
}

/// Shortest path from `start` to `goal`, or `None` if the goal is
/// unreachable.
pub fn astar_path<P: Pather>(
    pather: &P,
    start: Point,
    goal: Point,
) -> Result<Option<Vec<Point>>, SearchError> {
    let mut session = Session::new(pather, start, goal)?;
    Ok(match session.run_to_completion(pather) {
        SearchOutcome::Found(path) => Some(path),
        SearchOutcome::Exhausted => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_distance;
    use crate::graph::EdgeRecord;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use std::collections::HashSet;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn graph(edges: &[(i32, i32, i32, i32)]) -> Graph {
        edges
            .iter()
            .map(|&(x1, y1, x2, y2)| EdgeRecord { x1, y1, x2, y2 })
            .collect()
    }

    fn maze() -> Graph {
        crate::builtin_maze().into_iter().collect()
    }

    /// Random subgraph of the 4-connected `w`x`h` grid.
    fn random_grid(rng: &mut StdRng, w: i32, h: i32, keep: f64) -> Graph {
        let mut g = Graph::new();
        for y in 0..h {
            for x in 0..w {
                if x + 1 < w && rng.random_bool(keep) {
                    g.add_edge(p(x, y), p(x + 1, y));
                }
                if y + 1 < h && rng.random_bool(keep) {
                    g.add_edge(p(x, y), p(x, y + 1));
                }
            }
        }
        g
    }

    // --- lifecycle -----------------------------------------------------------

    #[test]
    fn new_stepper_is_idle() {
        let g = graph(&[(0, 0, 1, 0)]);
        let s = Stepper::new(&g);
        assert_eq!(s.state(), SearchState::Idle);
        assert!(s.session().is_none());
        assert_eq!(s.expansions(), 0);
    }

    #[test]
    fn step_while_idle_is_misuse() {
        let g = graph(&[(0, 0, 1, 0)]);
        let mut s = Stepper::new(&g);
        assert_eq!(s.step(), Err(SearchError::NotStarted));
        assert_eq!(s.run_to_completion(), Err(SearchError::NotStarted));
    }

    #[test]
    fn start_seeds_frontier_with_start_node() {
        let g = graph(&[(0, 0, 1, 0), (1, 0, 2, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(2, 0)).unwrap();
        assert_eq!(s.state(), SearchState::Running);
        let entries = s.frontier().unwrap().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, p(0, 0));
        assert_eq!(entries[0].g, 0);
        assert_eq!(entries[0].f, 2);
        assert!(s.visited().unwrap().is_empty());
    }

    #[test]
    fn unknown_goal_is_invalid_endpoint() {
        let g = graph(&[(0, 0, 1, 0)]);
        let mut s = Stepper::new(&g);
        let err = s.start(p(0, 0), p(3, 3)).unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidEndpoint {
                role: EndpointRole::Goal,
                point: p(3, 3)
            }
        );
        assert_eq!(s.state(), SearchState::Idle, "no session may be created");
    }

    #[test]
    fn unknown_start_is_invalid_endpoint() {
        let g = graph(&[(0, 0, 1, 0)]);
        let err = astar_path(&g, p(-1, 0), p(1, 0)).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidEndpoint {
                role: EndpointRole::Start,
                ..
            }
        ));
    }

    #[test]
    fn rejected_start_keeps_previous_session() {
        let g = graph(&[(0, 0, 1, 0), (1, 0, 2, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(2, 0)).unwrap();
        s.step().unwrap();
        assert!(s.start(p(0, 0), p(9, 9)).is_err());
        assert_eq!(s.state(), SearchState::Running);
        assert_eq!(s.expansions(), 1);
    }

    #[test]
    fn terminal_step_is_repeatable() {
        let g = graph(&[(0, 0, 1, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(1, 0)).unwrap();
        assert_eq!(s.run_to_completion().unwrap().path().map(<[_]>::len), Some(2));
        let before = s.snapshot();
        assert_eq!(s.step(), Ok(Step::Found));
        assert_eq!(s.step(), Ok(Step::Found));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn reset_returns_to_idle() {
        let g = graph(&[(0, 0, 1, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(1, 0)).unwrap();
        s.reset();
        assert_eq!(s.state(), SearchState::Idle);
        assert_eq!(s.step(), Err(SearchError::NotStarted));
        assert_eq!(s.snapshot(), SearchSnapshot::idle());
    }

    // --- concrete scenarios ---------------------------------------------------

    #[test]
    fn single_edge() {
        let g = graph(&[(0, 0, 1, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(1, 0)).unwrap();

        // The start's only neighbor is the goal, queued by the first step.
        assert_eq!(s.step(), Ok(Step::Expanded(p(0, 0))));
        assert!(s.frontier().unwrap().contains(p(1, 0)));
        assert_eq!(s.step(), Ok(Step::Found));
        assert_eq!(s.state(), SearchState::Succeeded);
        assert_eq!(s.path(), Some(&[p(0, 0), p(1, 0)][..]));
        assert_eq!(s.expansions(), 1);
    }

    #[test]
    fn straight_line() {
        let g = graph(&[(0, 0, 1, 0), (1, 0, 2, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(2, 0)).unwrap();
        assert_eq!(s.step(), Ok(Step::Expanded(p(0, 0))));
        assert_eq!(s.step(), Ok(Step::Expanded(p(1, 0))));
        assert_eq!(s.step(), Ok(Step::Found));
        assert_eq!(s.path(), Some(&[p(0, 0), p(1, 0), p(2, 0)][..]));
        assert_eq!(s.expansions(), 2);
        let visited = s.visited().unwrap();
        assert_eq!(visited.order(p(0, 0)), Some(1));
        assert_eq!(visited.order(p(1, 0)), Some(2));
        assert_eq!(visited.order(p(2, 0)), Some(3));
    }

    #[test]
    fn disconnected_components_exhaust() {
        let g = graph(&[(0, 0, 1, 0), (5, 5, 6, 5)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(6, 5)).unwrap();
        assert_eq!(s.step(), Ok(Step::Expanded(p(0, 0))));
        assert_eq!(s.step(), Ok(Step::Expanded(p(1, 0))));
        assert_eq!(s.step(), Ok(Step::Exhausted));
        assert_eq!(s.state(), SearchState::Exhausted);
        assert_eq!(s.expansions(), 2);
        assert_eq!(s.visited().unwrap().len(), 2);
        assert!(s.path().is_none());
    }

    #[test]
    fn equal_routes_either_is_shortest() {
        // A unit square: two 2-edge routes from (0,0) to (1,1).
        let g = graph(&[(0, 0, 1, 0), (1, 0, 1, 1), (0, 0, 0, 1), (0, 1, 1, 1)]);
        let path = astar_path(&g, p(0, 0), p(1, 1)).unwrap().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], p(0, 0));
        assert_eq!(path[2], p(1, 1));
        assert!(path[1] == p(1, 0) || path[1] == p(0, 1));
    }

    #[test]
    fn start_equals_goal() {
        let g = graph(&[(0, 0, 1, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(1, 0), p(1, 0)).unwrap();
        assert_eq!(s.step(), Ok(Step::Found));
        assert_eq!(s.path(), Some(&[p(1, 0)][..]));
        assert_eq!(s.expansions(), 0);
    }

    #[test]
    fn builtin_maze_corner_to_corner() {
        let g = maze();
        let path = astar_path(&g, p(0, 0), p(7, 7)).unwrap().unwrap();
        assert_eq!(path.len(), 15);
        assert_eq!(path.first(), Some(&p(0, 0)));
        assert_eq!(path.last(), Some(&p(7, 7)));
        for w in path.windows(2) {
            assert!(g.neighbors(w[0]).contains(&w[1]), "{} -> {} is not an edge", w[0], w[1]);
        }
    }

    #[test]
    fn tie_break_is_deterministic() {
        let g = maze();
        let run = || {
            let mut s = Stepper::new(&g);
            s.start(p(0, 0), p(7, 7)).unwrap();
            let mut trace = Vec::new();
            while let Ok(Step::Expanded(q)) = s.step() {
                trace.push(q);
            }
            (trace, s.path().map(<[_]>::to_vec))
        };
        assert_eq!(run(), run());
    }

    // --- properties ------------------------------------------------------------

    #[test]
    fn path_costs_increase_by_one() {
        let g = maze();
        let mut s = Stepper::new(&g);
        s.start(p(0, 3), p(6, 4)).unwrap();
        s.run_to_completion().unwrap();
        let session = s.session().unwrap();
        let path = session.path().unwrap();

        let mut costs = Vec::new();
        let mut cur = session.goal_node();
        while let Some(id) = cur {
            let n = session.nodes().get(id);
            costs.push(n.g);
            cur = n.parent;
        }
        costs.reverse();
        assert_eq!(costs.len(), path.len());
        for (i, g) in costs.iter().enumerate() {
            assert_eq!(*g, i as i32);
        }
        assert_eq!(*costs.last().unwrap(), path.len() as i32 - 1);
    }

    #[test]
    fn matches_bfs_on_builtin_maze() {
        let g = maze();
        for a in g.vertices() {
            for b in g.vertices() {
                let len = astar_path(&g, a, b).unwrap().map(|p| p.len() as i32 - 1);
                assert_eq!(len, bfs_distance(&g, a, b), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..40 {
            let g = random_grid(&mut rng, 7, 6, 0.6);
            let vs = g.vertices();
            if vs.len() < 2 {
                continue;
            }
            for _ in 0..10 {
                let a = vs[rng.random_range(0..vs.len())];
                let b = vs[rng.random_range(0..vs.len())];
                let got = astar_path(&g, a, b).unwrap().map(|p| p.len() as i32 - 1);
                assert_eq!(
                    got,
                    bfs_distance(&g, a, b),
                    "round {round}: {a} -> {b} on {:?}",
                    g.edges()
                );
            }
        }
    }

    #[test]
    fn terminates_within_vertex_count_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let g = random_grid(&mut rng, 6, 6, 0.5);
            let vs = g.vertices();
            let (Some(&a), Some(&b)) = (vs.first(), vs.last()) else {
                continue;
            };
            let mut s = Stepper::new(&g);
            s.start(a, b).unwrap();
            let mut calls = 0;
            while !s.state().is_terminal() {
                s.step().unwrap();
                calls += 1;
                assert!(
                    calls <= vs.len() + 1,
                    "no termination after {calls} steps on {:?}",
                    g.edges()
                );
            }
            assert!(s.expansions() <= vs.len());
        }
    }

    #[test]
    fn visited_positions_never_return_to_frontier() {
        let mut rng = StdRng::seed_from_u64(1234);
        let g = random_grid(&mut rng, 8, 8, 0.7);
        let vs = g.vertices();
        let (Some(&a), Some(&b)) = (vs.first(), vs.last()) else {
            return;
        };
        let mut s = Stepper::new(&g);
        s.start(a, b).unwrap();
        let mut expanded = HashSet::new();
        while let Ok(Step::Expanded(q)) = s.step() {
            assert!(expanded.insert(q), "{q} expanded twice");
            let session = s.session().unwrap();
            for (v, _) in session.visited().iter_in_order() {
                assert!(!session.frontier().contains(v), "{v} reopened");
            }
        }
        if let Some(path) = s.path() {
            let unique: HashSet<_> = path.iter().collect();
            assert_eq!(unique.len(), path.len());
        }
    }

    #[test]
    fn restart_discards_previous_session() {
        let g = maze();
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(7, 7)).unwrap();
        for _ in 0..5 {
            s.step().unwrap();
        }
        assert!(s.visited().unwrap().len() == 5);

        s.start(p(6, 4), p(0, 3)).unwrap();
        assert_eq!(s.state(), SearchState::Running);
        assert!(s.visited().unwrap().is_empty());
        assert_eq!(s.expansions(), 0);
        let entries = s.frontier().unwrap().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, p(6, 4));
        assert!(s.path().is_none());
    }

    #[test]
    fn duplicate_edges_do_not_duplicate_candidates() {
        let g = graph(&[(0, 0, 1, 0), (0, 0, 1, 0), (1, 0, 2, 0)]);
        let mut s = Stepper::new(&g);
        s.start(p(0, 0), p(2, 0)).unwrap();
        s.step().unwrap();
        assert_eq!(s.frontier().unwrap().len(), 1);
        assert_eq!(
            s.run_to_completion().unwrap(),
            SearchOutcome::Found(vec![p(0, 0), p(1, 0), p(2, 0)])
        );
    }

    #[test]
    fn independent_sessions_share_a_graph() {
        let g = maze();
        let mut a = Session::new(&g, p(0, 0), p(7, 7)).unwrap();
        let mut b = Session::new(&g, p(7, 7), p(0, 0)).unwrap();
        a.step(&g);
        a.step(&g);
        assert_eq!(b.visited().len(), 0);
        let ra = a.run_to_completion(&g);
        let rb = b.run_to_completion(&g);
        assert_eq!(ra.path().map(<[_]>::len), rb.path().map(<[_]>::len));
    }
}
