//! Shared pieces of the `gridstar` command-line demo.
//!
//! The library crate does the searching; this crate plays the part of the
//! outside world. [`Animation`] is the driver that decides when the next
//! step happens, and [`render_text`] turns a [`SearchSnapshot`] into the
//! picture a user looks at between steps.

use std::fmt::Write as _;
use std::time::Duration;

use gridstar_core::Point;
use gridstar_paths::{Graph, Pather, SearchError, SearchSnapshot, SearchState, Step, Stepper};

/// Default pause between steps when animating.
pub const DEFAULT_ANIMATION_DELAY: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Paces calls to [`Stepper::step`].
///
/// A zero delay degenerates into a tight loop, which is what batch runs and
/// tests want.
#[derive(Debug, Clone, Copy, Default)]
pub struct Animation {
    pub delay: Duration,
    /// Stop driving after this many steps even if the search is still
    /// running. The session is left as it is.
    pub max_steps: Option<usize>,
}

/// How a drive ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    Found,
    Exhausted,
    /// `max_steps` was reached first.
    Paused,
}

impl Animation {
    /// Step `stepper` until its session finishes or the step budget runs
    /// out, calling `on_step` after every step.
    pub fn run<P, F>(&self, stepper: &mut Stepper<'_, P>, mut on_step: F) -> Result<Finish, SearchError>
    where
        P: Pather,
        F: FnMut(Step, &Stepper<'_, P>),
    {
        let mut steps = 0usize;
        loop {
            if self.max_steps.is_some_and(|max| steps >= max) {
                log::info!("paused after {steps} steps");
                return Ok(Finish::Paused);
            }
            let step = stepper.step()?;
            steps += 1;
            on_step(step, stepper);
            match step {
                Step::Expanded(_) => {}
                Step::Found => return Ok(Finish::Found),
                Step::Exhausted => return Ok(Finish::Exhausted),
            }
            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

const CELL_WIDTH: usize = 3;

/// Largest grid [`render_text`] will draw; bigger graphs are listed one
/// vertex per line.
pub const MAX_GRID_CELLS: usize = 4096;

fn cell_label(snap: &SearchSnapshot, p: Point) -> String {
    if snap.start == Some(p) {
        "S".to_string()
    } else if snap.goal == Some(p) {
        "G".to_string()
    } else if snap.on_path(p) {
        "*".to_string()
    } else if let Some(order) = snap.order_of(p) {
        order.to_string()
    } else if snap.is_open(p) {
        "o".to_string()
    } else {
        ".".to_string()
    }
}

fn has_edge(graph: &Graph, a: Point, b: Point) -> bool {
    graph.neighbors(a).contains(&b)
}

fn distinct(values: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut v: Vec<i32> = values.collect();
    v.sort_unstable();
    v.dedup();
    v
}

/// Draw the graph with the state of a search overlaid.
///
/// Vertices show `S`/`G` for the endpoints, `*` on the path, their discovery
/// order once finalized, `o` while waiting in the frontier and `.` otherwise.
///
/// Only the columns and rows that hold a vertex are drawn, so far-apart
/// coordinates cost nothing. A straight edge between neighboring columns or
/// rows is drawn as `-` or `|`; other edges are not drawn. When the grid
/// would exceed [`MAX_GRID_CELLS`] the vertices are listed instead.
pub fn render_text(graph: &Graph, snap: &SearchSnapshot) -> String {
    let vertices = graph.vertices();
    let xs = distinct(vertices.iter().map(|p| p.x));
    let ys = distinct(vertices.iter().map(|p| p.y));
    if xs.len().saturating_mul(ys.len()) > MAX_GRID_CELLS {
        log::debug!(
            "{} x {} grid is too large to draw; listing vertices",
            xs.len(),
            ys.len()
        );
        return render_list(&vertices, snap);
    }

    let mut out = String::new();
    for (j, &y) in ys.iter().enumerate() {
        let mut row = String::new();
        let mut below = String::new();
        for (i, &x) in xs.iter().enumerate() {
            let p = Point::new(x, y);
            let label = if graph.contains(p) {
                cell_label(snap, p)
            } else {
                String::new()
            };
            let _ = write!(row, "{label:^CELL_WIDTH$}");
            if let Some(&nx) = xs.get(i + 1) {
                row.push(if has_edge(graph, p, Point::new(nx, y)) { '-' } else { ' ' });
            }
            let down = match ys.get(j + 1) {
                Some(&ny) if has_edge(graph, p, Point::new(x, ny)) => "|",
                _ => "",
            };
            let _ = write!(below, "{down:^CELL_WIDTH$} ");
        }
        out.push_str(row.trim_end());
        out.push('\n');
        if j + 1 < ys.len() {
            out.push_str(below.trim_end());
            out.push('\n');
        }
    }
    out
}

fn render_list(vertices: &[Point], snap: &SearchSnapshot) -> String {
    let mut out = String::new();
    for &p in vertices {
        let _ = writeln!(out, "{p} {}", cell_label(snap, p));
    }
    out
}

/// One-line summary of where a search stands.
pub fn status_line(snap: &SearchSnapshot) -> String {
    match snap.state {
        SearchState::Idle => "idle".to_string(),
        SearchState::Running => format!(
            "running: {} expanded, {} open (peak {})",
            snap.expansions,
            snap.frontier.len(),
            snap.frontier_peak
        ),
        SearchState::Succeeded => {
            let len = snap.path.as_ref().map_or(0, |p| p.len().saturating_sub(1));
            format!(
                "found a {len}-edge path after {} expansions",
                snap.expansions
            )
        }
        SearchState::Exhausted => format!(
            "no path: all {} reachable positions explored",
            snap.visited.len()
        ),
    }
}
