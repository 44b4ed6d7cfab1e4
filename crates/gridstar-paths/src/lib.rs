//! Incremental A* search over undirected grid graphs.
//!
//! This crate turns a flat list of grid-aligned edges into a [`Graph`] and
//! searches it with a [`Stepper`], an A* engine that exposes its progress one
//! expansion at a time instead of running to completion in a single call:
//!
//! - [`Graph`] is built once from [`EdgeRecord`]s (or a JSON edge list).
//! - [`Stepper::start`] opens a fresh session for a start/goal pair.
//! - [`Stepper::step`] pops one node, finalizes it, and expands its
//!   neighbours. Callers may pause, render, or abandon the search between
//!   steps.
//! - [`Stepper::run_to_completion`] drives the same step function in a
//!   tight loop.
//!
//! Edge costs are always 1 and the heuristic is the [`manhattan`] distance,
//! which is consistent on such graphs, so finalized positions are never
//! reopened and the returned path is a shortest one.
//!
//! # Observability
//!
//! Between steps, the open set ([`Frontier`]), the closed set with discovery
//! order ([`VisitedSet`]) and the final path can be read through the stepper
//! or captured all at once as a [`SearchSnapshot`].

mod bfs;
mod distance;
mod error;
mod frontier;
mod graph;
mod maze;
mod node;
mod search;
mod snapshot;
mod traits;
mod visited;

pub use bfs::{bfs_distance, bfs_distances};
pub use distance::manhattan;
pub use error::{EndpointRole, GraphError, SearchError};
pub use frontier::{Frontier, FrontierEntry};
pub use graph::{EdgeRecord, Graph};
pub use maze::builtin_maze;
pub use node::{NodeArena, NodeId, SearchNode};
pub use search::{Session, SearchOutcome, SearchState, Step, Stepper, astar_path};
pub use snapshot::{SearchSnapshot, VisitedEntry};
pub use traits::Pather;
pub use visited::VisitedSet;
