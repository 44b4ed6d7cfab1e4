//! **gridstar-core**: geometry primitives for grid-graph search.
//!
//! Vertices of a gridstar graph are integer grid cells ([`Point`]). A
//! [`Range`] is the rectangle a set of cells occupies.

pub mod geom;

pub use geom::{ParsePointError, Point, Range};
