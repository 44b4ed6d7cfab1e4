use std::collections::HashMap;

use gridstar_core::{Point, Range};

use crate::traits::Pather;

/// One undirected edge between two grid cells, as found in an edge list.
///
/// The serialized form uses the flat field names `x1, y1, x2, y2`, all of
/// which are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl EdgeRecord {
    /// Edge between `a` and `b`.
    pub const fn new(a: Point, b: Point) -> Self {
        Self {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
        }
    }

    /// The two endpoints of the edge.
    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        (Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }
}

/// Undirected adjacency map over grid cells.
///
/// Every edge inserts both endpoints as vertices and lists each endpoint in
/// the other's neighbor list, so adjacency is always symmetric. Duplicate
/// edges duplicate the adjacency entries; they are not merged.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: HashMap<Point, Vec<Point>>,
    edges: Vec<EdgeRecord>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from typed edge records.
    pub fn from_edges<I: IntoIterator<Item = EdgeRecord>>(edges: I) -> Self {
        let mut g = Self::new();
        for e in edges {
            let (a, b) = e.endpoints();
            g.add_edge(a, b);
        }
        log::debug!(
            "built graph: {} vertices, {} edges",
            g.vertex_count(),
            g.edge_count()
        );
        g
    }

    /// Insert an undirected edge, adding either endpoint as a vertex if
    /// absent.
    pub fn add_edge(&mut self, a: Point, b: Point) {
        self.adj.entry(a).or_default().push(b);
        self.adj.entry(b).or_default().push(a);
        self.edges.push(EdgeRecord::new(a, b));
    }

    /// Whether `p` is a vertex.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.adj.contains_key(&p)
    }

    /// Neighbors of `p` in insertion order. Empty for unknown positions.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.adj.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All vertices, sorted row-major.
    pub fn vertices(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.adj.keys().copied().collect();
        v.sort();
        v
    }

    /// Number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges added, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Bounding rectangle of all vertices (empty for an empty graph).
    pub fn bounds(&self) -> Range {
        Range::bounding(self.adj.keys().copied())
    }

    /// The edges in the order they were added.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }
}

impl Pather for Graph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(Graph::neighbors(self, p));
    }

    fn contains(&self, p: Point) -> bool {
        Graph::contains(self, p)
    }
}

impl FromIterator<EdgeRecord> for Graph {
    fn from_iter<I: IntoIterator<Item = EdgeRecord>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

// ---------------------------------------------------------------------------
// JSON edge lists
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod json {
    use std::io::Read;
    use std::path::Path;

    use serde_json::Value;

    use super::{EdgeRecord, Graph};
    use crate::error::GraphError;

    impl Graph {
        /// Build a graph from a JSON array of `{"x1","y1","x2","y2"}` objects.
        ///
        /// Fails without building anything if the document is not an array
        /// or if any record lacks one of the four integer fields.
        pub fn from_json(s: &str) -> Result<Self, GraphError> {
            let values: Vec<Value> = serde_json::from_str(s).map_err(GraphError::Json)?;
            Self::from_values(values)
        }

        /// Like [`from_json`](Self::from_json), reading from `reader`.
        pub fn from_reader<R: Read>(reader: R) -> Result<Self, GraphError> {
            let values: Vec<Value> = serde_json::from_reader(reader).map_err(|e| {
                if e.is_io() {
                    GraphError::Io(e.into())
                } else {
                    GraphError::Json(e)
                }
            })?;
            Self::from_values(values)
        }

        /// Read and parse a JSON edge list file.
        pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
            let file = std::fs::File::open(path)?;
            Self::from_reader(std::io::BufReader::new(file))
        }

        fn from_values(values: Vec<Value>) -> Result<Self, GraphError> {
            let records = values
                .into_iter()
                .enumerate()
                .map(|(index, v)| {
                    serde_json::from_value::<EdgeRecord>(v)
                        .map_err(|source| GraphError::MalformedEdge { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self::from_edges(records))
        }
    }
}
