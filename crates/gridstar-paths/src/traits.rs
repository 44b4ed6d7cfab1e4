use gridstar_core::Point;

/// Minimal graph interface consumed by the search engine and BFS.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` is a vertex of the graph.
    fn contains(&self, p: Point) -> bool;
}
