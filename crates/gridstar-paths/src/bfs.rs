use std::collections::{HashMap, VecDeque};

use gridstar_core::Point;

use crate::traits::Pather;

/// Breadth-first distance from `source` to every vertex reachable from it.
///
/// Each step has cost 1. Returns an empty map if `source` is not a vertex.
pub fn bfs_distances<P: Pather>(pather: &P, source: Point) -> HashMap<Point, i32> {
    let mut dist: HashMap<Point, i32> = HashMap::new();
    if !pather.contains(source) {
        return dist;
    }
    dist.insert(source, 0);

    let mut queue: VecDeque<Point> = VecDeque::from([source]);
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    dist
}

/// Length in edges of a shortest route from `from` to `to`, or `None` if
/// `to` cannot be reached.
pub fn bfs_distance<P: Pather>(pather: &P, from: Point, to: Point) -> Option<i32> {
    bfs_distances(pather, from).get(&to).copied()
}
