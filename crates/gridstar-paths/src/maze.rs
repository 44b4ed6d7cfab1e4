use gridstar_core::Point;

use crate::graph::EdgeRecord;

const fn e(x1: i32, y1: i32, x2: i32, y2: i32) -> EdgeRecord {
    EdgeRecord::new(Point::new(x1, y1), Point::new(x2, y2))
}

const MAZE: [EdgeRecord; 28] = [
    // main corridor
    e(0, 0, 1, 0),
    e(1, 0, 2, 0),
    e(2, 0, 2, 1),
    e(2, 1, 3, 1),
    e(3, 1, 3, 2),
    // branches off the corridor
    e(1, 0, 1, 1),
    e(1, 1, 1, 2),
    e(0, 0, 0, 1),
    // right side
    e(3, 2, 4, 2),
    e(4, 2, 5, 2),
    e(5, 2, 6, 2),
    e(6, 2, 6, 3),
    e(6, 3, 6, 4),
    // upper detour looping back to (4, 2)
    e(2, 0, 3, 0),
    e(3, 0, 4, 0),
    e(4, 0, 4, 1),
    e(4, 1, 4, 2),
    // left dead end
    e(0, 1, 0, 2),
    e(0, 2, 0, 3),
    // middle corridor
    e(3, 2, 3, 3),
    e(3, 3, 3, 4),
    e(3, 4, 4, 4),
    e(4, 4, 5, 4),
    // toward the bottom right
    e(5, 4, 6, 4),
    e(6, 4, 7, 4),
    e(7, 4, 7, 5),
    e(7, 5, 7, 6),
    e(7, 6, 7, 7),
];

/// A small demonstration maze on an 8x8 grid with dead ends, a loop and
/// two routes into the right half. `(0, 0)` to `(7, 7)` is the natural
/// query.
pub fn builtin_maze() -> Vec<EdgeRecord> {
    MAZE.to_vec()
}
