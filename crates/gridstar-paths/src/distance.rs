use gridstar_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the search heuristic: on a graph whose edges join cells one unit
/// apart it never overestimates the remaining cost. Saturates at `i32::MAX`
/// for points at the far ends of the coordinate space.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(-2, 3);
        let b = Point::new(4, -1);
        assert_eq!(manhattan(a, b), 10);
        assert_eq!(manhattan(b, a), 10);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_saturates() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan(a, b), i32::MAX);
    }
}
