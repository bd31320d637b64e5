use gridmaze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Used as the A* heuristic: admissible and consistent on a 4-connected
/// uniform-cost grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(1, 1), Point::new(8, 9)), 15);
        assert_eq!(manhattan(Point::new(8, 9), Point::new(1, 1)), 15);
        assert_eq!(manhattan(Point::new(3, 3), Point::new(3, 3)), 0);
        assert_eq!(manhattan(Point::new(-2, 0), Point::new(2, -1)), 5);
    }
}
