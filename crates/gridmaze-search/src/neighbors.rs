use gridmaze_core::Point;

/// The four unit steps, in expansion order: down, right, up, left.
///
/// The order is a contract, not an accident. Depth-first results and
/// priority-frontier tie behavior depend on the sequence in which neighbors
/// enter the frontier, so changing it changes returned paths.
pub const DIRECTIONS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_down_right_up_left() {
        assert_eq!(
            DIRECTIONS,
            [
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(0, -1),
                Point::new(-1, 0),
            ]
        );
    }
}
