use grid_util::point::Point;

/// Straight-line distance between two grid coordinates.
///
/// Not admissible for the unit-cost 4-neighbourhood once cells are more than one step
/// apart diagonally, so searches guided by it are not guaranteed to be optimal.
pub fn euclidean(p1: &Point, p2: &Point) -> f64 {
    let dx = (p2.x - p1.x) as f64;
    let dy = (p2.y - p1.y) as f64;
    (dx * dx + dy * dy).sqrt()
}
