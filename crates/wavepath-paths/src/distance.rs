use wavepath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected grid without obstacles this is the exact path length.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
