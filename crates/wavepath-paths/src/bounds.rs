use wavepath_core::{Point, Range};

/// Whether `p` is a tile of a `width × height` grid, i.e.
/// `1 ≤ x ≤ width` and `1 ≤ y ≤ height`.
///
/// A point failing this check is not an error: queries answer it with an
/// empty result.
#[inline]
pub fn in_bounds(p: Point, width: usize, height: usize) -> bool {
    Range::tiles(width, height).contains(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_tile() {
        for y in 1..=3 {
            for x in 1..=4 {
                assert!(in_bounds(Point::new(x, y), 4, 3));
            }
        }
    }

    #[test]
    fn rejects_zero_negative_and_past_the_edge() {
        assert!(!in_bounds(Point::new(0, 1), 4, 3));
        assert!(!in_bounds(Point::new(1, 0), 4, 3));
        assert!(!in_bounds(Point::new(-2, 2), 4, 3));
        assert!(!in_bounds(Point::new(5, 1), 4, 3));
        assert!(!in_bounds(Point::new(1, 4), 4, 3));
    }
}
