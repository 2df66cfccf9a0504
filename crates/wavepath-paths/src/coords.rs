//! Conversion between 1-based tile points and 0-based row-major indices.

use wavepath_core::Point;

/// Flat index of an in-bounds 1-based point: `(y-1)*width + (x-1)`.
///
/// The point must already have passed [`in_bounds`](crate::in_bounds).
#[inline]
pub fn to_linear(p: Point, width: usize) -> usize {
    debug_assert!(p.x >= 1 && p.y >= 1, "{p} is not a 1-based tile");
    (p.y - 1) as usize * width + (p.x - 1) as usize
}

/// 1-based point of a flat index: `(i % width + 1, i / width + 1)`.
#[inline]
pub fn to_point(index: usize, width: usize) -> Point {
    debug_assert!(width > 0);
    Point::new((index % width) as i32 + 1, (index / width) as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_index_zero() {
        assert_eq!(to_linear(Point::new(1, 1), 5), 0);
        assert_eq!(to_point(0, 5), Point::new(1, 1));
    }

    #[test]
    fn row_major_layout() {
        // 4 wide: (3,2) sits in the second row, third column.
        assert_eq!(to_linear(Point::new(3, 2), 4), 6);
        assert_eq!(to_point(6, 4), Point::new(3, 2));
        assert_eq!(to_point(3, 4), Point::new(4, 1));
        assert_eq!(to_point(4, 4), Point::new(1, 2));
    }

    #[test]
    fn single_column() {
        assert_eq!(to_linear(Point::new(1, 3), 1), 2);
        assert_eq!(to_point(2, 1), Point::new(1, 3));
    }

    #[test]
    fn inverse_over_whole_grid() {
        let (w, h) = (7, 3);
        for i in 0..w * h {
            assert_eq!(to_linear(to_point(i, w), w), i);
        }
    }
}
