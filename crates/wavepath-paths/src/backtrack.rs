//! Path reconstruction from a [`DistanceField`].

use wavepath_core::Point;

use crate::coords::to_point;
use crate::neighbors::Neighbors;
use crate::wave::DistanceField;

impl DistanceField {
    /// Walk back from `end` to the start, always stepping to the first
    /// neighbor (in `+x, −x, +y, −y` order) whose label is positive and
    /// strictly smaller than the current one.
    ///
    /// Returns the path start-to-end inclusive, or an empty path if `end`
    /// was never labeled.
    pub fn backtrack(&self, end: usize) -> Vec<Point> {
        if !self.is_reached(end) {
            return Vec::new();
        }
        let mut nbrs = Neighbors::new();
        let mut current = end;
        let mut current_value = self.labels[end];
        let mut path = Vec::with_capacity(current_value as usize);
        path.push(to_point(current, self.width));

        loop {
            let found = nbrs.orthogonal(current, self.width, &self.labels, |v| {
                v > 0 && v < current_value
            });
            let Some(&prev) = found.first() else {
                break;
            };
            current = prev;
            current_value = self.labels[prev];
            path.push(to_point(current, self.width));
        }
        debug_assert_eq!(current, self.start);

        path.reverse();
        path
    }
}
