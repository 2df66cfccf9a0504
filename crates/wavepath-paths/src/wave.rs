//! Wave propagation: layered breadth-first distance labeling.

use wavepath_core::{Grid, Point};

use crate::coords::{to_linear, to_point};
use crate::neighbors::Neighbors;

/// Label of a free cell the wave has not reached.
pub(crate) const UNLABELED: i32 = 0;

/// Label of an obstacle, whatever its value in the input grid.
pub(crate) const OBSTACLE: i32 = -1;

/// Cap on how far a reachability query may spread.
///
/// The budget counts *expanding source cells*: every cell of the current
/// layer that labels at least one new neighbor consumes one unit, after its
/// neighbors are labeled. When the budget hits zero the wave stops at once,
/// possibly halfway through a layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Budget {
    /// Spread until every reachable cell is labeled.
    #[default]
    Unlimited,
    /// Allow at most this many source cells to expand. `Limited(0)` expands
    /// nothing.
    Limited(usize),
}

impl From<Option<usize>> for Budget {
    fn from(v: Option<usize>) -> Self {
        v.map_or(Self::Unlimited, Self::Limited)
    }
}

/// Distance labels produced by one wave propagation.
///
/// The start cell holds label `1`; a cell at layer `k` is `k - 1` steps
/// away from the start. A field is built per query and owned by its caller;
/// nothing is shared between fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    pub(crate) labels: Vec<i32>,
    pub(crate) width: usize,
    pub(crate) start: usize,
    pub(crate) discovered: Vec<usize>,
    pub(crate) truncated: bool,
}

impl DistanceField {
    /// Propagate a wave over `grid` from the in-bounds point `start`.
    ///
    /// Within a layer, sources are expanded in ascending index order and
    /// each source labels its free neighbors in `+x, −x, +y, −y` order; the
    /// discovery list records cells in exactly that order.
    pub(crate) fn propagate(grid: &Grid, start: Point, budget: Budget) -> Self {
        let width = grid.width();
        let start = to_linear(start, width);
        let mut labels: Vec<i32> = grid
            .cells()
            .iter()
            .map(|c| if c.is_free() { UNLABELED } else { OBSTACLE })
            .collect();
        labels[start] = 1;

        let mut field = Self {
            labels,
            width,
            start,
            discovered: Vec::new(),
            truncated: false,
        };
        let mut remaining = match budget {
            Budget::Unlimited => None,
            Budget::Limited(0) => {
                log::debug!("wave: zero budget, nothing expands");
                field.truncated = true;
                return field;
            }
            Budget::Limited(n) => Some(n),
        };

        let mut nbrs = Neighbors::new();
        let mut frontier = vec![start];
        let mut next = Vec::new();
        let mut step = 1;

        'waves: loop {
            frontier.sort_unstable();
            for &src in &frontier {
                let found = nbrs.orthogonal(src, width, &field.labels, |v| v == UNLABELED);
                if found.is_empty() {
                    continue;
                }
                for &n in found {
                    field.labels[n] = step + 1;
                    field.discovered.push(n);
                    next.push(n);
                }
                if let Some(left) = remaining.as_mut() {
                    *left -= 1;
                    if *left == 0 {
                        log::debug!(
                            "wave: budget exhausted in layer {step} after {} cells",
                            field.discovered.len()
                        );
                        field.truncated = true;
                        break 'waves;
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            log::trace!("wave: layer {} holds {} cells", step + 1, next.len());
            std::mem::swap(&mut frontier, &mut next);
            next.clear();
            step += 1;
        }

        field
    }

    /// Whether the cell at `index` received a distance label.
    #[inline]
    pub fn is_reached(&self, index: usize) -> bool {
        self.labels.get(index).is_some_and(|&l| l > 0)
    }

    /// Layer label of an in-bounds point: `Some(1)` for the start, `None`
    /// for obstacles, unreached cells and points outside the grid.
    pub fn layer_at(&self, p: Point) -> Option<u32> {
        let height = self.labels.len() / self.width;
        if !crate::in_bounds(p, self.width, height) {
            return None;
        }
        let label = self.labels[to_linear(p, self.width)];
        (label > 0).then_some(label as u32)
    }

    /// Number of steps from the start to `p`, if the wave reached it.
    pub fn distance_at(&self, p: Point) -> Option<u32> {
        self.layer_at(p).map(|l| l - 1)
    }

    /// Cells labeled by the wave, start excluded, in discovery order.
    pub fn discovered(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.discovered.iter().map(|&i| to_point(i, self.width))
    }

    /// Whether a [`Budget`] stopped the wave before it ran out of cells.
    ///
    /// A budget that runs out exactly as the last cell is labeled still
    /// counts as truncated.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[i32]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn labels(field: &DistanceField) -> Vec<i32> {
        field.labels.clone()
    }

    #[test]
    fn labels_layers_in_open_room() {
        let g = Grid::new(3, 3).unwrap();
        let f = DistanceField::propagate(&g, Point::new(1, 1), Budget::Unlimited);
        assert_eq!(labels(&f), vec![1, 2, 3, 2, 3, 4, 3, 4, 5]);
        assert_eq!(f.distance_at(Point::new(3, 3)), Some(4));
        assert_eq!(f.layer_at(Point::new(1, 1)), Some(1));
        assert!(!f.truncated());
    }

    #[test]
    fn obstacles_stay_unlabeled() {
        let g = grid(&[&[0, 1, 0], &[0, 2, 0], &[0, 0, 0]]);
        let f = DistanceField::propagate(&g, Point::new(1, 1), Budget::Unlimited);
        assert_eq!(f.layer_at(Point::new(2, 1)), None);
        assert_eq!(f.layer_at(Point::new(2, 2)), None);
        assert_eq!(f.layer_at(Point::new(3, 1)), Some(7));
        assert_eq!(f.layer_at(Point::new(0, 1)), None);
        assert_eq!(f.layer_at(Point::new(4, 1)), None);
    }

    #[test]
    fn obstacle_values_are_never_wave_sources() {
        // An obstacle valued 1 must not act like the start cell.
        let g = grid(&[&[0, 1, 0]]);
        let f = DistanceField::propagate(&g, Point::new(1, 1), Budget::Unlimited);
        assert!(!f.is_reached(2));
        assert_eq!(f.discovered().count(), 0);
    }

    #[test]
    fn discovery_follows_index_order_within_a_layer() {
        // Start in the middle of a 3x3 room. Layer 2 is discovered as
        // right(5), left(3), down(7), up(1). Layer 3 sources are then swept
        // in index order 1, 3, 5, 7, not in the order they were found.
        let g = Grid::new(3, 3).unwrap();
        let f = DistanceField::propagate(&g, Point::new(2, 2), Budget::Unlimited);
        assert_eq!(f.discovered, vec![5, 3, 7, 1, 2, 0, 6, 8]);
    }

    #[test]
    fn budget_counts_expanding_sources() {
        // 2x2 room, one expansion: the start labels right then down.
        let g = Grid::new(2, 2).unwrap();
        let f = DistanceField::propagate(&g, Point::new(1, 1), Budget::Limited(1));
        let found: Vec<_> = f.discovered().collect();
        assert_eq!(found, vec![Point::new(2, 1), Point::new(1, 2)]);
        assert!(f.truncated());
    }

    #[test]
    fn budget_stops_mid_layer() {
        // From the centre of a 3x3 room, layer 2 is {1, 3, 5, 7}. With a
        // budget of 2 the start expands, then source 1 expands (labels 2, 0)
        // and the wave stops before 3, 5 and 7 get their turn.
        let g = Grid::new(3, 3).unwrap();
        let f = DistanceField::propagate(&g, Point::new(2, 2), Budget::Limited(2));
        assert_eq!(f.discovered, vec![5, 3, 7, 1, 2, 0]);
        assert!(!f.is_reached(8));
        assert!(!f.is_reached(6));
    }

    #[test]
    fn sources_without_new_neighbors_are_free() {
        // Row of four from (2,1): the start labels 2 and 0 and spends one
        // unit. In layer 2, source 0 finds nothing new and costs nothing;
        // source 2 labels 3 and spends the last unit.
        let g = Grid::new(4, 1).unwrap();
        let f = DistanceField::propagate(&g, Point::new(2, 1), Budget::Limited(2));
        assert_eq!(f.discovered, vec![2, 0, 3]);

        // Blocked on the left, the start only finds its right neighbor.
        let g = grid(&[&[0, 1, 0, 0]]);
        let f = DistanceField::propagate(&g, Point::new(3, 1), Budget::Limited(1));
        assert_eq!(f.discovered, vec![3]);
    }

    #[test]
    fn zero_budget_expands_nothing() {
        let g = Grid::new(3, 3).unwrap();
        let f = DistanceField::propagate(&g, Point::new(2, 2), Budget::Limited(0));
        assert_eq!(f.discovered().len(), 0);
        assert_eq!(f.layer_at(Point::new(2, 2)), Some(1));
        assert!(f.truncated());
    }

    #[test]
    fn budget_from_option() {
        assert_eq!(Budget::from(None), Budget::Unlimited);
        assert_eq!(Budget::from(Some(3)), Budget::Limited(3));
        assert_eq!(Budget::default(), Budget::Unlimited);
    }

    #[test]
    fn input_grid_is_untouched() {
        let g = grid(&[&[0, 0], &[3, 0]]);
        let before = g.clone();
        let _ = DistanceField::propagate(&g, Point::new(1, 1), Budget::Unlimited);
        assert_eq!(g, before);
    }
}
