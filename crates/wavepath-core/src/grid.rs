//! An integer-cell obstacle grid.
//!
//! [`Cell`] is a newtype over `i32`: `0` is free floor, any other value is a
//! permanent obstacle. [`Grid`] stores cells row-major, left-to-right then
//! top-to-bottom, and is addressed with 1-based [`Point`]s.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// A map cell value, wrapping an `i32`.
///
/// Zero is walkable. Nonzero values are obstacles; the exact value is the
/// caller's business (wall, water, door...) and never affects search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// The walkable cell.
    pub const FREE: Self = Self(0);

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether the cell can be walked on.
    pub const fn is_free(self) -> bool {
        self.0 == 0
    }
}

/// A rectangular grid of [`Cell`] values.
///
/// A `Grid` is never empty: every constructor rejects zero-sized or ragged
/// input with a [`GridError`], so algorithms can rely on `width > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a new all-free grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        if height == 0 {
            return Err(GridError::Empty);
        }
        let len = cell_count(width, height)?;
        Ok(Self {
            cells: vec![Cell::FREE; len],
            width,
            height,
        })
    }

    /// Build a grid from nested rows.
    ///
    /// The width is the length of the first row; every other row must match
    /// it.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        let mut cells = Vec::with_capacity(cell_count(width, rows.len())?);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().copied().map(Cell));
        }
        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// Build a grid from a flat row-major sequence and its width.
    pub fn from_cells(width: usize, values: impl IntoIterator<Item = i32>) -> Result<Self, GridError> {
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        let cells: Vec<Cell> = values.into_iter().map(Cell).collect();
        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        if cells.len() % width != 0 {
            return Err(GridError::CellCountMismatch {
                len: cells.len(),
                width,
            });
        }
        let height = cells.len() / width;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The 1-based tile range covered by this grid.
    pub fn bounds(&self) -> Range {
        Range::tiles(self.width, self.height)
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Row-major cell storage.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Copy the cells out as nested rows of raw values.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y - 1) as usize * self.width + (p.x - 1) as usize)
    }
}

/// `width * height`, or [`GridError::TooLarge`] if that overflows `usize`.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_size() {
        let g = Grid::from_rows(&[vec![0, 1, 0], vec![0, 0, 2]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.len(), 6);
        assert_eq!(g.bounds().max, Point::new(4, 3));
    }

    #[test]
    fn test_at_is_one_based() {
        let g = Grid::from_rows(&[[0, 1, 0], [0, 0, 2]]).unwrap();
        assert_eq!(g.at(Point::new(1, 1)), Some(Cell::FREE));
        assert_eq!(g.at(Point::new(2, 1)), Some(Cell(1)));
        assert_eq!(g.at(Point::new(3, 2)), Some(Cell(2)));
        assert_eq!(g.at(Point::new(0, 1)), None);
        assert_eq!(g.at(Point::new(4, 1)), None);
        assert_eq!(g.at(Point::new(1, 3)), None);
    }

    #[test]
    fn test_from_rows_rejects_malformed_input() {
        let empty: [Vec<i32>; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&[Vec::<i32>::new()]),
            Err(GridError::ZeroWidth)
        );
        assert_eq!(
            Grid::from_rows(&[vec![0, 0, 0], vec![0, 0]]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_cells() {
        let g = Grid::from_cells(2, [0, 1, 1, 0]).unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.at(Point::new(2, 1)), Some(Cell(1)));
        assert_eq!(Grid::from_cells(0, [0]), Err(GridError::ZeroWidth));
        assert_eq!(Grid::from_cells(3, Vec::new()), Err(GridError::Empty));
        assert_eq!(
            Grid::from_cells(3, [0, 0, 0, 0]),
            Err(GridError::CellCountMismatch { len: 4, width: 3 })
        );
    }

    #[test]
    fn test_new_and_set() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set(Point::new(2, 3), Cell(9));
        g.set(Point::new(10, 10), Cell(9));
        assert_eq!(g.cells().iter().filter(|c| !c.is_free()).count(), 1);
        assert_eq!(g.at(Point::new(2, 3)), Some(Cell(9)));
        assert_eq!(Grid::new(0, 3), Err(GridError::ZeroWidth));
        assert_eq!(Grid::new(3, 0), Err(GridError::Empty));
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(cell_count(usize::MAX / 2 + 1, 2).is_err());
        assert_eq!(cell_count(3, 4), Ok(12));
    }

    #[test]
    fn test_iter_and_rows() {
        let g = Grid::from_rows(&[[0, 5, 0], [0, 0, 0]]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(2, 1), Cell(5)));
        assert_eq!(items[3], (Point::new(1, 2), Cell(0)));
        assert_eq!(g.to_rows(), vec![vec![0, 5, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn grid_error_messages() {
        let e = GridError::RaggedRow {
            row: 2,
            expected: 4,
            found: 1,
        };
        assert_eq!(
            e.to_string(),
            "grid: row 2 has 1 cells, expected 4 (width of the first row)"
        );
        let e = GridError::TooLarge {
            width: 9,
            height: 2,
        };
        assert_eq!(e.to_string(), "grid: 9x2 cells overflow the address space");
    }
}
