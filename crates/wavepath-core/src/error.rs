use std::fmt;

/// Errors raised when a [`Grid`](crate::Grid) cannot be built from its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or no cells at all.
    Empty,
    /// The first row (or the requested width) has zero cells.
    ZeroWidth,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat cell sequence whose length is not a multiple of the width.
    CellCountMismatch { len: usize, width: usize },
    /// `width * height` does not fit in `usize`.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::ZeroWidth => write!(f, "grid: width is zero"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected} (width of the first row)"
            ),
            Self::CellCountMismatch { len, width } => {
                write!(f, "grid: {len} cells do not fill rows of width {width}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} cells overflow the address space")
            }
        }
    }
}

impl std::error::Error for GridError {}
