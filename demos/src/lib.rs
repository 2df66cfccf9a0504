//! Shared model for the wavepath demo binary.
//!
//! A [`Query`] is one grid plus a start point and either an end point (path
//! query) or an optional expansion budget (reachability query). Queries come
//! from JSON files or are generated from a seed, and answers are drawn as
//! ASCII maps.

pub mod cli;
pub mod error;
pub mod logging;

use std::fmt::Write as _;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use wavepath_core::{Cell, Grid, Point};
use wavepath_paths::{Budget, Solver};

pub use cli::Args;
pub use error::DemoError;

pub const RANDOM_WIDTH: usize = 32;
pub const RANDOM_HEIGHT: usize = 12;
/// Percentage of obstacle cells in a random grid.
pub const RANDOM_WALL_PCT: u32 = 28;
pub const DEFAULT_SEED: u64 = 42;

/// One solver request, as read from a JSON document.
///
/// ```json
/// { "grid": [[0, 1, 0], [0, 0, 0]], "start": {"x": 1, "y": 1}, "end": {"x": 3, "y": 1} }
/// ```
///
/// Without `end` the query asks for the reachable set, limited by `budget`
/// when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub grid: Grid,
    pub start: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<usize>,
}

/// What a [`Query`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Path(Vec<Point>),
    Reachable(Vec<Point>),
}

impl Answer {
    /// The points of the answer, in order.
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Path(p) | Self::Reachable(p) => p,
        }
    }
}

impl Query {
    /// Parse a query from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and parse a query file.
    pub fn from_file(path: &Path) -> Result<Self, DemoError> {
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| DemoError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A path query across a seeded random cave, corner to corner.
    pub fn random(seed: u64) -> Result<Self, DemoError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells: Vec<i32> = (0..RANDOM_WIDTH * RANDOM_HEIGHT)
            .map(|_| i32::from(rng.random_range(0..100) < RANDOM_WALL_PCT))
            .collect();
        let mut grid = Grid::from_cells(RANDOM_WIDTH, cells)?;
        let start = Point::ORIGIN;
        let end = Point::new(RANDOM_WIDTH as i32, RANDOM_HEIGHT as i32);
        grid.set(start, Cell::FREE);
        grid.set(end, Cell::FREE);
        log::info!("random grid {RANDOM_WIDTH}x{RANDOM_HEIGHT} from seed {seed}");
        Ok(Self {
            grid,
            start,
            end: Some(end),
            budget: None,
        })
    }

    /// Run the query.
    pub fn run(&self) -> Answer {
        let solver = Solver::new(&self.grid);
        match self.end {
            Some(end) => Answer::Path(solver.find_path(self.start, end)),
            None => Answer::Reachable(solver.find_reachable(self.start, Budget::from(self.budget))),
        }
    }

    /// Draw the grid with the answer overlaid.
    ///
    /// `#` obstacle, `.` free, `*` path or reachable cell, `S` start,
    /// `E` end.
    pub fn render(&self, answer: &Answer) -> String {
        let marked = answer.points();
        let mut out = String::with_capacity(self.grid.len() + self.grid.height());
        for (p, cell) in self.grid.iter() {
            let ch = if p == self.start {
                'S'
            } else if Some(p) == self.end {
                'E'
            } else if !cell.is_free() {
                '#'
            } else if marked.contains(&p) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
            if p.x as usize == self.grid.width() {
                out.push('\n');
            }
        }
        match answer {
            Answer::Path(p) if p.is_empty() => out.push_str("no path\n"),
            Answer::Path(p) => {
                let _ = writeln!(out, "path of {} steps", p.len() - 1);
            }
            Answer::Reachable(r) => {
                let _ = writeln!(out, "{} reachable cells", r.len());
            }
        }
        out
    }
}
