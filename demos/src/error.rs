use std::fmt;
use std::path::PathBuf;

use wavepath_core::GridError;

/// Errors surfaced by the demo before any query runs.
#[derive(Debug)]
pub enum DemoError {
    /// The query file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The query file is not a valid query document (this includes grids
    /// that are empty or ragged).
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A generated grid failed validation.
    Grid(GridError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "bad query in {}: {source}", path.display()),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
