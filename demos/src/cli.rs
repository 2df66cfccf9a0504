//! Command-line arguments of the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::{DEFAULT_SEED, DemoError, Query};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    version,
    about = "Solve one wavepath query and draw the answer",
    after_help = "Without arguments a random cave is generated from the default seed. \
                  Set WAVEPATH_LOG=debug to see why a query came back empty."
)]
pub struct Args {
    /// Query file (JSON) to solve.
    pub query: Option<PathBuf>,
    /// Seed for a random cave query.
    #[arg(long, conflicts_with = "query")]
    pub seed: Option<u64>,
}

impl Args {
    /// Load or generate the query these arguments describe.
    pub fn query(&self) -> Result<Query, DemoError> {
        match &self.query {
            Some(path) => Query::from_file(path),
            None => Query::random(self.seed.unwrap_or(DEFAULT_SEED)),
        }
    }
}
