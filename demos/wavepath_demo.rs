//! Command-line demo: solve one query and draw the answer.
//!
//! Run: cargo run --bin wavepath-demo -- [query.json | --seed N]

use clap::Parser;
use wavepath_demos::{Args, logging};

fn main() {
    logging::init();
    let args = Args::parse();

    match args.query() {
        Ok(query) => {
            let answer = query.run();
            print!("{}", query.render(&answer));
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
