//! CLI entry point for Markov chain colour synthesis

use clap::Parser;
use markovtile::io::cli::{Cli, RunProcessor};

fn main() -> markovtile::Result<()> {
    let cli = Cli::parse();
    let mut processor = RunProcessor::new(cli);
    processor.process()
}
