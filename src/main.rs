//! CLI entry point for the geodesic grid generator

use clap::Parser;
use gridgen::io::cli::{Cli, GridProcessor};
use gridgen::io::logging::init_logging;

fn main() -> gridgen::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = GridProcessor::new(cli);
    processor.process().map(|_| ())
}
