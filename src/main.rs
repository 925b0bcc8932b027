//! gemscan binary entry point

use anyhow::Result;
use clap::Parser;

use gemscan::cli;
use gemscan::logging::init_logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    cli::run(cli)
}
