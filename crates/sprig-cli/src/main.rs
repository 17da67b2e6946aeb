//! sprig command-line interface.

mod cli;
mod logging;

use std::io;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref())?;

    let stdout = io::stdout();
    cli.run(&mut stdout.lock())
}
