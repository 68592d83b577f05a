use anyhow::Result;
use clap::Parser;

use finch::{cli::Cli, commands};

fn main() -> Result<()> {
    commands::run(Cli::parse())
}
