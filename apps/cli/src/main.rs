//! SSGo CLI — static site generator for plain text and Markdown.
//!
//! Converts a `.txt`/`.md` file, or every such file under a directory, into
//! standalone HTML pages.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
