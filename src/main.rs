use clap::Parser;
use moldraw::cli::{run, Cli};
use moldraw::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    run(&cli)
}
