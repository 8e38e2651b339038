// src/bin/cli.rs
use nyc_procurement::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(None)?;
    cli::run()
}
