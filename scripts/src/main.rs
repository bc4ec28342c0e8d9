pub mod action;
pub mod config;
pub mod logger;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = action::AppArgs::parse();
    logger::setup_simple_logger(args.verbose)?;

    args.run()
}
