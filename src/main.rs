use anyhow::Result;
use clap::Parser;

use blockfall::Settings;

fn main() -> Result<()> {
    let settings = Settings::parse();
    blockfall::app::run(&settings)
}
