use anyhow::Result;
use clap::Parser;
use headgen::cli::Cli;
use headgen::commands::{handle_generate, GenerateConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    handle_generate(GenerateConfig {
        source: cli.source,
        output: cli.output,
    })
}
