mod commands;
mod disk_cache;
mod input_output;
mod logging;
mod tokenizer_selector;

use clap::Parser;
use commands::Commands;

/// wsieve: prepare text datasets for classifier training and LM fine-tuning.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
