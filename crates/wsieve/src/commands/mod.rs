mod classify;
mod lm;
mod vocab;

/// Subcommands for wsieve
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Prepare a binary classification dataset and show its first batch.
    Classify(classify::ClassifyArgs),

    /// Build a length-filtered language-model dataset.
    Lm(lm::LmArgs),

    /// Build a vocabulary from a text column.
    Vocab(vocab::VocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Classify(cmd) => cmd.run(),
            Commands::Lm(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
        }
    }
}
