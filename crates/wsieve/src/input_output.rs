use std::{
    fs::File,
    io::{BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// CSV input argument group.
#[derive(clap::Args, Debug)]
pub struct CsvInputArgs {
    /// Input CSV file, with a header row.
    #[clap(long)]
    pub input: String,

    /// The text column.
    #[clap(long, default_value = wordsieve::data::DEFAULT_TEXT_COLUMN)]
    pub column: String,
}

impl CsvInputArgs {
    /// Read the text column of the input.
    pub fn read_texts(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        log::info!("reading column {:?} of {}", self.column, self.input);
        Ok(wordsieve::data::read_text_column_csv_path(
            &self.input,
            &self.column,
        )?)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output; stdout when unset.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }

    /// Open a writer only if an output was given.
    pub fn open_optional_writer(&self) -> Result<Option<Box<dyn Write>>, Box<dyn std::error::Error>> {
        if self.output.is_none() {
            return Ok(None);
        }
        self.open_writer().map(Some)
    }
}
