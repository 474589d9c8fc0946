//! # CSV Corpus IO
//!
//! All inputs carry a header row, which is skipped (labeled files)
//! or used to locate a named column (text files).

use std::{fs::File, io::Read, path::Path};

use crate::{
    data::LabeledExample,
    errors::{WSResult, WordsieveError},
};

/// The default text column of the generation corpus.
pub const DEFAULT_TEXT_COLUMN: &str = "script";

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

/// Read `text,label` rows; columns past the second are ignored.
pub fn read_labeled_csv<R: Read>(reader: R) -> WSResult<Vec<LabeledExample>> {
    let mut reader = csv_reader(reader);
    let mut examples = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(text), Some(label)) => examples.push(LabeledExample::new(text, label)),
            _ => {
                return Err(WordsieveError::MalformedRow {
                    row: idx + 1,
                    reason: format!("expected text,label; found {} field(s)", record.len()),
                });
            }
        }
    }
    log::debug!("read {} labeled examples", examples.len());
    Ok(examples)
}

/// Read a labeled CSV file; see [`read_labeled_csv`].
pub fn read_labeled_csv_path<P: AsRef<Path>>(path: P) -> WSResult<Vec<LabeledExample>> {
    read_labeled_csv(File::open(path)?)
}

/// Read the named column of every row.
pub fn read_text_column_csv<R: Read>(
    reader: R,
    column: &str,
) -> WSResult<Vec<String>> {
    let mut reader = csv_reader(reader);
    let header = reader.headers()?.clone();
    let Some(col) = header.iter().position(|name| name == column) else {
        return Err(WordsieveError::MissingColumn {
            name: column.to_string(),
            header: header.iter().map(str::to_string).collect(),
        });
    };

    let mut texts = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let text = record.get(col).ok_or_else(|| WordsieveError::MalformedRow {
            row: idx + 1,
            reason: format!("missing column {column:?}"),
        })?;
        texts.push(text.to_string());
    }
    log::debug!("read {} texts from column {column:?}", texts.len());
    Ok(texts)
}

/// Read a named column of a CSV file; see [`read_text_column_csv`].
pub fn read_text_column_csv_path<P: AsRef<Path>>(
    path: P,
    column: &str,
) -> WSResult<Vec<String>> {
    read_text_column_csv(File::open(path)?, column)
}

/// Write examples as `text,label` rows with a header.
pub fn write_labeled_csv<W: std::io::Write>(
    writer: W,
    examples: &[LabeledExample],
) -> WSResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for example in examples {
        writer.serialize(example)?;
    }
    writer.flush()?;
    Ok(())
}
