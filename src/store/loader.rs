use csv::Trim;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::{InputRecord, RecordError, Transaction};

/// Layout of the byte stream a store is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// A JSON array of objects.
    Json,
    /// A CSV file with a header row using the same field names as the JSON objects.
    Csv,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported source {0:?}, expected a .json or .csv file")]
    UnsupportedFormat(PathBuf),

    #[error("malformed JSON source: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed CSV source: {0}")]
    Csv(#[from] csv::Error),

    #[error("record at index {index}: {source}")]
    Record { index: usize, source: RecordError },
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(SourceFormat::Json),
            Some("csv") => Ok(SourceFormat::Csv),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads every record from `reader` and converts it into a [`Transaction`].
/// The first malformed record aborts the whole load.
pub fn read_transactions<R: Read>(
    reader: R,
    format: SourceFormat,
) -> Result<Vec<Transaction>, LoadError> {
    let records = match format {
        SourceFormat::Json => serde_json::from_reader::<_, Vec<InputRecord>>(reader)?,
        SourceFormat::Csv => read_csv_records(reader)?,
    };
    log::debug!("Deserialised {} records from {format:?} source", records.len());

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            log::debug!("Converting InputRecord into Transaction: {record:?}");
            record
                .into_transaction()
                .map_err(|source| LoadError::Record { index, source })
        })
        .collect()
}

fn read_csv_records<R: Read>(reader: R) -> Result<Vec<InputRecord>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize::<InputRecord>() {
        records.push(result?);
    }
    Ok(records)
}
