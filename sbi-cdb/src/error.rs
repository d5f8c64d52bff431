/// Error types for loading a bridge inventory export
use sbi_utils::error::DecodeError;
use thiserror::Error;

/// The export does not have the shape the loader requires.
///
/// Any of these aborts the load; no partial dataset is ever produced.
#[derive(Error, Debug)]
pub enum DataFormatError {
    /// A required header is absent
    #[error("Required column '{0}' is missing from the source header")]
    MissingColumn(String),

    /// Road class value outside the synonym table (rows are 1-based, header excluded)
    #[error("Row {row}: road class '{raw}' has no canonical mapping")]
    UnknownRoadClass { row: usize, raw: String },

    /// Condition label value outside the label table
    #[error("Row {row}: condition label '{raw}' has no canonical mapping")]
    UnknownConditionLabel { row: usize, raw: String },

    /// Observation year column present, but this row's cell is not a year
    #[error("Row {row}: observation year '{raw}' is not a year")]
    MalformedObservationYear { row: usize, raw: String },

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Source is not valid {0} text")]
    MalformedText(String),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DecodeError> for DataFormatError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnknownEncoding(label) => DataFormatError::UnknownEncoding(label),
            DecodeError::Malformed(name) => DataFormatError::MalformedText(name),
        }
    }
}
