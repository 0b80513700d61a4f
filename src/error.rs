//! Error types for the row filter pass.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("opening input file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("creating output file {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input has no header record")]
    MissingHeader,

    /// A data row too short to carry the label column.
    #[error("row on line {line} has {fields} field(s), expected at least {required}")]
    MalformedRow {
        line: u64,
        fields: usize,
        required: usize,
    },
}

impl FilterError {
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, FilterError::MalformedRow { .. })
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
