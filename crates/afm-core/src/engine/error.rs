use crate::core::index::pair_index::IndexError;
use crate::core::io::error::FormatError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot open input '{source_name}': {source}")]
    Open {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Malformed COU-terms input '{source_name}': {source}")]
    CouTerms {
        source_name: String,
        #[source]
        source: FormatError,
    },

    #[error("Cannot index COU terms from '{source_name}': {source}")]
    PairIndex {
        source_name: String,
        #[source]
        source: IndexError,
    },

    #[error("Malformed constraint-equation input '{source_name}': {source}")]
    ConstraintFile {
        source_name: String,
        #[source]
        source: FormatError,
    },

    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}
