use thiserror::Error;

use crate::Label;

/// Everything that can abort a classification run.
///
/// All failures are fatal to the whole run: a partially ranked or partially
/// classified batch is never reported (no per-query failure mode).
#[derive(Debug, Error)]
pub enum Error {
    #[error("neighbor ranking exceeded the partition stack bound of {limit} levels")]
    RankDepthExceeded { limit: usize },

    #[error("feature count mismatch: reference has {reference}, query has {query}")]
    FeatureMismatch { reference: usize, query: usize },

    #[error("k = {k} is out of range for a reference set of {rows} rows")]
    InvalidK { k: usize, rows: usize },

    #[error("label {label} is out of range for {n_labels} classes")]
    LabelOutOfRange { label: Label, n_labels: usize },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("dataset has {rows} rows but {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },

    #[error("table header must hold two integers: row count and feature count")]
    BadHeader,

    #[error("table declares {expected} rows but only {found} were present")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} fields, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: field {field:?} is not a valid number")]
    BadField { row: usize, field: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type for classification runs
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RankDepthExceeded { limit: 1000 };
        assert!(format!("{}", err).contains("1000"));

        let err = Error::FeatureMismatch {
            reference: 16,
            query: 8,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("16") && msg.contains("8"));

        let err = Error::InvalidK { k: 5, rows: 2 };
        assert!(format!("{}", err).contains("k = 5"));

        let err = Error::BadField {
            row: 3,
            field: "x".to_string(),
        };
        assert!(format!("{}", err).contains("\"x\""));
    }
}
