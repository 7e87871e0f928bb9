use std::path::Path;

use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};
use crate::{Feature, Label};

/// A labeled dataset: one fixed-length feature row plus one class label per
/// example. Shape is fixed at construction and never changes.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<Feature>,
    labels: Vec<Label>,
}

impl Dataset {
    pub fn new(features: Array2<Feature>, labels: Vec<Label>) -> Result<Self> {
        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(Error::EmptyDataset);
        }
        if features.nrows() != labels.len() {
            return Err(Error::LabelMismatch {
                rows: features.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { features, labels })
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.features.nrows() == 0
    }

    /// Number of features per example (the label is not counted)
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> &Array2<Feature> {
        &self.features
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, Feature> {
        self.features.row(index)
    }
}

// Load a labeled table from a space-delimited text file.
// The expected format is:
// - The first line holds two integers: row count and feature count
// - One example per following line
// - Each example line holds the real-valued features followed by one
//   integer class label
pub fn load_table(path: impl AsRef<Path>) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();

    let header = records.next().ok_or(Error::BadHeader)??;
    // Runs of spaces show up as empty fields; drop them everywhere
    let mut counts = header.iter().filter(|field| !field.is_empty());
    let n_rows = parse_count(counts.next())?;
    let n_features = parse_count(counts.next())?;
    if counts.next().is_some() || n_features == 0 {
        return Err(Error::BadHeader);
    }

    let mut flat = Vec::with_capacity(n_rows * n_features);
    let mut labels = Vec::with_capacity(n_rows);
    for row in 0..n_rows {
        let record = records.next().ok_or(Error::RowCount {
            expected: n_rows,
            found: row,
        })??;
        let fields: Vec<&str> = record.iter().filter(|field| !field.is_empty()).collect();
        if fields.len() != n_features + 1 {
            return Err(Error::RowWidth {
                row,
                expected: n_features + 1,
                found: fields.len(),
            });
        }
        for &field in &fields[..n_features] {
            let value = field.parse::<Feature>().map_err(|_| Error::BadField {
                row,
                field: field.to_string(),
            })?;
            flat.push(value);
        }
        let label = fields[n_features]
            .parse::<Label>()
            .map_err(|_| Error::BadField {
                row,
                field: fields[n_features].to_string(),
            })?;
        labels.push(label);
    }

    let features = Array2::from_shape_vec((n_rows, n_features), flat)
        .expect("row widths were checked while parsing");
    Dataset::new(features, labels)
}

fn parse_count(field: Option<&str>) -> Result<usize> {
    field.and_then(|f| f.parse().ok()).ok_or(Error::BadHeader)
}
