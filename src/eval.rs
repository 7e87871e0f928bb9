use std::fmt;

use ndarray::Array2;

use crate::Label;

/// Square tabulation of classification outcomes.
///
/// Element [i][j] counts queries with true label i predicted as label j.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    counts: Array2<usize>,
}

impl ConfusionMatrix {
    pub fn new(n_labels: usize) -> Self {
        ConfusionMatrix {
            counts: Array2::zeros((n_labels, n_labels)),
        }
    }

    pub fn n_labels(&self) -> usize {
        self.counts.nrows()
    }

    pub fn record(&mut self, true_label: Label, predicted: Label) {
        self.counts[[true_label, predicted]] += 1;
    }

    pub fn get(&self, true_label: Label, predicted: Label) -> usize {
        self.counts[[true_label, predicted]]
    }

    /// Total queries recorded; always the sum over all cells
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    /// Correctly classified queries (the diagonal)
    pub fn correct(&self) -> usize {
        self.counts.diag().sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "confusion matrix (rows = true, columns = predicted)")?;

        write!(f, "      ")?;
        for j in 0..self.n_labels() {
            write!(f, "{j:>6}")?;
        }
        writeln!(f)?;

        for i in 0..self.n_labels() {
            write!(f, "{i:>6}")?;
            for j in 0..self.n_labels() {
                write!(f, "{:>6}", self.counts[[i, j]])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Running evaluation of a classification batch: the confusion matrix plus
/// aggregate hit and miss statistics. Single-writer; fed one query at a time
/// after the parallel phases have drained.
#[derive(Debug, Clone)]
pub struct Evaluation {
    confusion: ConfusionMatrix,
    errors: usize,
    total: usize,
}

impl Evaluation {
    pub fn new(n_labels: usize) -> Self {
        Evaluation {
            confusion: ConfusionMatrix::new(n_labels),
            errors: 0,
            total: 0,
        }
    }

    pub fn record(&mut self, true_label: Label, predicted: Label) {
        self.confusion.record(true_label, predicted);
        if true_label != predicted {
            self.errors += 1;
        }
        self.total += 1;
    }

    pub fn confusion(&self) -> &ConfusionMatrix {
        &self.confusion
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn hits(&self) -> usize {
        self.total - self.errors
    }

    pub fn misses(&self) -> usize {
        self.errors
    }

    /// Percentage of queries classified correctly (0.0 when nothing was
    /// recorded)
    pub fn hit_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.errors as f64 / self.total as f64)
    }

    /// Percentage of queries classified incorrectly (0.0 when nothing was
    /// recorded)
    pub fn miss_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.errors as f64 / self.total as f64
    }
}
