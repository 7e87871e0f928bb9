use rayon::prelude::*;

use super::{build_neighbor_lists, majority_vote, rank};
use crate::error::{Error, Result};
use crate::eval::Evaluation;
use crate::{Dataset, Label};

// All pipeline preconditions are checked once here so the distance and
// voting loops can run unchecked.
fn validate(reference: &Dataset, query: &Dataset, k: usize, n_labels: usize) -> Result<()> {
    if reference.n_features() != query.n_features() {
        return Err(Error::FeatureMismatch {
            reference: reference.n_features(),
            query: query.n_features(),
        });
    }
    if k == 0 || k > reference.len() {
        return Err(Error::InvalidK {
            k,
            rows: reference.len(),
        });
    }
    for &label in reference.labels().iter().chain(query.labels()) {
        if label >= n_labels {
            return Err(Error::LabelOutOfRange { label, n_labels });
        }
    }
    Ok(())
}

/// Predicts a label for every query row by majority vote among its k nearest
/// reference rows.
///
/// Runs in three phases: distance lists are built in parallel across queries,
/// then ranked in parallel across queries, then voted on sequentially. Each
/// parallel phase drains completely before the next phase starts, and any
/// ranking failure aborts the whole run with no partial result.
pub fn classify_batch(
    reference: &Dataset,
    query: &Dataset,
    k: usize,
    n_labels: usize,
) -> Result<Vec<Label>> {
    validate(reference, query, k, n_labels)?;

    let mut lists = build_neighbor_lists(reference, query);
    lists.par_iter_mut().try_for_each(|list| rank(list))?;

    Ok(lists
        .iter()
        .map(|list| majority_vote(list, k, n_labels))
        .collect())
}

/// Classifies every query row and scores the predictions against the query
/// set's ground-truth labels.
pub fn evaluate(
    reference: &Dataset,
    query: &Dataset,
    k: usize,
    n_labels: usize,
) -> Result<Evaluation> {
    let predictions = classify_batch(reference, query, k, n_labels)?;

    let mut evaluation = Evaluation::new(n_labels);
    for (&truth, &predicted) in query.labels().iter().zip(&predictions) {
        evaluation.record(truth, predicted);
    }
    Ok(evaluation)
}
