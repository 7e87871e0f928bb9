use ndarray::parallel::prelude::*;
use ndarray::Axis;

use super::euclidean;
use crate::{Dataset, Feature, Label};

/// One candidate neighbor: the distance from a query row to a reference row,
/// paired with that reference row's label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborEntry {
    pub distance: Feature,
    pub label: Label,
}

// Phase one of the pipeline: for every query row, build its full list of
// (distance, label) entries against the reference set.
// Query rows are independent, so each list is built by one worker writing
// only into its own allocation; collecting drains every worker before the
// ranking phase can touch the lists.
pub fn build_neighbor_lists(reference: &Dataset, query: &Dataset) -> Vec<Vec<NeighborEntry>> {
    query
        .features()
        .axis_iter(Axis(0))
        .into_par_iter()
        .map(|query_row| {
            reference
                .features()
                .axis_iter(Axis(0))
                .zip(reference.labels())
                .map(|(reference_row, &label)| NeighborEntry {
                    distance: euclidean(query_row, reference_row),
                    label,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn test_lists_cover_every_reference_row() {
        let reference =
            Dataset::new(array![[0.0, 0.0], [3.0, 4.0], [6.0, 8.0]], vec![0, 1, 2]).unwrap();
        let query = Dataset::new(array![[0.0, 0.0], [3.0, 4.0]], vec![0, 1]).unwrap();

        let lists = build_neighbor_lists(&reference, &query);
        assert_eq!(lists.len(), 2);
        assert!(lists.iter().all(|list| list.len() == 3));

        // First query sits on the first reference row
        assert_relative_eq!(lists[0][0].distance, 0.0);
        assert_relative_eq!(lists[0][1].distance, 5.0);
        assert_relative_eq!(lists[0][2].distance, 10.0);
        assert_eq!(lists[0][1].label, 1);

        // Second query sits on the second reference row
        assert_relative_eq!(lists[1][1].distance, 0.0);
        assert_relative_eq!(lists[1][0].distance, 5.0);
        assert_relative_eq!(lists[1][2].distance, 5.0);
    }

    #[test]
    fn test_labels_follow_reference_order() {
        let reference = Dataset::new(array![[1.0], [2.0], [3.0]], vec![2, 0, 1]).unwrap();
        let query = Dataset::new(array![[0.0]], vec![0]).unwrap();

        let lists = build_neighbor_lists(&reference, &query);
        let labels: Vec<_> = lists[0].iter().map(|entry| entry.label).collect();
        assert_eq!(labels, vec![2, 0, 1]);
    }
}
