use super::NeighborEntry;
use crate::Label;

// Majority vote over the first k entries of a ranked neighbor list.
// The running winner starts at label 0 and only changes on a strictly
// greater count, so the first label to reach the maximum keeps the vote even
// if a later label ties it. Callers guarantee k <= list length and every
// label < n_labels.
pub fn majority_vote(neighbors: &[NeighborEntry], k: usize, n_labels: usize) -> Label {
    let mut counts = vec![0usize; n_labels];
    let mut best: Label = 0;
    for entry in &neighbors[..k] {
        counts[entry.label] += 1;
        if counts[entry.label] > counts[best] {
            best = entry.label;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(labels: &[Label]) -> Vec<NeighborEntry> {
        labels
            .iter()
            .enumerate()
            .map(|(i, &label)| NeighborEntry {
                distance: i as f32,
                label,
            })
            .collect()
    }

    #[test]
    fn test_clear_majority() {
        let list = neighbors(&[1, 2, 1, 1, 2]);
        assert_eq!(majority_vote(&list, 5, 3), 1);
    }

    #[test]
    fn test_first_label_to_reach_the_max_wins() {
        // Label 1 reaches two votes first; label 2 ties later but a tie is
        // not a strict improvement
        let list = neighbors(&[1, 1, 2, 2]);
        assert_eq!(majority_vote(&list, 4, 3), 1);
    }

    #[test]
    fn test_label_zero_is_the_default() {
        let list = neighbors(&[0, 0]);
        assert_eq!(majority_vote(&list, 2, 3), 0);

        // A non-zero label must strictly beat label 0's count to displace it
        let list = neighbors(&[2, 2]);
        assert_eq!(majority_vote(&list, 2, 3), 2);
    }

    #[test]
    fn test_only_first_k_entries_count() {
        let list = neighbors(&[1, 2, 2, 2]);
        assert_eq!(majority_vote(&list, 1, 3), 1);
        assert_eq!(majority_vote(&list, 4, 3), 2);
    }

    #[test]
    fn test_deterministic() {
        let list = neighbors(&[3, 1, 3, 1, 2]);
        let first = majority_vote(&list, 5, 4);
        for _ in 0..10 {
            assert_eq!(majority_vote(&list, 5, 4), first);
        }
    }
}
