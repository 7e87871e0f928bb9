use super::NeighborEntry;
use crate::error::{Error, Result};

// Deep enough for any sanely sized list; hitting it means the partition
// bookkeeping broke down and the run must stop rather than classify a
// half-ranked list.
const MAX_DEPTH: usize = 1000;

/// Reorders `list` in place so distances ascend, using an iterative
/// partition-exchange sort whose pending partitions live on an explicit,
/// bounded stack instead of the call stack.
///
/// After a successful return the first k entries are the k nearest for every
/// k up to the list length, and the list is a permutation of its input.
/// Entries with equal distances carry no relative-order guarantee.
pub fn rank(list: &mut [NeighborEntry]) -> Result<()> {
    let mut begin = [0usize; MAX_DEPTH];
    let mut end = [0usize; MAX_DEPTH];

    begin[0] = 0;
    end[0] = list.len();
    let mut top = 1;

    while top > 0 {
        let frame = top - 1;
        let mut left = begin[frame];
        let mut right = end[frame];

        if left + 1 >= right {
            top -= 1;
            continue;
        }
        if top == MAX_DEPTH {
            return Err(Error::RankDepthExceeded { limit: MAX_DEPTH });
        }

        // The leftmost element is the pivot; lifting it out leaves a hole
        // that the two pointers fill from alternating ends until they meet.
        let pivot = list[left];
        right -= 1;
        while left < right {
            while list[right].distance >= pivot.distance && left < right {
                right -= 1;
            }
            if left < right {
                list[left] = list[right];
                left += 1;
            }
            while list[left].distance <= pivot.distance && left < right {
                left += 1;
            }
            if left < right {
                list[right] = list[left];
                right -= 1;
            }
        }
        list[left] = pivot;

        // The right partition goes on the stack; the current frame shrinks
        // to the left partition
        begin[top] = left + 1;
        end[top] = end[frame];
        end[frame] = left;
        top += 1;
    }

    Ok(())
}
