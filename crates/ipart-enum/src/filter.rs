use ipart_core::{Partition, PartitionSet};

use crate::PartitionIter;

/// Addend count reported by default alongside the full partition list.
pub const DEFAULT_ADDEND_COUNT: usize = 3;

/// Partitions of `set` with exactly `addends` addends, in emission order.
pub fn filter_by_len(set: &PartitionSet, addends: usize) -> Vec<Partition> {
    set.iter()
        .filter(|partition| partition.len() == addends)
        .cloned()
        .collect()
}

/// Number of partitions in `set` with exactly `addends` addends.
pub fn count_with_len(set: &PartitionSet, addends: usize) -> usize {
    set.iter()
        .filter(|partition| partition.len() == addends)
        .count()
}

/// Enumerates only the partitions of `target` with exactly `addends` addends.
pub fn partitions_with_len(target: u32, addends: usize) -> Vec<Partition> {
    PartitionIter::new(target)
        .filter(|partition| partition.len() == addends)
        .collect()
}
