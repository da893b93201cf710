use ipart_core::{Partition, PartitionSet};
use tracing::debug;

/// Enumerates every partition of `target` in reverse lexicographic order.
///
/// `target == 0` yields the single empty partition. There is no upper bound
/// on `target`, but the result has p(target) entries, so large inputs are
/// expensive.
pub fn enumerate_partitions(target: u32) -> PartitionSet {
    let mut prefix = Vec::new();
    let mut out = Vec::new();
    descend(target, target, &mut prefix, &mut out);
    debug!(n = target, partitions = out.len(), "enumerated partitions");
    PartitionSet::new(target, out)
}

fn descend(remaining: u32, ceiling: u32, prefix: &mut Vec<u32>, out: &mut Vec<Partition>) {
    if remaining == 0 {
        out.push(Partition::from_canonical(prefix.clone()));
        return;
    }
    for addend in (1..=ceiling.min(remaining)).rev() {
        prefix.push(addend);
        descend(remaining - addend, addend, prefix, out);
        // siblings must see the prefix unchanged
        prefix.pop();
    }
}
