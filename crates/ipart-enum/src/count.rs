use ipart_core::errors::{ErrorInfo, PartError};

/// Computes p(`target`), the number of partitions, without enumerating them.
///
/// Uses the standard dynamic programme over the largest allowed addend.
/// Fails with `count-overflow` once the count no longer fits a `u64`
/// (p(416) is the last one that does).
pub fn partition_count(target: u32) -> Result<u64, PartError> {
    let size = target as usize;
    let mut ways = vec![0u64; size + 1];
    ways[0] = 1;
    for addend in 1..=size {
        for total in addend..=size {
            ways[total] = ways[total]
                .checked_add(ways[total - addend])
                .ok_or_else(|| {
                    PartError::InvalidInput(
                        ErrorInfo::new("count-overflow", "partition count exceeds u64")
                            .with_context("target", target.to_string())
                            .with_context("at", total.to_string()),
                    )
                })?;
        }
    }
    Ok(ways[size])
}
