#![deny(missing_docs)]
#![doc = "Integer partition enumeration in reverse lexicographic order."]

//! Partitions are emitted largest-first: by decreasing first addend, then by
//! decreasing second addend, and so on. The recursive and the iterator
//! renditions produce identical sequences.

mod count;
mod filter;
mod iter;
mod parse;
mod recursive;

pub use count::partition_count;
pub use filter::{count_with_len, filter_by_len, partitions_with_len, DEFAULT_ADDEND_COUNT};
pub use iter::PartitionIter;
pub use parse::parse_target;
pub use recursive::enumerate_partitions;
