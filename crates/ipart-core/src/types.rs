use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, PartError};

/// Canonical non-increasing sequence of positive addends.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Partition(Vec<u32>);

impl Partition {
    /// Creates a partition from raw addends, rejecting zero addends and any
    /// increase between neighbours.
    pub fn new(addends: Vec<u32>) -> Result<Self, PartError> {
        if let Some(position) = addends.iter().position(|&addend| addend == 0) {
            return Err(PartError::InvalidInput(
                ErrorInfo::new("zero-addend", "partition addends must be positive")
                    .with_context("position", position.to_string()),
            ));
        }
        if let Some(position) = addends.windows(2).position(|pair| pair[0] < pair[1]) {
            return Err(PartError::InvalidInput(
                ErrorInfo::new("non-increasing", "partition addends must be non-increasing")
                    .with_context("position", (position + 1).to_string())
                    .with_context("previous", addends[position].to_string())
                    .with_context("addend", addends[position + 1].to_string()),
            ));
        }
        Ok(Self(addends))
    }

    /// Wraps addends that the caller already knows to be canonical.
    ///
    /// Used by the enumerators, which maintain the ordering invariant while
    /// searching and would otherwise pay for re-validating every emission.
    pub fn from_canonical(addends: Vec<u32>) -> Self {
        debug_assert!(addends.iter().all(|&addend| addend > 0));
        debug_assert!(addends.windows(2).all(|pair| pair[0] >= pair[1]));
        Self(addends)
    }

    /// The empty partition of zero.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the addends in canonical order.
    pub fn addends(&self) -> &[u32] {
        &self.0
    }

    /// Number of addends.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty partition of zero.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all addends.
    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&addend| u64::from(addend)).sum()
    }

    /// Iterates over the addends in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, addend) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{addend}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// All partitions of a target integer in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSet {
    target: u32,
    partitions: Vec<Partition>,
}

impl PartitionSet {
    /// Bundles already enumerated partitions with their target.
    pub fn new(target: u32, partitions: Vec<Partition>) -> Self {
        Self { target, partitions }
    }

    /// Integer every partition sums to.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Number of partitions in the set.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Returns true when the set holds no partitions.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Partitions in emission order.
    pub fn as_slice(&self) -> &[Partition] {
        &self.partitions
    }

    /// Iterates over the partitions in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    /// Consumes the set and returns the partitions.
    pub fn into_vec(self) -> Vec<Partition> {
        self.partitions
    }

    /// Checks the sum, ordering and uniqueness invariants.
    ///
    /// Consecutive partitions must be strictly decreasing in lexicographic
    /// order, which also rules out duplicates.
    pub fn validate(&self) -> Result<(), PartError> {
        let target = u64::from(self.target);
        for (index, partition) in self.partitions.iter().enumerate() {
            Partition::new(partition.addends().to_vec()).map_err(|err| match err {
                PartError::InvalidInput(info) => {
                    PartError::InvalidInput(info.with_context("index", index.to_string()))
                }
                other => other,
            })?;
            if partition.sum() != target {
                return Err(PartError::InvalidInput(
                    ErrorInfo::new("sum-mismatch", "partition does not sum to the target")
                        .with_context("index", index.to_string())
                        .with_context("target", self.target.to_string())
                        .with_context("sum", partition.sum().to_string()),
                ));
            }
        }
        for (index, pair) in self.partitions.windows(2).enumerate() {
            match pair[0].cmp(&pair[1]) {
                Ordering::Greater => {}
                Ordering::Equal => {
                    return Err(PartError::InvalidInput(
                        ErrorInfo::new("duplicate-partition", "partition emitted twice")
                            .with_context("index", (index + 1).to_string())
                            .with_context("partition", pair[1].to_string()),
                    ))
                }
                Ordering::Less => {
                    return Err(PartError::InvalidInput(
                        ErrorInfo::new(
                            "out-of-order",
                            "partitions are not in reverse lexicographic order",
                        )
                        .with_context("index", (index + 1).to_string()),
                    ))
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PartitionSet {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}
