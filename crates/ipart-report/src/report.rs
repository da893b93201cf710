use std::collections::BTreeMap;

use ipart_core::errors::PartError;
use ipart_core::provenance::{ReportProvenance, SchemaVersion};
use ipart_core::{Partition, PartitionSet};
use ipart_enum::{enumerate_partitions, filter_by_len};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hash::stable_hash_string;

/// Totals and the fixed-size subset derived from one partition set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    /// Schema version of the serialized report.
    pub schema_version: SchemaVersion,
    /// Target, digest and tool versions.
    pub provenance: ReportProvenance,
    /// Integer that was partitioned.
    pub target: u32,
    /// Every partition in emission order.
    pub partitions: Vec<Partition>,
    /// Number of partitions.
    pub total: usize,
    /// Addend count selected by the filter.
    pub addend_count: usize,
    /// Partitions with exactly `addend_count` addends, in emission order.
    pub filtered: Vec<Partition>,
    /// Number of filtered partitions.
    pub filtered_total: usize,
}

impl PartitionReport {
    /// Returns true when no partition has the requested addend count.
    pub fn filtered_is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// Builds a report from an already enumerated set.
pub fn build_report(set: &PartitionSet, addend_count: usize) -> Result<PartitionReport, PartError> {
    let partitions = set.as_slice().to_vec();
    let filtered = filter_by_len(set, addend_count);
    let partitions_hash = stable_hash_string(&partitions)?;
    debug!(
        n = set.target(),
        total = partitions.len(),
        addend_count,
        filtered = filtered.len(),
        "built partition report"
    );

    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        "ipart-report".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );

    Ok(PartitionReport {
        schema_version: SchemaVersion::default(),
        provenance: ReportProvenance {
            target: set.target(),
            partitions_hash,
            tool_versions,
        },
        target: set.target(),
        total: partitions.len(),
        partitions,
        addend_count,
        filtered_total: filtered.len(),
        filtered,
    })
}

/// Enumerates `target` and builds its report in one step.
pub fn report_for(target: u32, addend_count: usize) -> Result<PartitionReport, PartError> {
    let set = enumerate_partitions(target);
    build_report(&set, addend_count)
}
