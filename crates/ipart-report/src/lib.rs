#![deny(missing_docs)]
#![doc = "Reporting layer consuming enumerated partition sets."]

/// Canonical hashing helpers for report payloads.
pub mod hash;
/// Plain text rendering of partition reports.
pub mod render;
/// Report construction.
pub mod report;
/// Serde helpers for JSON artefacts.
#[path = "serde.rs"]
pub mod serde_io;

pub use hash::stable_hash_string;
pub use render::render_text;
pub use report::{build_report, report_for, PartitionReport};
pub use serde_io::{report_from_json, report_to_json, to_canonical_json_bytes};
