#![deny(missing_docs)]
#![doc = "Core data types and structured errors for the ipart integer partition engine."]

pub mod errors;
pub mod provenance;
mod types;

pub use errors::{ErrorInfo, PartError};
pub use provenance::{ReportProvenance, SchemaVersion};
pub use types::{Partition, PartitionSet};
