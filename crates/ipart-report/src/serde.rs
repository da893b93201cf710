use ipart_core::errors::{ErrorInfo, PartError};
use serde::Serialize;

use crate::report::PartitionReport;

fn map_err(err: serde_json::Error, code: &str) -> PartError {
    PartError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a payload to pretty JSON with object keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, PartError> {
    // serde_json::Value stores objects in a BTreeMap, which sorts the keys
    let value = serde_json::to_value(value).map_err(|err| map_err(err, "json-serialize"))?;
    serde_json::to_vec_pretty(&value).map_err(|err| map_err(err, "json-serialize"))
}

/// Serialises a partition report to canonical JSON.
pub fn report_to_json(report: &PartitionReport) -> Result<String, PartError> {
    let bytes = to_canonical_json_bytes(report)?;
    String::from_utf8(bytes)
        .map_err(|err| PartError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a partition report from JSON.
pub fn report_from_json(json: &str) -> Result<PartitionReport, PartError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "json-deserialize"))
}
