use ipart_core::provenance::{ReportProvenance, SchemaVersion};
use ipart_core::{Partition, PartitionSet};

#[test]
fn partition_serializes_as_plain_array() {
    let partition = Partition::new(vec![2, 1, 1]).expect("canonical");
    let json = serde_json::to_string(&partition).expect("serialize");
    assert_eq!(json, "[2,1,1]");
    let decoded: Partition = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, partition);
}

#[test]
fn partition_set_round_trip_json() {
    let set = PartitionSet::new(
        3,
        vec![
            Partition::new(vec![3]).unwrap(),
            Partition::new(vec![2, 1]).unwrap(),
            Partition::new(vec![1, 1, 1]).unwrap(),
        ],
    );
    set.validate().expect("valid set");

    let json = serde_json::to_string_pretty(&set).expect("serialize");
    let decoded: PartitionSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, set);
    assert_eq!(decoded.target(), 3);
}

#[test]
fn provenance_round_trip_json() {
    let provenance = ReportProvenance {
        target: 5,
        partitions_hash: "abc123".into(),
        tool_versions: [("ipart-core".into(), "0.1.0".into())].into_iter().collect(),
    };
    let json = serde_json::to_string(&provenance).expect("serialize");
    let decoded: ReportProvenance = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, provenance);
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}
