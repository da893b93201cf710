use ipart_enum::{
    count_with_len, enumerate_partitions, filter_by_len, partition_count, partitions_with_len,
    DEFAULT_ADDEND_COUNT,
};

fn as_vectors(partitions: &[ipart_core::Partition]) -> Vec<Vec<u32>> {
    partitions
        .iter()
        .map(|partition| partition.addends().to_vec())
        .collect()
}

#[test]
fn counts_follow_the_partition_function() {
    let expected = [1usize, 1, 2, 3, 5, 7, 11, 15];
    for (target, count) in expected.iter().enumerate() {
        let set = enumerate_partitions(target as u32);
        assert_eq!(set.len(), *count, "p({target})");
    }
}

#[test]
fn exactly_three_addends_of_six() {
    let set = enumerate_partitions(6);
    let triples = filter_by_len(&set, DEFAULT_ADDEND_COUNT);
    assert_eq!(
        as_vectors(&triples),
        vec![vec![4, 1, 1], vec![3, 2, 1], vec![2, 2, 2]]
    );
    assert_eq!(count_with_len(&set, 3), 3);
}

#[test]
fn exactly_three_addends_of_three_and_four() {
    let three = enumerate_partitions(3);
    assert_eq!(as_vectors(&filter_by_len(&three, 3)), vec![vec![1, 1, 1]]);
    assert_eq!(count_with_len(&three, 3), 1);

    let four = enumerate_partitions(4);
    assert!(filter_by_len(&four, 3).is_empty());
    assert_eq!(count_with_len(&four, 3), 0);
}

#[test]
fn lazy_filter_matches_materialised_filter() {
    for target in 0..=12 {
        for addends in 0..=5 {
            let set = enumerate_partitions(target);
            assert_eq!(
                partitions_with_len(target, addends),
                filter_by_len(&set, addends),
                "target {target}, addends {addends}"
            );
        }
    }
}

#[test]
fn enumeration_is_idempotent() {
    assert_eq!(enumerate_partitions(7), enumerate_partitions(7));
}

#[test]
fn enumerated_length_matches_counted_length() {
    for target in 0..=30 {
        let counted = partition_count(target).expect("fits u64");
        assert_eq!(enumerate_partitions(target).len() as u64, counted);
    }
}

#[test]
fn every_set_passes_validation() {
    for target in 0..=20 {
        enumerate_partitions(target)
            .validate()
            .unwrap_or_else(|err| panic!("target {target}: {err}"));
    }
}
