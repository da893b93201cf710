use ipart_rel::{render_matrix, status_line, RelationInput, RelationMatrix};
use proptest::prelude::*;

#[test]
fn inferred_set_follows_first_appearance() {
    let resolved = RelationInput {
        set: None,
        pairs: "a b\nb c\nc a",
    }
    .resolve()
    .expect("resolve");
    assert!(resolved.inferred_set);
    assert_eq!(resolved.matrix.elements(), &["a", "b", "c"]);
    assert_eq!(resolved.inverse, resolved.matrix.transpose());
    assert!(resolved.ignored.is_empty());
    assert_eq!(
        status_line(&resolved.matrix),
        "|A| = 3; Pairs used = 3; p⁻¹ equals transpose(p)."
    );
}

#[test]
fn explicit_set_drops_foreign_pairs() {
    let resolved = RelationInput {
        set: Some("x, y"),
        pairs: "(x,y)\n(y,z)\n[y,x]\nbroken",
    }
    .resolve()
    .expect("resolve");
    assert!(!resolved.inferred_set);
    assert_eq!(resolved.ignored, vec![("y".to_string(), "z".to_string())]);
    assert_eq!(resolved.warnings, vec!["Line 4: Cannot parse pair from: \"broken\""]);
    assert_eq!(resolved.matrix.pair_count(), 2);
    assert!(resolved.matrix.is_symmetric());
}

#[test]
fn blank_set_means_inferred() {
    let resolved = RelationInput {
        set: Some("   "),
        pairs: "1 2",
    }
    .resolve()
    .expect("resolve");
    assert!(resolved.inferred_set);
    assert_eq!(resolved.matrix.len(), 2);
}

#[test]
fn renders_labelled_table() {
    let resolved = RelationInput {
        set: None,
        pairs: "a b",
    }
    .resolve()
    .unwrap();
    let text = render_matrix("Matrix of relation p", &resolved.matrix);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Matrix of relation p");
    assert_eq!(lines[1], "A \\ A    a      b  ");
    assert_eq!(lines[2], "a        0      1  ");
    assert_eq!(lines[3], "b        0      0  ");
}

#[test]
fn empty_matrix_renders_placeholder() {
    let text = render_matrix("Matrix of relation p", &RelationMatrix::default());
    assert!(text.ends_with("(empty set A)\n"));
}

proptest! {
    #[test]
    fn transpose_is_an_involution(raw in prop::collection::vec((0u8..6, 0u8..6), 0..20)) {
        let elements: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        let pairs: Vec<(String, String)> =
            raw.iter().map(|(x, y)| (x.to_string(), y.to_string())).collect();
        let matrix = RelationMatrix::build(&elements, &pairs);
        let inverse = matrix.transpose();
        prop_assert_eq!(inverse.transpose(), matrix.clone());
        prop_assert_eq!(inverse.pair_count(), matrix.pair_count());
        for (x, y) in &raw {
            prop_assert_eq!(inverse.get(*y as usize, *x as usize), Some(1));
        }
    }
}
