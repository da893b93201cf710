use ipart_core::errors::{ErrorInfo, PartError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("input", "abc")
        .with_context("reason", "example")
}

#[test]
fn invalid_input_error_surface() {
    let err = PartError::InvalidInput(sample_info("not-an-integer", "expected an integer"));
    assert_eq!(err.info().code, "not-an-integer");
    assert!(err.info().context.contains_key("input"));
    assert!(err.is_invalid_input());
}

#[test]
fn relation_error_surface() {
    let err = PartError::Relation(sample_info("pair-parse", "cannot parse pair"));
    assert_eq!(err.info().code, "pair-parse");
    assert!(!err.is_invalid_input());
}

#[test]
fn config_error_surface() {
    let err = PartError::Config(sample_info("invalid-range", "min exceeds max"));
    assert_eq!(err.info().code, "invalid-range");
}

#[test]
fn serde_error_surface() {
    let err = PartError::Serde(sample_info("json-serialize", "schema mismatch"));
    assert_eq!(err.info().code, "json-serialize");
}

#[test]
fn display_includes_context_and_hint() {
    let err = PartError::InvalidInput(
        ErrorInfo::new("out-of-range", "n must be in the range 3..7")
            .with_context("n", "9")
            .with_hint("pass --no-range-check to lift the shell limit"),
    );
    assert_eq!(
        err.to_string(),
        "invalid input: n must be in the range 3..7 (code: out-of-range) | context: [n=9] \
         | hint: pass --no-range-check to lift the shell limit"
    );
}

#[test]
fn error_serializes_with_family_tag() {
    let err = PartError::invalid_input("not-an-integer", "expected an integer");
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "InvalidInput");
    assert_eq!(json["detail"]["code"], "not-an-integer");
    let decoded: PartError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}
