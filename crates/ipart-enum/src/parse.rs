use ipart_core::errors::{ErrorInfo, PartError};

/// Interprets raw text as a non-negative partition target.
///
/// Surrounding whitespace is ignored. Signs, fractions and anything that
/// does not fit a `u32` are rejected with an invalid input error.
pub fn parse_target(raw: &str) -> Result<u32, PartError> {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return Err(PartError::InvalidInput(
            ErrorInfo::new("not-an-integer", "target must be a non-negative integer")
                .with_context("input", trimmed),
        ));
    }
    trimmed.parse::<u32>().map_err(|err| {
        PartError::InvalidInput(
            ErrorInfo::new("not-an-integer", "please enter an integer")
                .with_context("input", trimmed)
                .with_context("reason", err.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::parse_target;

    #[test]
    fn accepts_padded_integers() {
        assert_eq!(parse_target(" 5\n").unwrap(), 5);
        assert_eq!(parse_target("0").unwrap(), 0);
        assert_eq!(parse_target("+7").unwrap(), 7);
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "abc", "3.5", "-2", "99999999999"] {
            let err = parse_target(raw).unwrap_err();
            assert!(err.is_invalid_input(), "{raw:?} should be invalid input");
            assert_eq!(err.info().code, "not-an-integer");
        }
    }
}
