use std::collections::HashSet;

use ipart_core::errors::{ErrorInfo, PartError};

/// Pairs recovered from free text together with per-line warnings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPairs {
    /// Pairs in input order.
    pub pairs: Vec<(String, String)>,
    /// `Line N: ...` messages for lines that could not be parsed.
    pub warnings: Vec<String>,
}

impl ParsedPairs {
    /// Every element mentioned by the pairs, first occurrence first.
    pub fn elements(&self) -> Vec<String> {
        dedup_preserve_order(
            self.pairs
                .iter()
                .flat_map(|(x, y)| [x.clone(), y.clone()]),
        )
    }
}

/// Removes duplicates while keeping the first occurrence of each token.
pub fn dedup_preserve_order<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

fn is_separator(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | ',')
}

/// Parses `a b`, `a,b`, `(a,b)` or `[a,b]` into `("a", "b")`.
///
/// Tokens after the second are ignored.
pub fn parse_pair(line: &str) -> Result<(String, String), PartError> {
    let normalized = line.trim().replace(is_separator, " ");
    let mut tokens = normalized.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(x), Some(y)) => Ok((x.to_string(), y.to_string())),
        _ => Err(PartError::Relation(
            ErrorInfo::new("pair-parse", format!("Cannot parse pair from: {line:?}"))
                .with_hint("write one pair per line, e.g. `a b` or `(a,b)`"),
        )),
    }
}

/// Parses one pair per line, skipping blank lines.
///
/// Unparsable lines become warnings; having no pair at all is an error.
pub fn parse_pairs(text: &str) -> Result<ParsedPairs, PartError> {
    let mut parsed = ParsedPairs::default();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_pair(line) {
            Ok(pair) => parsed.pairs.push(pair),
            Err(err) => parsed
                .warnings
                .push(format!("Line {}: {}", index + 1, err.info().message)),
        }
    }
    if parsed.pairs.is_empty() {
        return Err(PartError::Relation(
            ErrorInfo::new("no-pairs", "No valid pairs were provided.")
                .with_context("warnings", parsed.warnings.len().to_string()),
        ));
    }
    Ok(parsed)
}

/// Splits a set description on whitespace and commas, dropping duplicates.
pub fn parse_set(text: &str) -> Vec<String> {
    dedup_preserve_order(
        text.replace(',', " ")
            .split_whitespace()
            .map(str::to_string),
    )
}
