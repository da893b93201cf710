use ipart_core::errors::PartError;
use tracing::debug;

use crate::matrix::RelationMatrix;
use crate::parse::{parse_pairs, parse_set};

/// Raw text describing a relation: an optional element set and pair lines.
#[derive(Debug, Clone, Copy)]
pub struct RelationInput<'a> {
    /// Space or comma separated elements of A; blank means infer from pairs.
    pub set: Option<&'a str>,
    /// One pair per line.
    pub pairs: &'a str,
}

/// Relation ready to be rendered, with everything the caller should report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelation {
    /// Matrix of p.
    pub matrix: RelationMatrix,
    /// Matrix of p⁻¹.
    pub inverse: RelationMatrix,
    /// Per-line parse warnings.
    pub warnings: Vec<String>,
    /// Pairs dropped because an element is outside an explicit set.
    pub ignored: Vec<(String, String)>,
    /// True when A was inferred from the pairs.
    pub inferred_set: bool,
}

impl<'a> RelationInput<'a> {
    /// Parses the input and builds both matrices.
    pub fn resolve(&self) -> Result<ResolvedRelation, PartError> {
        let parsed = parse_pairs(self.pairs)?;
        let explicit = self
            .set
            .map(parse_set)
            .filter(|elements| !elements.is_empty());

        let (elements, pairs, ignored, inferred_set) = match explicit {
            Some(elements) => {
                let (kept, ignored): (Vec<_>, Vec<_>) =
                    parsed.pairs.iter().cloned().partition(|(x, y)| {
                        elements.contains(x) && elements.contains(y)
                    });
                (elements, kept, ignored, false)
            }
            None => (parsed.elements(), parsed.pairs.clone(), Vec::new(), true),
        };

        let matrix = RelationMatrix::build(&elements, &pairs);
        let inverse = matrix.transpose();
        debug!(
            elements = matrix.len(),
            pairs = matrix.pair_count(),
            ignored = ignored.len(),
            "resolved relation"
        );
        Ok(ResolvedRelation {
            matrix,
            inverse,
            warnings: parsed.warnings,
            ignored,
            inferred_set,
        })
    }
}
