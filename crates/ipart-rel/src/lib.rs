#![deny(missing_docs)]
#![doc = "Matrices of a binary relation p over an ordered set and of its inverse p⁻¹."]

mod input;
mod matrix;
mod parse;
mod render;

pub use input::{RelationInput, ResolvedRelation};
pub use matrix::RelationMatrix;
pub use parse::{dedup_preserve_order, parse_pair, parse_pairs, parse_set, ParsedPairs};
pub use render::{render_matrix, status_line};
