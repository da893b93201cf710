use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Args;
use ipart_rel::{render_matrix, status_line, RelationInput, RelationMatrix, ResolvedRelation};
use ipart_report::to_canonical_json_bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct RelationArgs {
    /// Elements of A, space or comma separated; inferred from the pairs when omitted.
    #[arg(long)]
    pub set: Option<String>,
    /// File with one pair per line; stdin when omitted.
    #[arg(long)]
    pub pairs: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct RelationReport<'a> {
    elements: &'a [String],
    relation: &'a [Vec<u8>],
    inverse: &'a [Vec<u8>],
    pairs_used: usize,
    ignored: &'a [(String, String)],
    warnings: &'a [String],
    inferred_set: bool,
}

pub fn run(args: &RelationArgs) -> Result<(), Box<dyn Error>> {
    let text = match &args.pairs {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let resolved = RelationInput {
        set: args.set.as_deref(),
        pairs: &text,
    }
    .resolve()?;
    info!(
        elements = resolved.matrix.len(),
        pairs = resolved.matrix.pair_count(),
        "built relation matrices"
    );
    report_notices(&resolved);

    match args.format {
        OutputFormat::Text => print_text(&resolved.matrix, &resolved.inverse),
        OutputFormat::Json => {
            let report = RelationReport {
                elements: resolved.matrix.elements(),
                relation: resolved.matrix.rows(),
                inverse: resolved.inverse.rows(),
                pairs_used: resolved.matrix.pair_count(),
                ignored: &resolved.ignored,
                warnings: &resolved.warnings,
                inferred_set: resolved.inferred_set,
            };
            let json = to_canonical_json_bytes(&report)?;
            println!("{}", String::from_utf8(json)?);
        }
    }
    Ok(())
}

fn report_notices(resolved: &ResolvedRelation) {
    for warning in &resolved.warnings {
        warn!("{warning}");
        eprintln!("{warning}");
    }
    if !resolved.ignored.is_empty() {
        let listed: Vec<String> = resolved
            .ignored
            .iter()
            .map(|(x, y)| format!("({x},{y})"))
            .collect();
        warn!(ignored = listed.len(), "pairs outside A were ignored");
        eprintln!(
            "Some pairs contain elements not in A and were ignored:\n{}",
            listed.join(", ")
        );
    }
}

fn print_text(matrix: &RelationMatrix, inverse: &RelationMatrix) {
    print!("{}", render_matrix("Matrix of relation p", matrix));
    println!();
    print!("{}", render_matrix("Matrix of inverse relation p⁻¹", inverse));
    println!();
    println!("{}", status_line(matrix));
}
