use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use ipart_enum::parse_target;
use ipart_report::{render_text, report_for, report_to_json};
use tracing::info;

use super::target_or_prompt;
use crate::config::{OutputFormat, ShellConfig};

#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Integer to partition; prompted for on stdin when omitted.
    #[arg(long)]
    pub n: Option<String>,
    /// Addend count for the filtered listing (defaults to the config value).
    #[arg(long)]
    pub k: Option<usize>,
    /// Output format (defaults to the config value).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// YAML shell configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Accept any n instead of the configured range.
    #[arg(long)]
    pub no_range_check: bool,
}

pub fn run(args: &EnumerateArgs) -> Result<(), Box<dyn Error>> {
    let config = ShellConfig::load_or_default(args.config.as_deref())?;
    let prompt = format!("Enter n ({}..{}): ", config.range.min, config.range.max);
    let raw = target_or_prompt(args.n.as_deref(), &prompt)?;
    let target = parse_target(&raw)?;
    if !args.no_range_check {
        config.range.check(target)?;
    }
    let addend_count = args.k.unwrap_or(config.addend_count);
    let format = args.format.unwrap_or(config.format);
    info!(n = target, addend_count, ?format, "enumerating partitions");

    let report = report_for(target, addend_count)?;
    match format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", report_to_json(&report)?),
    }
    Ok(())
}
