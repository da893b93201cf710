use std::error::Error;

use clap::Args;
use ipart_enum::{parse_target, partition_count};

use super::target_or_prompt;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Integer whose partitions are counted; prompted for when omitted.
    #[arg(long)]
    pub n: Option<String>,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    let raw = target_or_prompt(args.n.as_deref(), "Enter n: ")?;
    let target = parse_target(&raw)?;
    println!("{}", partition_count(target)?);
    Ok(())
}
