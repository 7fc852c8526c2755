use anyhow::Result;
use agrimap::{io, location::sample};

use crate::cli::SampleArgs;

pub fn run(_cli: &crate::cli::Cli, args: &SampleArgs) -> Result<()> {
    let locations = sample::generate(args.count, args.seed);
    let text = io::json::to_json_string(&locations)?;
    io::fs::write_output(args.output.output.as_deref(), &text, args.output.force)
}
