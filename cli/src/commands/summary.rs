use anyhow::Result;
use agrimap::{filter, io, Summary};

use crate::cli::SummaryArgs;
use super::{resolve_criteria, scoped_locations};

pub fn run(_cli: &crate::cli::Cli, args: &SummaryArgs) -> Result<()> {
    let locations = io::json::read_locations(&args.locations)?;
    let criteria = resolve_criteria(&args.criteria)?;
    let scoped = scoped_locations(&locations, args.district.as_deref(), &args.districts)?;

    let summary = Summary::of(filter::filter(scoped, &criteria));
    let text = io::json::to_json_string(&summary)?;
    io::fs::write_output(args.output.output.as_deref(), &text, args.output.force)
}
