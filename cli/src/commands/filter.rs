use anyhow::Result;
use agrimap::{filter, io};

use crate::cli::{FilterArgs, OutputFormat};
use super::{resolve_criteria, scoped_locations};

pub fn run(_cli: &crate::cli::Cli, args: &FilterArgs) -> Result<()> {
    let locations = io::json::read_locations(&args.locations)?;
    let criteria = resolve_criteria(&args.criteria)?;
    let scoped = scoped_locations(&locations, args.district.as_deref(), &args.districts)?;

    let selected = if args.visible {
        filter::visible_locations(scoped, &criteria)
    } else {
        filter::filter(scoped, &criteria)
    };
    tracing::info!(selected = selected.len(), total = locations.len(), "filtered locations");

    let text = match args.format {
        OutputFormat::Json => io::json::to_json_string(&selected)?,
        OutputFormat::Geojson => io::json::to_json_string(&io::geojson::locations_to_geojson(selected)?)?,
    };
    io::fs::write_output(args.output.output.as_deref(), &text, args.output.force)
}
