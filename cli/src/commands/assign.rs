use anyhow::Result;
use agrimap::{district, io};
use serde_json::json;

use crate::cli::AssignArgs;
use super::load_districts;

pub fn run(_cli: &crate::cli::Cli, args: &AssignArgs) -> Result<()> {
    let locations = io::json::read_locations(&args.locations)?;
    let districts = load_districts(&args.districts)?;
    // A null district must mean "outside", never "inside a broken outline".
    district::validate_districts(&districts)?;

    let assignments = locations.iter()
        .zip(district::assign_all(&locations, &districts))
        .map(|(location, district)| json!({
            "location": location.id,
            "district": district.map(|d| d.id.as_str()),
        }))
        .collect::<Vec<_>>();
    let counts = district::count_by_district(&locations, &districts);
    tracing::info!(locations = locations.len(), unassigned = counts.unassigned, "assigned locations to districts");

    let text = io::json::to_json_string(&json!({ "assignments": assignments, "counts": counts }))?;
    io::fs::write_output(args.output.output.as_deref(), &text, args.output.force)
}
