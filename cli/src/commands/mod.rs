pub mod assign;
pub mod color;
pub mod filter;
pub mod sample;
pub mod summary;

use anyhow::{bail, Result};
use agrimap::{district::builtin, io, CombineMode, District, FilterCriteria, LocationRecord, Npk};

use crate::cli::{CriteriaArgs, DistrictArgs, Mode};

/// Build criteria from the optional file, then apply flag overrides.
pub(crate) fn resolve_criteria(args: &CriteriaArgs) -> Result<FilterCriteria> {
    let mut criteria = match &args.criteria {
        Some(path) => io::json::read_criteria(path)?,
        None => FilterCriteria::new(),
    };

    if let Some(v) = &args.crop { criteria.crop_type = Some(v.clone()) }
    if let Some(v) = &args.season { criteria.season = Some(v.clone()) }
    if let Some(v) = &args.soil { criteria.soil_type = Some(v.clone()) }
    if let Some(v) = &args.fertility { criteria.fertility = Some(v.clone()) }
    if let Some(v) = &args.npk_min { criteria.npk_min = Some(to_npk(v)?) }
    if let Some(v) = &args.npk_max { criteria.npk_max = Some(to_npk(v)?) }
    if let Some(v) = &args.ndvi {
        let &[min, max] = v.as_slice() else { bail!("--ndvi takes exactly two values") };
        criteria.ndvi_range = Some([min, max]);
    }
    if let Some(mode) = args.mode {
        criteria.multi_criteria_mode = match mode {
            Mode::And => CombineMode::And,
            Mode::Or => CombineMode::Or,
        };
    }

    if criteria.npk_min.is_some() != criteria.npk_max.is_some() {
        tracing::warn!("NPK range needs both --npk-min and --npk-max; ignoring the single bound");
    }
    tracing::info!(active = criteria.active_count(), mode = ?criteria.mode(), "resolved filter criteria");
    Ok(criteria)
}

fn to_npk(values: &[f64]) -> Result<Npk> {
    let &[n, p, k] = values else { bail!("NPK bounds take exactly three values (N P K)") };
    Ok(Npk::new(n, p, k))
}

/// District boundaries from a GeoJSON file, or the built-in set.
pub(crate) fn load_districts(args: &DistrictArgs) -> Result<Vec<District>> {
    match &args.districts {
        Some(path) => io::geojson::read_districts(path),
        None => Ok(builtin::tamil_nadu_districts()),
    }
}

/// Locations, narrowed to one district when an id is given. An unknown id is an error here.
pub(crate) fn scoped_locations<'a>(
    locations: &'a [LocationRecord],
    district: Option<&str>,
    districts: &DistrictArgs,
) -> Result<Vec<&'a LocationRecord>> {
    let Some(id) = district else { return Ok(locations.iter().collect()) };
    let districts = load_districts(districts)?;
    agrimap::district::find(&districts, id)?;
    Ok(agrimap::district::locations_in_district(locations, &districts, Some(id)))
}
