use geo::Coord;
use serde::Serialize;

use crate::{location::LocationRecord, Result};
use super::district::District;

/// Containment that treats a malformed boundary as "not inside", so one bad
/// district never blocks assignment against the others.
fn contains_or_skip(district: &District, point: Coord<f64>) -> bool {
    district.contains(point).unwrap_or_else(|err| {
        tracing::warn!(district = %district.id, %err, "skipping district with malformed boundary");
        false
    })
}

/// The first district (in slice order) whose boundary contains `point`.
///
/// Districts may overlap; the earliest one wins. `None` means the point lies
/// outside every district, which is a normal outcome.
///
/// A district with a malformed boundary never contains anything here, so
/// `None` cannot tell "outside" from "inside a broken district". Call
/// [`validate_districts`] (or load through [`crate::io::geojson`], which
/// validates every ring) at setup to reject such districts up front.
pub fn assign(point: Coord<f64>, districts: &[District]) -> Option<&District> {
    districts.iter().find(|district| contains_or_skip(district, point))
}

/// Check every district boundary, failing on the first malformed one.
pub fn validate_districts(districts: &[District]) -> Result<()> {
    districts.iter().try_for_each(|district| district.boundary.validate())
}

/// [`assign`] applied to every location, aligned with the input order.
pub fn assign_all<'d>(locations: &[LocationRecord], districts: &'d [District]) -> Vec<Option<&'d District>> {
    locations.iter()
        .map(|location| assign(location.coord(), districts))
        .collect()
}

/// Locations inside the district with identifier `district_id`.
///
/// Without an identifier, or with one that names no district, every location
/// is returned: the dashboard's "all districts" view.
pub fn locations_in_district<'a>(
    locations: &'a [LocationRecord],
    districts: &[District],
    district_id: Option<&str>,
) -> Vec<&'a LocationRecord> {
    let Some(id) = district_id else { return locations.iter().collect() };
    let Some(district) = districts.iter().find(|d| d.id == id) else {
        tracing::debug!(district = id, "unknown district, returning all locations");
        return locations.iter().collect();
    };

    locations.iter()
        .filter(|location| contains_or_skip(district, location.coord()))
        .collect()
}

/// Number of locations assigned to each district, plus those outside all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DistrictCounts {
    pub per_district: Vec<(String, usize)>, // district order
    pub unassigned: usize,
}

/// Count locations per district under the first-match rule of [`assign`].
pub fn count_by_district(locations: &[LocationRecord], districts: &[District]) -> DistrictCounts {
    let mut counts = vec![0usize; districts.len()];
    let mut unassigned = 0;

    for location in locations {
        match districts.iter().position(|d| contains_or_skip(d, location.coord())) {
            Some(i) => counts[i] += 1,
            None => unassigned += 1,
        }
    }

    DistrictCounts {
        per_district: districts.iter().map(|d| d.id.clone()).zip(counts).collect(),
        unassigned,
    }
}
