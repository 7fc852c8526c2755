use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::{error::{Error, Result}, geom::Boundary};

/// A named administrative region with a single outer boundary ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: String,
    pub name: String,
    pub boundary: Boundary,
    pub center: Point<f64>, // (lng, lat), display only
    pub area_km2: f64,      // approximate, display only
}

impl District {
    pub fn new(id: impl Into<String>, name: impl Into<String>, boundary: Boundary, center: Point<f64>, area_km2: f64) -> Self {
        Self { id: id.into(), name: name.into(), boundary, center, area_km2 }
    }

    /// Whether the district boundary contains the (lng, lat) point.
    #[inline]
    pub fn contains(&self, point: Coord<f64>) -> Result<bool> {
        self.boundary.contains(point)
    }
}

/// Strict lookup by identifier.
pub fn find<'a>(districts: &'a [District], id: &str) -> Result<&'a District> {
    districts.iter()
        .find(|district| district.id == id)
        .ok_or_else(|| Error::UnknownDistrict(id.to_string()))
}
