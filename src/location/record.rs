use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Soil nutrient triple, each nominally on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Npk {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl Npk {
    #[inline]
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self { nitrogen, phosphorus, potassium }
    }

    /// True iff every nutrient lies within the matching inclusive `[min, max]` bound.
    pub fn within(&self, min: &Npk, max: &Npk) -> bool {
        (min.nitrogen..=max.nitrogen).contains(&self.nitrogen)
            && (min.phosphorus..=max.phosphorus).contains(&self.phosphorus)
            && (min.potassium..=max.potassium).contains(&self.potassium)
    }
}

/// One surveyed agricultural field.
///
/// Categorical attributes and the soil/vegetation measurements are optional:
/// ingestion pipelines deliver partially populated records, and a record
/// missing an attribute never matches a criterion on that attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,  // WGS84 degrees
    pub longitude: f64, // WGS84 degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npk: Option<Npk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndvi: Option<f64>,
    #[serde(default)]
    pub area: f64,  // hectares
    #[serde(default, rename = "yield")]
    pub yield_: f64, // tons per hectare
}

impl LocationRecord {
    /// A record with only identity and position; attributes are filled in with the `with_*` setters.
    pub fn new(id: impl Into<String>, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            crop_type: None,
            season: None,
            soil_type: None,
            fertility: None,
            npk: None,
            ndvi: None,
            area: 0.0,
            yield_: 0.0,
        }
    }

    pub fn with_crop_type(mut self, crop_type: impl Into<String>) -> Self { self.crop_type = Some(crop_type.into()); self }

    pub fn with_season(mut self, season: impl Into<String>) -> Self { self.season = Some(season.into()); self }

    pub fn with_soil_type(mut self, soil_type: impl Into<String>) -> Self { self.soil_type = Some(soil_type.into()); self }

    pub fn with_fertility(mut self, fertility: impl Into<String>) -> Self { self.fertility = Some(fertility.into()); self }

    pub fn with_npk(mut self, npk: Npk) -> Self { self.npk = Some(npk); self }

    pub fn with_ndvi(mut self, ndvi: f64) -> Self { self.ndvi = Some(ndvi); self }

    pub fn with_area(mut self, area: f64) -> Self { self.area = area; self }

    pub fn with_yield(mut self, yield_: f64) -> Self { self.yield_ = yield_; self }

    /// Position as a planar (lng, lat) coordinate.
    #[inline]
    pub fn coord(&self) -> Coord<f64> {
        Coord { x: self.longitude, y: self.latitude }
    }

    /// Finite latitude in [-90, 90] and longitude in [-180, 180].
    pub fn has_plausible_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn validate(&self) -> Result<()> {
        if self.has_plausible_coordinates() { return Ok(()) }
        Err(Error::InvalidCoordinate {
            id: self.id.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}
