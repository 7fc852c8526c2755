use agrimap_core::{district, filter, geom::Boundary, io, District, FilterCriteria, LocationRecord, Summary};
use wasm_bindgen::prelude::*;

use crate::common::*;

/// Immutable dataset held on the Rust side so the page only ships criteria per interaction.
#[wasm_bindgen]
pub struct WasmDashboard {
    locations: Vec<LocationRecord>,
    districts: Vec<District>,
}

#[wasm_bindgen]
impl WasmDashboard {
    /// Build from a JS array of location records; districts default to the built-in Tamil Nadu set.
    #[wasm_bindgen(constructor)]
    pub fn new(locations: JsValue) -> Result<WasmDashboard, JsValue> {
        let locations: Vec<LocationRecord> = from_js(locations)?;
        for location in &locations {
            location.validate().map_err(js_err)?;
        }
        Ok(WasmDashboard { locations, districts: district::builtin::tamil_nadu_districts() })
    }

    /// Build a synthetic dashboard (same seed, same data).
    pub fn sample(count: usize, seed: u64) -> WasmDashboard {
        WasmDashboard {
            locations: agrimap_core::location::sample::generate(count, seed),
            districts: district::builtin::tamil_nadu_districts(),
        }
    }

    /// Replace the district set with a GeoJSON FeatureCollection given as text.
    pub fn load_districts_geojson(&mut self, geojson: String) -> Result<(), JsValue> {
        self.districts = io::geojson::parse_districts(&geojson).map_err(|e| js_err(format!("{e:#}")))?;
        Ok(())
    }

    pub fn num_locations(&self) -> usize { self.locations.len() }

    /// All location records.
    pub fn locations(&self) -> Result<JsValue, JsValue> {
        to_js(&self.locations)
    }

    /// District outlines as a GeoJSON FeatureCollection.
    pub fn districts_geojson(&self) -> Result<JsValue, JsValue> {
        to_js(&io::geojson::districts_to_geojson(&self.districts))
    }

    /// Built-in state boundary as a GeoJSON feature.
    pub fn state_outline() -> Result<JsValue, JsValue> {
        to_js(&io::geojson::boundary_to_geojson(&district::builtin::tamil_nadu_boundary()))
    }

    /// Locations passing `criteria`, optionally limited to one district.
    pub fn filter(&self, criteria: JsValue, district_id: Option<String>) -> Result<JsValue, JsValue> {
        let criteria: FilterCriteria = from_js(criteria)?;
        let scoped = district::locations_in_district(&self.locations, &self.districts, district_id.as_deref());
        to_js(&filter::filter_owned(scoped, &criteria))
    }

    /// Map markers as a GeoJSON FeatureCollection; empty until a criterion is active.
    pub fn markers(&self, criteria: JsValue, district_id: Option<String>) -> Result<JsValue, JsValue> {
        let criteria: FilterCriteria = from_js(criteria)?;
        let scoped = district::locations_in_district(&self.locations, &self.districts, district_id.as_deref());
        let visible = filter::visible_locations(scoped, &criteria);
        to_js(&io::geojson::locations_to_geojson(visible).map_err(js_err)?)
    }

    /// District id (or null) per location, in dataset order.
    pub fn assignments(&self) -> Result<JsValue, JsValue> {
        let ids = district::assign_all(&self.locations, &self.districts)
            .into_iter()
            .map(|d| d.map(|d| d.id.as_str()))
            .collect::<Vec<_>>();
        to_js(&ids)
    }

    /// Id of the first district containing the clicked point, if any.
    pub fn district_at(&self, lat: f64, lng: f64) -> Option<String> {
        district::assign(geo_coord(lng, lat), &self.districts).map(|d| d.id.clone())
    }

    /// Whether the point lies inside the given `[lng, lat]` ring; errors on degenerate rings.
    pub fn ring_contains(ring: JsValue, lat: f64, lng: f64) -> Result<bool, JsValue> {
        let boundary: Boundary = from_js(ring)?;
        boundary.contains(geo_coord(lng, lat)).map_err(js_err)
    }

    /// Result-panel figures for the filtered set.
    pub fn summary(&self, criteria: JsValue, district_id: Option<String>) -> Result<JsValue, JsValue> {
        let criteria: FilterCriteria = from_js(criteria)?;
        let scoped = district::locations_in_district(&self.locations, &self.districts, district_id.as_deref());
        to_js(&Summary::of(filter::filter(scoped, &criteria)))
    }
}

#[inline]
fn geo_coord(lng: f64, lat: f64) -> agrimap_core::geom::Coord {
    agrimap_core::geom::Coord { x: lng, y: lat }
}
