use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, Point};
use serde_json::{json, Map, Value};

use crate::{
    district::District,
    geom::Boundary,
    location::LocationRecord,
    style::{crop_color, fertility_color},
};

/// Parse a GeoJSON FeatureCollection of `Polygon` features into districts.
///
/// Only the outer ring of each polygon is used; holes are ignored. Feature
/// properties: `id` (required, or the feature-level `id`), `name` (defaults to
/// the id), `area` (km², defaults to 0) and `center` as `[lng, lat]` (defaults
/// to the center of the ring's bounding box). Every boundary is validated, so a
/// degenerate ring is reported here rather than during assignment.
pub fn parse_districts(text: &str) -> Result<Vec<District>> {
    let value: Value = serde_json::from_str(text).context("Failed to parse district GeoJSON")?;
    if value["type"].as_str() != Some("FeatureCollection") {
        bail!("Expected a GeoJSON FeatureCollection");
    }
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("FeatureCollection has no features array"))?;

    let districts = features.iter().enumerate()
        .map(|(i, feature)| parse_district(feature).with_context(|| format!("Invalid district feature at index {i}")))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = districts.len(), "parsed district boundaries");
    Ok(districts)
}

/// Read district boundaries from a GeoJSON file.
pub fn read_districts(path: &Path) -> Result<Vec<District>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read district file: {}", path.display()))?;
    parse_districts(&text).with_context(|| format!("In {}", path.display()))
}

fn parse_district(feature: &Value) -> Result<District> {
    let geometry = feature["geometry"].as_object()
        .ok_or_else(|| anyhow!("Feature has no geometry"))?;
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => {}
        Some(other) => bail!("Unsupported geometry type {other:?}, expected Polygon"),
        None => bail!("Geometry has no type"),
    }

    let exterior = geometry.get("coordinates")
        .and_then(Value::as_array)
        .and_then(|rings| rings.first())
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Polygon has no exterior ring"))?;
    let boundary = Boundary::new(parse_ring_coords(exterior)?);
    boundary.validate()?;

    let properties = &feature["properties"];
    let id = properties["id"].as_str()
        .or_else(|| feature["id"].as_str())
        .ok_or_else(|| anyhow!("Feature has no string id"))?;
    let name = properties["name"].as_str().unwrap_or(id);
    let area = properties["area"].as_f64().unwrap_or(0.0);

    let center = match properties["center"].as_array() {
        Some(pair) => Point::from(parse_coord(pair)?),
        None => Point::from(boundary.bounds_center().unwrap_or_default()),
    };

    Ok(District::new(id, name, boundary, center, area))
}

/// Parse a ring from GeoJSON coordinates.
/// Format: [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Result<Vec<Coord<f64>>> {
    coords.iter()
        .map(|pair| {
            pair.as_array()
                .ok_or_else(|| anyhow!("Invalid coordinate: expected [x, y]"))
                .and_then(|pair| parse_coord(pair))
        })
        .collect()
}

fn parse_coord(pair: &[Value]) -> Result<Coord<f64>> {
    if pair.len() < 2 { bail!("Invalid coordinate: expected [x, y]") }
    let x = pair[0].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
    let y = pair[1].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
    Ok(Coord { x, y })
}

/// Closed GeoJSON ring: [[x, y], ..., [x0, y0]]
fn ring_coords(boundary: &Boundary) -> Vec<Value> {
    let mut ring = boundary.vertices().iter()
        .map(|c| json!([c.x, c.y]))
        .collect::<Vec<_>>();
    if let Some(first) = ring.first().cloned() { ring.push(first) }
    ring
}

/// A single boundary as a GeoJSON `Polygon` feature without properties.
pub fn boundary_to_geojson(boundary: &Boundary) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": [ring_coords(boundary)] },
        "properties": {},
    })
}

/// Export districts as a GeoJSON FeatureCollection of closed `Polygon` rings.
pub fn districts_to_geojson(districts: &[District]) -> Value {
    let features = districts.iter().map(|district| {
        json!({
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [ring_coords(&district.boundary)] },
            "properties": {
                "id": district.id,
                "name": district.name,
                "area": district.area_km2,
                "center": [district.center.x(), district.center.y()],
            },
        })
    }).collect::<Vec<_>>();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Export locations as a GeoJSON FeatureCollection of `Point` markers.
///
/// Properties carry every record attribute plus `cropColor` and
/// `fertilityColor` for marker styling.
pub fn locations_to_geojson<'a>(locations: impl IntoIterator<Item = &'a LocationRecord>) -> Result<Value> {
    let features = locations.into_iter().map(|location| -> Result<Value> {
        let mut properties = match serde_json::to_value(location)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        // Position lives in the geometry.
        properties.remove("latitude");
        properties.remove("longitude");
        properties.insert("cropColor".into(), json!(crop_color(location.crop_type.as_deref().unwrap_or("")).to_string()));
        properties.insert("fertilityColor".into(), json!(fertility_color(location.fertility.as_deref().unwrap_or("")).to_string()));

        Ok(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [location.longitude, location.latitude] },
            "properties": properties,
        }))
    }).collect::<Result<Vec<_>>>()?;

    Ok(json!({ "type": "FeatureCollection", "features": features }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::builtin::{tamil_nadu_boundary, tamil_nadu_districts};

    const TWO_DISTRICTS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "id": "north", "name": "North", "area": 12.5, "center": [0.5, 1.5] },
                "geometry": { "type": "Polygon", "coordinates": [
                    [[0, 1], [1, 1], [1, 2], [0, 2], [0, 1]],
                    [[0.2, 1.2], [0.4, 1.2], [0.4, 1.4], [0.2, 1.2]]
                ] }
            },
            {
                "type": "Feature",
                "id": "south",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [2, 0], [2, 1], [0, 1]]] }
            }
        ]
    }"#;

    #[test]
    fn parses_polygon_features() {
        let districts = parse_districts(TWO_DISTRICTS).unwrap();
        assert_eq!(districts.len(), 2);

        let north = &districts[0];
        assert_eq!((north.id.as_str(), north.name.as_str(), north.area_km2), ("north", "North", 12.5));
        assert_eq!(north.boundary.len(), 4);
        assert_eq!(north.center, Point::new(0.5, 1.5));

        let south = &districts[1];
        assert_eq!((south.id.as_str(), south.name.as_str()), ("south", "south"));
        assert_eq!(south.center, Point::new(1.0, 0.5));
    }

    #[test]
    fn holes_are_ignored() {
        let districts = parse_districts(TWO_DISTRICTS).unwrap();
        // Inside the hole ring, still inside the district.
        assert_eq!(districts[0].contains(Coord { x: 0.3, y: 1.25 }), Ok(true));
    }

    #[test]
    fn rejects_non_polygon_geometry() {
        let text = r#"{ "type": "FeatureCollection", "features": [
            { "type": "Feature", "properties": { "id": "p" }, "geometry": { "type": "Point", "coordinates": [0, 0] } }
        ] }"#;
        let err = parse_districts(text).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported geometry type"));
    }

    #[test]
    fn rejects_degenerate_ring() {
        let text = r#"{ "type": "FeatureCollection", "features": [
            { "type": "Feature", "properties": { "id": "line" },
              "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 1], [0, 0]]] } }
        ] }"#;
        let err = parse_districts(text).unwrap_err();
        assert!(format!("{err:#}").contains("malformed geometry"));
    }

    #[test]
    fn rejects_non_collection() {
        assert!(parse_districts(r#"{ "type": "Feature" }"#).is_err());
    }

    #[test]
    fn builtin_districts_survive_export() {
        let districts = tamil_nadu_districts();
        let text = districts_to_geojson(&districts).to_string();
        let parsed = parse_districts(&text).unwrap();
        assert_eq!(parsed.len(), districts.len());
        for (a, b) in parsed.iter().zip(&districts) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.boundary.len(), b.boundary.len());
        }
    }

    #[test]
    fn state_outline_exports_as_closed_polygon() {
        let outline = tamil_nadu_boundary();
        let value = boundary_to_geojson(&outline);
        assert_eq!(value["geometry"]["type"], "Polygon");
        let ring = value["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), outline.len() + 1);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn location_markers_carry_colors() {
        let locations = [
            LocationRecord::new("a", "A", 10.0, 78.0).with_crop_type("rice").with_fertility("Low"),
            LocationRecord::new("b", "B", 11.0, 79.0),
        ];
        let value = locations_to_geojson(&locations).unwrap();
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["coordinates"], json!([78.0, 10.0]));
        assert_eq!(features[0]["properties"]["cropColor"], "#22c55e");
        assert_eq!(features[0]["properties"]["fertilityColor"], "#ef4444");
        assert_eq!(features[1]["properties"]["cropColor"], "#6b7280");
        assert!(features[0]["properties"].get("latitude").is_none());
    }
}
