use geo::{BoundingRect, Coord, LineString, Polygon, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use super::contains::{contains, distinct_vertices};

/// A single outer ring of (lng, lat) vertices, implicitly closed.
///
/// Serialized as an array of `[lng, lat]` pairs, the same encoding as a GeoJSON
/// `Polygon` outer ring. A trailing vertex equal to the first is dropped on
/// construction so the ring is stored open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Boundary {
    vertices: Vec<Coord<f64>>,
}

impl Boundary {
    /// Build a boundary from vertices in ring order. No validation is done here;
    /// call [`Boundary::validate`] to reject degenerate rings at load time.
    pub fn new(vertices: impl IntoIterator<Item = Coord<f64>>) -> Self {
        let mut vertices = vertices.into_iter().collect::<Vec<_>>();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    /// Build a boundary from `[lng, lat]` pairs.
    pub fn from_lng_lat(pairs: &[[f64; 2]]) -> Self {
        Self::new(pairs.iter().map(|&[x, y]| Coord { x, y }))
    }

    #[inline] pub fn vertices(&self) -> &[Coord<f64>] { &self.vertices }

    #[inline] pub fn len(&self) -> usize { self.vertices.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Check that the ring has at least 3 distinct vertices.
    pub fn validate(&self) -> Result<()> {
        let distinct = distinct_vertices(&self.vertices);
        if distinct < 3 { return Err(Error::MalformedGeometry { vertices: distinct }) }
        Ok(())
    }

    /// Even-odd containment test for a (lng, lat) point. See [`contains`].
    #[inline]
    pub fn contains(&self, point: Coord<f64>) -> Result<bool> {
        contains(point, &self.vertices)
    }

    /// Axis-aligned bounding rectangle, `None` for an empty ring.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        LineString::from(self.vertices.clone()).bounding_rect()
    }

    /// Center of the bounding rectangle.
    pub fn bounds_center(&self) -> Option<Coord<f64>> {
        self.bounds().map(|rect| rect.center())
    }

    /// Convert to a `geo::Polygon` (closed exterior, no holes) for renderers.
    pub fn to_geo(&self) -> Polygon<f64> {
        Polygon::new(LineString::from(self.vertices.clone()), Vec::new())
    }
}

impl From<Vec<[f64; 2]>> for Boundary {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        Self::from_lng_lat(&pairs)
    }
}

impl From<Boundary> for Vec<[f64; 2]> {
    fn from(boundary: Boundary) -> Self {
        boundary.vertices.into_iter().map(|c| [c.x, c.y]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, Contains, Point};

    fn triangle() -> Boundary {
        Boundary::from_lng_lat(&[[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]])
    }

    #[test]
    fn closing_vertex_is_dropped() {
        let closed = Boundary::from_lng_lat(&[[0.0, 0.0], [4.0, 0.0], [2.0, 3.0], [0.0, 0.0]]);
        assert_eq!(closed.len(), 3);
        assert_eq!(closed, triangle());
    }

    #[test]
    fn validate_rejects_degenerate_rings() {
        assert!(triangle().validate().is_ok());
        let segment = Boundary::from_lng_lat(&[[0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(segment.validate(), Err(Error::MalformedGeometry { vertices: 2 }));
    }

    #[test]
    fn bounds_and_center() {
        let rect = triangle().bounds().unwrap();
        assert_eq!(rect.min(), coord! { x: 0.0, y: 0.0 });
        assert_eq!(rect.max(), coord! { x: 4.0, y: 3.0 });
        assert_eq!(triangle().bounds_center(), Some(coord! { x: 2.0, y: 1.5 }));
        assert_eq!(Boundary::new(Vec::new()).bounds(), None);
    }

    #[test]
    fn agrees_with_geo_away_from_edges() {
        let boundary = triangle();
        let polygon = boundary.to_geo();

        // Grid offset by a quarter step so no sample lands on an edge or vertex.
        for i in 0..20 {
            for j in 0..16 {
                let p = coord! { x: -0.4 + 0.25 * i as f64 + 0.0625, y: -0.4 + 0.25 * j as f64 + 0.0625 };
                assert_eq!(
                    boundary.contains(p).unwrap(),
                    polygon.contains(&Point::from(p)),
                    "disagreement at {p:?}"
                );
            }
        }
    }

    #[test]
    fn serde_uses_lng_lat_pairs() {
        let json = serde_json::to_string(&triangle()).unwrap();
        assert_eq!(json, "[[0.0,0.0],[4.0,0.0],[2.0,3.0]]");
        let back: Boundary = serde_json::from_str("[[0,0],[4,0],[2,3],[0,0]]").unwrap();
        assert_eq!(back, triangle());
    }
}
