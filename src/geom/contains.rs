use ahash::AHashSet;
use geo::Coord;

use crate::error::{Error, Result};

/// Count the distinct vertices of a ring (an explicit closing vertex is not counted twice).
pub(crate) fn distinct_vertices(vertices: &[Coord<f64>]) -> usize {
    // Normalize -0.0 so it hashes with 0.0.
    #[inline] fn key(v: f64) -> u64 { (v + 0.0).to_bits() }

    vertices.iter()
        .map(|c| (key(c.x), key(c.y)))
        .collect::<AHashSet<_>>()
        .len()
}

/// Even-odd (ray casting) point-in-polygon test.
///
/// `point` and `vertices` are planar (x = longitude, y = latitude). The ring is
/// implicitly closed: the edge from the last vertex back to the first is tested
/// too, and a repeated closing vertex only adds a zero-length edge that never
/// crosses the ray.
///
/// A horizontal ray is cast eastward from `point`. An edge crosses it when one
/// endpoint has `y >= point.y` and the other has `y < point.y`, and the edge's
/// x-intercept at `point.y` lies strictly east of `point.x`. The point is
/// inside iff the ray crosses an odd number of edges.
///
/// Points exactly on an edge or vertex have no guaranteed classification; the
/// result for them depends on which side of the half-open rule they fall.
///
/// Returns [`Error::MalformedGeometry`] for rings with fewer than 3 distinct
/// vertices instead of guessing.
pub fn contains(point: Coord<f64>, vertices: &[Coord<f64>]) -> Result<bool> {
    let distinct = distinct_vertices(vertices);
    if distinct < 3 { return Err(Error::MalformedGeometry { vertices: distinct }) }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[j];
        if (a.y >= point.y) != (b.y >= point.y) {
            // a.y != b.y here, so the division is well defined.
            let x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if x > point.x { inside = !inside }
        }
        j = i;
    }

    Ok(inside)
}
