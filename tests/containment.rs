// Integration tests for polygon containment:
//   contains on convex/concave rings, winding independence, degenerate rings,
//   and Boundary wrappers.

use agrimap::{contains, Boundary, Error};
use geo::{coord, Coord};

fn unit_square() -> Vec<Coord<f64>> {
    vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }, coord! { x: 0.0, y: 1.0 }]
}

#[test]
fn unit_square_center_is_inside() {
    assert_eq!(contains(coord! { x: 0.5, y: 0.5 }, &unit_square()), Ok(true));
}

#[test]
fn unit_square_far_point_is_outside() {
    assert_eq!(contains(coord! { x: 2.0, y: 2.0 }, &unit_square()), Ok(false));
    assert_eq!(contains(coord! { x: -0.5, y: 0.5 }, &unit_square()), Ok(false));
}

#[test]
fn two_vertices_are_malformed() {
    let segment = [coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }];
    assert_eq!(contains(coord! { x: 0.5, y: 0.5 }, &segment), Err(Error::MalformedGeometry { vertices: 2 }));
}

#[test]
fn reversed_winding_gives_same_answers() {
    let forward = unit_square();
    let backward = forward.iter().rev().copied().collect::<Vec<_>>();
    for &(x, y) in &[(0.25, 0.75), (0.9, 0.1), (1.5, 0.5), (0.5, -0.1)] {
        let p = coord! { x: x, y: y };
        assert_eq!(contains(p, &forward), contains(p, &backward), "({x}, {y})");
    }
}

#[test]
fn concave_notch_is_outside() {
    // An L shape with the upper right quadrant missing.
    let ring = [
        coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 0.0 }, coord! { x: 2.0, y: 1.0 },
        coord! { x: 1.0, y: 1.0 }, coord! { x: 1.0, y: 2.0 }, coord! { x: 0.0, y: 2.0 },
    ];
    assert_eq!(contains(coord! { x: 0.5, y: 1.5 }, &ring), Ok(true));
    assert_eq!(contains(coord! { x: 1.5, y: 0.5 }, &ring), Ok(true));
    assert_eq!(contains(coord! { x: 1.5, y: 1.5 }, &ring), Ok(false));
}

#[test]
fn explicit_closing_vertex_changes_nothing() {
    let mut closed = unit_square();
    closed.push(closed[0]);
    assert_eq!(contains(coord! { x: 0.5, y: 0.5 }, &closed), Ok(true));
    assert_eq!(contains(coord! { x: 1.5, y: 0.5 }, &closed), Ok(false));
}

#[test]
fn boundary_wrapper_agrees_with_free_function() {
    let boundary = Boundary::from_lng_lat(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]);
    assert_eq!(boundary.len(), 4);
    for &(x, y) in &[(0.5, 0.5), (3.0, 0.5), (0.1, 0.9)] {
        let p = coord! { x: x, y: y };
        assert_eq!(boundary.contains(p), contains(p, boundary.vertices()));
    }
}

#[test]
fn boundary_round_trips_through_lng_lat_pairs() {
    let boundary: Boundary = serde_json::from_str("[[78.0, 9.0], [79.0, 9.0], [79.0, 10.0]]").unwrap();
    assert!(boundary.validate().is_ok());
    assert_eq!(boundary.contains(coord! { x: 78.9, y: 9.1 }), Ok(true));
    assert_eq!(serde_json::to_string(&boundary).unwrap(), "[[78.0,9.0],[79.0,9.0],[79.0,10.0]]");
}
