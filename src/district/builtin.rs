//! Approximate district and state outlines for Tamil Nadu.

use geo::Point;

use crate::geom::Boundary;
use super::district::District;

/// (id, name, [lng, lat] ring, center (lat, lng), area km²)
type DistrictRow = (&'static str, &'static str, [[f64; 2]; 4], (f64, f64), f64);

const DISTRICTS: [DistrictRow; 8] = [
    ("chennai", "Chennai",
        [[80.2785, 13.0827], [80.2785, 12.8377], [80.1463, 12.8377], [80.1463, 13.0827]],
        (13.0827, 80.2785), 426.0),
    ("coimbatore", "Coimbatore",
        [[76.9558, 11.0168], [77.0586, 11.0168], [77.0586, 10.7922], [76.9558, 10.7922]],
        (11.0168, 77.0586), 7469.0),
    ("madurai", "Madurai",
        [[78.1198, 9.9252], [78.1198, 9.7395], [77.9274, 9.7395], [77.9274, 9.9252]],
        (9.9252, 78.1198), 3742.0),
    ("tiruchirappalli", "Tiruchirappalli",
        [[78.7047, 10.7905], [78.7047, 10.6281], [78.4794, 10.6281], [78.4794, 10.7905]],
        (10.7905, 78.7047), 4407.0),
    ("salem", "Salem",
        [[78.1460, 11.6643], [78.1460, 11.3438], [77.6836, 11.3438], [77.6836, 11.6643]],
        (11.6643, 78.1460), 5245.0),
    ("tirunelveli", "Tirunelveli",
        [[77.7567, 8.7139], [77.7567, 8.4422], [77.3086, 8.4422], [77.3086, 8.7139]],
        (8.7139, 77.7567), 6759.0),
    ("vellore", "Vellore",
        [[79.1325, 12.9165], [79.1325, 12.6519], [78.7368, 12.6519], [78.7368, 12.9165]],
        (12.9165, 79.1325), 6077.0),
    ("thanjavur", "Thanjavur",
        [[79.1378, 10.7870], [79.1378, 10.5674], [78.8271, 10.5674], [78.8271, 10.7870]],
        (10.7870, 79.1378), 3396.0),
];

const STATE_OUTLINE: [[f64; 2]; 22] = [
    [76.2673, 11.9144], [76.7217, 12.3764], [77.8203, 12.9092], [78.6269, 13.2846],
    [79.4175, 13.4479], [80.1755, 13.0827], [80.3463, 12.6186], [80.2307, 11.8781],
    [80.0367, 11.3275], [79.8275, 10.9570], [79.6867, 10.5457], [79.3156, 10.3074],
    [78.8842, 9.5411],  [78.4542, 9.1775],  [77.9380, 8.7322],  [77.5367, 8.5389],
    [77.0673, 8.2511],  [76.6733, 8.3892],  [76.4364, 8.7084],  [76.2247, 9.0868],
    [76.1175, 9.8735],  [76.2956, 10.2764],
];

/// The modeled districts, in lookup order.
pub fn tamil_nadu_districts() -> Vec<District> {
    DISTRICTS.iter()
        .map(|&(id, name, ring, (lat, lng), area)| {
            District::new(id, name, Boundary::from_lng_lat(&ring), Point::new(lng, lat), area)
        })
        .collect()
}

/// Simplified state outline.
pub fn tamil_nadu_boundary() -> Boundary {
    Boundary::from_lng_lat(&STATE_OUTLINE)
}
