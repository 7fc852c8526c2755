use thiserror::Error;

/// Failures reported by the geometry and district layers.
///
/// Filtering itself never fails: records missing an attribute that an active
/// criterion refers to are simply excluded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A boundary ring with fewer than three distinct vertices.
    #[error("malformed geometry: boundary has {vertices} distinct vertices, at least 3 are required")]
    MalformedGeometry { vertices: usize },

    /// A location whose coordinates are outside the WGS84 range.
    #[error("location {id:?} has implausible coordinates (lat {latitude}, lng {longitude})")]
    InvalidCoordinate { id: String, latitude: f64, longitude: f64 },

    /// A strict district lookup that matched nothing.
    #[error("unknown district {0:?}")]
    UnknownDistrict(String),
}

pub type Result<T> = std::result::Result<T, Error>;
