mod boundary;
mod contains;

pub use boundary::Boundary;
pub use contains::contains;

pub use geo::Coord;
