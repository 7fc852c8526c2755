//! Reading and writing the dashboard's data formats.
//!
//! - `json` - location collections and filter criteria as plain JSON
//! - `geojson` - district boundaries in, location markers out
//! - `fs` - output file helpers shared by the CLI

pub mod fs;
pub mod geojson;
pub mod json;
