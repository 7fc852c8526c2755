mod catalog;
mod record;
pub mod sample;

pub use catalog::{filter_options, CROPS, FERTILITY_LEVELS, SEASONS, SOIL_TYPES, Crop, FilterOptions};
pub use record::{LocationRecord, Npk};
